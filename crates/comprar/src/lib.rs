//! Comprar: Page-Object E2E Test Suite for Web Shops
//!
//! Comprar (Spanish: "to buy/shop") drives a real browser through the
//! customer journeys of an e-commerce site (registration, login, product
//! search, cart) behind a page-object layer, so tests read as business
//! steps instead of selector plumbing.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      COMPRAR Architecture                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐     ┌────────────┐     ┌────────────┐           │
//! │   │ Test       │     │ Page       │     │ WebDriver  │           │
//! │   │ (journey)  │────►│ Objects    │────►│ Backend    │           │
//! │   │            │     │ + waits    │     │ (browser)  │           │
//! │   └────────────┘     └────────────┘     └────────────┘           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tests talk to [`pages`] types; page objects talk to a [`Page`] facade;
//! the facade talks to a [`DriverBackend`], which is either a live
//! [`WebDriverBackend`] or an in-memory [`MockBackend`] for unit tests.
//!
//! # Quick Start
//!
//! ```no_run
//! use comprar::pages::HomePage;
//! use comprar::{DriverSession, Settings};
//!
//! # async fn run() -> comprar::ComprarResult<()> {
//! let settings = Settings::load()?;
//! let session = DriverSession::launch(&settings, None).await?;
//! session.goto_base().await?;
//!
//! let home = HomePage::new(session.page());
//! home.close_initial_dialog().await?;
//! home.go_to_products().await?;
//!
//! session.quit().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod backend;
mod browser;
mod flows;
mod locator;
mod page;
mod result;
mod session;
mod settings;
mod wait;

/// Page objects for the shop under test, one type per screen.
pub mod pages;

pub use backend::{DriverBackend, MockBackend, MockElement, WebDriverBackend};
pub use browser::Browser;
pub use flows::{register_new_user, UserCredentials};
pub use locator::{Selector, Target};
pub use page::Page;
pub use result::{ComprarError, ComprarResult};
pub use session::{DriverSession, BROWSER_ENV};
pub use settings::{Settings, DEFAULT_SETTINGS_FILE, SETTINGS_PATH_ENV};
pub use wait::{poll_until, WaitPolicy, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
