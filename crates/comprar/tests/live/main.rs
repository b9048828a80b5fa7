//! Live end-to-end journeys against the storefront.
//!
//! Every test here drives a real browser and is `#[ignore]`d by default.
//! Start a WebDriver server (chromedriver, geckodriver, or Selenium) on the
//! URL configured under `webdriver.url`, then run:
//!
//! ```text
//! cargo test --test live -- --ignored
//! ```
//!
//! `COMPRAR_CONFIG` points the suite at an alternative settings file and
//! `COMPRAR_BROWSER` overrides the configured browser.

mod common;
mod login_logout;
mod product_search;
mod registration;
