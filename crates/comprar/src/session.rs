//! Browser session lifecycle.
//!
//! A [`DriverSession`] owns one WebDriver session from launch to `quit`.
//! Sessions are plain values held by each test, so parallel tests get fully
//! isolated browsers with nothing shared between them.

use std::fmt;
use std::sync::Arc;

use thirtyfour::{Capabilities, DesiredCapabilities, WebDriver};
use tracing::info;

use crate::backend::WebDriverBackend;
use crate::browser::Browser;
use crate::page::Page;
use crate::result::ComprarResult;
use crate::settings::Settings;
use crate::wait::WaitPolicy;

/// Environment variable overriding the configured browser for one run.
pub const BROWSER_ENV: &str = "COMPRAR_BROWSER";

/// One live browser session and the suite-wide waits that go with it.
pub struct DriverSession {
    driver: WebDriver,
    backend: Arc<WebDriverBackend>,
    waits: WaitPolicy,
    base_url: String,
}

impl fmt::Debug for DriverSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverSession")
            .field("waits", &self.waits)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DriverSession {
    /// Launch a browser against the configured WebDriver server.
    ///
    /// Browser precedence: `$COMPRAR_BROWSER`, then `browser` when given,
    /// then the settings file. The window is maximized and the driver-level
    /// implicit wait applied before the session is handed out.
    pub async fn launch(settings: &Settings, browser: Option<Browser>) -> ComprarResult<Self> {
        let env_override = std::env::var(BROWSER_ENV).ok();
        let kind = Browser::resolve(env_override.as_deref(), browser, settings)?;
        let base_url = settings.require("base.url")?.to_string();

        info!(browser = %kind, server = settings.webdriver_url(), "launching browser session");
        let caps = capabilities_for(kind, settings)?;
        let driver = WebDriver::new(settings.webdriver_url(), caps).await?;
        driver.maximize_window().await?;
        driver
            .set_implicit_wait_timeout(settings.implicit_timeout())
            .await?;

        Ok(Self {
            backend: Arc::new(WebDriverBackend::new(driver.clone())),
            driver,
            waits: WaitPolicy::with_timeout(settings.explicit_timeout()),
            base_url,
        })
    }

    /// Interaction primitives bound to this session.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::new(self.backend.clone(), self.waits)
    }

    /// Root URL of the storefront under test.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Open the storefront's root URL and wait for the document to settle.
    pub async fn goto_base(&self) -> ComprarResult<()> {
        let page = self.page();
        page.navigate(&self.base_url).await?;
        page.wait_for_document_ready().await;
        Ok(())
    }

    /// End the session. Consumes the session so nothing can use the driver
    /// afterwards; the WebDriver server does not clean up abandoned sessions
    /// on its own.
    pub async fn quit(self) -> ComprarResult<()> {
        info!("closing browser session");
        self.driver.quit().await?;
        Ok(())
    }
}

fn capabilities_for(browser: Browser, settings: &Settings) -> ComprarResult<Capabilities> {
    match browser {
        Browser::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            // Required for containerized runs, harmless elsewhere.
            caps.add_arg("--no-sandbox")?;
            caps.add_arg("--disable-dev-shm-usage")?;
            if settings.headless() {
                caps.set_headless()?;
            }
            Ok(caps.into())
        }
        Browser::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if settings.headless() {
                caps.set_headless()?;
            }
            Ok(caps.into())
        }
        Browser::Edge => Ok(DesiredCapabilities::edge().into()),
    }
}
