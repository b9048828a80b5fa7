//! Browser selection.

use std::fmt;
use std::str::FromStr;

use crate::result::{ComprarError, ComprarResult};
use crate::settings::Settings;

/// Supported browser kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    /// Google Chrome / Chromium.
    Chrome,
    /// Mozilla Firefox.
    Firefox,
    /// Microsoft Edge.
    Edge,
}

impl Browser {
    /// Resolve the browser to launch.
    ///
    /// Precedence: environment override, then an explicit caller request,
    /// then the settings file (which itself defaults to Chrome). Any
    /// unrecognized name fails loudly rather than silently launching the
    /// wrong browser.
    pub fn resolve(
        env_override: Option<&str>,
        explicit: Option<Browser>,
        settings: &Settings,
    ) -> ComprarResult<Browser> {
        if let Some(name) = env_override {
            return name.parse();
        }
        if let Some(browser) = explicit {
            return Ok(browser);
        }
        settings.browser().parse()
    }
}

impl FromStr for Browser {
    type Err = ComprarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(Self::Chrome),
            "firefox" => Ok(Self::Firefox),
            "edge" => Ok(Self::Edge),
            _ => Err(ComprarError::UnsupportedBrowser {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Chrome => "chrome",
            Self::Firefox => "firefox",
            Self::Edge => "edge",
        };
        f.write_str(name)
    }
}
