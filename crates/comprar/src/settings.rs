//! Suite settings loaded once from a TOML file.
//!
//! The file is flat key/value configuration; dotted keys keep the historical
//! spellings (`base.url`, `implicit.timeout`, ...). A missing file is fatal
//! because nothing downstream can run without it, while missing or malformed
//! individual values fall back silently to documented defaults. That
//! leniency is deliberate: a typo in a timeout should not abort a suite that
//! can run fine on the default.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::result::{ComprarError, ComprarResult};

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "comprar.toml";

/// Environment variable naming an alternate settings file.
pub const SETTINGS_PATH_ENV: &str = "COMPRAR_CONFIG";

/// Immutable-after-load key/value settings.
///
/// Constructed explicitly at test setup and passed down to the driver
/// provider and flows; there is no global instance.
#[derive(Debug, Clone)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings from `$COMPRAR_CONFIG`, falling back to
    /// [`DEFAULT_SETTINGS_FILE`] in the working directory.
    pub fn load() -> ComprarResult<Self> {
        let path = std::env::var(SETTINGS_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_FILE.to_string());
        Self::load_from(path)
    }

    /// Load settings from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> ComprarResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ComprarError::SettingsNotFound {
                path: path.display().to_string(),
                source,
            })?;
        let settings = Self::parse(&content)?;
        debug!(path = %path.display(), keys = settings.values.len(), "loaded settings");
        Ok(settings)
    }

    fn parse(content: &str) -> ComprarResult<Self> {
        let root: toml::Value =
            content
                .parse()
                .map_err(|err: toml::de::Error| ComprarError::SettingsParse {
                    message: err.to_string(),
                })?;
        let mut values = BTreeMap::new();
        flatten("", &root, &mut values);
        Ok(Self { values })
    }

    /// Raw lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Raw lookup with a fallback.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Integer lookup; absent or unparsable values yield `default`.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(default)
    }

    /// Boolean lookup; anything other than `true`/`false` (case-insensitive)
    /// yields `default`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(raw) if raw.eq_ignore_ascii_case("true") => true,
            Some(raw) if raw.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    /// Lookup for keys without a documented default; absence is an error.
    pub fn require(&self, key: &str) -> ComprarResult<&str> {
        self.get(key).ok_or_else(|| ComprarError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Root URL of the storefront under test.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.get("base.url")
    }

    /// Root URL of the storefront API.
    #[must_use]
    pub fn api_url(&self) -> Option<&str> {
        self.get("api.url")
    }

    /// Configured browser kind. Default `"chrome"`.
    #[must_use]
    pub fn browser(&self) -> &str {
        self.get_or("browser", "chrome")
    }

    /// Whether the browser runs headless. Default `false`.
    #[must_use]
    pub fn headless(&self) -> bool {
        self.get_bool("headless", false)
    }

    /// Driver-wide element lookup wait. Default 5 seconds, negatives clamp
    /// to zero.
    #[must_use]
    pub fn implicit_timeout(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.get_int("implicit.timeout", 5)).unwrap_or(0))
    }

    /// Bound for explicit waits in page primitives. Default 10 seconds,
    /// negatives clamp to zero.
    #[must_use]
    pub fn explicit_timeout(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.get_int("explicit.timeout", 10)).unwrap_or(0))
    }

    /// WebDriver server endpoint. Default `http://localhost:4444`.
    #[must_use]
    pub fn webdriver_url(&self) -> &str {
        self.get_or("webdriver.url", "http://localhost:4444")
    }

    /// Pre-provisioned test account email, if any.
    #[must_use]
    pub fn test_user_email(&self) -> Option<&str> {
        self.get("test.user.email")
    }

    /// Password used for generated accounts.
    #[must_use]
    pub fn test_user_password(&self) -> Option<&str> {
        self.get("test.user.password")
    }

    /// Display name used for generated accounts.
    #[must_use]
    pub fn test_user_name(&self) -> Option<&str> {
        self.get("test.user.name")
    }

    /// Default product search term. Default `"T-shirt"`.
    #[must_use]
    pub fn search_product(&self) -> &str {
        self.get_or("search.product", "T-shirt")
    }
}

/// Flatten nested TOML tables into dotted keys. Scalars are normalized to
/// strings so the typed accessors apply one leniency policy regardless of
/// how the value was spelled in the file.
fn flatten(prefix: &str, value: &toml::Value, out: &mut BTreeMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        toml::Value::String(v) => {
            out.insert(prefix.to_string(), v.clone());
        }
        toml::Value::Integer(v) => {
            out.insert(prefix.to_string(), v.to_string());
        }
        toml::Value::Float(v) => {
            out.insert(prefix.to_string(), v.to_string());
        }
        toml::Value::Boolean(v) => {
            out.insert(prefix.to_string(), v.to_string());
        }
        toml::Value::Datetime(v) => {
            out.insert(prefix.to_string(), v.to_string());
        }
        toml::Value::Array(_) => {
            // Arrays have no flat string form; treated as absent.
        }
    }
}
