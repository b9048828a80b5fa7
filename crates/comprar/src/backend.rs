//! Driver backends.
//!
//! [`DriverBackend`] is the narrow seam between page objects and the
//! browser: every method resolves a [`Selector`] fresh, so pages never hold
//! on to stale element handles. [`WebDriverBackend`] talks to a live
//! WebDriver session; [`MockBackend`] is a scriptable in-memory stand-in for
//! exercising page objects and flows without a browser.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use thirtyfour::components::SelectElement;
use thirtyfour::{WebDriver, WebElement};

use crate::locator::Selector;
use crate::result::{ComprarError, ComprarResult};

/// Operations page objects need from a browser session.
///
/// Predicates return `Err` only when the element cannot be resolved at all;
/// callers that want a boolean "is it there right now" collapse errors to
/// `false` themselves.
#[async_trait]
pub trait DriverBackend: Send + Sync {
    /// Load a URL.
    async fn navigate(&self, url: &str) -> ComprarResult<()>;
    /// URL of the current document.
    async fn current_url(&self) -> ComprarResult<String>;
    /// Title of the current document.
    async fn title(&self) -> ComprarResult<String>;
    /// `document.readyState` of the current document.
    async fn ready_state(&self) -> ComprarResult<String>;
    /// How many elements the selector matches; zero when none do.
    async fn count(&self, selector: &Selector) -> ComprarResult<usize>;
    /// Visible text of every element the selector matches, in document order.
    async fn find_all_texts(&self, selector: &Selector) -> ComprarResult<Vec<String>>;
    /// Whether the first match is displayed.
    async fn is_displayed(&self, selector: &Selector) -> ComprarResult<bool>;
    /// Whether the first match is displayed and enabled.
    async fn is_clickable(&self, selector: &Selector) -> ComprarResult<bool>;
    /// Whether the first match is selected (checkboxes, radios, options).
    async fn is_selected(&self, selector: &Selector) -> ComprarResult<bool>;
    /// Native click on the first match.
    async fn click(&self, selector: &Selector) -> ComprarResult<()>;
    /// Script-dispatched click on the first match.
    async fn click_js(&self, selector: &Selector) -> ComprarResult<()>;
    /// Clear the first match, then type into it.
    async fn clear_and_type(&self, selector: &Selector, text: &str) -> ComprarResult<()>;
    /// Visible text of the first match.
    async fn text(&self, selector: &Selector) -> ComprarResult<String>;
    /// Attribute of the first match, `None` when the attribute is absent.
    async fn attribute(&self, selector: &Selector, name: &str) -> ComprarResult<Option<String>>;
    /// Choose a `<select>` option by its visible text.
    async fn select_by_text(&self, selector: &Selector, text: &str) -> ComprarResult<()>;
    /// Choose a `<select>` option by its `value` attribute.
    async fn select_by_value(&self, selector: &Selector, value: &str) -> ComprarResult<()>;
    /// Scroll the first match into the viewport.
    async fn scroll_into_view(&self, selector: &Selector) -> ComprarResult<()>;
}

/// Backend over a live WebDriver session.
#[derive(Clone)]
pub struct WebDriverBackend {
    driver: WebDriver,
}

impl std::fmt::Debug for WebDriverBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebDriverBackend").finish_non_exhaustive()
    }
}

impl WebDriverBackend {
    /// Wrap an established session.
    #[must_use]
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    async fn element(&self, selector: &Selector) -> ComprarResult<WebElement> {
        Ok(self.driver.find(selector.to_by()).await?)
    }
}

#[async_trait]
impl DriverBackend for WebDriverBackend {
    async fn navigate(&self, url: &str) -> ComprarResult<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&self) -> ComprarResult<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn title(&self) -> ComprarResult<String> {
        Ok(self.driver.title().await?)
    }

    async fn ready_state(&self) -> ComprarResult<String> {
        let ret = self
            .driver
            .execute("return document.readyState;", Vec::<serde_json::Value>::new())
            .await?;
        Ok(ret.convert()?)
    }

    async fn count(&self, selector: &Selector) -> ComprarResult<usize> {
        Ok(self.driver.find_all(selector.to_by()).await?.len())
    }

    async fn find_all_texts(&self, selector: &Selector) -> ComprarResult<Vec<String>> {
        let elements = self.driver.find_all(selector.to_by()).await?;
        let mut texts = Vec::with_capacity(elements.len());
        for element in elements {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    async fn is_displayed(&self, selector: &Selector) -> ComprarResult<bool> {
        Ok(self.element(selector).await?.is_displayed().await?)
    }

    async fn is_clickable(&self, selector: &Selector) -> ComprarResult<bool> {
        let element = self.element(selector).await?;
        Ok(element.is_displayed().await? && element.is_enabled().await?)
    }

    async fn is_selected(&self, selector: &Selector) -> ComprarResult<bool> {
        Ok(self.element(selector).await?.is_selected().await?)
    }

    async fn click(&self, selector: &Selector) -> ComprarResult<()> {
        self.element(selector).await?.click().await?;
        Ok(())
    }

    async fn click_js(&self, selector: &Selector) -> ComprarResult<()> {
        let element = self.element(selector).await?;
        self.driver
            .execute("arguments[0].click();", vec![element.to_json()?])
            .await?;
        Ok(())
    }

    async fn clear_and_type(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
        let element = self.element(selector).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    async fn text(&self, selector: &Selector) -> ComprarResult<String> {
        Ok(self.element(selector).await?.text().await?)
    }

    async fn attribute(&self, selector: &Selector, name: &str) -> ComprarResult<Option<String>> {
        Ok(self.element(selector).await?.attr(name).await?)
    }

    async fn select_by_text(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
        let element = self.element(selector).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_exact_text(text).await?;
        Ok(())
    }

    async fn select_by_value(&self, selector: &Selector, value: &str) -> ComprarResult<()> {
        let element = self.element(selector).await?;
        let select = SelectElement::new(&element).await?;
        select.select_by_value(value).await?;
        Ok(())
    }

    async fn scroll_into_view(&self, selector: &Selector) -> ComprarResult<()> {
        self.element(selector).await?.scroll_into_view().await?;
        Ok(())
    }
}

/// Scripted element state inside a [`MockBackend`].
///
/// Defaults to a single visible, enabled, unselected element with empty
/// text; builder methods adjust from there.
#[derive(Debug, Clone)]
pub struct MockElement {
    /// Visible text reported by `text` and `find_all_texts`.
    pub text: String,
    /// Reported by `is_displayed`.
    pub displayed: bool,
    /// Combined with `displayed` for `is_clickable`.
    pub enabled: bool,
    /// Reported by `is_selected`; toggled by successful clicks.
    pub selected: bool,
    /// How many matches the selector reports.
    pub count: usize,
    /// When set, native clicks fail while script clicks still succeed.
    pub click_fails: bool,
    /// Attribute map consulted by `attribute`.
    pub attributes: HashMap<String, String>,
}

impl Default for MockElement {
    fn default() -> Self {
        Self {
            text: String::new(),
            displayed: true,
            enabled: true,
            selected: false,
            count: 1,
            click_fails: false,
            attributes: HashMap::new(),
        }
    }
}

impl MockElement {
    /// Visible element with the given text.
    #[must_use]
    pub fn visible(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Element that exists but is not displayed.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            displayed: false,
            ..Self::default()
        }
    }

    /// Set how many matches the selector reports.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Make native clicks fail, as an obscured element would.
    #[must_use]
    pub fn with_click_failure(mut self) -> Self {
        self.click_fails = true;
        self
    }

    /// Mark the element selected.
    #[must_use]
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Mark the element disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Script an attribute value.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

#[derive(Debug)]
struct MockState {
    elements: HashMap<Selector, MockElement>,
    url: String,
    title: String,
    ready_state: String,
    history: Vec<String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            elements: HashMap::new(),
            url: String::new(),
            title: String::new(),
            ready_state: "complete".to_string(),
            history: Vec::new(),
        }
    }
}

/// In-memory backend for driving page objects without a browser.
///
/// Elements are scripted per selector with [`MockBackend::insert`]; every
/// interaction is recorded in a call history that tests inspect with
/// [`MockBackend::history`] and [`MockBackend::was_called`]. Unscripted
/// selectors behave like elements the driver cannot find.
#[derive(Debug, Default)]
pub struct MockBackend {
    state: Mutex<MockState>,
}

impl MockBackend {
    /// Empty mock: no elements, blank URL and title, document ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script an element for a selector, replacing any previous script.
    pub fn insert(&self, selector: Selector, element: MockElement) {
        self.lock().elements.insert(selector, element);
    }

    /// Remove a scripted element, as if it left the DOM.
    pub fn remove(&self, selector: &Selector) {
        self.lock().elements.remove(selector);
    }

    /// Set the URL reported by `current_url`.
    pub fn set_url(&self, url: impl Into<String>) {
        self.lock().url = url.into();
    }

    /// Set the title reported by `title`.
    pub fn set_title(&self, title: impl Into<String>) {
        self.lock().title = title.into();
    }

    /// Override `document.readyState` (defaults to `"complete"`).
    pub fn set_ready_state(&self, state: impl Into<String>) {
        self.lock().ready_state = state.into();
    }

    /// Snapshot of every recorded interaction, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    /// Whether any recorded interaction starts with `prefix`.
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.lock().history.iter().any(|entry| entry.starts_with(prefix))
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock state poisoned")
    }

    fn missing(operation: &str, selector: &Selector) -> ComprarError {
        ComprarError::Interaction {
            operation: operation.to_string(),
            target: selector.to_string(),
            message: "no scripted element".to_string(),
        }
    }
}

#[async_trait]
impl DriverBackend for MockBackend {
    async fn navigate(&self, url: &str) -> ComprarResult<()> {
        let mut state = self.lock();
        state.url = url.to_string();
        state.history.push(format!("navigate:{url}"));
        Ok(())
    }

    async fn current_url(&self) -> ComprarResult<String> {
        Ok(self.lock().url.clone())
    }

    async fn title(&self) -> ComprarResult<String> {
        Ok(self.lock().title.clone())
    }

    async fn ready_state(&self) -> ComprarResult<String> {
        Ok(self.lock().ready_state.clone())
    }

    async fn count(&self, selector: &Selector) -> ComprarResult<usize> {
        Ok(self.lock().elements.get(selector).map_or(0, |e| e.count))
    }

    async fn find_all_texts(&self, selector: &Selector) -> ComprarResult<Vec<String>> {
        Ok(self
            .lock()
            .elements
            .get(selector)
            .map_or_else(Vec::new, |e| vec![e.text.clone(); e.count]))
    }

    async fn is_displayed(&self, selector: &Selector) -> ComprarResult<bool> {
        let state = self.lock();
        let element = state
            .elements
            .get(selector)
            .ok_or_else(|| Self::missing("is_displayed", selector))?;
        Ok(element.displayed)
    }

    async fn is_clickable(&self, selector: &Selector) -> ComprarResult<bool> {
        let state = self.lock();
        let element = state
            .elements
            .get(selector)
            .ok_or_else(|| Self::missing("is_clickable", selector))?;
        Ok(element.displayed && element.enabled)
    }

    async fn is_selected(&self, selector: &Selector) -> ComprarResult<bool> {
        let state = self.lock();
        let element = state
            .elements
            .get(selector)
            .ok_or_else(|| Self::missing("is_selected", selector))?;
        Ok(element.selected)
    }

    async fn click(&self, selector: &Selector) -> ComprarResult<()> {
        let mut state = self.lock();
        let element = state
            .elements
            .get_mut(selector)
            .ok_or_else(|| Self::missing("click", selector))?;
        if element.click_fails {
            return Err(ComprarError::Interaction {
                operation: "click".to_string(),
                target: selector.to_string(),
                message: "native click rejected".to_string(),
            });
        }
        element.selected = !element.selected;
        state.history.push(format!("click:{selector}"));
        Ok(())
    }

    async fn click_js(&self, selector: &Selector) -> ComprarResult<()> {
        let mut state = self.lock();
        let element = state
            .elements
            .get_mut(selector)
            .ok_or_else(|| Self::missing("click_js", selector))?;
        element.selected = !element.selected;
        state.history.push(format!("click_js:{selector}"));
        Ok(())
    }

    async fn clear_and_type(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
        let mut state = self.lock();
        let element = state
            .elements
            .get_mut(selector)
            .ok_or_else(|| Self::missing("type", selector))?;
        element
            .attributes
            .insert("value".to_string(), text.to_string());
        state.history.push(format!("type:{selector}:{text}"));
        Ok(())
    }

    async fn text(&self, selector: &Selector) -> ComprarResult<String> {
        let state = self.lock();
        let element = state
            .elements
            .get(selector)
            .ok_or_else(|| Self::missing("text", selector))?;
        Ok(element.text.clone())
    }

    async fn attribute(&self, selector: &Selector, name: &str) -> ComprarResult<Option<String>> {
        let state = self.lock();
        let element = state
            .elements
            .get(selector)
            .ok_or_else(|| Self::missing("attribute", selector))?;
        Ok(element.attributes.get(name).cloned())
    }

    async fn select_by_text(&self, selector: &Selector, text: &str) -> ComprarResult<()> {
        let mut state = self.lock();
        if !state.elements.contains_key(selector) {
            return Err(Self::missing("select_by_text", selector));
        }
        state.history.push(format!("select_text:{selector}:{text}"));
        Ok(())
    }

    async fn select_by_value(&self, selector: &Selector, value: &str) -> ComprarResult<()> {
        let mut state = self.lock();
        if !state.elements.contains_key(selector) {
            return Err(Self::missing("select_by_value", selector));
        }
        state
            .history
            .push(format!("select_value:{selector}:{value}"));
        Ok(())
    }

    async fn scroll_into_view(&self, selector: &Selector) -> ComprarResult<()> {
        let mut state = self.lock();
        if !state.elements.contains_key(selector) {
            return Err(Self::missing("scroll", selector));
        }
        state.history.push(format!("scroll:{selector}"));
        Ok(())
    }
}
