//! Shared page-object primitives.
//!
//! Every page object drives the browser exclusively through [`Page`], which
//! settles stale-element and timing concerns in one place: interactions wait
//! for the target to be ready, clicks fall back to a script dispatch when
//! the native click is rejected, and predicates report `false` instead of
//! raising. Page objects stay declarative as a result.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::backend::DriverBackend;
use crate::locator::Target;
use crate::result::{ComprarError, ComprarResult};
use crate::wait::{poll_until, WaitPolicy};

/// Browser interaction primitives shared by all page objects.
///
/// Cheap to clone; clones share the underlying backend.
#[derive(Clone)]
pub struct Page {
    backend: Arc<dyn DriverBackend>,
    waits: WaitPolicy,
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("waits", &self.waits)
            .finish_non_exhaustive()
    }
}

impl Page {
    /// Page over a backend with the given explicit-wait policy.
    #[must_use]
    pub fn new(backend: Arc<dyn DriverBackend>, waits: WaitPolicy) -> Self {
        Self { backend, waits }
    }

    /// The explicit-wait policy in force.
    #[must_use]
    pub fn waits(&self) -> WaitPolicy {
        self.waits
    }

    /// Load a URL.
    pub async fn navigate(&self, url: &str) -> ComprarResult<()> {
        debug!(url, "navigating");
        self.backend.navigate(url).await
    }

    /// URL of the current document.
    pub async fn current_url(&self) -> ComprarResult<String> {
        self.backend.current_url().await
    }

    /// Title of the current document.
    pub async fn page_title(&self) -> ComprarResult<String> {
        self.backend.title().await
    }

    /// Click, waiting for the target to become clickable first.
    ///
    /// A native click that is rejected (overlays, sticky headers) is retried
    /// once as a script dispatch; only when both paths fail does the click
    /// raise an interaction error.
    pub async fn click(&self, target: &Target) -> ComprarResult<()> {
        let clickable = poll_until(
            || async move {
                self.backend
                    .is_clickable(&target.selector)
                    .await
                    .unwrap_or(false)
            },
            self.waits,
        )
        .await;

        if clickable {
            match self.backend.click(&target.selector).await {
                Ok(()) => {
                    debug!(target = %target, "clicked");
                    return Ok(());
                }
                Err(err) => {
                    warn!(target = %target, error = %err, "native click rejected, retrying via script");
                }
            }
        } else {
            warn!(target = %target, timeout = ?self.waits.timeout, "never became clickable, trying script click");
        }

        match self.backend.click_js(&target.selector).await {
            Ok(()) => {
                debug!(target = %target, "clicked via script fallback");
                Ok(())
            }
            Err(err) => {
                error!(target = %target, error = %err, "script click failed");
                Err(interaction_error(
                    "click",
                    target,
                    format!("native click and script fallback both failed: {err}"),
                ))
            }
        }
    }

    /// Wait for visibility, clear the field, then type into it.
    pub async fn type_text(&self, target: &Target, text: &str) -> ComprarResult<()> {
        if !self.visible_within_deadline(target).await {
            return Err(interaction_error(
                "type_text",
                target,
                format!("not visible within {:?}", self.waits.timeout),
            ));
        }
        self.backend
            .clear_and_type(&target.selector, text)
            .await
            .map_err(|err| interaction_error("type_text", target, err.to_string()))?;
        debug!(target = %target, "typed text");
        Ok(())
    }

    /// Type only when a non-blank value is given; `None` and blank strings
    /// skip the field silently.
    pub async fn type_text_if_present(
        &self,
        target: &Target,
        value: Option<&str>,
    ) -> ComprarResult<()> {
        match value {
            Some(text) if !text.trim().is_empty() => self.type_text(target, text).await,
            _ => {
                debug!(target = %target, "optional field skipped");
                Ok(())
            }
        }
    }

    /// Wait for visibility, then read the target's text.
    pub async fn read_text(&self, target: &Target) -> ComprarResult<String> {
        if !self.visible_within_deadline(target).await {
            return Err(interaction_error(
                "read_text",
                target,
                format!("not visible within {:?}", self.waits.timeout),
            ));
        }
        self.backend
            .text(&target.selector)
            .await
            .map_err(|err| interaction_error("read_text", target, err.to_string()))
    }

    /// Read an attribute; `None` when the attribute is absent.
    pub async fn read_attribute(
        &self,
        target: &Target,
        name: &str,
    ) -> ComprarResult<Option<String>> {
        self.backend
            .attribute(&target.selector, name)
            .await
            .map_err(|err| interaction_error("read_attribute", target, err.to_string()))
    }

    /// Whether the target becomes visible within the wait deadline.
    ///
    /// Never raises; lookup failures count as not visible.
    pub async fn is_visible(&self, target: &Target) -> bool {
        self.visible_within_deadline(target).await
    }

    /// Whether the target matches at least one element right now, without
    /// waiting. Never raises.
    pub async fn is_present(&self, target: &Target) -> bool {
        self.backend
            .count(&target.selector)
            .await
            .map(|n| n > 0)
            .unwrap_or(false)
    }

    /// Whether the target is selected (checkboxes, radios).
    pub async fn is_selected(&self, target: &Target) -> ComprarResult<bool> {
        self.backend
            .is_selected(&target.selector)
            .await
            .map_err(|err| interaction_error("is_selected", target, err.to_string()))
    }

    /// Choose a dropdown option by its visible text, without waiting.
    pub async fn select_by_visible_text(&self, target: &Target, text: &str) -> ComprarResult<()> {
        self.backend
            .select_by_text(&target.selector, text)
            .await
            .map_err(|err| interaction_error("select_by_text", target, err.to_string()))?;
        debug!(target = %target, option = text, "selected by text");
        Ok(())
    }

    /// Choose a dropdown option by its `value` attribute, without waiting.
    pub async fn select_by_value(&self, target: &Target, value: &str) -> ComprarResult<()> {
        self.backend
            .select_by_value(&target.selector, value)
            .await
            .map_err(|err| interaction_error("select_by_value", target, err.to_string()))?;
        debug!(target = %target, option = value, "selected by value");
        Ok(())
    }

    /// Select by visible text only when a non-blank value is given; `None`
    /// and blank strings skip the dropdown silently.
    pub async fn select_by_visible_text_if_present(
        &self,
        target: &Target,
        value: Option<&str>,
    ) -> ComprarResult<()> {
        match value {
            Some(text) if !text.trim().is_empty() => {
                self.select_by_visible_text(target, text).await
            }
            _ => {
                debug!(target = %target, "optional dropdown skipped");
                Ok(())
            }
        }
    }

    /// Select by value only when a non-blank value is given; `None` and
    /// blank strings skip the dropdown silently.
    pub async fn select_by_value_if_present(
        &self,
        target: &Target,
        value: Option<&str>,
    ) -> ComprarResult<()> {
        match value {
            Some(value) if !value.trim().is_empty() => {
                self.select_by_value(target, value).await
            }
            _ => {
                debug!(target = %target, "optional dropdown skipped");
                Ok(())
            }
        }
    }

    /// Text of every element the target matches, in document order. Empty
    /// when nothing matches.
    pub async fn find_all_texts(&self, target: &Target) -> ComprarResult<Vec<String>> {
        self.backend
            .find_all_texts(&target.selector)
            .await
            .map_err(|err| interaction_error("find_all_texts", target, err.to_string()))
    }

    /// How many elements the target matches right now. Never raises.
    pub async fn count(&self, target: &Target) -> usize {
        self.backend.count(&target.selector).await.unwrap_or(0)
    }

    /// Wait until the target is visible; raise once the deadline passes.
    pub async fn wait_until_visible(&self, target: &Target) -> ComprarResult<()> {
        if self.visible_within_deadline(target).await {
            Ok(())
        } else {
            Err(interaction_error(
                "wait_until_visible",
                target,
                format!("not visible within {:?}", self.waits.timeout),
            ))
        }
    }

    /// Wait until the target is clickable; raise once the deadline passes.
    pub async fn wait_until_clickable(&self, target: &Target) -> ComprarResult<()> {
        let clickable = poll_until(
            || async move {
                self.backend
                    .is_clickable(&target.selector)
                    .await
                    .unwrap_or(false)
            },
            self.waits,
        )
        .await;
        if clickable {
            Ok(())
        } else {
            Err(interaction_error(
                "wait_until_clickable",
                target,
                format!("not clickable within {:?}", self.waits.timeout),
            ))
        }
    }

    /// Wait until the target's text contains `needle`; raise once the
    /// deadline passes.
    pub async fn wait_until_text_present(&self, target: &Target, needle: &str) -> ComprarResult<()> {
        let found = poll_until(
            || async move {
                self.backend
                    .text(&target.selector)
                    .await
                    .map(|text| text.contains(needle))
                    .unwrap_or(false)
            },
            self.waits,
        )
        .await;
        if found {
            Ok(())
        } else {
            Err(interaction_error(
                "wait_until_text_present",
                target,
                format!("text {needle:?} not present within {:?}", self.waits.timeout),
            ))
        }
    }

    /// Scroll the target into the viewport. Failures are logged, never
    /// raised; a missed scroll surfaces later as a real interaction error.
    pub async fn scroll_into_view(&self, target: &Target) {
        if let Err(err) = self.backend.scroll_into_view(&target.selector).await {
            error!(target = %target, error = %err, "scroll into view failed");
        }
    }

    /// Poll `document.readyState` until the document is complete. Logs a
    /// warning on timeout instead of raising.
    pub async fn wait_for_document_ready(&self) {
        let ready = poll_until(
            || async move {
                self.backend
                    .ready_state()
                    .await
                    .map(|state| state == "complete")
                    .unwrap_or(false)
            },
            self.waits,
        )
        .await;
        if !ready {
            warn!(timeout = ?self.waits.timeout, "document never reached readyState complete");
        }
    }

    async fn visible_within_deadline(&self, target: &Target) -> bool {
        poll_until(
            || async move {
                self.backend
                    .is_displayed(&target.selector)
                    .await
                    .unwrap_or(false)
            },
            self.waits,
        )
        .await
    }
}

fn interaction_error(operation: &str, target: &Target, message: impl Into<String>) -> ComprarError {
    ComprarError::Interaction {
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.into(),
    }
}
