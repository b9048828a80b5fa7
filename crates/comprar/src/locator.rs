//! Element locators.
//!
//! A [`Selector`] is a backend-neutral locating strategy; a [`Target`] pairs
//! one with a human-readable name so waits and failures can say *what* they
//! were looking for, not just where.

use std::fmt;

use thirtyfour::By;

/// Locating strategy for one element (or set of elements).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// CSS selector.
    Css(String),
    /// XPath expression.
    XPath(String),
    /// `id` attribute.
    Id(String),
    /// `name` attribute.
    Name(String),
    /// Exact anchor text.
    LinkText(String),
}

impl Selector {
    /// CSS selector.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// XPath expression.
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::XPath(expression.into())
    }

    /// `id` attribute.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// `name` attribute.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// Exact anchor text.
    #[must_use]
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// Map onto the WebDriver locating strategy.
    #[must_use]
    pub fn to_by(&self) -> By {
        match self {
            Self::Css(s) => By::Css(s.as_str()),
            Self::XPath(s) => By::XPath(s.as_str()),
            Self::Id(s) => By::Id(s.as_str()),
            Self::Name(s) => By::Name(s.as_str()),
            Self::LinkText(s) => By::LinkText(s.as_str()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Css(s) => write!(f, "css={s}"),
            Self::XPath(s) => write!(f, "xpath={s}"),
            Self::Id(s) => write!(f, "id={s}"),
            Self::Name(s) => write!(f, "name={s}"),
            Self::LinkText(s) => write!(f, "link={s}"),
        }
    }
}

/// A named element on a page.
///
/// The name appears in logs and interaction errors; the selector does the
/// actual locating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Short human-readable description, e.g. `"login button"`.
    pub name: &'static str,
    /// How to find the element.
    pub selector: Selector,
}

impl Target {
    /// Target located by CSS selector.
    #[must_use]
    pub fn css(name: &'static str, selector: impl Into<String>) -> Self {
        Self {
            name,
            selector: Selector::css(selector),
        }
    }

    /// Target located by XPath.
    #[must_use]
    pub fn xpath(name: &'static str, expression: impl Into<String>) -> Self {
        Self {
            name,
            selector: Selector::xpath(expression),
        }
    }

    /// Target located by `id` attribute.
    #[must_use]
    pub fn id(name: &'static str, id: impl Into<String>) -> Self {
        Self {
            name,
            selector: Selector::id(id),
        }
    }

    /// Target located by `name` attribute.
    #[must_use]
    pub fn name(name: &'static str, attr: impl Into<String>) -> Self {
        Self {
            name,
            selector: Selector::name(attr),
        }
    }

    /// Target located by exact anchor text.
    #[must_use]
    pub fn link_text(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            selector: Selector::link_text(text),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.selector)
    }
}
