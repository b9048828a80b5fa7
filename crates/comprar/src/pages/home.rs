//! Storefront landing page.

use tracing::debug;

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// Landing page: the consent overlay and the top-level navigation entries.
#[derive(Debug, Clone)]
pub struct HomePage {
    page: Page,
    pub(crate) consent_button: Target,
    pub(crate) signup_login_link: Target,
    pub(crate) products_link: Target,
    pub(crate) cart_link: Target,
}

impl HomePage {
    /// Bind the home page targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            consent_button: Target::xpath(
                "consent dialog button",
                "(//p[normalize-space()='Confirm choices'])[1]",
            ),
            signup_login_link: Target::css("signup/login link", "a[href='/login']"),
            products_link: Target::css("products link", "a[href='/products']"),
            cart_link: Target::css("cart link", "a[href='/view_cart']"),
        }
    }

    /// Dismiss the consent overlay when it is shown; a missing overlay is
    /// not an error.
    pub async fn close_initial_dialog(&self) -> ComprarResult<()> {
        if self.page.is_visible(&self.consent_button).await {
            self.page.click(&self.consent_button).await?;
        } else {
            debug!("consent dialog not shown");
        }
        Ok(())
    }

    /// Open the combined signup/login page.
    pub async fn go_to_signup_login(&self) -> ComprarResult<()> {
        self.page.click(&self.signup_login_link).await
    }

    /// Open the products page.
    pub async fn go_to_products(&self) -> ComprarResult<()> {
        self.page.click(&self.products_link).await
    }

    /// Open the cart.
    pub async fn go_to_cart(&self) -> ComprarResult<()> {
        self.page.click(&self.cart_link).await
    }
}
