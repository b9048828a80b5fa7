//! Header navigation bar.

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// The navigation bar rendered on every screen once the page settles.
#[derive(Debug, Clone)]
pub struct NavigationBar {
    page: Page,
    pub(crate) logged_in_label: Target,
    pub(crate) logout_link: Target,
    pub(crate) signup_login_link: Target,
}

impl NavigationBar {
    /// Bind the navigation bar targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            logged_in_label: Target::xpath(
                "logged-in label",
                "//a[contains(text(),'Logged in as')]",
            ),
            logout_link: Target::xpath("logout link", "//a[text()='Logout']"),
            signup_login_link: Target::css("signup/login link", "a[href='/login']"),
        }
    }

    /// Whether the "Logged in as ..." indicator is visible.
    pub async fn is_user_logged_in(&self) -> bool {
        self.page.is_visible(&self.logged_in_label).await
    }

    /// Text of the logged-in indicator, e.g. `"Logged in as Jane"`.
    pub async fn logged_in_text(&self) -> ComprarResult<String> {
        self.page.read_text(&self.logged_in_label).await
    }

    /// Log the current user out. The application lands on the login page
    /// afterwards regardless of where the logout started.
    pub async fn logout(&self) -> ComprarResult<()> {
        self.page.click(&self.logout_link).await
    }

    /// Whether the post-logout redirect landed on the login view.
    pub async fn is_redirected_to_login_page(&self) -> bool {
        self.page.is_visible(&self.signup_login_link).await
    }
}
