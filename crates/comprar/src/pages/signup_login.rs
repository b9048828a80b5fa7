//! Combined signup/login page.

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// The `/login` screen: a new-user signup form and a login form side by
/// side.
#[derive(Debug, Clone)]
pub struct SignupLoginPage {
    page: Page,
    pub(crate) signup_name_input: Target,
    pub(crate) signup_email_input: Target,
    pub(crate) signup_button: Target,
    pub(crate) login_email_input: Target,
    pub(crate) login_password_input: Target,
    pub(crate) login_button: Target,
    pub(crate) login_error: Target,
    pub(crate) signup_error: Target,
    pub(crate) login_header: Target,
    pub(crate) signup_header: Target,
}

impl SignupLoginPage {
    /// Bind the signup/login targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            signup_name_input: Target::name("signup name field", "name"),
            signup_email_input: Target::xpath(
                "signup email field",
                "//form[@action='/signup']//input[@name='email']",
            ),
            signup_button: Target::xpath("signup button", "//button[text()='Signup']"),
            login_email_input: Target::xpath(
                "login email field",
                "//form[@action='/login']//input[@name='email']",
            ),
            login_password_input: Target::xpath(
                "login password field",
                "//form[@action='/login']//input[@name='password']",
            ),
            login_button: Target::xpath("login button", "//button[text()='Login']"),
            login_error: Target::xpath(
                "login error banner",
                "//p[contains(text(), 'Your email or password is incorrect!')]",
            ),
            signup_error: Target::xpath(
                "signup error banner",
                "//p[contains(text(), 'Email Address already exist!')]",
            ),
            login_header: Target::xpath(
                "login section header",
                "//h2[contains(text(), 'Login to your account')]",
            ),
            signup_header: Target::xpath(
                "signup section header",
                "//h2[contains(text(), 'New User Signup!')]",
            ),
        }
    }

    /// Start signup with a name and email. A fresh email lands on the
    /// account-creation form; a known one raises the signup error banner.
    pub async fn signup(&self, name: &str, email: &str) -> ComprarResult<()> {
        self.page.type_text(&self.signup_name_input, name).await?;
        self.page.type_text(&self.signup_email_input, email).await?;
        self.page.click(&self.signup_button).await
    }

    /// Submit the login form.
    pub async fn login(&self, email: &str, password: &str) -> ComprarResult<()> {
        self.page.type_text(&self.login_email_input, email).await?;
        self.page
            .type_text(&self.login_password_input, password)
            .await?;
        self.page.click(&self.login_button).await
    }

    /// Whether the invalid-credentials banner is visible.
    pub async fn is_login_error_displayed(&self) -> bool {
        self.page.is_visible(&self.login_error).await
    }

    /// Whether the email-already-registered banner is visible.
    pub async fn is_signup_error_displayed(&self) -> bool {
        self.page.is_visible(&self.signup_error).await
    }

    /// Text of the invalid-credentials banner.
    pub async fn login_error_text(&self) -> ComprarResult<String> {
        self.page.read_text(&self.login_error).await
    }

    /// Text of the email-already-registered banner.
    pub async fn signup_error_text(&self) -> ComprarResult<String> {
        self.page.read_text(&self.signup_error).await
    }

    /// Whether both the login and signup sections are rendered.
    pub async fn is_login_page_loaded(&self) -> bool {
        self.page.is_visible(&self.login_header).await
            && self.page.is_visible(&self.signup_header).await
    }
}
