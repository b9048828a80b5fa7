//! Account creation form.

use tracing::debug;

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// Account-information section of the registration form.
///
/// Every field is optional; `None` and blank values are skipped, matching
/// the form's acceptance of a bare password-only submission.
#[derive(Debug, Clone, Default)]
pub struct AccountInfo {
    /// Salutation: `"Mr."` or `"Mrs."`, case-insensitive. Anything else
    /// leaves the radio buttons untouched.
    pub title: Option<String>,
    /// Account password. The application rejects the form without one.
    pub password: Option<String>,
    /// Birth day as the option value, e.g. `"12"`.
    pub birth_day: Option<String>,
    /// Birth month as the option value, e.g. `"7"`.
    pub birth_month: Option<String>,
    /// Birth year as the option value, e.g. `"1990"`.
    pub birth_year: Option<String>,
    /// Tick the newsletter checkbox.
    pub newsletter: bool,
    /// Tick the partner-offers checkbox.
    pub offers: bool,
}

/// Address section of the registration form. `None` fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct AddressDetails {
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// First address line. The application rejects the form without one.
    pub address: Option<String>,
    /// Second address line.
    pub address2: Option<String>,
    /// Country, matched against the dropdown's visible option text.
    pub country: Option<String>,
    /// State or region.
    pub state: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub zipcode: Option<String>,
    /// Mobile number.
    pub mobile_number: Option<String>,
}

/// The registration form shown after a successful signup submission,
/// through to the post-creation confirmation.
#[derive(Debug, Clone)]
pub struct AccountCreationPage {
    page: Page,
    pub(crate) title_mr_radio: Target,
    pub(crate) title_mrs_radio: Target,
    pub(crate) password_input: Target,
    pub(crate) birth_day_select: Target,
    pub(crate) birth_month_select: Target,
    pub(crate) birth_year_select: Target,
    pub(crate) newsletter_checkbox: Target,
    pub(crate) offers_checkbox: Target,
    pub(crate) first_name_input: Target,
    pub(crate) last_name_input: Target,
    pub(crate) company_input: Target,
    pub(crate) address_input: Target,
    pub(crate) address2_input: Target,
    pub(crate) country_select: Target,
    pub(crate) state_input: Target,
    pub(crate) city_input: Target,
    pub(crate) zipcode_input: Target,
    pub(crate) mobile_input: Target,
    pub(crate) create_account_button: Target,
    pub(crate) account_created_banner: Target,
    pub(crate) continue_button: Target,
}

impl AccountCreationPage {
    /// Bind the account-creation targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            title_mr_radio: Target::id("title Mr. radio", "id_gender1"),
            title_mrs_radio: Target::id("title Mrs. radio", "id_gender2"),
            password_input: Target::id("password field", "password"),
            birth_day_select: Target::id("birth day dropdown", "days"),
            birth_month_select: Target::id("birth month dropdown", "months"),
            birth_year_select: Target::id("birth year dropdown", "years"),
            newsletter_checkbox: Target::id("newsletter checkbox", "newsletter"),
            offers_checkbox: Target::id("offers checkbox", "optin"),
            first_name_input: Target::id("first name field", "first_name"),
            last_name_input: Target::id("last name field", "last_name"),
            company_input: Target::id("company field", "company"),
            address_input: Target::id("address field", "address1"),
            address2_input: Target::id("second address field", "address2"),
            country_select: Target::id("country dropdown", "country"),
            state_input: Target::id("state field", "state"),
            city_input: Target::id("city field", "city"),
            zipcode_input: Target::id("zipcode field", "zipcode"),
            mobile_input: Target::id("mobile number field", "mobile_number"),
            create_account_button: Target::xpath(
                "create account button",
                "//button[text()='Create Account']",
            ),
            account_created_banner: Target::xpath(
                "account created banner",
                "//*[@data-qa='account-created']",
            ),
            continue_button: Target::xpath(
                "continue button",
                "//*[@data-qa='continue-button']",
            ),
        }
    }

    /// Fill the account-information section, skipping absent fields.
    pub async fn fill_account_information(&self, info: &AccountInfo) -> ComprarResult<()> {
        match info.title.as_deref().map(str::trim) {
            Some(title) if title.eq_ignore_ascii_case("mr.") => {
                self.page.click(&self.title_mr_radio).await?;
            }
            Some(title) if title.eq_ignore_ascii_case("mrs.") => {
                self.page.click(&self.title_mrs_radio).await?;
            }
            Some(title) if !title.is_empty() => {
                debug!(title, "unrecognized salutation, radios left unset");
            }
            _ => {}
        }

        self.page
            .type_text_if_present(&self.password_input, info.password.as_deref())
            .await?;

        self.page
            .select_by_value_if_present(&self.birth_day_select, info.birth_day.as_deref())
            .await?;
        self.page
            .select_by_value_if_present(&self.birth_month_select, info.birth_month.as_deref())
            .await?;
        self.page
            .select_by_value_if_present(&self.birth_year_select, info.birth_year.as_deref())
            .await?;

        if info.newsletter && !self.page.is_selected(&self.newsletter_checkbox).await? {
            self.page.click(&self.newsletter_checkbox).await?;
        }
        if info.offers && !self.page.is_selected(&self.offers_checkbox).await? {
            self.page.click(&self.offers_checkbox).await?;
        }
        Ok(())
    }

    /// Fill the address section, skipping absent fields.
    pub async fn fill_address_details(&self, details: &AddressDetails) -> ComprarResult<()> {
        self.page
            .type_text_if_present(&self.first_name_input, details.first_name.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.last_name_input, details.last_name.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.company_input, details.company.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.address_input, details.address.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.address2_input, details.address2.as_deref())
            .await?;
        self.page
            .select_by_visible_text_if_present(&self.country_select, details.country.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.state_input, details.state.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.city_input, details.city.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.zipcode_input, details.zipcode.as_deref())
            .await?;
        self.page
            .type_text_if_present(&self.mobile_input, details.mobile_number.as_deref())
            .await?;
        Ok(())
    }

    /// Submit the registration form.
    pub async fn create_account(&self) -> ComprarResult<()> {
        self.page.click(&self.create_account_button).await
    }

    /// Whether the "Account Created!" banner is visible.
    pub async fn is_account_created(&self) -> bool {
        self.page.is_visible(&self.account_created_banner).await
    }

    /// Proceed past the confirmation interstitial.
    pub async fn click_continue(&self) -> ComprarResult<()> {
        self.page.click(&self.continue_button).await
    }

    /// Whether the current URL is the post-creation confirmation view.
    pub async fn is_confirmation_page(&self) -> ComprarResult<bool> {
        Ok(self.page.current_url().await?.contains("/account_created"))
    }
}
