//! Multi-step business flows composed from page objects.

use tracing::info;
use uuid::Uuid;

use crate::page::Page;
use crate::pages::{AccountCreationPage, AccountInfo, AddressDetails, HomePage, SignupLoginPage};
use crate::result::{ComprarError, ComprarResult};
use crate::settings::Settings;

/// Credentials of a registered account, as produced by registration and
/// consumed by login steps. Their validity is owned by the application
/// under test, not by this suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
    /// Display name shown in the logged-in indicator.
    pub name: String,
}

/// Register a brand-new user and return the credentials.
///
/// The email is globally unique (`test_<uuid>@example.com`); the name and
/// password come from the settings file. Mandatory address fields receive
/// fixed placeholder values, optional fields stay empty. Registration is
/// all-or-nothing: a missing success banner fails the flow, with no retry.
pub async fn register_new_user(
    page: &Page,
    settings: &Settings,
) -> ComprarResult<UserCredentials> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let name = settings.require("test.user.name")?.to_string();
    let password = settings.require("test.user.password")?.to_string();
    info!(email = %email, "registering new user");

    let home = HomePage::new(page.clone());
    home.close_initial_dialog().await?;
    home.go_to_signup_login().await?;

    let signup_login = SignupLoginPage::new(page.clone());
    signup_login.signup(&name, &email).await?;

    let account = AccountCreationPage::new(page.clone());
    account
        .fill_account_information(&AccountInfo {
            password: Some(password.clone()),
            ..AccountInfo::default()
        })
        .await?;
    account
        .fill_address_details(&AddressDetails {
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
            address: Some("123 Street".to_string()),
            country: Some("United States".to_string()),
            state: Some("California".to_string()),
            city: Some("Los Angeles".to_string()),
            zipcode: Some("90001".to_string()),
            mobile_number: Some("1234567890".to_string()),
            ..AddressDetails::default()
        })
        .await?;
    account.create_account().await?;

    if !account.is_account_created().await {
        return Err(ComprarError::Flow {
            message: "account creation failed: success banner not shown".to_string(),
        });
    }
    account.click_continue().await?;

    info!(email = %email, "user registered");
    Ok(UserCredentials {
        email,
        password,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockBackend, MockElement};
    use crate::wait::WaitPolicy;
    use std::sync::Arc;
    use std::time::Duration;

    fn settings() -> Settings {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comprar.toml");
        std::fs::write(
            &path,
            "test.user.name = \"Comprar Tester\"\ntest.user.password = \"Comprar@12345\"\n",
        )
        .unwrap();
        Settings::load_from(&path).unwrap()
    }

    /// Mock with every element the registration journey touches.
    fn scripted_registration_page() -> (Arc<MockBackend>, Page) {
        let mock = Arc::new(MockBackend::new());
        let page = Page::new(
            mock.clone(),
            WaitPolicy::new(Duration::from_millis(50), Duration::from_millis(5)),
        );

        let home = HomePage::new(page.clone());
        let signup_login = SignupLoginPage::new(page.clone());
        let account = AccountCreationPage::new(page.clone());

        for selector in [
            home.consent_button.selector.clone(),
            home.signup_login_link.selector.clone(),
            signup_login.signup_name_input.selector.clone(),
            signup_login.signup_email_input.selector.clone(),
            signup_login.signup_button.selector.clone(),
            account.password_input.selector.clone(),
            account.first_name_input.selector.clone(),
            account.last_name_input.selector.clone(),
            account.address_input.selector.clone(),
            account.country_select.selector.clone(),
            account.state_input.selector.clone(),
            account.city_input.selector.clone(),
            account.zipcode_input.selector.clone(),
            account.mobile_input.selector.clone(),
            account.create_account_button.selector.clone(),
            account.account_created_banner.selector.clone(),
            account.continue_button.selector.clone(),
        ] {
            mock.insert(selector, MockElement::visible(""));
        }
        (mock, page)
    }

    mod registration_tests {
        use super::*;

        #[tokio::test]
        async fn registers_a_new_user_end_to_end() {
            let settings = settings();
            let (mock, page) = scripted_registration_page();

            let creds = register_new_user(&page, &settings).await.unwrap();

            assert!(creds.email.starts_with("test_"));
            assert!(creds.email.ends_with("@example.com"));
            assert_eq!(creds.name, "Comprar Tester");
            assert_eq!(creds.password, "Comprar@12345");

            assert!(mock.was_called("type:name=name:Comprar Tester"));
            assert!(mock.was_called("type:id=password:Comprar@12345"));
            assert!(mock.was_called("type:id=first_name:Test"));
            assert!(mock.was_called("select_text:id=country:United States"));
            assert!(mock.was_called("click:xpath=//button[text()='Create Account']"));
            assert!(mock.was_called("click:xpath=//*[@data-qa='continue-button']"));

            // Optional fields stay empty.
            assert!(!mock.was_called("type:id=company"));
            assert!(!mock.was_called("type:id=address2"));
            assert!(!mock.was_called("select_value:id=days"));
            assert!(!mock.was_called("click:id=id_gender1"));
            assert!(!mock.was_called("click:id=newsletter"));
        }

        #[tokio::test]
        async fn steps_happen_in_journey_order() {
            let settings = settings();
            let (mock, page) = scripted_registration_page();

            register_new_user(&page, &settings).await.unwrap();

            let history = mock.history();
            let index = |prefix: &str| {
                history
                    .iter()
                    .position(|entry| entry.starts_with(prefix))
                    .unwrap_or_else(|| panic!("no history entry starts with {prefix}"))
            };

            assert!(index("click:css=a[href='/login']") < index("type:name=name:"));
            assert!(index("type:name=name:") < index("click:xpath=//button[text()='Signup']"));
            assert!(
                index("click:xpath=//button[text()='Signup']") < index("type:id=password:")
            );
            assert!(
                index("type:id=password:") < index("click:xpath=//button[text()='Create Account']")
            );
            assert!(
                index("click:xpath=//button[text()='Create Account']")
                    < index("click:xpath=//*[@data-qa='continue-button']")
            );
        }

        #[tokio::test]
        async fn generated_emails_are_unique_per_call() {
            let settings = settings();
            let (_mock, page) = scripted_registration_page();

            let first = register_new_user(&page, &settings).await.unwrap();
            let second = register_new_user(&page, &settings).await.unwrap();
            assert_ne!(first.email, second.email);
        }

        #[tokio::test]
        async fn missing_success_banner_fails_the_flow() {
            let settings = settings();
            let (mock, page) = scripted_registration_page();
            let banner = AccountCreationPage::new(page.clone()).account_created_banner;
            mock.remove(&banner.selector);

            let err = register_new_user(&page, &settings).await.unwrap_err();
            assert!(err.to_string().contains("account creation failed"));
            assert!(!mock.was_called("click:xpath=//*[@data-qa='continue-button']"));
        }

        #[tokio::test]
        async fn missing_configured_name_fails_before_touching_the_page() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("comprar.toml");
            std::fs::write(&path, "test.user.password = \"x\"\n").unwrap();
            let settings = Settings::load_from(&path).unwrap();
            let (mock, page) = scripted_registration_page();

            let err = register_new_user(&page, &settings).await.unwrap_err();
            assert!(err.to_string().contains("test.user.name"));
            assert!(mock.history().is_empty());
        }
    }

    mod isolation_tests {
        use super::*;

        #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
        async fn concurrent_registrations_stay_isolated() {
            let settings = settings();
            let (mock_a, page_a) = scripted_registration_page();
            let (mock_b, page_b) = scripted_registration_page();

            let settings_a = settings.clone();
            let settings_b = settings;
            let task_a =
                tokio::spawn(async move { register_new_user(&page_a, &settings_a).await });
            let task_b =
                tokio::spawn(async move { register_new_user(&page_b, &settings_b).await });

            let creds_a = task_a.await.unwrap().unwrap();
            let creds_b = task_b.await.unwrap().unwrap();
            assert_ne!(creds_a.email, creds_b.email);

            let signups = |mock: &MockBackend| {
                mock.history()
                    .iter()
                    .filter(|entry| entry.starts_with("click:xpath=//button[text()='Signup']"))
                    .count()
            };
            assert_eq!(signups(&mock_a), 1);
            assert_eq!(signups(&mock_b), 1);
        }
    }
}
