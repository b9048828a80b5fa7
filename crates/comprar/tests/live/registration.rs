//! User registration journey.

use comprar::pages::{
    AccountCreationPage, AccountInfo, AddressDetails, HomePage, NavigationBar, SignupLoginPage,
};
use comprar::ComprarResult;
use uuid::Uuid;

use crate::common;

#[tokio::test]
#[ignore = "requires a running WebDriver server and network access"]
async fn registers_a_new_user_and_lands_logged_in() -> ComprarResult<()> {
    let (settings, session) = common::start().await?;
    let page = session.page();

    // Step 1: reach the signup form.
    let home = HomePage::new(page.clone());
    home.close_initial_dialog().await?;
    home.go_to_signup_login().await?;

    // Step 2: sign up under a unique address; name comes from the settings
    // file so re-runs never collide on email.
    let signup_login = SignupLoginPage::new(page.clone());
    let email = format!("test_{}@example.com", Uuid::new_v4());
    let name = settings.require("test.user.name")?.to_string();
    signup_login.signup(&name, &email).await?;

    // Step 3: required fields only; everything optional stays empty.
    let account = AccountCreationPage::new(page.clone());
    account
        .fill_account_information(&AccountInfo {
            password: Some(settings.require("test.user.password")?.to_string()),
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

    // Step 4: submit the form.
    account.create_account().await?;

    // Step 5: the success banner and confirmation page must both show up.
    assert!(
        account.is_account_created().await,
        "account creation success message not visible"
    );
    assert!(
        account.is_confirmation_page().await?,
        "not redirected to the account-created confirmation page"
    );
    account.click_continue().await?;

    // Step 6: registration ends with a live session.
    let nav = NavigationBar::new(page);
    assert!(
        nav.is_user_logged_in().await,
        "user is not logged in after account creation"
    );

    session.quit().await
}
