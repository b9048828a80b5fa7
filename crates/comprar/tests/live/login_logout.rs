//! Login and logout journeys.

use comprar::pages::{HomePage, NavigationBar, SignupLoginPage};
use comprar::{register_new_user, ComprarResult};

use crate::common;

#[tokio::test]
#[ignore = "requires a running WebDriver server and network access"]
async fn logs_in_and_out_with_a_fresh_account() -> ComprarResult<()> {
    let (settings, session) = common::start().await?;
    let page = session.page();

    // Register a fresh account instead of relying on a pre-provisioned one;
    // shared fixtures rot when someone deletes or changes them.
    let creds = register_new_user(&page, &settings).await?;

    let nav = NavigationBar::new(page.clone());
    assert!(
        nav.is_user_logged_in().await,
        "user should be logged in right after registration"
    );

    // The app lands on the login page after logout, wherever it started.
    nav.logout().await?;
    assert!(
        nav.is_redirected_to_login_page().await,
        "logout after registration should land on the login page"
    );

    let signup_login = SignupLoginPage::new(page.clone());
    signup_login.login(&creds.email, &creds.password).await?;
    assert!(
        nav.is_user_logged_in().await,
        "login with freshly registered credentials failed"
    );

    nav.logout().await?;
    assert!(
        nav.is_redirected_to_login_page().await,
        "logout link did not end the session"
    );

    session.quit().await
}

#[tokio::test]
#[ignore = "requires a running WebDriver server and network access"]
async fn rejects_invalid_credentials() -> ComprarResult<()> {
    let (_settings, session) = common::start().await?;
    let page = session.page();

    let home = HomePage::new(page.clone());
    home.close_initial_dialog().await?;
    home.go_to_signup_login().await?;

    let signup_login = SignupLoginPage::new(page.clone());
    signup_login
        .login("invalid@email.com", "wrongpassword")
        .await?;

    assert!(
        signup_login.is_login_error_displayed().await,
        "error banner should be shown for invalid credentials"
    );
    let nav = NavigationBar::new(page);
    assert!(
        !nav.is_user_logged_in().await,
        "invalid credentials must not produce a session"
    );

    session.quit().await
}

#[tokio::test]
#[ignore = "requires a running WebDriver server and network access"]
async fn stays_on_the_login_page_with_empty_credentials() -> ComprarResult<()> {
    let (_settings, session) = common::start().await?;
    let page = session.page();

    let home = HomePage::new(page.clone());
    home.close_initial_dialog().await?;
    home.go_to_signup_login().await?;

    let signup_login = SignupLoginPage::new(page.clone());
    signup_login.login("", "").await?;

    let nav = NavigationBar::new(page);
    assert!(
        !nav.is_user_logged_in().await,
        "empty credentials must not produce a session"
    );
    assert!(
        signup_login.is_login_page_loaded().await,
        "the login page should still be shown after an empty submit"
    );

    session.quit().await
}
