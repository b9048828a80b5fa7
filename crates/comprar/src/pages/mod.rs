//! Page objects for the storefront under test.
//!
//! One type per screen or region. Construction binds the element targets;
//! operations compose the [`Page`](crate::page::Page) primitives into
//! domain-level steps. Pages hold no state besides the shared `Page` handle,
//! so every read re-queries the live document.

mod account_creation;
mod cart;
mod home;
mod navigation;
mod product_detail;
mod products;
mod signup_login;

pub use account_creation::{AccountCreationPage, AccountInfo, AddressDetails};
pub use cart::CartPage;
pub use home::HomePage;
pub use navigation::NavigationBar;
pub use product_detail::ProductDetailPage;
pub use products::ProductsPage;
pub use signup_login::SignupLoginPage;
