//! Cart page.

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// The `/view_cart` screen.
///
/// The line-item readers target the first row's cells; the verification
/// helpers therefore check the first (typically only) line item, which is
/// all the suite's scenarios put in the cart.
#[derive(Debug, Clone)]
pub struct CartPage {
    page: Page,
    pub(crate) line_items: Target,
    pub(crate) item_description: Target,
    pub(crate) item_price: Target,
    pub(crate) item_quantity: Target,
    pub(crate) empty_cart_message: Target,
    pub(crate) home_link: Target,
}

impl CartPage {
    /// Bind the cart targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            line_items: Target::css("cart line items", "tbody tr"),
            item_description: Target::css("cart item description", "td.cart_description"),
            item_price: Target::css("cart item price", "td.cart_price p"),
            item_quantity: Target::css("cart item quantity", "td.cart_quantity button"),
            empty_cart_message: Target::xpath(
                "empty cart message",
                "//p[contains(text(), 'Cart is empty')]",
            ),
            home_link: Target::link_text("home link", "Home"),
        }
    }

    /// Whether the cart shows no line items, either by an empty table or by
    /// the explicit empty-cart message.
    pub async fn is_cart_empty(&self) -> bool {
        self.page.count(&self.line_items).await == 0
            || self.page.is_visible(&self.empty_cart_message).await
    }

    /// Number of line items in the cart.
    pub async fn item_count(&self) -> usize {
        self.page.count(&self.line_items).await
    }

    /// Whether the first line item matches the exact name, price, and
    /// quantity. An empty cart never matches.
    pub async fn verify_product_in_cart(
        &self,
        expected_name: &str,
        expected_price: &str,
        expected_quantity: u32,
    ) -> ComprarResult<bool> {
        if self.is_cart_empty().await {
            return Ok(false);
        }
        let name = self.page.read_text(&self.item_description).await?;
        let price = self.page.read_text(&self.item_price).await?;
        let quantity = self.page.read_text(&self.item_quantity).await?;
        Ok(name == expected_name
            && price == expected_price
            && quantity == expected_quantity.to_string())
    }

    /// Whether the first line item's name contains `expected_name_part`
    /// (case-insensitive) and its quantity matches. An empty cart never
    /// matches.
    pub async fn verify_product_in_cart_contains(
        &self,
        expected_name_part: &str,
        expected_quantity: u32,
    ) -> ComprarResult<bool> {
        if self.is_cart_empty().await {
            return Ok(false);
        }
        let name = self.page.read_text(&self.item_description).await?;
        let quantity = self.page.read_text(&self.item_quantity).await?;
        Ok(name
            .to_lowercase()
            .contains(&expected_name_part.to_lowercase())
            && quantity == expected_quantity.to_string())
    }

    /// Whether the first line item's name contains `expected_name_part`
    /// (case-insensitive). An empty cart never matches.
    pub async fn verify_product_name_in_cart(
        &self,
        expected_name_part: &str,
    ) -> ComprarResult<bool> {
        if self.is_cart_empty().await {
            return Ok(false);
        }
        let name = self.page.read_text(&self.item_description).await?;
        Ok(name
            .to_lowercase()
            .contains(&expected_name_part.to_lowercase()))
    }

    /// Description cell of the first line item.
    pub async fn product_name(&self) -> ComprarResult<String> {
        self.page.read_text(&self.item_description).await
    }

    /// Price cell of the first line item.
    pub async fn product_price(&self) -> ComprarResult<String> {
        self.page.read_text(&self.item_price).await
    }

    /// Quantity cell of the first line item.
    pub async fn product_quantity(&self) -> ComprarResult<String> {
        self.page.read_text(&self.item_quantity).await
    }

    /// Navigate back to the home page.
    pub async fn go_to_home(&self) -> ComprarResult<()> {
        self.page.click(&self.home_link).await
    }

    /// Whether the current URL is the cart view.
    pub async fn is_cart_page_loaded(&self) -> ComprarResult<bool> {
        Ok(self.page.current_url().await?.contains("/view_cart"))
    }
}
