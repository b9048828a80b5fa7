//! Product detail page.

use crate::locator::Target;
use crate::page::Page;
use crate::result::ComprarResult;

/// One product's detail screen.
#[derive(Debug, Clone)]
pub struct ProductDetailPage {
    page: Page,
    pub(crate) product_name: Target,
    pub(crate) product_price: Target,
    pub(crate) add_to_cart_button: Target,
    pub(crate) view_cart_link: Target,
}

impl ProductDetailPage {
    /// Bind the product-detail targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            product_name: Target::css("product name", ".product-information h2"),
            product_price: Target::css("product price", ".product-information span span"),
            add_to_cart_button: Target::xpath(
                "add to cart button",
                "//button[text()='Add to cart']",
            ),
            view_cart_link: Target::xpath("view cart link", "//u[text()='View Cart']"),
        }
    }

    /// Displayed product name.
    pub async fn product_name(&self) -> ComprarResult<String> {
        self.page.read_text(&self.product_name).await
    }

    /// Displayed product price.
    pub async fn product_price(&self) -> ComprarResult<String> {
        self.page.read_text(&self.product_price).await
    }

    /// Add this product to the cart, raising the post-add modal.
    pub async fn add_to_cart(&self) -> ComprarResult<()> {
        self.page.click(&self.add_to_cart_button).await
    }

    /// Follow the modal's view-cart link.
    pub async fn view_cart(&self) -> ComprarResult<()> {
        self.page.click(&self.view_cart_link).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MockBackend, MockElement};
    use crate::wait::WaitPolicy;
    use std::sync::Arc;
    use std::time::Duration;

    fn fixture() -> (Arc<MockBackend>, ProductDetailPage) {
        let mock = Arc::new(MockBackend::new());
        let page = Page::new(
            mock.clone(),
            WaitPolicy::new(Duration::from_millis(50), Duration::from_millis(5)),
        );
        (mock, ProductDetailPage::new(page))
    }

    mod detail_tests {
        use super::*;

        #[tokio::test]
        async fn reads_name_and_price() {
            let (mock, detail) = fixture();
            mock.insert(
                detail.product_name.selector.clone(),
                MockElement::visible("Blue Top"),
            );
            mock.insert(
                detail.product_price.selector.clone(),
                MockElement::visible("Rs. 500"),
            );

            assert_eq!(detail.product_name().await.unwrap(), "Blue Top");
            assert_eq!(detail.product_price().await.unwrap(), "Rs. 500");
        }

        #[tokio::test]
        async fn adds_to_cart_then_views_the_cart() {
            let (mock, detail) = fixture();
            mock.insert(
                detail.add_to_cart_button.selector.clone(),
                MockElement::visible("Add to cart"),
            );
            mock.insert(
                detail.view_cart_link.selector.clone(),
                MockElement::visible("View Cart"),
            );

            detail.add_to_cart().await.unwrap();
            detail.view_cart().await.unwrap();

            assert!(mock.was_called("click:xpath=//button[text()='Add to cart']"));
            assert!(mock.was_called("click:xpath=//u[text()='View Cart']"));
        }
    }
}
