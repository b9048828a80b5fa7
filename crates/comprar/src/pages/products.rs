//! Products and search page.

use tracing::debug;

use crate::locator::Target;
use crate::page::Page;
use crate::result::{ComprarError, ComprarResult};

/// The `/products` screen: the search form, the result grid, and the modal
/// shown after adding a product to the cart.
///
/// "First result" targets use combined selectors whose document-order first
/// match is the first tile's element, so reads and the add-to-cart always
/// act on the same product.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    page: Page,
    pub(crate) search_input: Target,
    pub(crate) search_button: Target,
    pub(crate) results_header: Target,
    pub(crate) product_tiles: Target,
    pub(crate) product_infos: Target,
    pub(crate) first_product_name: Target,
    pub(crate) first_product_price: Target,
    pub(crate) first_add_to_cart: Target,
    pub(crate) first_view_product_link: Target,
    pub(crate) modal: Target,
    pub(crate) modal_view_cart_link: Target,
    pub(crate) modal_continue_button: Target,
}

impl ProductsPage {
    /// Bind the products page targets.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page,
            search_input: Target::id("search field", "search_product"),
            search_button: Target::id("search button", "submit_search"),
            results_header: Target::xpath(
                "searched products header",
                "//h2[contains(text(),'Searched Products')]",
            ),
            product_tiles: Target::css("product tiles", ".features_items .product-image-wrapper"),
            product_infos: Target::xpath(
                "product info blocks",
                "//div[@class='features_items']//div[@class='productinfo text-center']",
            ),
            first_product_name: Target::css(
                "first product name",
                ".features_items .productinfo.text-center p",
            ),
            first_product_price: Target::css(
                "first product price",
                ".features_items .productinfo.text-center h2",
            ),
            first_add_to_cart: Target::css(
                "first add-to-cart button",
                ".features_items .productinfo.text-center a.add-to-cart",
            ),
            first_view_product_link: Target::css(
                "first view-product link",
                ".features_items .view-product",
            ),
            modal: Target::css("add-to-cart modal", ".modal"),
            modal_view_cart_link: Target::xpath("view cart link", "//a[@href='/view_cart']"),
            modal_continue_button: Target::xpath(
                "continue shopping button",
                "//button[contains(text(), 'Continue Shopping')]",
            ),
        }
    }

    /// Search for a term. An empty term submits an unconstrained query,
    /// which the application answers with the full catalog.
    pub async fn search(&self, term: &str) -> ComprarResult<()> {
        self.page.type_text(&self.search_input, term).await?;
        self.page.click(&self.search_button).await
    }

    /// Whether the "Searched Products" header is visible.
    pub async fn is_search_results_visible(&self) -> bool {
        self.page.is_visible(&self.results_header).await
    }

    /// Number of product tiles currently rendered.
    pub async fn product_count(&self) -> usize {
        self.page.count(&self.product_tiles).await
    }

    /// Name of the first result.
    pub async fn first_product_name(&self) -> ComprarResult<String> {
        if self.page.count(&self.product_infos).await == 0 {
            return Err(ComprarError::Flow {
                message: "no products found to read a name from".to_string(),
            });
        }
        self.page.read_text(&self.first_product_name).await
    }

    /// Price of the first result.
    pub async fn first_product_price(&self) -> ComprarResult<String> {
        if self.page.count(&self.product_infos).await == 0 {
            return Err(ComprarError::Flow {
                message: "no products found to read a price from".to_string(),
            });
        }
        self.page.read_text(&self.first_product_price).await
    }

    /// Whether the results banner is shown, at least one tile is rendered,
    /// and the first result's name contains `term` (case-insensitive).
    pub async fn do_search_results_contain(&self, term: &str) -> ComprarResult<bool> {
        if !self.is_search_results_visible().await || self.product_count().await == 0 {
            return Ok(false);
        }
        let first = self.first_product_name().await?;
        Ok(first.to_lowercase().contains(&term.to_lowercase()))
    }

    /// Add the first result to the cart, raising the post-add modal.
    pub async fn add_first_product_to_cart(&self) -> ComprarResult<()> {
        if self.page.count(&self.product_infos).await == 0 {
            return Err(ComprarError::Flow {
                message: "no products available to add to cart".to_string(),
            });
        }
        self.page.click(&self.first_add_to_cart).await
    }

    /// Open the first result's detail page.
    pub async fn open_first_product(&self) -> ComprarResult<()> {
        self.page.click(&self.first_view_product_link).await
    }

    /// Follow the modal's view-cart link. The modal must be visible.
    pub async fn view_cart_from_modal(&self) -> ComprarResult<()> {
        if !self.page.is_visible(&self.modal).await {
            return Err(ComprarError::Flow {
                message: "add-to-cart modal is not visible".to_string(),
            });
        }
        self.page.click(&self.modal_view_cart_link).await
    }

    /// Dismiss the modal and stay on the products page. A missing modal is
    /// not an error.
    pub async fn continue_shopping_from_modal(&self) -> ComprarResult<()> {
        if self.page.is_visible(&self.modal).await {
            self.page.click(&self.modal_continue_button).await
        } else {
            debug!("add-to-cart modal not shown, nothing to dismiss");
            Ok(())
        }
    }
}
