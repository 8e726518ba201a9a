use serde::Serialize;

use catalog_products::Product;

pub const PRODUCT_DELETED: &str = "Product deleted successfully";

/// Body of a successful `DELETE /products/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: &'static str,
    pub data: Product,
}

impl DeleteProductResponse {
    pub fn new(removed: Product) -> Self {
        Self {
            message: PRODUCT_DELETED,
            data: removed,
        }
    }
}
