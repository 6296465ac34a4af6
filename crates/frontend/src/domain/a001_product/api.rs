use crate::shared::api_utils::get_json;
use contracts::domain::a001_product::Product;
use contracts::shared::api_error::ApiError;

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/api/products").await
}
