use crate::error::ApiError;
use crate::handlers::ApiClient;
use crate::models::Product;

/// `GET /api/products/`, unfiltered. Callers drop inactive records.
pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    api.get_json("/api/products/").await
}
