use crate::error::ApiError;
use crate::handlers::ApiClient;
use crate::models::Category;

pub async fn fetch_categories(api: &ApiClient) -> Result<Vec<Category>, ApiError> {
    api.get_json("/api/categories/").await
}
