use crate::error::ApiError;
use crate::handlers::ApiClient;
use crate::models::HeroImage;

/// Hero slider images from `GET /api/home/`.
pub async fn fetch_hero_images(api: &ApiClient) -> Result<Vec<HeroImage>, ApiError> {
    api.get_json("/api/home/").await
}
