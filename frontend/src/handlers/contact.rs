use crate::error::ApiError;
use crate::handlers::ApiClient;
use crate::models::ContactMessage;

/// Forwards a contact form submission. Any 2xx counts as delivered.
pub async fn post_contact(api: &ApiClient, message: &ContactMessage) -> Result<(), ApiError> {
    api.post_json("/api/contact/", message).await
}
