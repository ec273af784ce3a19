use serde_json::json;
use shared::{
    ApiBody, ApiError, Category, CategoryCreateRequest, CategoryItemPayload, CategoryListPayload,
    CategoryUpdateRequest, ResponseStatus,
};

use super::api::{decode, ApiClient};
use super::transactions::request_json;

impl ApiClient {
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body = self.get_body("/api/v1/categories").await?;
        let payload: CategoryListPayload = decode(body.into_data()?)?;
        Ok(payload.into_vec())
    }

    /// Writes wrap the payload under a `category` key per the backend's
    /// request contract; responses come back bare or wrapped.
    pub async fn create_category(
        &self,
        payload: &CategoryCreateRequest,
    ) -> Result<Category, ApiError> {
        let payload = json!({ "category": request_json(payload)? });
        let body = self.post_body("/api/v1/categories", &payload).await?;
        let item: CategoryItemPayload = decode(body.into_data()?)?;
        Ok(item.into_inner())
    }

    pub async fn update_category(
        &self,
        id: &str,
        payload: &CategoryUpdateRequest,
    ) -> Result<Category, ApiError> {
        let payload = json!({ "category": request_json(payload)? });
        let body = self
            .put_body(&format!("/api/v1/categories/{id}"), &payload)
            .await?;
        let item: CategoryItemPayload = decode(body.into_data()?)?;
        Ok(item.into_inner())
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        let body = self.delete_body(&format!("/api/v1/categories/{id}")).await?;
        match body {
            ApiBody::Enveloped(envelope) if envelope.status == ResponseStatus::Error => {
                Err(envelope
                    .into_data()
                    .err()
                    .unwrap_or_else(ApiError::unexpected))
            }
            _ => Ok(()),
        }
    }
}
