use serde_json::Value;
use shared::{
    normalize_empty_strings, ApiBody, ApiError, PaginationMeta, ResponseStatus, Transaction,
    TransactionCreateRequest, TransactionItemPayload, TransactionListPayload,
    TransactionUpdateRequest,
};

use super::api::{decode, ApiClient};

/// One page of transactions plus the server's pagination metadata, when
/// the backend version returns it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub meta: Option<PaginationMeta>,
}

/// A created transaction together with the envelope's optional
/// human-readable success message.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTransaction {
    pub transaction: Transaction,
    pub message: Option<String>,
}

impl ApiClient {
    /// List transactions for the given page. The payload arrives either
    /// bare or wrapped under `transactions`; both normalize to a
    /// sequence.
    pub async fn list_transactions(
        &self,
        page: u32,
        per_page: u32,
    ) -> Result<TransactionPage, ApiError> {
        let path = format!("/api/v1/transactions?page={page}&per_page={per_page}");
        let body = self.get_body(&path).await?;
        let meta = body.pagination_meta();
        let payload: TransactionListPayload = decode(body.into_data()?)?;
        Ok(TransactionPage {
            transactions: payload.into_vec(),
            meta,
        })
    }

    pub async fn create_transaction(
        &self,
        payload: &TransactionCreateRequest,
    ) -> Result<CreatedTransaction, ApiError> {
        let payload = request_json(payload)?;
        let body = self.post_body("/api/v1/transactions", &payload).await?;
        let message = body.success_message();
        let item: TransactionItemPayload = decode(body.into_data()?)?;
        Ok(CreatedTransaction {
            transaction: item.into_inner(),
            message,
        })
    }

    pub async fn update_transaction(
        &self,
        id: &str,
        payload: &TransactionUpdateRequest,
    ) -> Result<Transaction, ApiError> {
        let payload = request_json(payload)?;
        let body = self
            .put_body(&format!("/api/v1/transactions/{id}"), &payload)
            .await?;
        let item: TransactionItemPayload = decode(body.into_data()?)?;
        Ok(item.into_inner())
    }

    /// Returns nothing on success; a non-success envelope raises.
    pub async fn delete_transaction(&self, id: &str) -> Result<(), ApiError> {
        let body = self
            .delete_body(&format!("/api/v1/transactions/{id}"))
            .await?;
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

/// Serialize a request payload, turning whitespace-only text fields into
/// explicit nulls on the way out.
pub(crate) fn request_json<T: serde::Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map(normalize_empty_strings)
        .map_err(|_| ApiError::unexpected())
}
