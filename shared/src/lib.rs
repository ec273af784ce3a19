use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub const DEFAULT_PER_PAGE: u32 = 30;
pub const DEFAULT_PAGE_WINDOW: u32 = 5;

const UNEXPECTED_API_ERROR: &str = "Unexpected API error";
const UNEXPECTED_ERROR_FALLBACK: &str = "Unexpected error. Please try again.";

/// Transaction direction; amounts are stored non-negative and the sign
/// is implied by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A spending category. System categories are predefined by the backend,
/// cannot be edited or deleted, and carry a stable `key` used for
/// localized label lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color, e.g. "#EF4444"
    pub color: String,
    /// Icon key, e.g. "food"
    pub icon: String,
    pub system: bool,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Always non-negative; sign implied by `kind`
    pub amount: f64,
    /// ISO 4217 code, e.g. "BRL"
    pub currency: String,
    pub kind: TransactionKind,
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    /// RFC 3339 timestamp
    pub occurred_at: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreateRequest {
    pub amount: f64,
    pub currency: String,
    pub kind: TransactionKind,
    pub description: String,
    pub category_id: Option<String>,
    pub occurred_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreateRequest {
    pub name: String,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account record returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Server-side pagination metadata returned alongside list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total_count: u64,
}

/// List payloads arrive either as a bare sequence or wrapped under a
/// resource key, depending on the backend version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransactionListPayload {
    Wrapped { transactions: Vec<Transaction> },
    Bare(Vec<Transaction>),
}

impl TransactionListPayload {
    pub fn into_vec(self) -> Vec<Transaction> {
        match self {
            TransactionListPayload::Wrapped { transactions } => transactions,
            TransactionListPayload::Bare(transactions) => transactions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransactionItemPayload {
    Wrapped { transaction: Transaction },
    Bare(Transaction),
}

impl TransactionItemPayload {
    pub fn into_inner(self) -> Transaction {
        match self {
            TransactionItemPayload::Wrapped { transaction } => transaction,
            TransactionItemPayload::Bare(transaction) => transaction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryListPayload {
    Wrapped { categories: Vec<Category> },
    Bare(Vec<Category>),
}

impl CategoryListPayload {
    pub fn into_vec(self) -> Vec<Category> {
        match self {
            CategoryListPayload::Wrapped { categories } => categories,
            CategoryListPayload::Bare(categories) => categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryItemPayload {
    Wrapped { category: Category },
    Bare(Category),
}

impl CategoryItemPayload {
    pub fn into_inner(self) -> Category {
        match self {
            CategoryItemPayload::Wrapped { category } => category,
            CategoryItemPayload::Bare(category) => category,
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelope normalization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Structured error block carried by enveloped error responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ErrorBody {
    /// Interpret `details` as field -> messages. Values that are plain
    /// strings are lifted into single-element lists.
    pub fn detail_messages(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let details = self.details.as_ref()?.as_object()?;
        let mut out = BTreeMap::new();
        for (field, value) in details {
            let messages = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
                _ => continue,
            };
            out.insert(field.clone(), messages);
        }
        Some(out)
    }
}

/// The uniform `{status, data, error, message}` wrapper returned by the
/// current backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    #[serde(default)]
    pub message: Option<String>,
    /// List responses carry pagination metadata at the top level of the
    /// envelope, next to `data`.
    #[serde(default)]
    pub meta: Option<Value>,
}

impl Envelope {
    /// Pagination metadata, when present and well-formed.
    pub fn pagination_meta(&self) -> Option<PaginationMeta> {
        let meta = self.meta.clone()?;
        serde_json::from_value(meta).ok()
    }
    /// Returns the payload when the envelope reports success and carries
    /// data; otherwise an error with the envelope's message or the
    /// generic fallback.
    pub fn into_data(self) -> Result<Value, ApiError> {
        if self.status == ResponseStatus::Success {
            if let Some(data) = self.data {
                if !data.is_null() {
                    return Ok(data);
                }
            }
        }

        match self.error {
            Some(body) => Err(ApiError::from_error_body_parts(body)),
            None => Err(ApiError::Unexpected(UNEXPECTED_API_ERROR.to_string())),
        }
    }

    /// Human-readable success message: top-level `message`, else a
    /// nested `data.message`, else nothing.
    pub fn success_message(&self) -> Option<String> {
        if self.status != ResponseStatus::Success {
            return None;
        }
        if let Some(message) = &self.message {
            return Some(message.clone());
        }
        self.data
            .as_ref()
            .and_then(|data| data.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/// A raw response body decoded at the network boundary. The backend has
/// gone through several response shapes; everything funnels through this
/// tagged union so the rest of the client sees one contract.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Enveloped(Envelope),
    Bare(Value),
}

impl ApiBody {
    /// Objects carrying a recognized `status` tag decode as envelopes;
    /// any other object, array, or null is a bare payload. Scalar bodies
    /// are not a shape the backend produces and are rejected.
    pub fn decode(value: Value) -> Result<ApiBody, ApiError> {
        let is_enveloped = value
            .get("status")
            .and_then(Value::as_str)
            .map(|status| status == "success" || status == "error")
            .unwrap_or(false);

        if is_enveloped {
            return serde_json::from_value::<Envelope>(value)
                .map(ApiBody::Enveloped)
                .map_err(|_| ApiError::Unexpected(UNEXPECTED_API_ERROR.to_string()));
        }

        match value {
            Value::Object(_) | Value::Array(_) | Value::Null => Ok(ApiBody::Bare(value)),
            _ => Err(ApiError::Unexpected(UNEXPECTED_API_ERROR.to_string())),
        }
    }

    /// Unwraps to the payload value, treating bare bodies as success.
    pub fn into_data(self) -> Result<Value, ApiError> {
        match self {
            ApiBody::Enveloped(envelope) => envelope.into_data(),
            ApiBody::Bare(value) => Ok(value),
        }
    }

    pub fn success_message(&self) -> Option<String> {
        match self {
            ApiBody::Enveloped(envelope) => envelope.success_message(),
            ApiBody::Bare(_) => None,
        }
    }

    pub fn pagination_meta(&self) -> Option<PaginationMeta> {
        match self {
            ApiBody::Enveloped(envelope) => envelope.pagination_meta(),
            ApiBody::Bare(_) => None,
        }
    }
}

/// The single flat error surfaced to the UI layer. Resource clients
/// convert every transport failure into one of these; callers never see
/// raw transport errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network or HTTP failure that carried a human-readable message.
    #[error("{0}")]
    Transport(String),
    /// Field-level validation failure with per-field messages.
    #[error("{message}")]
    Validation {
        message: String,
        details: BTreeMap<String, Vec<String>>,
    },
    /// Response shape or failure we do not recognize.
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn unexpected() -> Self {
        ApiError::Unexpected(UNEXPECTED_ERROR_FALLBACK.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(message) | ApiError::Unexpected(message) => message,
            ApiError::Validation { message, .. } => message,
        }
    }

    /// Structured validation details, when the backend provided them.
    pub fn details(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ApiError::Validation { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Normalize an HTTP error body. Three shapes are in the wild:
    /// the structured envelope, a legacy Rails `errors` array, and a
    /// legacy `errors` object keyed by field.
    pub fn from_error_body(body: &Value) -> Self {
        if body.get("status").and_then(Value::as_str) == Some("error") {
            if let Ok(envelope) = serde_json::from_value::<Envelope>(body.clone()) {
                if let Some(error) = envelope.error {
                    if error.message.is_some() {
                        return ApiError::from_error_body_parts(error);
                    }
                }
            }
        }

        match body.get("errors") {
            Some(Value::Array(errors)) => {
                if let Some(first) = errors.iter().find_map(Value::as_str) {
                    return ApiError::Transport(first.to_string());
                }
            }
            Some(Value::Object(errors)) => {
                let first = errors.values().find_map(|value| match value {
                    Value::String(message) => Some(message.clone()),
                    Value::Array(items) => {
                        items.iter().find_map(Value::as_str).map(str::to_string)
                    }
                    _ => None,
                });
                if let Some(message) = first {
                    return ApiError::Transport(message);
                }
            }
            _ => {}
        }

        ApiError::unexpected()
    }

    fn from_error_body_parts(body: ErrorBody) -> Self {
        let message = body
            .message
            .clone()
            .unwrap_or_else(|| UNEXPECTED_API_ERROR.to_string());
        match body.detail_messages() {
            Some(details) if !details.is_empty() => ApiError::Validation { message, details },
            _ => ApiError::Transport(message),
        }
    }
}

/// Replaces whitespace-only string fields of a JSON object with explicit
/// nulls so optional text fields are omitted rather than sent empty.
pub fn normalize_empty_strings(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) if s.trim().is_empty() => (key, Value::Null),
                    other => (key, other),
                })
                .collect(),
        ),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Parse a URL query value into a positive page-ish integer. Only
/// finite, strictly positive numbers are accepted (floored); anything
/// else falls back.
pub fn parse_positive_int(value: Option<&str>, fallback: u32) -> u32 {
    let Some(raw) = value else {
        return fallback;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    let Ok(parsed) = trimmed.parse::<f64>() else {
        return fallback;
    };
    if !parsed.is_finite() || parsed <= 0.0 {
        return fallback;
    }
    parsed.floor() as u32
}

/// Client-side pagination state: the URL-derived `(page, per_page)` pair
/// plus the last known server metadata. Derived facts (`total_pages`,
/// `visible_pages`, ...) always reflect the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    page: u32,
    per_page: u32,
    meta: Option<PaginationMeta>,
    window_size: u32,
}

impl PaginationState {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            meta: None,
            window_size: DEFAULT_PAGE_WINDOW,
        }
    }

    pub fn with_window(mut self, window_size: u32) -> Self {
        self.window_size = window_size.max(1);
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }

    /// Clamps to page 1 at minimum; a page past the last is allowed and
    /// simply renders empty.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Changing the page size invalidates the current offset, so this
    /// also resets to page 1.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Replaces the last known server metadata wholesale, right after a
    /// list fetch.
    pub fn set_meta(&mut self, meta: Option<PaginationMeta>) {
        self.meta = meta;
    }

    /// Applies `delta` to the known total without a round-trip, floored
    /// at 0. Used for optimistic updates after a local create/delete.
    /// A no-op before the first fetch.
    pub fn adjust_total_count(&mut self, delta: i64) {
        if let Some(meta) = &mut self.meta {
            let next = meta.total_count as i64 + delta;
            meta.total_count = next.max(0) as u64;
        }
    }

    pub fn total_count(&self) -> u64 {
        self.meta.map(|meta| meta.total_count).unwrap_or(0)
    }

    pub fn total_pages(&self) -> u32 {
        let per_page = self.per_page as u64;
        let pages = (self.total_count() + per_page - 1) / per_page;
        (pages as u32).max(1)
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// A centered, contiguous window of page numbers around the current
    /// page, clamped to `[1, total_pages]`. Near an edge the window
    /// shifts so it stays `window_size` wide whenever enough pages
    /// exist.
    pub fn visible_pages(&self) -> Vec<u32> {
        let total = self.total_pages();
        let window = self.window_size;
        let half = window / 2;

        let mut start = self.page.saturating_sub(half).max(1);
        let end = (start + window - 1).min(total);
        if end.saturating_sub(start) + 1 < window {
            start = end.saturating_sub(window - 1).max(1);
        }

        (start..=end).collect()
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

// ---------------------------------------------------------------------------
// Money input codec
// ---------------------------------------------------------------------------

/// Currencies offered by the transaction form. BRL is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "BRL")]
    Brl,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Brl, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Brl => "BRL",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Brl => "R$",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        match code {
            "BRL" => Some(Currency::Brl),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

/// Active UI locale. Drives label lookup, date formatting, money
/// formatting, and the `Accept-Language` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    En,
    PtBr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
        }
    }

    pub fn from_code(code: &str) -> Locale {
        match code {
            "pt-BR" | "pt" => Locale::PtBr,
            _ => Locale::En,
        }
    }
}

/// Strip everything but ASCII digits from raw keystroke input. The
/// resulting digit string is the canonical integer-cents value.
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a digit string (integer cents) into a currency amount.
/// Empty digits parse to nothing, not zero.
pub fn parse_amount_from_digits(digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let parsed = digits.parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed / 100.0)
}

/// Validation outcome for the amount field. No upper bound is enforced
/// by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount is required")]
    AmountRequired,
    #[error("Amount must be greater than 0")]
    AmountTooSmall,
}

pub fn validate_amount_digits(digits: &str) -> Result<f64, AmountError> {
    let parsed = parse_amount_from_digits(digits).ok_or(AmountError::AmountRequired)?;
    if parsed <= 0.0 {
        return Err(AmountError::AmountTooSmall);
    }
    Ok(parsed)
}

/// Format a currency amount for the given locale: symbol, thousands
/// grouping, and two decimals.
pub fn format_money(value: f64, currency: Currency, locale: Locale) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let units = cents / 100;
    let frac = cents % 100;

    let (group_sep, decimal_sep) = match locale {
        Locale::En => (',', '.'),
        Locale::PtBr => ('.', ','),
    };
    let grouped = group_thousands(units, group_sep);
    let sign = if negative { "-" } else { "" };

    match locale {
        Locale::En => format!("{sign}{}{grouped}{decimal_sep}{frac:02}", currency.symbol()),
        Locale::PtBr => format!("{sign}{} {grouped}{decimal_sep}{frac:02}", currency.symbol()),
    }
}

/// Render the amount field's display value from its digit string.
/// Empty digits render empty, never "0.00".
pub fn display_amount(digits: &str, currency: Currency, locale: Locale) -> String {
    if digits.is_empty() {
        return String::new();
    }
    let value = parse_amount_from_digits(digits).unwrap_or(0.0);
    format_money(value, currency, locale)
}

fn group_thousands(value: u64, sep: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_transaction(id: &str) -> Value {
        json!({
            "id": id,
            "amount": 12.5,
            "currency": "BRL",
            "kind": "expense",
            "description": "Groceries",
            "category": null,
            "occurred_at": "2024-05-01T12:00:00Z",
            "created_at": "2024-05-01T12:00:01Z",
            "updated_at": "2024-05-01T12:00:01Z"
        })
    }

    #[test]
    fn test_envelope_success_returns_data() {
        let body = json!({"status": "success", "data": {"id": 1}});
        let envelope = match ApiBody::decode(body).unwrap() {
            ApiBody::Enveloped(envelope) => envelope,
            other => panic!("expected envelope, got {:?}", other),
        };
        assert_eq!(envelope.into_data().unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_envelope_success_without_data_raises() {
        let body = json!({"status": "success"});
        let envelope: Envelope = serde_json::from_value(body).unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.message(), "Unexpected API error");
    }

    #[test]
    fn test_envelope_error_uses_structured_message() {
        let body = json!({
            "status": "error",
            "error": {"code": "invalid", "message": "Amount must be positive"}
        });
        let envelope: Envelope = serde_json::from_value(body).unwrap();
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.message(), "Amount must be positive");
    }

    #[test]
    fn test_success_message_prefers_top_level() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "success",
            "message": "Created",
            "data": {"message": "nested"}
        }))
        .unwrap();
        assert_eq!(envelope.success_message(), Some("Created".to_string()));
    }

    #[test]
    fn test_success_message_falls_back_to_nested() {
        let envelope: Envelope = serde_json::from_value(json!({
            "status": "success",
            "data": {"message": "Transaction created", "transaction": {}}
        }))
        .unwrap();
        assert_eq!(
            envelope.success_message(),
            Some("Transaction created".to_string())
        );
    }

    #[test]
    fn test_success_message_absent() {
        let envelope: Envelope =
            serde_json::from_value(json!({"status": "success", "data": {}})).unwrap();
        assert_eq!(envelope.success_message(), None);
    }

    #[test]
    fn test_bare_body_decodes_as_payload() {
        let body = json!([{"id": "a"}]);
        let decoded = ApiBody::decode(body.clone()).unwrap();
        assert_eq!(decoded.into_data().unwrap(), body);
    }

    #[test]
    fn test_object_with_foreign_status_field_is_bare() {
        // A resource that happens to carry a "status" field is not an
        // envelope unless the tag is a recognized value.
        let body = json!({"status": "pending", "id": "a"});
        match ApiBody::decode(body).unwrap() {
            ApiBody::Bare(_) => {}
            other => panic!("expected bare payload, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_body_is_rejected() {
        assert!(ApiBody::decode(json!(42)).is_err());
        assert!(ApiBody::decode(json!("ok")).is_err());
    }

    #[test]
    fn test_legacy_error_array_takes_first_entry() {
        let body = json!({"errors": ["Email has already been taken", "Other"]});
        let err = ApiError::from_error_body(&body);
        assert_eq!(err.message(), "Email has already been taken");
    }

    #[test]
    fn test_legacy_error_object_takes_first_flattened_value() {
        let body = json!({"errors": {"email": ["is invalid"]}});
        let err = ApiError::from_error_body(&body);
        assert_eq!(err.message(), "is invalid");
    }

    #[test]
    fn test_unknown_error_shape_falls_back() {
        let err = ApiError::from_error_body(&json!({"whatever": true}));
        assert_eq!(err.message(), "Unexpected error. Please try again.");
    }

    #[test]
    fn test_structured_error_with_details_is_validation() {
        let body = json!({
            "status": "error",
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "details": {"amount": ["must be greater than 0"], "description": "is too long"}
            }
        });
        let err = ApiError::from_error_body(&body);
        assert_eq!(err.message(), "Validation failed");
        let details = err.details().expect("details present");
        assert_eq!(details["amount"], vec!["must be greater than 0"]);
        assert_eq!(details["description"], vec!["is too long"]);
    }

    #[test]
    fn test_normalize_empty_strings() {
        let payload = json!({
            "description": "   ",
            "category_id": "",
            "amount": 10.0,
            "kind": "income"
        });
        let normalized = normalize_empty_strings(payload);
        assert_eq!(normalized["description"], Value::Null);
        assert_eq!(normalized["category_id"], Value::Null);
        assert_eq!(normalized["amount"], json!(10.0));
        assert_eq!(normalized["kind"], json!("income"));
    }

    #[test]
    fn test_transaction_list_payload_unwraps_both_shapes() {
        let wrapped = json!({"transactions": [sample_transaction("a")]});
        let bare = json!([sample_transaction("a"), sample_transaction("b")]);

        let wrapped: TransactionListPayload = serde_json::from_value(wrapped).unwrap();
        assert_eq!(wrapped.into_vec().len(), 1);

        let bare: TransactionListPayload = serde_json::from_value(bare).unwrap();
        assert_eq!(bare.into_vec().len(), 2);
    }

    #[test]
    fn test_transaction_item_payload_unwraps_both_shapes() {
        let wrapped = json!({"transaction": sample_transaction("a")});
        let item: TransactionItemPayload = serde_json::from_value(wrapped).unwrap();
        assert_eq!(item.into_inner().id, "a");

        let bare: TransactionItemPayload =
            serde_json::from_value(sample_transaction("b")).unwrap();
        assert_eq!(bare.into_inner().id, "b");
    }

    #[test]
    fn test_parse_positive_int() {
        assert_eq!(parse_positive_int(Some("0"), 30), 30);
        assert_eq!(parse_positive_int(Some("-5"), 30), 30);
        assert_eq!(parse_positive_int(Some("7"), 30), 7);
        assert_eq!(parse_positive_int(None, 30), 30);
        assert_eq!(parse_positive_int(Some(""), 30), 30);
        assert_eq!(parse_positive_int(Some("abc"), 30), 30);
        // Fractional input floors
        assert_eq!(parse_positive_int(Some("7.9"), 30), 7);
    }

    #[test]
    fn test_total_pages_formula() {
        let mut state = PaginationState::new(1, 30);
        assert_eq!(state.total_pages(), 1); // no meta yet

        state.set_meta(Some(PaginationMeta {
            current_page: 1,
            per_page: 30,
            total_count: 0,
        }));
        assert_eq!(state.total_pages(), 1);

        state.adjust_total_count(45);
        assert_eq!(state.total_pages(), 2);

        state.set_per_page(10);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.page(), 1); // per-page change resets the page
    }

    #[test]
    fn test_adjust_total_count_floors_at_zero() {
        let mut state = PaginationState::new(1, 30);
        state.set_meta(Some(PaginationMeta {
            current_page: 1,
            per_page: 30,
            total_count: 0,
        }));
        state.adjust_total_count(-1);
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn test_visible_pages_window_properties() {
        for total_count in [0u64, 1, 29, 30, 45, 300, 1000] {
            for page in 1u32..=12 {
                let mut state = PaginationState::new(page, 30);
                state.set_meta(Some(PaginationMeta {
                    current_page: page,
                    per_page: 30,
                    total_count,
                }));
                let pages = state.visible_pages();
                let total_pages = state.total_pages();

                assert_eq!(pages.len() as u32, 5.min(total_pages));
                for window in pages.windows(2) {
                    assert_eq!(window[1], window[0] + 1);
                }
                assert!(*pages.first().unwrap() >= 1);
                assert!(*pages.last().unwrap() <= total_pages);
                if total_pages >= 5 && page <= total_pages {
                    assert!(pages.contains(&page));
                }
            }
        }
    }

    #[test]
    fn test_visible_pages_shifts_at_edges() {
        let mut state = PaginationState::new(1, 10);
        state.set_meta(Some(PaginationMeta {
            current_page: 1,
            per_page: 10,
            total_count: 100,
        }));
        assert_eq!(state.visible_pages(), vec![1, 2, 3, 4, 5]);

        state.set_page(10);
        assert_eq!(state.visible_pages(), vec![6, 7, 8, 9, 10]);

        state.set_page(5);
        assert_eq!(state.visible_pages(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_list_fetch_scenario() {
        // GET page 1 of 45 items at 30 per page
        let body = json!({
            "status": "success",
            "data": {"transactions": [sample_transaction("a")]},
            "meta": {"current_page": 1, "per_page": 30, "total_count": 45}
        });
        let decoded = ApiBody::decode(body).unwrap();
        let meta = decoded.pagination_meta().expect("meta present");
        let data = decoded.into_data().unwrap();
        let transactions: TransactionListPayload = serde_json::from_value(data).unwrap();
        assert_eq!(transactions.into_vec().len(), 1);

        let mut state = PaginationState::new(1, 30);
        state.set_meta(Some(meta));
        assert_eq!(state.total_pages(), 2);
        assert!(state.can_go_next());
        assert!(!state.can_go_prev());
        assert_eq!(state.visible_pages(), vec![1, 2]);
    }

    #[test]
    fn test_optimistic_create_scenario() {
        let mut state = PaginationState::new(1, 30);
        state.set_meta(Some(PaginationMeta {
            current_page: 1,
            per_page: 30,
            total_count: 1,
        }));
        state.adjust_total_count(1);
        assert_eq!(state.total_count(), 2);
    }

    #[test]
    fn test_optimistic_delete_scenario() {
        let mut state = PaginationState::new(1, 30);
        state.set_meta(Some(PaginationMeta {
            current_page: 1,
            per_page: 30,
            total_count: 1,
        }));
        state.adjust_total_count(-1);
        assert_eq!(state.total_count(), 0);
        assert_eq!(state.total_pages(), 1);
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("R$ 1.234,56"), "123456");
        assert_eq!(sanitize_digits("abc"), "");
        assert_eq!(sanitize_digits("100"), "100");
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(validate_amount_digits(""), Err(AmountError::AmountRequired));
        assert_eq!(
            validate_amount_digits("0"),
            Err(AmountError::AmountTooSmall)
        );
        assert_eq!(validate_amount_digits("100"), Ok(1.0));
        assert_eq!(validate_amount_digits("12345"), Ok(123.45));
    }

    #[test]
    fn test_money_display_round_trip() {
        assert_eq!(display_amount("", Currency::Brl, Locale::PtBr), "");
        assert_eq!(display_amount("100", Currency::Brl, Locale::PtBr), "R$ 1,00");
        assert_eq!(display_amount("100", Currency::Usd, Locale::En), "$1.00");
        assert_eq!(parse_amount_from_digits("100"), Some(1.0));
    }

    #[test]
    fn test_money_formatting_grouping() {
        assert_eq!(
            format_money(1234567.89, Currency::Brl, Locale::PtBr),
            "R$ 1.234.567,89"
        );
        assert_eq!(
            format_money(1234567.89, Currency::Eur, Locale::En),
            "€1,234,567.89"
        );
        assert_eq!(format_money(-42.5, Currency::Usd, Locale::En), "-$42.50");
        assert_eq!(format_money(0.0, Currency::Brl, Locale::PtBr), "R$ 0,00");
    }
}
