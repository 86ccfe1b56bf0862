use crate::server::response::ApiError;

/// Requires a non-empty form field, naming the field in the rejection.
pub fn require_field(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!(
            "Missing required field '{field}'"
        ))),
    }
}

/// Checkbox-style coercion: a field is true when it was submitted with any
/// non-empty value, false when empty or absent.
#[must_use]
pub fn form_flag(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
