//! Form Extraction
//!
//! Browser clients post `FormData` (multipart) while scripts and the CLI
//! post urlencoded bodies; `FormFields` accepts either.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form,
};
use std::collections::HashMap;

use super::error::{ApiError, ApiResult};

/// Text fields of a form submission
#[derive(Debug, Default)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    /// A field that must be present (may be empty)
    pub fn required(&self, name: &str) -> ApiResult<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ApiError::Validation(format!("field '{}' is required", name)))
    }

    /// A field that must be present and non-empty
    pub fn non_empty(&self, name: &str) -> ApiResult<&str> {
        let value = self.required(name)?;
        if value.is_empty() {
            return Err(ApiError::Validation(format!("field '{}' cannot be empty", name)));
        }
        Ok(value)
    }

    /// An optional field; empty strings count as absent
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// A required boolean field
    pub fn boolean(&self, name: &str) -> ApiResult<bool> {
        let value = self.required(name)?;
        parse_bool(value).ok_or_else(|| {
            ApiError::Validation(format!("field '{}' must be a boolean, got '{}'", name, value))
        })
    }
}

/// Lenient boolean parsing for form values
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            return Ok(Self(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;

        let mut fields = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            fields.insert(name, value);
        }

        Ok(Self(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_field_accessors() {
        let fields = FormFields(
            [("key", "hello"), ("value", ""), ("enabled", "false")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );

        assert_eq!(fields.required("value").unwrap(), "");
        assert!(fields.non_empty("value").is_err());
        assert!(fields.required("dict_type").is_err());
        assert_eq!(fields.optional("value"), None);
        assert_eq!(fields.optional("key"), Some("hello"));
        assert!(!fields.boolean("enabled").unwrap());
    }
}
