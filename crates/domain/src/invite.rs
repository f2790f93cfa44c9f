//! Proxy payloads exchanged with the browser.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an invite generation request.
///
/// `roleMappings` is forwarded as-is; its shape belongs to the management API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InviteRequest {
    /// Role mappings of the chosen template.
    #[serde(
        rename = "roleMappings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub role_mappings: Option<Value>,
}

impl InviteRequest {
    /// Creates a request for the given role mappings.
    #[must_use]
    pub const fn new(role_mappings: Value) -> Self {
        Self {
            role_mappings: Some(role_mappings),
        }
    }

    /// Parses a raw JSON request body.
    ///
    /// `roleMappings` is read from a top-level object only, with an explicit
    /// `null` kept as-is. Any other JSON value (array, string, number,
    /// boolean) carries no role mappings.
    ///
    /// # Errors
    /// Returns an error if the body is not JSON or is the literal `null`.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let role_mappings = match serde_json::from_slice::<Value>(body)? {
            Value::Null => {
                return Err(serde::de::Error::custom(
                    "cannot read roleMappings of a null body",
                ));
            }
            Value::Object(mut fields) => fields.remove("roleMappings"),
            _ => None,
        };
        Ok(Self { role_mappings })
    }
}

/// Uniform JSON error body returned by the proxy endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short label naming the failed operation.
    pub error: String,
    /// Message of the underlying error.
    pub details: String,
}

impl ErrorEnvelope {
    /// Creates an envelope from a label and an error.
    #[must_use]
    pub fn new(error: impl Into<String>, details: &impl std::fmt::Display) -> Self {
        Self {
            error: error.into(),
            details: details.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_role_mappings_pass_through_unvalidated() {
        let request =
            InviteRequest::from_json_slice(br#"{"roleMappings":[{"RoleName":"Global Admin"}],"x":1}"#)
                .unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"roleMappings": [{"RoleName": "Global Admin"}]})
        );
    }

    #[test]
    fn test_missing_role_mappings_serializes_to_empty_object() {
        let request = InviteRequest::from_json_slice(b"{}").unwrap();
        assert_eq!(request.role_mappings, None);
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }

    #[test]
    fn test_non_json_body_is_rejected() {
        assert!(InviteRequest::from_json_slice(b"not json").is_err());
    }

    #[test]
    fn test_null_body_is_rejected() {
        assert!(InviteRequest::from_json_slice(b"null").is_err());
    }

    #[test]
    fn test_non_object_bodies_carry_no_role_mappings() {
        let bodies: [&[u8]; 4] = [
            br#"[[{"RoleName":"Global Admin"}]]"#,
            br#""text""#,
            b"42",
            b"true",
        ];
        for body in bodies {
            let request = InviteRequest::from_json_slice(body).unwrap();
            assert_eq!(request, InviteRequest::default());
            assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
        }
    }

    #[test]
    fn test_explicit_null_role_mappings_is_forwarded() {
        let request = InviteRequest::from_json_slice(br#"{"roleMappings":null}"#).unwrap();
        assert_eq!(request, InviteRequest::new(Value::Null));
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"roleMappings":null}"#
        );
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ErrorEnvelope::new("Failed to fetch templates", &"boom");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"error":"Failed to fetch templates","details":"boom"}"#
        );
    }
}
