//! Token schemas for the authentication flow.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::decode::DeclaredFields;

/// Token scheme issued by the login flow
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// Credential issued to a client after successful authentication.
///
/// Serialized as the login response body. Both fields are required and
/// non-empty at issuance; the credential is immutable and discarded once
/// the response is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Token {
    /// Encoded access token handed back to the client
    #[validate(length(min = 1, message = "access token must not be empty"))]
    pub access_token: String,

    /// Scheme the client presents the token under
    #[validate(length(min = 1, message = "token type must not be empty"))]
    pub token_type: String,
}

impl Token {
    /// Creates a bearer token, the scheme the login flow always issues
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}

impl DeclaredFields for Token {
    const FIELDS: &'static [&'static str] = &["access_token", "token_type"];
}

/// Identity claim extracted from a decoded credential.
///
/// Transient carrier between token decoding and user lookup. The email is
/// optional because a credential may decode without carrying the claim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TokenData {
    /// Email of the authenticated user, if the claim was present
    pub email: Option<String>,
}

impl DeclaredFields for TokenData {
    const FIELDS: &'static [&'static str] = &["email"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_construction() {
        let token = Token::bearer("header.payload.signature".to_string());

        assert_eq!(token.access_token, "header.payload.signature");
        assert_eq!(token.token_type, BEARER_TOKEN_TYPE);
        assert!(token.validate().is_ok());
    }

    #[test]
    fn test_token_requires_non_empty_fields() {
        let token = Token {
            access_token: String::new(),
            token_type: "bearer".to_string(),
        };
        assert!(token.validate().is_err());

        let token = Token {
            access_token: "abc".to_string(),
            token_type: String::new(),
        };
        assert!(token.validate().is_err());
    }

    #[test]
    fn test_token_serialization_round_trip() {
        let token = Token::bearer("abc123".to_string());

        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("access_token"));
        assert!(json.contains("token_type"));

        let deserialized: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, token);
    }

    #[test]
    fn test_token_rejects_non_string_access_token() {
        let payload = serde_json::json!({
            "access_token": 42,
            "token_type": "bearer",
        });

        let result: Result<Token, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_data_defaults_to_empty_claim() {
        let data = TokenData::default();
        assert!(data.email.is_none());
    }

    #[test]
    fn test_token_data_round_trip() {
        let data = TokenData {
            email: Some("jane@example.com".to_string()),
        };

        let json = serde_json::to_string(&data).unwrap();
        let deserialized: TokenData = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, data);
    }
}
