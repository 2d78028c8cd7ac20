use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Anonymous,
    Authenticated,
    Admin,
}

/// Who is calling, as established from the `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub subject: Option<String>,
    pub role: Role,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self {
            subject: None,
            role: Role::Anonymous,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role != Role::Anonymous
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        let admin = claims
            .role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"));
        Self {
            subject: Some(claims.sub),
            role: if admin { Role::Admin } else { Role::Authenticated },
        }
    }
}

/// No header means anonymous. A header that is present but not a valid
/// bearer token is an error even where anonymous access would be allowed.
pub fn principal_from_headers(headers: &HeaderMap, secret: &str) -> Result<Principal> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(Principal::anonymous());
    };
    let Ok(auth_str) = auth_header.to_str() else {
        return Err(Error::Unauthorized("bad_authorization".into()));
    };
    let Some(token) = auth_str.strip_prefix("Bearer ") else {
        return Err(Error::Unauthorized("unsupported_scheme".into()));
    };

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Ok(Principal::from(data.claims)),
        Err(_) => Err(Error::Unauthorized("invalid_token".into())),
    }
}

/// Signs a token the way the identity provider does. Used by the token
/// tooling and the tests.
pub fn issue_token(subject: &str, role: Option<&str>, ttl: Duration, secret: &str) -> Result<String> {
    let claims = Claims {
        sub: subject.to_string(),
        exp: (Utc::now() + ttl).timestamp().max(0) as usize,
        role: role.map(str::to_string),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const SECRET: &str = "unit_test_secret";

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn no_header_is_anonymous() {
        let principal = principal_from_headers(&HeaderMap::new(), SECRET).unwrap();
        assert_eq!(principal, Principal::anonymous());
    }

    #[test]
    fn admin_role_is_case_insensitive() {
        let token = issue_token("root", Some("ADMIN"), Duration::minutes(5), SECRET).unwrap();
        let principal =
            principal_from_headers(&headers_with(&format!("Bearer {}", token)), SECRET).unwrap();
        assert_eq!(principal.role, Role::Admin);
        assert_eq!(principal.subject.as_deref(), Some("root"));
    }

    #[test]
    fn other_roles_are_plain_authenticated() {
        for role in [None, Some("user"), Some("staff")] {
            let token = issue_token("u1", role, Duration::minutes(5), SECRET).unwrap();
            let principal =
                principal_from_headers(&headers_with(&format!("Bearer {}", token)), SECRET)
                    .unwrap();
            assert_eq!(principal.role, Role::Authenticated);
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("u1", None, Duration::minutes(5), "other").unwrap();
        let err = principal_from_headers(&headers_with(&format!("Bearer {}", token)), SECRET)
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(msg) if msg == "invalid_token"));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token("u1", None, Duration::hours(-2), SECRET).unwrap();
        let err = principal_from_headers(&headers_with(&format!("Bearer {}", token)), SECRET)
            .unwrap_err();
        assert!(matches!(err, Error::Unauthorized(_)));
    }

    #[test]
    fn non_bearer_scheme_is_rejected() {
        let err = principal_from_headers(&headers_with("Basic dXNlcjpwYXNz"), SECRET).unwrap_err();
        assert!(matches!(err, Error::Unauthorized(msg) if msg == "unsupported_scheme"));
    }
}
