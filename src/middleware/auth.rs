use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use uuid::Uuid;

use crate::auth::{Claims, Role};
use crate::config;
use crate::error::ApiError;

/// Authenticated caller context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: Role,
}

impl TryFrom<Claims> for AuthUser {
    type Error = ApiError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = Role::parse(&claims.role)
            .ok_or_else(|| ApiError::unauthorized("Unknown role in token"))?;
        Ok(Self {
            user_id: claims.sub,
            email: claims.email,
            role,
        })
    }
}

/// JWT authentication middleware that validates bearer tokens and injects
/// the caller context into request extensions
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_jwt_from_headers(&headers).map_err(ApiError::unauthorized)?;

    let claims = validate_jwt(&token).map_err(ApiError::unauthorized)?;

    let auth_user = AuthUser::try_from(claims)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

/// Validate JWT token and extract claims
fn validate_jwt(token: &str) -> Result<Claims, String> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err("JWT secret not configured".to_string());
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| format!("Invalid JWT token: {}", e))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn rejects_missing_header() {
        let headers = HeaderMap::new();
        assert!(extract_jwt_from_headers(&headers).is_err());
    }

    #[test]
    fn rejects_non_bearer_scheme() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert!(extract_jwt_from_headers(&headers).is_err());
    }

    #[test]
    fn rejects_empty_bearer_token() {
        let headers = headers_with_auth("Bearer ");
        assert!(extract_jwt_from_headers(&headers).is_err());
    }

    #[test]
    fn accepts_bearer_token() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_jwt_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn auth_user_rejects_unknown_role() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "ops@example.com".into(),
            role: "superuser".into(),
            exp: 0,
            iat: 0,
        };
        assert!(AuthUser::try_from(claims).is_err());
    }
}
