use axum::{
    Extension,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use solace_types::api::Claims;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const TOKEN_LIFETIME_DAYS: i64 = 30;

pub fn create_token(secret: &str, user_id: Uuid, username: &str, is_admin: bool) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        is_admin,
        exp: (chrono::Utc::now() + chrono::Duration::days(TOKEN_LIFETIME_DAYS)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}

pub fn decode_token(secret: &str, token: &str) -> Option<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .ok()
    .map(|data| data.claims)
}

/// Extract and validate the JWT from the Authorization header.
pub async fn require_auth(State(state): State<AppState>, mut req: Request, next: Next) -> ApiResult<Response> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(ApiError::Unauthorized)?;

    let claims = decode_token(&state.jwt_secret, token).ok_or(ApiError::Unauthorized)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Layered after [`require_auth`]; rejects non-admin sessions.
pub async fn require_admin(Extension(claims): Extension<Claims>, req: Request, next: Next) -> ApiResult<Response> {
    if !claims.is_admin {
        return Err(ApiError::Forbidden("admin access required".into()));
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        let uid = Uuid::new_v4();
        let token = create_token("secret", uid, "ana", true).unwrap();

        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.sub, uid);
        assert_eq!(claims.username, "ana");
        assert!(claims.is_admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_token("secret", Uuid::new_v4(), "ana", false).unwrap();
        assert!(decode_token("other", &token).is_none());
        assert!(decode_token("secret", "not-a-token").is_none());
    }
}
