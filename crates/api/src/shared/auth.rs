use actix_web::web;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use volunteer_hub_domain::ID;
use volunteer_hub_infra::HubContext;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub iat: i64,
    pub exp: i64,
}

/// Issues a HS256 token for the given `User`
pub fn create_token(user_id: &ID, ctx: &HubContext) -> anyhow::Result<String> {
    let now = ctx.sys.get_timestamp_millis() / 1000;
    let claims = Claims {
        sub: user_id.as_string(),
        iat: now,
        exp: now + ctx.config.jwt_expiry_secs,
    };
    let key = EncodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    Ok(encode(&Header::default(), &claims, &key)?)
}

/// Hashing runs on the blocking thread pool
pub async fn hash_password(password: String, cost: u32) -> anyhow::Result<String> {
    let hashed = web::block(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

pub async fn verify_password(password: String, hash: String) -> anyhow::Result<bool> {
    let valid = web::block(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

#[cfg(test)]
pub fn decode_token(token: &str, ctx: &HubContext) -> anyhow::Result<Claims> {
    use jsonwebtoken::{decode, DecodingKey, Validation};

    let key = DecodingKey::from_secret(ctx.config.jwt_secret.as_bytes());
    Ok(decode::<Claims>(token, &key, &Validation::default())?.claims)
}
