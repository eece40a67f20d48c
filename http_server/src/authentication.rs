use crate::errors::ApiError;
use actix_web::http::header::Header;
use actix_web::{web, HttpRequest};
use actix_web_httpauth::headers::authorization;
use anyhow::{anyhow, Context};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use use_cases::actor::{Actor, Permissions};

/// Shared secret and expected claims for HS256 bearer tokens.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    pub secret: Secret<String>,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub(crate) aud: String,
    pub(crate) exp: usize,
    pub(crate) iat: usize,
    pub(crate) iss: String,
    pub(crate) sub: String,
    #[serde(default)]
    pub(crate) permissions: Vec<String>,
}

#[derive(Debug)]
pub struct AuthenticatedUserInfo {
    claims: Claims,
}

impl TryFrom<&HttpRequest> for AuthenticatedUserInfo {
    type Error = ApiError;

    fn try_from(req: &HttpRequest) -> Result<Self, Self::Error> {
        let settings = req
            .app_data::<web::Data<AuthSettings>>()
            .ok_or_else(|| anyhow!("Authentication settings are not registered"))?;

        let token = authorization::Authorization::<authorization::Bearer>::parse(req)
            .context("Failed to extract bearer token")
            .map_err(|err| ApiError::Unauthorized(format!("{err:#}")))?;
        let token = token.as_ref().token().to_string();

        let decoding_key = DecodingKey::from_secret(settings.secret.expose_secret().as_bytes());
        let validation = {
            let mut validation = Validation::new(Algorithm::HS256);
            validation.set_issuer(&[&settings.issuer]);
            validation.set_audience(&[&settings.audience]);
            validation
        };

        let validated_token = decode::<Claims>(&token, &decoding_key, &validation)
            .context("Failed to decode token")
            .map_err(|err| ApiError::Unauthorized(format!("{err:#}")))?;

        let claims = validated_token.claims;
        Ok(AuthenticatedUserInfo { claims })
    }
}

impl Actor for AuthenticatedUserInfo {
    fn permissions(&self) -> Permissions {
        let permissions = &self.claims.permissions[..];
        permissions.into()
    }

    fn subject(&self) -> String {
        self.claims.sub.clone()
    }
}
