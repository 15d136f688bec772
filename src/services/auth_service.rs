//! Authentication service - the identity-provider face of the platform.
//!
//! Account creation and sign-in are email+password; a successful sign-in
//! yields a signed token whose claims carry the stable subject ID,
//! verified email, and role. Every request re-verifies the token, so
//! sign-in state is carried per request instead of in ambient global
//! state. Sign-out is client-side token disposal.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::EntityStore;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create an account with a self-selected mentor or mentee role
    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> AppResult<User>;

    /// Sign in and return a token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Concrete implementation of AuthService over the entity store.
pub struct Authenticator<S: EntityStore> {
    store: Arc<S>,
    config: Config,
}

impl<S: EntityStore> Authenticator<S> {
    /// Create new auth service instance
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }
}

#[async_trait]
impl<S: EntityStore> AuthService for Authenticator<S> {
    async fn register(
        &self,
        name: String,
        email: String,
        password: String,
        role: UserRole,
    ) -> AppResult<User> {
        // Admin accounts are granted, never self-selected
        if !role.is_registrable() {
            return Err(AppError::validation(
                "Role must be either 'mentor' or 'mentee'",
            ));
        }

        if self.store.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("An account with this email"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.store
            .users()
            .create(name, email, password_hash, role)
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.store.users().find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        let Some(user) = user_result.filter(|_| user_exists && password_valid) else {
            return Err(AppError::InvalidCredentials);
        };

        generate_token(&user, &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
