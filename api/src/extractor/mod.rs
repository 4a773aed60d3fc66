use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use kernel::model::{
    auth::AccessToken,
    id::UserId,
    user::{ActingUser, User},
};
use registry::AppRegistry;
use shared::error::AppError;

/// Resolves the bearer token against the Redis-backed session store and
/// loads the matching user record. Rejects with 401 when either step fails.
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn acting_user(&self) -> ActingUser {
        ActingUser {
            user_id: self.user.user_id,
            email: self.user.email.clone(),
            display_name: Some(self.user.user_name.clone()),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::UnauthorizedError)?;
        let access_token = AccessToken(token.to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self { access_token, user })
    }
}
