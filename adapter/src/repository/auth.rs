use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::ConnectionPool,
    redis::{
        model::{AuthorizationKey, AuthorizedUserId},
        RedisClient,
    },
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|authorized| authorized.map(AuthorizedUserId::into_inner))
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<(UserId, String)> = sqlx::query_as(
            r#"
                SELECT user_id, password_hash FROM users WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some((user_id, password_hash)) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        let valid = bcrypt::verify(password, &password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(user_id)
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let token = AccessToken(event.access_token);
        let key: AuthorizationKey = (&token).into();
        self.kv
            .set_ex(&key, &AuthorizedUserId::new(event.user_id), self.ttl)
            .await?;
        Ok(token)
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = (&access_token).into();
        self.kv.delete(&key).await
    }
}
