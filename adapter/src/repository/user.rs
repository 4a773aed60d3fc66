use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, UpdateUserPassword},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let hashed_password = hash_password(&event.password)?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, name, email, password_hash, role_id)
                SELECT $1, $2, $3, $4, role_id
                FROM roles
                WHERE name = $5
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(hashed_password)
        .bind(event.role.as_ref())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            role: event.role,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT u.user_id, u.name, u.email, r.name AS role_name
                FROM users AS u
                INNER JOIN roles AS r ON u.role_id = r.role_id
                WHERE u.user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update_password(&self, event: UpdateUserPassword) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let original_password_hash: String = sqlx::query_scalar(
            r#"
                SELECT password_hash FROM users WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        verify_password(&event.current_password, &original_password_hash)?;

        let new_password_hash = hash_password(&event.new_password)?;
        sqlx::query(
            r#"
                UPDATE users SET password_hash = $2 WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(new_password_hash)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
}

fn verify_password(password: &str, hash: &str) -> AppResult<()> {
    let valid = bcrypt::verify(password, hash)?;
    if !valid {
        return Err(AppError::UnauthenticatedError);
    }
    Ok(())
}
