use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::AppError;

pub trait RedisKey {
    type Value: RedisValue;
    fn inner(&self) -> String;
}

pub trait RedisValue: TryFrom<String, Error = AppError> {
    fn inner(&self) -> String;
}

/// Access token as keyed in Redis, namespaced to avoid collisions.
pub struct AuthorizationKey(String);

pub struct AuthorizedUserId(UserId);

impl AuthorizationKey {
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        format!("auth:{}", self.0)
    }
}

impl AuthorizedUserId {
    pub fn new(user_id: UserId) -> Self {
        Self(user_id)
    }

    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<UserId>().map(Self)
    }
}
