use serde::{Deserialize, Serialize};
use shared::error::AppError;

macro_rules! define_id {
    ($id_type:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(into = "String", try_from = "String")]
        #[sqlx(transparent)]
        pub struct $id_type(uuid::Uuid);

        impl $id_type {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<uuid::Uuid> for $id_type {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$id_type> for String {
            fn from(value: $id_type) -> Self {
                value.0.to_string()
            }
        }

        impl TryFrom<String> for $id_type {
            type Error = AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse().map(Self).map_err(AppError::from)
            }
        }

        impl std::str::FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self).map_err(AppError::from)
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(EventId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_its_string_form() {
        let id = EventId::new();
        let parsed: EventId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
    }
}
