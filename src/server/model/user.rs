//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// A user authenticated through the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// User id at the identity provider
    pub provider_id: String,
    pub name: String,
    /// Whether the user may use the moderator API
    pub moderator: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            moderator: self.moderator,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            provider_id: entity.provider_id,
            name: entity.name,
            moderator: entity.moderator,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user after login.
///
/// `moderator: None` keeps an existing user's moderator flag untouched, so a regular
/// login never revokes it.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub provider_id: String,
    pub name: String,
    pub moderator: Option<bool>,
}
