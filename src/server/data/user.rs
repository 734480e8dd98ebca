//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Users are
//! created or refreshed on every login through `upsert`, keyed by their identity
//! provider id.

use crate::server::model::user::{UpsertUserParam, User};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user or updates an existing user's name.
    ///
    /// The moderator flag is only written when `param.moderator` is `Some`, so regular
    /// logins never revoke it.
    ///
    /// # Arguments
    /// - `param` - Provider id, display name and optional moderator flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![entity::user::Column::Name];

        if param.moderator.is_some() {
            update_columns.push(entity::user::Column::Moderator);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            provider_id: ActiveValue::Set(param.provider_id),
            name: ActiveValue::Set(param.name),
            moderator: ActiveValue::Set(param.moderator.unwrap_or(false)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::ProviderId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks whether at least one moderator exists.
    ///
    /// Used at startup to decide whether a moderator bootstrap code is needed.
    pub async fn moderator_exists(&self) -> Result<bool, DbErr> {
        let moderator_count = entity::prelude::User::find()
            .filter(entity::user::Column::Moderator.eq(true))
            .count(self.db)
            .await?;

        Ok(moderator_count > 0)
    }
}
