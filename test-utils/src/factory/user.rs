//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .provider_id("123456789")
///     .name("CustomUser")
///     .moderator(true)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    provider_id: String,
    name: String,
    moderator: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - provider_id: `"{id}"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - moderator: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            provider_id: id.to_string(),
            name: format!("User {}", id),
            moderator: false,
        }
    }

    /// Sets the identity provider ID for the user.
    pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.provider_id = provider_id.into();
        self
    }

    /// Sets the display name for the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the user is a moderator.
    pub fn moderator(mut self, moderator: bool) -> Self {
        self.moderator = moderator;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            provider_id: ActiveValue::Set(self.provider_id),
            name: ActiveValue::Set(self.name),
            moderator: ActiveValue::Set(self.moderator),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a regular (non-moderator) user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a moderator with default values.
pub async fn create_moderator(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).moderator(true).build().await
}
