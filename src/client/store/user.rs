use crate::model::user::UserDto;

#[derive(Clone, Default)]
pub struct UserState {
    /// Logged in user, `None` when logged out
    pub user: Option<UserDto>,
    /// Whether the initial user fetch has completed
    pub fetched: bool,
}

impl UserState {
    pub fn is_moderator(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.moderator)
    }
}
