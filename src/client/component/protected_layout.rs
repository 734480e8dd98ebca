use dioxus::prelude::*;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        router::Route,
        store::user::UserState,
    },
    model::user::UserDto,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Moderator,
}

#[component]
pub fn RequiresModerator() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Moderator] }
    }
}

fn check_permissions(user: &Option<UserDto>, required_permissions: &[Permission]) -> bool {
    let Some(user) = user else {
        return false;
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Moderator => user.moderator,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let user_store = use_context::<Store<UserState>>();
    let nav = navigator();

    let user = user_store.read().user.clone();
    let fetch_completed = user_store.read().fetched;

    let user_logged_in = user.is_some();
    let has_required_permissions = check_permissions(&user, &permissions);

    use_effect(use_reactive!(|(user_logged_in, fetch_completed)| {
        if fetch_completed && !user_logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if user_logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "You don't have permission to view this page" }
        } else if user_logged_in {
            Outlet::<Route> {}
        }
    }
}
