use dioxus::prelude::*;

use crate::client::{
    component::{Header, SideBasket},
    router::Route,
    store::user::UserState,
};

/// Page frame: header on top, the side basket next to the page for logged in users.
#[component]
pub fn Layout() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let user_logged_in = user_store.read().user.is_some();

    rsx!(div {
        Header {  }
        div {
            class: "flex flex-col lg:flex-row",
            div {
                class: "flex-1 min-w-0",
                Outlet::<Route> {}
            }
            if user_logged_in {
                SideBasket {  }
            }
        }
    })
}
