use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresModerator};
use crate::client::route::{moderator::ModeratorOrders, Home, Login, NotFound, ProductDetail};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/product/:id")]
        ProductDetail { id: i32 },

        #[route("/login")]
        Login {},

        #[layout(RequiresModerator)]
        #[nest("/moderator")]
            #[route("/orders")]
            ModeratorOrders {},
        #[end_nest]
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
