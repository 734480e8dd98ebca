use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::{fa_brands_icons::FaDiscord, fa_solid_icons::FaBasketShopping},
    Icon,
};

use crate::client::{
    constant::SITE_NAME,
    router::Route,
    store::{basket::BasketState, user::UserState},
};

#[component]
pub fn Header() -> Element {
    let user_store = use_context::<Store<UserState>>();
    let basket_store = use_context::<Store<BasketState>>();

    let user_logged_in = user_store.read().user.is_some();
    let user_is_moderator = user_store.read().is_moderator();
    let fetch_completed = user_store.read().fetched;
    let item_count = basket_store.read().basket.total_quantity();

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed && user_logged_in {
                div {
                    class: "flex items-center gap-1 px-2",
                    title: "Items in basket",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaBasketShopping
                    }
                    span {
                        class: "badge badge-primary",
                        "{item_count}"
                    }
                }
                if user_is_moderator {
                    Link {
                        to: Route::ModeratorOrders {},
                        class: "btn btn-outline",
                        p {
                            "Orders"
                        }
                    }
                }
                a {
                    href: "/api/auth/logout",
                    div {
                        class: "btn btn-outline",
                        p {
                            "Logout"
                        }
                    }
                }
            } else if fetch_completed {
                a {
                    href: "/api/auth/login",
                    div {
                        class: "btn btn-outline flex gap-2 items-center",
                        Icon {
                            width: 22,
                            height: 22,
                            icon: FaDiscord
                        }
                        p {
                            "Login"
                        }
                    }
                }
            }
        }
    })
}
