use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    router::Route,
    store::{basket::BasketState, user::UserState},
};

#[cfg(feature = "web")]
use crate::client::api::{basket::get_basket, user::get_user};
#[cfg(feature = "web")]
use dioxus_logger::tracing;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let user_store = use_store(UserState::default);
    let basket_store = use_store(BasketState::default);
    use_context_provider(|| user_store);
    use_context_provider(|| basket_store);

    // Fetch user on first load
    #[cfg(feature = "web")]
    {
        let mut user_store = user_store;
        let user = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*user.read() {
                let mut state = user_store.write();
                match result {
                    Ok(user) => state.user = user.clone(),
                    Err(err) => tracing::error!("Failed to fetch user: {}", err),
                }
                state.fetched = true;
            }
        });
    }

    // Fetch the basket once a user is known, re-running on login and logout
    #[cfg(feature = "web")]
    {
        let mut basket_store = basket_store;
        let basket = use_resource(move || async move {
            if user_store.read().user.is_some() {
                Some(get_basket().await)
            } else {
                None
            }
        });

        use_effect(move || match &*basket.read() {
            Some(Some(Ok(basket))) => basket_store.write().replace(basket.clone()),
            Some(Some(Err(err))) => tracing::error!("Failed to fetch basket: {}", err),
            Some(None) => basket_store.write().clear(),
            None => (),
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = (user_store, basket_store);

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Online shop with a moderated product catalog"
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
