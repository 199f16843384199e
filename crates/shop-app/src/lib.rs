use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::Router;

pub mod config;
pub mod guard;
pub mod layout;
pub mod pages;
pub mod router;
pub mod session;

pub use config::ShopConfig;
pub use session::Session;

use layout::StoreHeader;
use router::app_routes;

/// Root component. A pre-built `session` may be passed in; otherwise the
/// shopper starts signed out.
#[component]
pub fn App(#[prop(optional)] session: Option<Session>) -> impl IntoView {
    provide_meta_context();
    let config = ShopConfig::from_env();
    provide_context(config.clone());
    let session = match session {
        Some(session) => {
            provide_context(session);
            session
        }
        None => Session::provide(),
    };

    view! {
        <Meta charset="UTF-8" />
        <Meta name="viewport" content="width=device-width, initial-scale=1.0" />
        <Title text=config.title />

        <Router>
            <StoreHeader />
            <main class="shop-main">
                {move || app_routes(session)}
            </main>
        </Router>
    }
}
