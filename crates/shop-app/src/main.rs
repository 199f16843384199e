use leptos::prelude::*;
use shop_app::{App, ShopConfig};

fn main() {
    console_error_panic_hook::set_once();
    let config = ShopConfig::from_env();
    _ = console_log::init_with_level(config.log_level);
    log::info!("starting {} against {}", config.title, config.api_base_url);

    leptos::mount::mount_to_body(|| view! { <App /> });
}
