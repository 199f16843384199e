use leptos::prelude::*;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_location;
use shop_routes::{AdminRoute, ShopRoute, ADMIN_PREFIX};

use crate::config::ShopConfig;
use crate::session::Session;

pub struct MenuSection {
    pub title: &'static str,
    pub links: Vec<(&'static str, AdminRoute)>,
}

/// Sidebar entries of the back-office, top to bottom.
pub fn admin_menu() -> Vec<MenuSection> {
    vec![
        MenuSection {
            title: "Overview",
            links: vec![
                ("Dashboard", AdminRoute::Dashboard),
                ("Customers", AdminRoute::Customers),
            ],
        },
        MenuSection {
            title: "Catalog",
            links: vec![
                ("Add Product", AdminRoute::NewProduct),
                ("Product List", AdminRoute::ProductList),
                ("Brand", AdminRoute::NewBrand),
                ("Brand List", AdminRoute::BrandList),
                ("Category", AdminRoute::NewCategory),
                ("Category List", AdminRoute::CategoryList),
            ],
        },
        MenuSection {
            title: "Orders",
            links: vec![("Orders", AdminRoute::Orders)],
        },
        MenuSection {
            title: "Marketing",
            links: vec![
                ("Add Coupon", AdminRoute::NewCoupon),
                ("Coupon List", AdminRoute::CouponList),
            ],
        },
        MenuSection {
            title: "Enquiries",
            links: vec![("Enquiries", AdminRoute::Enquiries)],
        },
    ]
}

/// Persistent back-office chrome; the matched admin page renders in the outlet.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = Session::current();

    let sections = admin_menu()
        .into_iter()
        .map(|section| {
            let links = section
                .links
                .into_iter()
                .map(|(label, route)| view! { <li><A href=route>{label}</A></li> })
                .collect_view();
            view! {
                <div class="admin-menu-section">
                    <h4>{section.title}</h4>
                    <ul>{links}</ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <A href=ShopRoute::Home attr:class="admin-brand">"Back to shop"</A>
                {sections}
            </aside>
            <div class="admin-main">
                <header class="admin-header">
                    <span>{move || session.email().unwrap_or_else(|| "Administrator".to_string())}</span>
                </header>
                <main class="admin-content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

/// Storefront header shown above every page outside the back-office.
#[component]
pub fn StoreHeader() -> impl IntoView {
    let session = Session::current();
    let title = use_context::<ShopConfig>().unwrap_or_default().title;
    let location = use_location();
    let in_back_office = move || location.pathname.with(|path| path.starts_with(ADMIN_PREFIX));

    view! {
        <Show when=move || !in_back_office()>
            <header class="store-header">
                <A href=ShopRoute::Home attr:class="store-brand">{title}</A>
                <nav>
                    <A href=ShopRoute::Wishlist>"Wishlist"</A>
                    <A href=ShopRoute::Cart>"Cart"</A>
                    <Show
                        when=move || session.is_signed_in()
                        fallback=|| view! { <A href=ShopRoute::Login>"Log in"</A> }
                    >
                        <button on:click=move |_| session.sign_out()>"Log out"</button>
                    </Show>
                </nav>
            </header>
        </Show>
    }
}
