use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shop_routes::prelude::*;

use crate::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <li>
                    <A href=ShopRoute::Products { category }>{category.label()}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="home">
            <h1>"Shop by category"</h1>
            <ul class="category-grid">{categories}</ul>
        </section>
    }
}

/// Product listing, reused by every category.
#[component]
pub fn ProductsPage(category: Category) -> impl IntoView {
    view! {
        <section class="products" data-category=category.slug()>
            <h1>{category.label()}</h1>
        </section>
    }
}

/// Single product view, reused by every category.
#[component]
pub fn ProductDetailPage(category: Category) -> impl IntoView {
    let params = use_product_params(category);
    let id = params.id.ok();

    view! {
        <section class="product-detail" data-category=params.category.slug()>
            <A href=ShopRoute::Products { category: params.category }>{params.category.label()}</A>
            <h1>
                {move || match id.get() {
                    Some(id) => format!("Product {id}"),
                    None => "Product not found".to_string(),
                }}
            </h1>
        </section>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <section class="cart">
            <h1>"Your cart"</h1>
            <A href=ShopRoute::Checkout>"Proceed to checkout"</A>
        </section>
    }
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    view! {
        <section class="wishlist">
            <h1>"Wishlist"</h1>
        </section>
    }
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    view! {
        <section class="checkout">
            <h1>"Checkout"</h1>
            <A href=ShopRoute::Payments>"Continue to payment"</A>
        </section>
    }
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    view! {
        <section class="payments">
            <h1>"Payment"</h1>
            <A href=ShopRoute::LastPage>"Place order"</A>
        </section>
    }
}

#[component]
pub fn OrderPlacedPage() -> impl IntoView {
    view! {
        <section class="order-placed">
            <h1>"Thank you for your order"</h1>
            <A href=ShopRoute::Home>"Continue shopping"</A>
        </section>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = Session::current();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        if email.is_empty() {
            return;
        }
        // The backend issues the real token; the guard only checks presence.
        session.sign_in(email.clone(), format!("session:{email}"));
        navigate(&ShopRoute::Home.to_path(), Default::default());
    };

    view! {
        <section class="login">
            <h1>"Log in"</h1>
            <form on:submit=on_submit>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input type="password" placeholder="Password" />
                <button type="submit">"Log in"</button>
            </form>
            <A href=ShopRoute::Signup>"Create an account"</A>
        </section>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <section class="signup">
            <h1>"Sign up"</h1>
            <A href=ShopRoute::Login>"Already registered? Log in"</A>
        </section>
    }
}

/// Router fallback; the route table itself declares no catch-all.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404 - Not Found"</h1>
            <A href=ShopRoute::Home>"Back to the shop"</A>
        </section>
    }
}
