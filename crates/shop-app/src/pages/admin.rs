use leptos::prelude::*;
use leptos_router::components::A;
use shop_routes::prelude::*;

/// "Add {noun}" on the create route, "Edit {noun} {id}" on the `:id` route.
fn form_heading(noun: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let id = use_entity_id().ok();
    move || match id.get() {
        Some(id) => format!("Edit {noun} {id}"),
        None => format!("Add {noun}"),
    }
}

fn detail_heading(noun: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let id = use_entity_id();
    move || match id.get() {
        ParamValue::Value(id) => format!("{noun} {id}"),
        ParamValue::Missing | ParamValue::Invalid(_) => format!("{noun} not found"),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard">
            <h1>"Dashboard"</h1>
            <A href=AdminRoute::Orders>"Recent orders"</A>
        </section>
    }
}

#[component]
pub fn EnquiriesPage() -> impl IntoView {
    view! { <section class="enquiries"><h1>"Enquiries"</h1></section> }
}

#[component]
pub fn EnquiryPage() -> impl IntoView {
    view! {
        <section class="enquiry">
            <h1>{detail_heading("Enquiry")}</h1>
            <A href=AdminRoute::Enquiries>"Back to enquiries"</A>
        </section>
    }
}

#[component]
pub fn CouponListPage() -> impl IntoView {
    view! {
        <section class="coupon-list">
            <h1>"Coupons"</h1>
            <A href=AdminRoute::NewCoupon>"Add coupon"</A>
        </section>
    }
}

/// Create and edit share this page; the `:id` segment selects edit mode.
#[component]
pub fn CouponFormPage() -> impl IntoView {
    view! { <section class="coupon-form"><h1>{form_heading("Coupon")}</h1></section> }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! { <section class="orders"><h1>"Orders"</h1></section> }
}

#[component]
pub fn OrderPage() -> impl IntoView {
    view! {
        <section class="order">
            <h1>{detail_heading("Order")}</h1>
            <A href=AdminRoute::Orders>"Back to orders"</A>
        </section>
    }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! { <section class="customers"><h1>"Customers"</h1></section> }
}

#[component]
pub fn CategoryListPage() -> impl IntoView {
    view! {
        <section class="category-list">
            <h1>"Categories"</h1>
            <A href=AdminRoute::NewCategory>"Add category"</A>
        </section>
    }
}

#[component]
pub fn CategoryFormPage() -> impl IntoView {
    view! { <section class="category-form"><h1>{form_heading("Category")}</h1></section> }
}

#[component]
pub fn BrandListPage() -> impl IntoView {
    view! {
        <section class="brand-list">
            <h1>"Brands"</h1>
            <A href=AdminRoute::NewBrand>"Add brand"</A>
        </section>
    }
}

#[component]
pub fn BrandFormPage() -> impl IntoView {
    view! { <section class="brand-form"><h1>{form_heading("Brand")}</h1></section> }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    view! {
        <section class="product-list">
            <h1>"Products"</h1>
            <A href=AdminRoute::NewProduct>"Add product"</A>
        </section>
    }
}

#[component]
pub fn ProductFormPage() -> impl IntoView {
    view! { <section class="product-form"><h1>"Add Product"</h1></section> }
}
