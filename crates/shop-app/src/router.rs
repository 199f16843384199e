use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, ParentRouteProps, Routes, RoutesProps};
use leptos_router::{path, MatchNestedRoutes, ParamSegment, StaticSegment};
use shop_routes::{join_paths, Category, ADMIN_PREFIX};

use crate::guard::table_route;
use crate::layout::AdminLayout;
use crate::pages::*;
use crate::session::Session;

/// Mounts a page at a literal path under `$scope`. Whether it is guarded is
/// read from the route table entry with the same joined pattern.
macro_rules! page {
    ($scope:expr, $path:tt, $view:expr, $session:expr) => {
        table_route(&join_paths($scope, $path), path!($path), $view, $session)
    };
}

/// Renders the page matching the current location. Paths mirror
/// [`shop_routes::shop_routes`]; unmatched locations show [`NotFoundPage`].
pub fn app_routes(session: Session) -> impl IntoView {
    Routes(
        RoutesProps::builder()
            .transition(false)
            .fallback(NotFoundPage)
            .children(ToChildren::to_children(move || {
                (
                    public_routes(session),
                    category_routes(session),
                    checkout_routes(session),
                    admin_routes(session),
                )
            }))
            .build(),
    )
}

fn public_routes(session: Session) -> impl MatchNestedRoutes + Clone {
    (
        table_route("/", StaticSegment(""), HomePage, session),
        page!("/", "/login", LoginPage, session),
        page!("/", "/signup", SignupPage, session),
    )
}

fn category_pair(category: Category, session: Session) -> impl MatchNestedRoutes + Clone {
    let slug = category.slug();
    (
        table_route(
            &format!("/{slug}"),
            (StaticSegment(slug),),
            move || view! { <ProductsPage category=category /> },
            session,
        ),
        table_route(
            &format!("/{slug}/:id"),
            (StaticSegment(slug), ParamSegment("id")),
            move || view! { <ProductDetailPage category=category /> },
            session,
        ),
    )
}

fn category_routes(session: Session) -> impl MatchNestedRoutes + Clone {
    let [a, b, c, d, e, f, g, h, i] = Category::ALL.map(|category| category_pair(category, session));
    (a, b, c, d, e, f, g, h, i)
}

fn checkout_routes(session: Session) -> impl MatchNestedRoutes + Clone {
    (
        page!("/", "/cart", CartPage, session),
        page!("/", "/whishlist", WishlistPage, session),
        page!("/", "/checkout", CheckoutPage, session),
        page!("/", "/payments", PaymentsPage, session),
        page!("/", "/lastpage", OrderPlacedPage, session),
    )
}

fn admin_routes(session: Session) -> impl MatchNestedRoutes + Clone {
    ParentRoute(
        ParentRouteProps::builder()
            .path(path!("/admin"))
            .view(AdminLayout)
            .children(ToChildren::to_children(move || {
                ((
                    table_route(ADMIN_PREFIX, StaticSegment(""), DashboardPage, session),
                    page!(ADMIN_PREFIX, "/enquiries", EnquiriesPage, session),
                    page!(ADMIN_PREFIX, "/enquiries/:id", EnquiryPage, session),
                    page!(ADMIN_PREFIX, "/coupon-list", CouponListPage, session),
                    page!(ADMIN_PREFIX, "/coupon", CouponFormPage, session),
                    page!(ADMIN_PREFIX, "/coupon/:id", CouponFormPage, session),
                    page!(ADMIN_PREFIX, "/orders", OrdersPage, session),
                    page!(ADMIN_PREFIX, "/order/:id", OrderPage, session),
                    page!(ADMIN_PREFIX, "/customers", CustomersPage, session),
                ), (
                    page!(ADMIN_PREFIX, "/list-category", CategoryListPage, session),
                    page!(ADMIN_PREFIX, "/category", CategoryFormPage, session),
                    page!(ADMIN_PREFIX, "/category/:id", CategoryFormPage, session),
                    page!(ADMIN_PREFIX, "/list-brand", BrandListPage, session),
                    page!(ADMIN_PREFIX, "/brand", BrandFormPage, session),
                    page!(ADMIN_PREFIX, "/brand/:id", BrandFormPage, session),
                    page!(ADMIN_PREFIX, "/list-product", ProductListPage, session),
                    page!(ADMIN_PREFIX, "/product", ProductFormPage, session),
                ))
            }))
            .build(),
    )
}
