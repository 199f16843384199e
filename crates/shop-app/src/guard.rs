use std::fmt::Debug;

use leptos::prelude::*;
use leptos_router::components::{ProtectedRoute, ProtectedRouteProps};
use leptos_router::{MatchNestedRoutes, PossibleRouteMatch};
use shop_routes::{RouteTable, ShopRoute};

use crate::session::Session;

/// Whether the shop table puts the branch declared as `pattern` behind the
/// access guard. Patterns missing from the table are guarded.
pub fn requires_session(pattern: &str) -> bool {
    match RouteTable::shop().branch(pattern) {
        Some(branch) => branch.guarded(),
        None => {
            log::warn!("{pattern} is not declared in the route table, guarding it");
            true
        }
    }
}

/// Mounts a page at `path`, guarded or not as the table declares `pattern`.
/// Shoppers without a session are sent to the login page and a guarded page
/// never renders for them.
pub fn table_route<Path, ViewFn, View>(
    pattern: &str,
    path: Path,
    view: ViewFn,
    session: Session,
) -> impl MatchNestedRoutes + Clone
where
    Path: Send + Sync + 'static + Clone + Debug + PossibleRouteMatch,
    ViewFn: Fn() -> View + Send + Clone + 'static,
    View: IntoView + 'static,
{
    let guarded = requires_session(pattern);

    ProtectedRoute(
        ProtectedRouteProps::builder()
            .path(path)
            .view(view)
            .condition(move || Some(!guarded || session.is_signed_in()))
            .redirect_path(|| {
                let login = ShopRoute::Login.to_string();
                log::debug!("no session, redirecting to {login}");
                login
            })
            .fallback(GuardPending)
            .build(),
    )
}

#[component]
pub fn GuardPending() -> impl IntoView {
    view! { <p class="guard-pending">"Checking your session..."</p> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_set_comes_from_the_table() {
        for pattern in ["/cart", "/whishlist", "/lastpage", "/kitchen", "/kitchen/:id"] {
            assert!(requires_session(pattern), "{pattern}");
        }
        for pattern in ["/", "/login", "/signup", "/admin", "/admin/brand/:id"] {
            assert!(!requires_session(pattern), "{pattern}");
        }
    }

    #[test]
    fn test_undeclared_pattern_is_guarded() {
        assert!(requires_session("/profile"));
        assert!(requires_session("/admin/blog-category"));
    }
}
