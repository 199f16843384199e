use std::collections::HashSet;
use std::sync::OnceLock;

use crate::category::Category;
use crate::descriptor::{Page, RouteDescriptor};
use crate::error::TableError;
use crate::path::{join_paths, url_segments, Params, PathPattern};

/// Builds the storefront and back-office routes in declaration order.
pub fn shop_routes() -> Vec<RouteDescriptor> {
    let mut routes = vec![RouteDescriptor::route("/", Page::Home)];

    for category in Category::ALL {
        routes.push(RouteDescriptor::protected(
            format!("/{}", category.slug()),
            Page::Products(category),
        ));
        routes.push(RouteDescriptor::protected(
            format!("/{}/:id", category.slug()),
            Page::ProductDetail(category),
        ));
    }

    routes.extend([
        RouteDescriptor::protected("/cart", Page::Cart),
        RouteDescriptor::route("/login", Page::Login),
        RouteDescriptor::protected("/whishlist", Page::Wishlist),
        RouteDescriptor::protected("/checkout", Page::Checkout),
        RouteDescriptor::protected("/payments", Page::Payments),
        RouteDescriptor::protected("/lastpage", Page::LastPage),
        RouteDescriptor::route("/signup", Page::Signup),
        RouteDescriptor::parent("/admin", Page::AdminLayout, admin_routes()),
    ]);

    routes
}

fn admin_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::index(Page::Dashboard),
        RouteDescriptor::route("enquiries", Page::Enquiries),
        RouteDescriptor::route("enquiries/:id", Page::ViewEnquiry),
        RouteDescriptor::route("coupon-list", Page::CouponList),
        RouteDescriptor::route("coupon", Page::AddCoupon),
        RouteDescriptor::route("coupon/:id", Page::AddCoupon),
        RouteDescriptor::route("orders", Page::Orders),
        RouteDescriptor::route("order/:id", Page::ViewOrder),
        RouteDescriptor::route("customers", Page::Customers),
        RouteDescriptor::route("list-category", Page::CategoryList),
        RouteDescriptor::route("category", Page::AddCategory),
        RouteDescriptor::route("category/:id", Page::AddCategory),
        RouteDescriptor::route("list-brand", Page::BrandList),
        RouteDescriptor::route("brand", Page::AddBrand),
        RouteDescriptor::route("brand/:id", Page::AddBrand),
        RouteDescriptor::route("list-product", Page::ProductList),
        RouteDescriptor::route("product", Page::AddProduct),
    ]
}

/// A leaf of the route tree with its fully joined pattern and the layouts
/// that wrap it, outermost first.
#[derive(Debug, Clone)]
pub struct RouteBranch {
    pattern: PathPattern,
    layouts: Vec<Page>,
    page: Page,
    guarded: bool,
    score: u32,
}

impl RouteBranch {
    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn layouts(&self) -> &[Page] {
        &self.layouts
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn guarded(&self) -> bool {
        self.guarded
    }
}

/// The outcome of resolving a URL against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub pattern: String,
    pub layouts: Vec<Page>,
    pub page: Page,
    pub guarded: bool,
    pub params: Params,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Immutable route table, constructed once and ranked for matching.
#[derive(Debug, Clone)]
pub struct RouteTable {
    // Sorted by descending score; ties keep declaration order.
    branches: Vec<RouteBranch>,
}

impl RouteTable {
    /// Validates the descriptors and ranks their branches.
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, TableError> {
        validate(&routes, "/")?;
        Ok(Self::build(&routes))
    }

    /// The application's table, built on first use.
    pub fn shop() -> &'static RouteTable {
        static TABLE: OnceLock<RouteTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let routes = shop_routes();
            if let Err(err) = validate(&routes, "/") {
                log::error!("shop route table is inconsistent: {err}");
            }
            Self::build(&routes)
        })
    }

    fn build(routes: &[RouteDescriptor]) -> Self {
        let mut branches = Vec::new();
        flatten(routes, "/", &[], false, &mut branches);
        branches.sort_by(|a, b| b.score.cmp(&a.score));
        Self { branches }
    }

    pub fn branches(&self) -> &[RouteBranch] {
        &self.branches
    }

    /// Looks up the branch declared with exactly this pattern, e.g. `/cameras/:id`.
    pub fn branch(&self, pattern: &str) -> Option<&RouteBranch> {
        let wanted = PathPattern::parse(pattern);
        self.branches.iter().find(|branch| branch.pattern == wanted)
    }

    /// Selects the most specific branch matching the URL's path.
    pub fn resolve(&self, url: &str) -> Option<RouteMatch> {
        let segments = url_segments(url);
        let found = self.branches.iter().find_map(|branch| {
            branch.pattern.matches(&segments).map(|params| RouteMatch {
                pattern: branch.pattern.to_string(),
                layouts: branch.layouts.clone(),
                page: branch.page,
                guarded: branch.guarded,
                params,
            })
        });
        if found.is_none() {
            log::debug!("no route matches {url}");
        }
        found
    }
}

fn flatten(
    routes: &[RouteDescriptor],
    prefix: &str,
    layouts: &[Page],
    guarded: bool,
    out: &mut Vec<RouteBranch>,
) {
    for route in routes {
        let full = join_paths(prefix, &route.path);
        let guarded = guarded || route.guarded;

        if route.is_leaf() {
            let pattern = PathPattern::parse(&full);
            let score = pattern.score(route.index);
            out.push(RouteBranch {
                pattern,
                layouts: layouts.to_vec(),
                page: route.page,
                guarded,
                score,
            });
        } else {
            let mut nested = layouts.to_vec();
            nested.push(route.page);
            flatten(&route.children, &full, &nested, guarded, out);
        }
    }
}

fn validate(routes: &[RouteDescriptor], scope: &str) -> Result<(), TableError> {
    let mut seen = HashSet::new();

    for route in routes {
        if route.index && !route.children.is_empty() {
            return Err(TableError::IndexWithChildren {
                scope: scope.to_string(),
            });
        }

        let key = PathPattern::parse(&route.path).to_string();
        if !seen.insert(key.clone()) {
            return Err(TableError::DuplicatePath {
                scope: scope.to_string(),
                path: key,
            });
        }

        let full = join_paths(scope, &route.path);
        let pattern = PathPattern::parse(&full);
        let params: Vec<&str> = pattern.param_names().collect();
        if params.iter().any(|name| name.is_empty()) {
            return Err(TableError::EmptyParamName { path: full });
        }
        if params.len() > 1 {
            return Err(TableError::TooManyParams { path: full });
        }

        validate(&route.children, &full)?;
    }

    Ok(())
}
