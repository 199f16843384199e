use std::fmt;
use std::str::FromStr;

use leptos_router::components::ToHref;

use crate::category::Category;
use crate::descriptor::Page;
use crate::error::RouteError;
use crate::id::EntityId;
use crate::path::join_paths;
use crate::table::{RouteMatch, RouteTable};
use crate::ToPath;

/// Mount point of the back-office subtree.
pub const ADMIN_PREFIX: &str = "/admin";

/// Typed storefront routes. `Display` writes the canonical URL and
/// `FromStr` resolves through [`RouteTable::shop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopRoute {
    Home,
    Login,
    Signup,
    Cart,
    Wishlist,
    Checkout,
    Payments,
    LastPage,
    Products { category: Category },
    Product { category: Category, id: EntityId },
    Admin(AdminRoute),
}

/// Typed back-office routes, relative to [`ADMIN_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRoute {
    Dashboard,
    Enquiries,
    Enquiry { id: EntityId },
    CouponList,
    NewCoupon,
    EditCoupon { id: EntityId },
    Orders,
    Order { id: EntityId },
    Customers,
    CategoryList,
    NewCategory,
    EditCategory { id: EntityId },
    BrandList,
    NewBrand,
    EditBrand { id: EntityId },
    ProductList,
    NewProduct,
}

impl ShopRoute {
    /// The leaf page this route renders.
    pub fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Login => Page::Login,
            Self::Signup => Page::Signup,
            Self::Cart => Page::Cart,
            Self::Wishlist => Page::Wishlist,
            Self::Checkout => Page::Checkout,
            Self::Payments => Page::Payments,
            Self::LastPage => Page::LastPage,
            Self::Products { category } => Page::Products(*category),
            Self::Product { category, .. } => Page::ProductDetail(*category),
            Self::Admin(admin) => admin.page(),
        }
    }

    fn from_match(found: RouteMatch) -> Result<Self, RouteError> {
        let id = || -> Result<EntityId, RouteError> {
            found.param("id").ok_or(RouteError::MissingParam("id"))?.parse()
        };
        let optional_id = || found.param("id").map(str::parse::<EntityId>).transpose();

        Ok(match found.page {
            Page::Home => Self::Home,
            Page::Login => Self::Login,
            Page::Signup => Self::Signup,
            Page::Cart => Self::Cart,
            Page::Wishlist => Self::Wishlist,
            Page::Checkout => Self::Checkout,
            Page::Payments => Self::Payments,
            Page::LastPage => Self::LastPage,
            Page::Products(category) => Self::Products { category },
            Page::ProductDetail(category) => Self::Product { category, id: id()? },
            Page::AdminLayout => Self::Admin(AdminRoute::Dashboard),
            Page::Dashboard => Self::Admin(AdminRoute::Dashboard),
            Page::Enquiries => Self::Admin(AdminRoute::Enquiries),
            Page::ViewEnquiry => Self::Admin(AdminRoute::Enquiry { id: id()? }),
            Page::CouponList => Self::Admin(AdminRoute::CouponList),
            Page::AddCoupon => Self::Admin(match optional_id()? {
                Some(id) => AdminRoute::EditCoupon { id },
                None => AdminRoute::NewCoupon,
            }),
            Page::Orders => Self::Admin(AdminRoute::Orders),
            Page::ViewOrder => Self::Admin(AdminRoute::Order { id: id()? }),
            Page::Customers => Self::Admin(AdminRoute::Customers),
            Page::CategoryList => Self::Admin(AdminRoute::CategoryList),
            Page::AddCategory => Self::Admin(match optional_id()? {
                Some(id) => AdminRoute::EditCategory { id },
                None => AdminRoute::NewCategory,
            }),
            Page::BrandList => Self::Admin(AdminRoute::BrandList),
            Page::AddBrand => Self::Admin(match optional_id()? {
                Some(id) => AdminRoute::EditBrand { id },
                None => AdminRoute::NewBrand,
            }),
            Page::ProductList => Self::Admin(AdminRoute::ProductList),
            Page::AddProduct => Self::Admin(AdminRoute::NewProduct),
        })
    }
}

impl AdminRoute {
    pub fn page(&self) -> Page {
        match self {
            Self::Dashboard => Page::Dashboard,
            Self::Enquiries => Page::Enquiries,
            Self::Enquiry { .. } => Page::ViewEnquiry,
            Self::CouponList => Page::CouponList,
            Self::NewCoupon | Self::EditCoupon { .. } => Page::AddCoupon,
            Self::Orders => Page::Orders,
            Self::Order { .. } => Page::ViewOrder,
            Self::Customers => Page::Customers,
            Self::CategoryList => Page::CategoryList,
            Self::NewCategory | Self::EditCategory { .. } => Page::AddCategory,
            Self::BrandList => Page::BrandList,
            Self::NewBrand | Self::EditBrand { .. } => Page::AddBrand,
            Self::ProductList => Page::ProductList,
            Self::NewProduct => Page::AddProduct,
        }
    }
}

impl fmt::Display for AdminRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dashboard => f.write_str("/"),
            Self::Enquiries => f.write_str("/enquiries"),
            Self::Enquiry { id } => write!(f, "/enquiries/{id}"),
            Self::CouponList => f.write_str("/coupon-list"),
            Self::NewCoupon => f.write_str("/coupon"),
            Self::EditCoupon { id } => write!(f, "/coupon/{id}"),
            Self::Orders => f.write_str("/orders"),
            Self::Order { id } => write!(f, "/order/{id}"),
            Self::Customers => f.write_str("/customers"),
            Self::CategoryList => f.write_str("/list-category"),
            Self::NewCategory => f.write_str("/category"),
            Self::EditCategory { id } => write!(f, "/category/{id}"),
            Self::BrandList => f.write_str("/list-brand"),
            Self::NewBrand => f.write_str("/brand"),
            Self::EditBrand { id } => write!(f, "/brand/{id}"),
            Self::ProductList => f.write_str("/list-product"),
            Self::NewProduct => f.write_str("/product"),
        }
    }
}

impl fmt::Display for ShopRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::Login => f.write_str("/login"),
            Self::Signup => f.write_str("/signup"),
            Self::Cart => f.write_str("/cart"),
            Self::Wishlist => f.write_str("/whishlist"),
            Self::Checkout => f.write_str("/checkout"),
            Self::Payments => f.write_str("/payments"),
            Self::LastPage => f.write_str("/lastpage"),
            Self::Products { category } => write!(f, "/{category}"),
            Self::Product { category, id } => write!(f, "/{category}/{id}"),
            Self::Admin(nested) => f.write_str(&join_paths(ADMIN_PREFIX, &nested.to_string())),
        }
    }
}

impl FromStr for ShopRoute {
    type Err = RouteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let found = RouteTable::shop()
            .resolve(input)
            .ok_or_else(|| RouteError::NoMatch(input.to_string()))?;
        Self::from_match(found)
    }
}

impl FromStr for AdminRoute {
    type Err = RouteError;

    /// Parses a path relative to [`ADMIN_PREFIX`], e.g. `/order/12`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match join_paths(ADMIN_PREFIX, input).parse::<ShopRoute>() {
            Ok(ShopRoute::Admin(admin)) => Ok(admin),
            Ok(_) | Err(_) => Err(RouteError::NoMatch(input.to_string())),
        }
    }
}

impl From<AdminRoute> for ShopRoute {
    fn from(admin: AdminRoute) -> Self {
        Self::Admin(admin)
    }
}

impl ToPath for ShopRoute {
    fn to_path(&self) -> String {
        self.to_string()
    }
}

impl ToPath for AdminRoute {
    fn to_path(&self) -> String {
        ShopRoute::Admin(self.clone()).to_string()
    }
}

impl ToHref for ShopRoute {
    fn to_href(&self) -> Box<dyn Fn() -> String + '_> {
        let href = self.to_string();
        Box::new(move || href.clone())
    }
}

impl ToHref for AdminRoute {
    fn to_href(&self) -> Box<dyn Fn() -> String + '_> {
        let href = self.to_path();
        Box::new(move || href.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> EntityId {
        raw.parse().unwrap()
    }

    #[test]
    fn test_from_str_home() {
        assert_eq!("/".parse::<ShopRoute>(), Ok(ShopRoute::Home));
    }

    #[test]
    fn test_from_str_product() {
        assert_eq!(
            "/headphones/abc-9".parse::<ShopRoute>(),
            Ok(ShopRoute::Product {
                category: Category::Headphones,
                id: id("abc-9"),
            })
        );
    }

    #[test]
    fn test_from_str_admin_edit_brand() {
        assert_eq!(
            "/admin/brand/5".parse::<ShopRoute>(),
            Ok(ShopRoute::Admin(AdminRoute::EditBrand { id: id("5") }))
        );
    }

    #[test]
    fn test_from_str_unknown_fails() {
        assert_eq!(
            "/profile".parse::<ShopRoute>(),
            Err(RouteError::NoMatch("/profile".to_string()))
        );
    }

    #[test]
    fn test_display_admin_dashboard_has_no_trailing_slash() {
        assert_eq!(ShopRoute::Admin(AdminRoute::Dashboard).to_string(), "/admin");
    }

    #[test]
    fn test_display_wishlist_keeps_published_spelling() {
        assert_eq!(ShopRoute::Wishlist.to_string(), "/whishlist");
    }

    #[test]
    fn test_admin_route_parses_relative_path() {
        assert_eq!(
            "/order/12".parse::<AdminRoute>(),
            Ok(AdminRoute::Order { id: id("12") })
        );
        assert!("/cart".parse::<AdminRoute>().is_err());
    }

    #[test]
    fn test_display_and_from_str_agree() {
        let routes = [
            ShopRoute::Checkout,
            ShopRoute::Products { category: Category::HomeAppliances },
            ShopRoute::Admin(AdminRoute::Enquiry { id: id("31") }),
            ShopRoute::Admin(AdminRoute::NewCategory),
            ShopRoute::Admin(AdminRoute::Dashboard),
        ];
        for route in routes {
            assert_eq!(route.to_string().parse::<ShopRoute>(), Ok(route.clone()));
        }
    }

    #[test]
    fn test_page_matches_resolved_page() {
        let route = ShopRoute::Admin(AdminRoute::EditCoupon { id: EntityId::from(4) });
        let found = RouteTable::shop().resolve(&route.to_string()).unwrap();
        assert_eq!(route.page(), found.page);
    }

    #[test]
    fn test_to_href_matches_display() {
        let route = ShopRoute::Admin(AdminRoute::ProductList);
        assert_eq!((route.to_href())(), "/admin/list-product");
        assert_eq!((AdminRoute::Customers.to_href())(), "/admin/customers");
    }

    #[test]
    fn test_ids_round_trip_through_display() {
        let routes = [
            ShopRoute::Product { category: Category::Cameras, id: id("sku-17") },
            ShopRoute::Admin(AdminRoute::EditBrand { id: id("a.b~c") }),
            ShopRoute::Admin(AdminRoute::Order { id: id("2024-07") }),
            ShopRoute::Admin(AdminRoute::EditCategory { id: id("Ünïcode") }),
        ];
        for route in routes {
            assert_eq!(route.to_string().parse::<ShopRoute>(), Ok(route.clone()));
        }
    }

    #[test]
    fn test_ids_that_would_change_the_url_are_unrepresentable() {
        assert!("".parse::<EntityId>().is_err());
        assert!("a?b".parse::<EntityId>().is_err());
        assert!("2024/07".parse::<EntityId>().is_err());
    }

    #[test]
    fn test_from_str_rejects_malformed_id_segment() {
        assert_eq!(
            "/admin/order/50%25".parse::<ShopRoute>(),
            Err(RouteError::InvalidId("50%25".to_string()))
        );
        assert_eq!(
            "/cameras/a b".parse::<ShopRoute>(),
            Err(RouteError::InvalidId("a b".to_string()))
        );
    }

    #[test]
    fn test_empty_id_segment_resolves_to_the_list_page() {
        assert_eq!(
            "/cameras/".parse::<ShopRoute>(),
            Ok(ShopRoute::Products { category: Category::Cameras })
        );
    }
}
