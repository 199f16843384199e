use std::borrow::Cow;
use std::fmt;

use crate::category::Category;

/// Every page component the route table can render.
///
/// Storefront category pages carry the [`Category`] they were mounted for,
/// so one list component and one detail component serve all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Signup,
    Products(Category),
    ProductDetail(Category),
    Cart,
    Checkout,
    Payments,
    LastPage,
    Wishlist,
    AdminLayout,
    Dashboard,
    Enquiries,
    ViewEnquiry,
    CouponList,
    AddCoupon,
    Orders,
    ViewOrder,
    Customers,
    CategoryList,
    AddCategory,
    BrandList,
    AddBrand,
    ProductList,
    AddProduct,
}

impl Page {
    /// The page's component name, as shown in logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "HomePage",
            Self::Login => "LoginPage",
            Self::Signup => "SignupPage",
            Self::Products(_) => "ProductsPage",
            Self::ProductDetail(_) => "ProductDetailPage",
            Self::Cart => "CartPage",
            Self::Checkout => "CheckoutPage",
            Self::Payments => "PaymentsPage",
            Self::LastPage => "OrderPlacedPage",
            Self::Wishlist => "WishlistPage",
            Self::AdminLayout => "AdminLayout",
            Self::Dashboard => "DashboardPage",
            Self::Enquiries => "EnquiriesPage",
            Self::ViewEnquiry => "EnquiryPage",
            Self::CouponList => "CouponListPage",
            Self::AddCoupon => "CouponFormPage",
            Self::Orders => "OrdersPage",
            Self::ViewOrder => "OrderPage",
            Self::Customers => "CustomersPage",
            Self::CategoryList => "CategoryListPage",
            Self::AddCategory => "CategoryFormPage",
            Self::BrandList => "BrandListPage",
            Self::AddBrand => "BrandFormPage",
            Self::ProductList => "ProductListPage",
            Self::AddProduct => "ProductFormPage",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Products(category) | Self::ProductDetail(category) => {
                write!(f, "{}({category})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// One node of the route table: a path relative to its parent, the page it
/// renders, whether the access guard wraps it, and its nested routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: Cow<'static, str>,
    pub page: Page,
    pub guarded: bool,
    pub index: bool,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    /// A public leaf route.
    pub fn route(path: impl Into<Cow<'static, str>>, page: Page) -> Self {
        Self {
            path: path.into(),
            page,
            guarded: false,
            index: false,
            children: Vec::new(),
        }
    }

    /// A leaf route rendered behind the access guard.
    pub fn protected(path: impl Into<Cow<'static, str>>, page: Page) -> Self {
        Self {
            guarded: true,
            ..Self::route(path, page)
        }
    }

    /// The route rendered when the parent path is matched exactly.
    pub fn index(page: Page) -> Self {
        Self {
            index: true,
            ..Self::route("", page)
        }
    }

    /// A layout route whose page wraps the matched child.
    pub fn parent(
        path: impl Into<Cow<'static, str>>,
        page: Page,
        children: impl IntoIterator<Item = RouteDescriptor>,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Self::route(path, page)
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
