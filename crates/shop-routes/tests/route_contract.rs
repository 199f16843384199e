use std::collections::HashSet;

use shop_routes::{Category, Page, RouteTable, ShopRoute};

const PUBLIC: [(&str, Page); 3] = [
    ("/", Page::Home),
    ("/login", Page::Login),
    ("/signup", Page::Signup),
];

const PROTECTED: [(&str, Page); 5] = [
    ("/cart", Page::Cart),
    ("/whishlist", Page::Wishlist),
    ("/checkout", Page::Checkout),
    ("/payments", Page::Payments),
    ("/lastpage", Page::LastPage),
];

const ADMIN: [(&str, Page); 18] = [
    ("/admin", Page::Dashboard),
    ("/admin/enquiries", Page::Enquiries),
    ("/admin/enquiries/e1", Page::ViewEnquiry),
    ("/admin/coupon-list", Page::CouponList),
    ("/admin/coupon", Page::AddCoupon),
    ("/admin/coupon/c1", Page::AddCoupon),
    ("/admin/orders", Page::Orders),
    ("/admin/order/o1", Page::ViewOrder),
    ("/admin/customers", Page::Customers),
    ("/admin/list-category", Page::CategoryList),
    ("/admin/category", Page::AddCategory),
    ("/admin/category/k1", Page::AddCategory),
    ("/admin/list-brand", Page::BrandList),
    ("/admin/brand", Page::AddBrand),
    ("/admin/brand/b1", Page::AddBrand),
    ("/admin/list-product", Page::ProductList),
    ("/admin/product", Page::AddProduct),
    ("/admin/", Page::Dashboard),
];

#[test]
fn public_paths_are_not_guarded() {
    for (url, page) in PUBLIC {
        let found = RouteTable::shop().resolve(url).unwrap();
        assert_eq!(found.page, page, "{url}");
        assert!(!found.guarded, "{url} should be public");
    }
}

#[test]
fn protected_paths_are_guarded() {
    for (url, page) in PROTECTED {
        let found = RouteTable::shop().resolve(url).unwrap();
        assert_eq!(found.page, page, "{url}");
        assert!(found.guarded, "{url} should be guarded");
    }
}

#[test]
fn every_category_has_a_guarded_list_and_detail_page() {
    for category in Category::ALL {
        let list = RouteTable::shop().resolve(&format!("/{category}")).unwrap();
        assert_eq!(list.page, Page::Products(category));
        assert!(list.guarded);

        let detail = RouteTable::shop()
            .resolve(&format!("/{category}/sku-17"))
            .unwrap();
        assert_eq!(detail.page, Page::ProductDetail(category));
        assert_eq!(detail.param("id"), Some("sku-17"));
        assert!(detail.guarded);
    }
}

#[test]
fn admin_pages_render_inside_the_layout() {
    for (url, page) in ADMIN {
        let found = RouteTable::shop().resolve(url).unwrap();
        assert_eq!(found.page, page, "{url}");
        assert_eq!(found.layouts, vec![Page::AdminLayout], "{url}");
    }
}

#[test]
fn declared_branches_cover_the_published_contract() {
    let patterns: HashSet<String> = RouteTable::shop()
        .branches()
        .iter()
        .map(|branch| branch.pattern().to_string())
        .collect();

    // 3 public, 5 protected, 9 category pairs, 17 admin.
    assert_eq!(patterns.len(), 3 + 5 + 18 + 17);
    assert!(patterns.contains("/mobilesandtablets/:id"));
    assert!(patterns.contains("/admin/enquiries/:id"));
    assert!(!patterns.contains("/order"));
}

#[test]
fn inactive_paths_do_not_parse() {
    for url in ["/order", "/contactus", "/profile", "/admin/blog-category-list", "/shoes"] {
        assert!(url.parse::<ShopRoute>().is_err(), "{url}");
    }
}

#[test]
fn every_branch_round_trips_through_the_typed_route() {
    for branch in RouteTable::shop().branches() {
        let url = branch.pattern().to_string().replace(":id", "9");
        let route: ShopRoute = url.parse().unwrap();
        assert_eq!(route.to_string(), url);
        assert_eq!(route.page(), branch.page());

        let found = RouteTable::shop().resolve(&url).unwrap();
        assert_eq!(found.layouts, branch.layouts());
        assert_eq!(found.guarded, branch.guarded());
    }
}
