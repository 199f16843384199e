mod category;
mod descriptor;
mod error;
mod id;
mod params;
mod path;
mod route;
mod table;

pub use category::Category;
pub use descriptor::{Page, RouteDescriptor};
pub use error::{RouteError, TableError};
pub use id::EntityId;
pub use params::{use_entity_id, use_product_params, ParamValue, ProductRouteParams, RouteParam};
pub use path::{join_paths, parse_segments, url_segments, Params, PathPattern, Segment};
pub use route::{AdminRoute, ShopRoute, ADMIN_PREFIX};
pub use table::{shop_routes, RouteBranch, RouteMatch, RouteTable};

pub mod prelude {
    pub use super::{
        use_entity_id, use_product_params, AdminRoute, Category, EntityId, Page, ParamValue,
        RouteParam, RouteTable, ShopRoute, ToPath,
    };
}

/// Returns the canonical URL of a typed route.
pub trait ToPath {
    fn to_path(&self) -> String;
}
