mod admin;
mod storefront;

pub use admin::*;
pub use storefront::*;
