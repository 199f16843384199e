use std::str::FromStr;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::category::Category;
use crate::id::EntityId;

/// Parsed state of a path parameter read by a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue<T> {
    /// The matched route has no such parameter, or it is empty.
    Missing,
    /// The raw segment did not parse as `T`.
    Invalid(String),
    Value(T),
}

impl<T> ParamValue<T> {
    pub fn from_raw(raw: Option<&str>) -> Self
    where
        T: FromStr,
    {
        match raw {
            None | Some("") => Self::Missing,
            Some(s) => match s.parse::<T>() {
                Ok(parsed) => Self::Value(parsed),
                Err(_) => Self::Invalid(s.to_string()),
            },
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing | Self::Invalid(_) => None,
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// A reactive view of one path parameter of the current route.
/// It re-parses whenever the router's params change.
pub struct RouteParam<T>
where
    T: Send + Sync + 'static,
{
    memo: Memo<ParamValue<T>>,
}

impl<T> Clone for RouteParam<T>
where
    T: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RouteParam<T> where T: Send + Sync + 'static {}

impl<T> RouteParam<T>
where
    T: FromStr + Clone + PartialEq + Send + Sync + 'static,
{
    /// Must be called under a matched route.
    pub fn new(key: &'static str) -> Self {
        let params = use_params_map();
        let memo = Memo::new(move |_| params.with(|map| ParamValue::from_raw(map.get_str(key))));
        Self { memo }
    }

    pub fn get(&self) -> ParamValue<T> {
        self.memo.get()
    }

    pub fn ok(&self) -> Signal<Option<T>> {
        let memo = self.memo;
        Signal::derive(move || memo.get().ok())
    }
}

/// The `:id` segment of detail and edit pages. Ids are opaque to the router.
pub fn use_entity_id() -> RouteParam<EntityId> {
    RouteParam::new("id")
}

/// Everything a category detail page needs from its route.
#[derive(Clone, Copy)]
pub struct ProductRouteParams {
    pub category: Category,
    pub id: RouteParam<EntityId>,
}

pub fn use_product_params(category: Category) -> ProductRouteParams {
    ProductRouteParams {
        category,
        id: use_entity_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_missing_and_empty() {
        assert_eq!(ParamValue::<u64>::from_raw(None), ParamValue::Missing);
        assert_eq!(ParamValue::<u64>::from_raw(Some("")), ParamValue::Missing);
    }

    #[test]
    fn test_from_raw_invalid_keeps_raw_segment() {
        assert_eq!(
            ParamValue::<u64>::from_raw(Some("abc")),
            ParamValue::Invalid("abc".to_string())
        );
    }

    #[test]
    fn test_from_raw_value() {
        let value = ParamValue::<u64>::from_raw(Some("42"));
        assert!(value.is_value());
        assert_eq!(value.ok(), Some(42));
    }

    #[test]
    fn test_from_raw_entity_id() {
        assert_eq!(
            ParamValue::<EntityId>::from_raw(Some("sku-17")).ok(),
            Some(EntityId::from_str("sku-17").unwrap())
        );
        assert_eq!(
            ParamValue::<EntityId>::from_raw(Some("a b")),
            ParamValue::Invalid("a b".to_string())
        );
    }
}
