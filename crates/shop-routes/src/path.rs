use std::collections::BTreeMap;
use std::fmt;

/// Path parameters extracted from a URL, keyed by the `:name` in the pattern.
pub type Params = BTreeMap<String, String>;

const STATIC_SEGMENT_VALUE: u32 = 10;
const DYNAMIC_SEGMENT_VALUE: u32 = 3;
const INDEX_ROUTE_VALUE: u32 = 2;
const EMPTY_SEGMENT_VALUE: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(text) => f.write_str(text),
            Self::Param(name) => write!(f, ":{name}"),
        }
    }
}

/// Splits a route pattern such as `/cameras/:id` into its segments.
/// Empty segments are dropped, so `/`, `""` and `//` all parse to nothing.
pub fn parse_segments(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(part.to_string()),
        })
        .collect()
}

/// Returns the non-empty path segments of a URL, ignoring any query or fragment.
pub fn url_segments(url: &str) -> Vec<&str> {
    let end = url.find(|c: char| c == '?' || c == '#').unwrap_or(url.len());
    url[..end].split('/').filter(|s| !s.is_empty()).collect()
}

/// Joins a parent path and a nested path with exactly one separator.
pub fn join_paths(prefix: &str, nested: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let nested = nested.trim_start_matches('/');

    match (prefix.is_empty(), nested.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{nested}"),
        (false, true) if prefix.starts_with('/') => prefix.to_string(),
        (false, true) => format!("/{prefix}"),
        (false, false) if prefix.starts_with('/') => format!("{prefix}/{nested}"),
        (false, false) => format!("/{prefix}/{nested}"),
    }
}

/// A fully joined route pattern, ready to be matched against a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        Self {
            segments: parse_segments(pattern),
        }
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Ranks the pattern so that static segments outweigh parameters and an
    /// index route outweighs its layout sibling of the same length.
    pub fn score(&self, index: bool) -> u32 {
        let base = self.segments.len() as u32 + if index { INDEX_ROUTE_VALUE } else { 0 };
        if self.segments.is_empty() {
            return base + EMPTY_SEGMENT_VALUE;
        }
        self.segments.iter().fold(base, |acc, seg| {
            acc + match seg {
                Segment::Static(_) => STATIC_SEGMENT_VALUE,
                Segment::Param(_) => DYNAMIC_SEGMENT_VALUE,
            }
        })
    }

    /// Matches the whole URL path. Partial matches never succeed.
    pub fn matches(&self, path: &[&str]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut params = Params::new();
        for (seg, actual) in self.segments.iter().zip(path) {
            match seg {
                Segment::Static(text) if text == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*actual).to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for seg in &self.segments {
            write!(f, "/{seg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("/admin", "coupon/:id"), "/admin/coupon/:id");
        assert_eq!(join_paths("/admin/", "/orders"), "/admin/orders");
        assert_eq!(join_paths("/admin", ""), "/admin");
        assert_eq!(join_paths("", ""), "/");
        assert_eq!(join_paths("/", "cart"), "/cart");
    }

    #[test]
    fn test_url_segments_strip_query_and_fragment() {
        assert_eq!(url_segments("/cameras/42?sort=asc#reviews"), vec!["cameras", "42"]);
        assert_eq!(url_segments("/admin/"), vec!["admin"]);
        assert!(url_segments("/").is_empty());
    }

    #[test]
    fn test_match_extracts_param() {
        let pattern = PathPattern::parse("/cameras/:id");
        let params = pattern.matches(&["cameras", "42"]).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_match_rejects_prefix_and_longer_paths() {
        let pattern = PathPattern::parse("/admin/order/:id");
        assert!(pattern.matches(&["admin", "order"]).is_none());
        assert!(pattern.matches(&["admin", "order", "1", "x"]).is_none());
    }

    #[test]
    fn test_static_outranks_dynamic() {
        let literal = PathPattern::parse("/admin/coupon-list");
        let dynamic = PathPattern::parse("/admin/:section");
        assert!(literal.score(false) > dynamic.score(false));
    }

    #[test]
    fn test_index_outranks_bare_layout() {
        let layout = PathPattern::parse("/admin");
        assert!(layout.score(true) > layout.score(false));
    }

    #[test]
    fn test_display_round_trips_pattern() {
        assert_eq!(PathPattern::parse("admin//enquiries/:id/").to_string(), "/admin/enquiries/:id");
        assert_eq!(PathPattern::parse("").to_string(), "/");
    }
}
