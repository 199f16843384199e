/// Errors raised while turning a URL into a typed route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No branch of the route table matches the path.
    #[error("no route matches path: {0}")]
    NoMatch(String),
    /// The slug does not name one of the shop's categories.
    #[error("unknown product category: {0}")]
    UnknownCategory(String),
    /// A page expected a path parameter that the match did not carry.
    #[error("missing param: {0}")]
    MissingParam(&'static str),
    /// The `:id` segment is empty or would not survive as a single path segment.
    #[error("invalid route id: {0:?}")]
    InvalidId(String),
}

/// Structural problems found while validating a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate path `{path}` under `{scope}`")]
    DuplicatePath { scope: String, path: String },
    #[error("path `{path}` declares more than one parameter segment")]
    TooManyParams { path: String },
    #[error("path `{path}` declares a parameter without a name")]
    EmptyParamName { path: String },
    #[error("index route under `{scope}` must not have children")]
    IndexWithChildren { scope: String },
}
