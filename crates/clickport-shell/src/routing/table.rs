//! Route table: an ordered list of exact path patterns and their views.

/// The page views the shell can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    ClickHouseToFile,
    FileToClickHouse,
    JoinTables,
}

impl ViewId {
    /// Returns all views in navigation order.
    pub fn all() -> &'static [ViewId] {
        &[
            ViewId::Home,
            ViewId::ClickHouseToFile,
            ViewId::FileToClickHouse,
            ViewId::JoinTables,
        ]
    }

    /// Stable identifier used in markup (`data-view`).
    pub fn slug(&self) -> &'static str {
        match self {
            ViewId::Home => "home",
            ViewId::ClickHouseToFile => "clickhouse-to-file",
            ViewId::FileToClickHouse => "file-to-clickhouse",
            ViewId::JoinTables => "join-tables",
        }
    }

    /// Returns the navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewId::Home => "Home",
            ViewId::ClickHouseToFile => "ClickHouse to File",
            ViewId::FileToClickHouse => "File to ClickHouse",
            ViewId::JoinTables => "Join Tables",
        }
    }
}

/// A single path pattern bound to a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub path: String,
    pub view: ViewId,
}

/// Ordered dispatch table; lookups return the first exact match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's four routes.
    pub fn standard() -> Self {
        Self::new()
            .with_route("/", ViewId::Home)
            .with_route("/clickhouse-to-file", ViewId::ClickHouseToFile)
            .with_route("/file-to-clickhouse", ViewId::FileToClickHouse)
            .with_route("/join-tables", ViewId::JoinTables)
    }

    /// Appends a route. Later routes never shadow earlier ones.
    pub fn with_route(mut self, path: impl Into<String>, view: ViewId) -> Self {
        self.routes.push(Route {
            path: path.into(),
            view,
        });
        self
    }

    /// First route whose path equals `pathname`.
    pub fn resolve(&self, pathname: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == pathname)
    }

    /// Path of the first route bound to `view`.
    pub fn path_for(&self, view: ViewId) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.view == view)
            .map(|route| route.path.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
