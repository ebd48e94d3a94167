//! Client-side routing: location, history, the route table and the
//! components that dispatch on them.

mod history;
mod location;
mod router;
mod table;

pub use history::History;
pub use location::Location;
pub use router::{use_navigator, use_routes, Navigator, RouteOutlet, Router};
pub use table::{Route, RouteTable, ViewId};
