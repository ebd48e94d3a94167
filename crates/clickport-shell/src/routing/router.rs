//! Router component, navigator context and route outlet.
//!
//! The [`Router`] owns the history signal. Descendants reach it through the
//! [`Navigator`] context; reading the location subscribes the reader, so a
//! navigation re-renders exactly the components that depend on it.

use dioxus::prelude::*;

use super::{History, Location, RouteTable};
use crate::pages::PageView;

/// Handle for reading and changing the current location.
#[derive(Clone, Copy)]
pub struct Navigator {
    history: Signal<History>,
}

impl Navigator {
    /// Current location. Subscribes the calling component.
    pub fn location(&self) -> Location {
        self.history.read().current().clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.read().can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.read().can_go_forward()
    }

    /// Navigate to `target`, adding a history entry.
    ///
    /// Navigating to the current location leaves the history untouched and
    /// notifies no reader.
    pub fn push(&mut self, target: &str) {
        let location = Location::parse(target);
        if *self.history.peek().current() == location {
            return;
        }
        self.history.write().push(location.clone());
        tracing::debug!(location = %location, "Navigated");
    }

    /// Navigate to `target` without adding a history entry.
    pub fn replace(&mut self, target: &str) {
        let location = Location::parse(target);
        tracing::debug!(location = %location, "Replaced location");
        self.history.write().replace(location);
    }

    pub fn back(&mut self) {
        let mut history = self.history.write();
        if history.back() {
            tracing::debug!(location = %history.current(), "Navigated back");
        }
    }

    pub fn forward(&mut self) {
        let mut history = self.history.write();
        if history.forward() {
            tracing::debug!(location = %history.current(), "Navigated forward");
        }
    }
}

/// Reads the navigator provided by the nearest [`Router`].
pub fn use_navigator() -> Navigator {
    use_context::<Navigator>()
}

/// Reads the route table provided by the nearest [`Router`].
pub fn use_routes() -> RouteTable {
    use_context::<RouteTable>()
}

/// Owns the session history and provides routing context to `children`.
#[component]
pub fn Router(routes: RouteTable, initial: Location, children: Element) -> Element {
    let history = use_signal(|| History::new(initial));
    use_context_provider(|| Navigator { history });
    use_context_provider(|| routes);

    rsx! { {children} }
}

/// Renders the view of the first route matching the current pathname, or
/// nothing when no route matches.
#[component]
pub fn RouteOutlet() -> Element {
    let navigator = use_navigator();
    let routes = use_routes();
    let location = navigator.location();

    match routes.resolve(location.pathname()) {
        Some(route) => {
            let view = route.view;
            rsx! {
                PageView { view }
            }
        }
        None => {
            tracing::debug!(location = %location, "No route matches");
            rsx! {}
        }
    }
}
