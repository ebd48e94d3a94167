//! Client-side location: pathname, query string and fragment.

use std::fmt;

/// A parsed location such as `/join-tables?x=1#top`.
///
/// Only the pathname takes part in route matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    search: String,
    hash: String,
}

impl Location {
    /// The application root, `/`.
    pub fn root() -> Self {
        Self::parse("/")
    }

    /// Splits a location string into its parts.
    ///
    /// An empty pathname becomes `/`, and a missing leading slash is added.
    /// `search` keeps its leading `?` and `hash` its leading `#`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let (rest, hash) = match input.find('#') {
            Some(idx) => input.split_at(idx),
            None => (input, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        let pathname = if path.is_empty() {
            "/".to_string()
        } else if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };

        Self {
            pathname,
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}
