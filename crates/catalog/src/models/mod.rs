mod direction;
mod record;

pub use self::direction::{Direction, DirectionPolicy};
pub use self::record::LibraryRecord;

/// The language every catalogued library pairs with.
pub const RUST: &str = "Rust";
/// Registry used to build crate links when a record names a crate.
pub const DEFAULT_REGISTRY_URL: &str = "https://crates.io/crates/";
/// Service rendering a version badge for a crate.
pub const DEFAULT_BADGE_URL: &str = "https://meritbadge.herokuapp.com/";

/// Returns `None` for missing or empty strings, so `""` behaves like an
/// absent field in link fallbacks.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Joins a base URL and a path segment with exactly one `/` between them.
fn join_url(base: &str, segment: &str) -> String {
    format!("{}/{segment}", base.trim_end_matches('/'))
}
