use super::{Direction, join_url, non_empty};
use serde::{Deserialize, Serialize};

/// One catalogued interop library, as described by its content file.
///
/// `host_lang` and `guest_lang` are optional at the type level so that an
/// incomplete record still loads; such a record matches no partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryRecord {
    /// Display name
    pub title: String,
    /// Language acting as host
    #[serde(default)]
    pub host_lang: Option<String>,
    /// Language embedded into the host
    #[serde(default)]
    pub guest_lang: Option<String>,
    /// Free text description
    pub description: String,
    /// Source repository URL
    #[serde(default)]
    pub repo: Option<String>,
    /// Canonical project URL
    #[serde(default)]
    pub url: Option<String>,
    /// Package name on the Rust package registry
    #[serde(default, rename = "crate")]
    pub crate_name: Option<String>,
    /// Only builds on a nightly toolchain
    #[serde(default)]
    pub requires_nightly: bool,
}
impl LibraryRecord {
    pub fn new(
        title: impl Into<String>,
        guest_lang: impl Into<String>,
        host_lang: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            host_lang: Some(host_lang.into()),
            guest_lang: Some(guest_lang.into()),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn host_lang(&self) -> Option<&str> {
        self.host_lang.as_deref()
    }

    pub fn guest_lang(&self) -> Option<&str> {
        self.guest_lang.as_deref()
    }

    /// Classifies the record by which side Rust sits on.
    pub fn direction(&self) -> Direction<'_> {
        Direction::of(self)
    }

    /// Registry page for the record's crate, if it names one.
    pub fn registry_url(&self, registry: &str) -> Option<String> {
        non_empty(self.crate_name.as_ref()).map(|name| join_url(registry, name))
    }

    /// Version badge image for the record's crate, if it names one.
    pub fn badge_url(&self, badge: &str) -> Option<String> {
        non_empty(self.crate_name.as_ref()).map(|name| join_url(badge, name))
    }

    /// The link a card's title points at.
    ///
    /// Prefers `url`, then `repo`, then the registry page built from `crate`.
    /// Empty strings count as absent.
    pub fn primary_link(&self, registry: &str) -> Option<String> {
        non_empty(self.url.as_ref())
            .or_else(|| non_empty(self.repo.as_ref()))
            .map(str::to_string)
            .or_else(|| self.registry_url(registry))
    }
}
