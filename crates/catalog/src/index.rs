//! Per-language navigation index.
//!
//! The free functions operate on any slice of records and follow the exact
//! matching rules used for page sections. [`Catalog`] wraps them with an
//! ingestion check and precomputes the language list once.

use crate::error::{ErrorKind, Result};
use crate::models::{DirectionPolicy, LibraryRecord, RUST};
use crate::slug::{host_in_rust_anchor, language_anchor, rust_in_host_anchor};
use std::collections::BTreeSet;
use tracing::instrument;

/// Every host and guest language across `records`, excluding Rust,
/// deduplicated and sorted ascending (case-sensitive).
pub fn languages(records: &[LibraryRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| [record.host_lang(), record.guest_lang()])
        .flatten()
        .filter(|lang| *lang != RUST)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Records embedding `lang` as a guest, i.e. "`lang` in Rust".
pub fn guest_partition<'a>(records: &'a [LibraryRecord], lang: &str) -> Vec<&'a LibraryRecord> {
    records.iter().filter(|record| record.guest_lang() == Some(lang)).collect()
}

/// Records hosted by `lang`, i.e. "Rust in `lang`".
pub fn host_partition<'a>(records: &'a [LibraryRecord], lang: &str) -> Vec<&'a LibraryRecord> {
    records.iter().filter(|record| record.host_lang() == Some(lang)).collect()
}

/// A heading plus the records listed beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection<'a> {
    pub heading: String,
    pub anchor: String,
    pub records: Vec<&'a LibraryRecord>,
}

/// Navigation entry for one foreign language.
///
/// A subsection is `None` when its partition is empty; callers omit it
/// entirely rather than rendering an empty heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSection<'a> {
    pub language: &'a str,
    pub anchor: String,
    /// "`language` in Rust"
    pub guest: Option<Subsection<'a>>,
    /// "Rust in `language`"
    pub host: Option<Subsection<'a>>,
}

/// An ingested, read-only collection of records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<LibraryRecord>,
    flagged: Vec<LibraryRecord>,
    languages: Vec<String>,
}
impl Catalog {
    /// Checks every record pairs exactly one foreign language with Rust.
    ///
    /// Under [`DirectionPolicy::Strict`] the first violation fails ingestion.
    /// Under [`DirectionPolicy::Lenient`] violations are kept out of the index
    /// and exposed through [`flagged`](Self::flagged). Input order is kept.
    #[instrument(skip(records), fields(records = records.len()))]
    pub fn ingest(records: Vec<LibraryRecord>, policy: DirectionPolicy) -> Result<Self> {
        let (records, flagged): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|record| record.direction().is_valid());
        if let Some(record) = flagged.first() {
            match policy {
                DirectionPolicy::Strict => exn::bail!(ErrorKind::Direction { title: record.title.clone() }),
                DirectionPolicy::Lenient => {
                    for record in &flagged {
                        tracing::warn!(
                            title = %record.title,
                            host_lang = ?record.host_lang,
                            guest_lang = ?record.guest_lang,
                            "Library does not pair exactly one foreign language with Rust; excluded from index"
                        );
                    }
                },
            }
        }
        let languages = languages(&records);
        tracing::debug!(languages = languages.len(), flagged = flagged.len(), "Catalog indexed");
        Ok(Self { records, flagged, languages })
    }

    pub fn records(&self) -> &[LibraryRecord] {
        &self.records
    }

    /// Records set aside by a lenient ingestion.
    pub fn flagged(&self) -> &[LibraryRecord] {
        &self.flagged
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn guest_libs(&self, lang: &str) -> Vec<&LibraryRecord> {
        guest_partition(&self.records, lang)
    }

    pub fn host_libs(&self, lang: &str) -> Vec<&LibraryRecord> {
        host_partition(&self.records, lang)
    }

    pub fn section<'a>(&'a self, lang: &'a str) -> LanguageSection<'a> {
        let guest = Some(self.guest_libs(lang)).filter(|records| !records.is_empty()).map(|records| Subsection {
            heading: format!("{lang} in {RUST}"),
            anchor: host_in_rust_anchor(lang),
            records,
        });
        let host = Some(self.host_libs(lang)).filter(|records| !records.is_empty()).map(|records| Subsection {
            heading: format!("{RUST} in {lang}"),
            anchor: rust_in_host_anchor(lang),
            records,
        });
        LanguageSection { language: lang, anchor: language_anchor(lang), guest, host }
    }

    /// One [`LanguageSection`] per language, in [`languages`](Self::languages) order.
    pub fn sections(&self) -> Vec<LanguageSection<'_>> {
        self.languages.iter().map(|lang| self.section(lang)).collect()
    }
}
