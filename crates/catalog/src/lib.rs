//! Catalog of Rust interop libraries, indexed by the foreign language each
//! one pairs with.
//!
//! - [`models`] holds [`LibraryRecord`](models::LibraryRecord) and its link
//!   fallbacks.
//! - [`index`] derives the sorted language list and per-language guest/host
//!   partitions, wrapped by [`Catalog`].
//! - [`slug`] derives the anchors headings and links must agree on.
//! - [`source`] reads records from markdown files with YAML front matter.

pub mod error;
pub mod index;
pub mod models;
pub mod slug;
pub mod source;

pub use crate::index::{Catalog, LanguageSection, Subsection};
pub use crate::models::{Direction, DirectionPolicy, LibraryRecord};
