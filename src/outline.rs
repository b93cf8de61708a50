//! Plain-text views of a [`Catalog`] for the terminal.

use interop_catalog::{Catalog, LibraryRecord, Subsection};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The navigation index: one block per language, listing only the
/// directional subsections that have libraries.
pub struct Outline<'a> {
    pub catalog: &'a Catalog,
    pub registry_url: &'a str,
}
impl Display for Outline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for section in self.catalog.sections() {
            writeln!(f, "{}  #{}", section.language, section.anchor)?;
            for subsection in [&section.guest, &section.host].into_iter().flatten() {
                self.subsection(f, subsection)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
impl Outline<'_> {
    fn subsection(&self, f: &mut Formatter<'_>, subsection: &Subsection<'_>) -> FmtResult {
        writeln!(f, "  {}  #{}", subsection.heading, subsection.anchor)?;
        for record in &subsection.records {
            write!(f, "    - {}", record.title)?;
            if record.requires_nightly {
                write!(f, " [requires nightly]")?;
            }
            if let Some(link) = record.primary_link(self.registry_url) {
                write!(f, " <{link}>")?;
            }
            writeln!(f)?;
            if !record.description.is_empty() {
                writeln!(f, "      {}", record.description.trim())?;
            }
        }
        Ok(())
    }
}

/// One line per library: title, primary link, repository and crate badge.
pub struct Links<'a> {
    pub records: &'a [LibraryRecord],
    pub registry_url: &'a str,
    pub badge_url: &'a str,
}
impl Display for Links<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for record in self.records {
            let link = record.primary_link(self.registry_url);
            let badge = record.badge_url(self.badge_url);
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                record.title,
                link.as_deref().unwrap_or("-"),
                record.repo.as_deref().unwrap_or("-"),
                badge.as_deref().unwrap_or("-"),
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_catalog::DirectionPolicy;
    use interop_catalog::models::{DEFAULT_BADGE_URL, DEFAULT_REGISTRY_URL};

    fn catalog() -> Catalog {
        let neon = LibraryRecord {
            crate_name: Some("neon".into()),
            ..LibraryRecord::new("Neon", "Rust", "Node.js", "Rust bindings for Node.js")
        };
        let cxx = LibraryRecord {
            repo: Some("https://github.com/dtolnay/cxx".into()),
            requires_nightly: true,
            ..LibraryRecord::new("cxx", "C++", "Rust", "")
        };
        Catalog::ingest(vec![neon, cxx], DirectionPolicy::Strict).unwrap()
    }

    #[test]
    fn test_outline_omits_empty_subsections() {
        let catalog = catalog();
        let outline = Outline { catalog: &catalog, registry_url: DEFAULT_REGISTRY_URL }.to_string();
        let expected = "\
C++  #c++
  C++ in Rust  #c++-in-rust
    - cxx [requires nightly] <https://github.com/dtolnay/cxx>

Node.js  #node.js
  Rust in Node.js  #rust-in-node.js
    - Neon <https://crates.io/crates/neon>
      Rust bindings for Node.js

";
        assert_eq!(outline, expected);
        assert!(!outline.contains("Rust in C++"));
        assert!(!outline.contains("Node.js in Rust"));
    }

    #[test]
    fn test_links() {
        let catalog = catalog();
        let links =
            Links { records: catalog.records(), registry_url: DEFAULT_REGISTRY_URL, badge_url: DEFAULT_BADGE_URL }
                .to_string();
        let lines: Vec<_> = links.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Neon\thttps://crates.io/crates/neon\t-\thttps://meritbadge.herokuapp.com/neon",
                "cxx\thttps://github.com/dtolnay/cxx\thttps://github.com/dtolnay/cxx\t-",
            ]
        );
    }
}
