use interop_catalog::LibraryRecord;
use interop_catalog::slug::slugify;

/// A header highlight: "`guest` in `host`" and the anchor it links to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotationEntry {
    pub label: String,
    pub anchor: String,
}
impl RotationEntry {
    pub fn new(guest: impl AsRef<str>, host: impl AsRef<str>) -> Self {
        let label = format!("{} in {}", guest.as_ref(), host.as_ref());
        let anchor = slugify(&label);
        Self { label, anchor }
    }

    /// `None` when the record is missing either language.
    pub fn from_record(record: &LibraryRecord) -> Option<Self> {
        Some(Self::new(record.guest_lang()?, record.host_lang()?))
    }

    /// The anchor as a URL fragment, e.g. `#python-in-rust`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interop_catalog::slug::{host_in_rust_anchor, rust_in_host_anchor};

    #[test]
    fn test_label_and_anchor() {
        let entry = RotationEntry::new("Objective C", "Rust");
        assert_eq!(entry.label, "Objective C in Rust");
        assert_eq!(entry.anchor, "objective-c-in-rust");
        assert_eq!(entry.href(), "#objective-c-in-rust");
    }

    #[test]
    fn test_anchor_targets_section_headings() {
        let guest = RotationEntry::from_record(&LibraryRecord::new("cxx", "C++", "Rust", "")).unwrap();
        assert_eq!(guest.anchor, host_in_rust_anchor("C++"));
        let host = RotationEntry::from_record(&LibraryRecord::new("PyO3", "Rust", "Python", "")).unwrap();
        assert_eq!(host.anchor, rust_in_host_anchor("Python"));
    }

    #[test]
    fn test_incomplete_record_has_no_entry() {
        let record = LibraryRecord { guest_lang: Some("Rust".into()), ..LibraryRecord::default() };
        assert_eq!(RotationEntry::from_record(&record), None);
    }
}
