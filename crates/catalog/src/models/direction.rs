use super::{LibraryRecord, RUST};
use serde::{Deserialize, Serialize};

/// Which way round a record pairs Rust with its foreign language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction<'a> {
    /// The foreign language is embedded as a guest into Rust ("Python in Rust").
    GuestInRust(&'a str),
    /// Rust is embedded as a guest into the foreign host ("Rust in Python").
    RustInHost(&'a str),
    /// Neither side, or both sides, are Rust; or a side is missing.
    Invalid,
}
impl<'a> Direction<'a> {
    pub fn of(record: &'a LibraryRecord) -> Self {
        match (record.host_lang(), record.guest_lang()) {
            (Some(RUST), Some(guest)) if guest != RUST => Self::GuestInRust(guest),
            (Some(host), Some(RUST)) if host != RUST => Self::RustInHost(host),
            _ => Self::Invalid,
        }
    }

    /// The non-Rust side of the pairing.
    pub fn foreign(&self) -> Option<&'a str> {
        match self {
            Self::GuestInRust(lang) | Self::RustInHost(lang) => Some(lang),
            Self::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// What ingestion does with a record whose [`Direction`] is invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionPolicy {
    /// Fail ingestion on the first invalid record.
    Strict,
    /// Set invalid records aside and report them.
    #[default]
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pair(guest: Option<&str>, host: Option<&str>) -> LibraryRecord {
        LibraryRecord {
            guest_lang: guest.map(String::from),
            host_lang: host.map(String::from),
            ..LibraryRecord::default()
        }
    }

    #[rstest]
    #[case(pair(Some("Python"), Some("Rust")), Direction::GuestInRust("Python"))]
    #[case(pair(Some("Rust"), Some("Python")), Direction::RustInHost("Python"))]
    #[case(pair(Some("Rust"), Some("Rust")), Direction::Invalid)]
    #[case(pair(Some("C"), Some("Python")), Direction::Invalid)]
    #[case(pair(None, Some("Rust")), Direction::Invalid)]
    #[case(pair(Some("Rust"), None), Direction::Invalid)]
    #[case(pair(Some("rust"), Some("Python")), Direction::Invalid)]
    fn test_direction(#[case] record: LibraryRecord, #[case] expected: Direction<'static>) {
        assert_eq!(record.direction(), expected);
    }

    #[test]
    fn test_foreign_side() {
        let record = pair(Some("Rust"), Some("Ruby"));
        assert_eq!(record.direction().foreign(), Some("Ruby"));
        assert_eq!(pair(None, None).direction().foreign(), None);
    }
}
