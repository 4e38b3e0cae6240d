//! Effect categories

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Effect category classification
///
/// The closed set covers everything the engine itself detects. Externally
/// declared effects (stub `has` entries, `has` decorator arguments) may name
/// any category, so unknown names fold into `Declared`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Writes to standard output
    Stdout,
    /// Writes to standard error
    Stderr,
    /// Reads from standard input
    Stdin,
    /// Reads a file
    Read,
    /// Writes a file
    Write,
    /// Draws from a randomness source
    Random,
    /// Process control / subprocess invocation
    Syscall,
    /// Reads wall-clock or monotonic time
    Time,
    /// Imports a module
    Import,
    /// Mutates enclosing scope (`global` / `nonlocal`)
    Global,
    /// Raises an exception
    Raises,
    /// Externally declared effect category
    Declared(String),
}

impl Marker {
    /// Fold a category name to its marker; unknown names are `Declared`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "stdout" => Marker::Stdout,
            "stderr" => Marker::Stderr,
            "stdin" => Marker::Stdin,
            "read" => Marker::Read,
            "write" => Marker::Write,
            "random" => Marker::Random,
            "syscall" => Marker::Syscall,
            "time" => Marker::Time,
            "import" => Marker::Import,
            "global" => Marker::Global,
            "raises" => Marker::Raises,
            other => Marker::Declared(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Marker::Stdout => "stdout",
            Marker::Stderr => "stderr",
            Marker::Stdin => "stdin",
            Marker::Read => "read",
            Marker::Write => "write",
            Marker::Random => "random",
            Marker::Syscall => "syscall",
            Marker::Time => "time",
            Marker::Import => "import",
            Marker::Global => "global",
            Marker::Raises => "raises",
            Marker::Declared(name) => name,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MarkerVisitor;

        impl Visitor<'_> for MarkerVisitor {
            type Value = Marker;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an effect category name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Marker, E> {
                Ok(Marker::from_name(value))
            }
        }

        deserializer.deserialize_str(MarkerVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips_known_categories() {
        for name in [
            "stdout", "stderr", "stdin", "read", "write", "random", "syscall", "time", "import",
            "global", "raises",
        ] {
            assert_eq!(Marker::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn test_unknown_name_is_declared() {
        let marker = Marker::from_name("network");
        assert_eq!(marker, Marker::Declared("network".to_string()));
        assert_eq!(marker.as_str(), "network");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Marker::Stdout).unwrap();
        assert_eq!(json, "\"stdout\"");

        let back: Marker = serde_json::from_str("\"network\"").unwrap();
        assert_eq!(back, Marker::Declared("network".to_string()));
    }
}
