//! The `"yes"`/`"no"` wire flag.
//!
//! Several records expose boolean flags as the literal strings `"yes"` and
//! `"no"` on the wire (prayer request visibility, donation anonymity,
//! service time activation). Internally these are plain `bool`s; this module
//! holds the conversion type plus serde functions so a model field can keep
//! the wire form with `#[serde(with = "parish_core::yes_no")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A boolean flag that serializes as `"yes"` or `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    /// The flag as its wire string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Convert to the internal boolean representation.
    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }
}

impl From<YesNo> for bool {
    fn from(value: YesNo) -> Self {
        value.as_bool()
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize a `bool` field as `"yes"`/`"no"`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    YesNo::from(*value).serialize(serializer)
}

/// Deserialize a `"yes"`/`"no"` string into a `bool` field.
///
/// # Errors
///
/// Returns an error for any string other than `"yes"` or `"no"`.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    YesNo::deserialize(deserializer).map(YesNo::as_bool)
}

/// `"yes"`/`"no"` adapter for `Option<bool>` fields, for patch payloads where
/// an absent flag means "leave unchanged". Use together with
/// `#[serde(default)]`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::YesNo;

    /// Serialize an `Option<bool>` field as `"yes"`/`"no"` or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.map(YesNo::from).serialize(serializer)
    }

    /// Deserialize an optional `"yes"`/`"no"` string.
    ///
    /// # Errors
    ///
    /// Returns an error for any value other than `"yes"`, `"no"`, or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        Option::<YesNo>::deserialize(deserializer).map(|opt| opt.map(YesNo::as_bool))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Flagged {
        #[serde(with = "super")]
        is_public: bool,
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"yes\"");
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"no\"");
    }

    #[test]
    fn test_bool_conversions() {
        assert!(YesNo::Yes.as_bool());
        assert!(!YesNo::No.as_bool());
        assert_eq!(YesNo::from(true), YesNo::Yes);
        assert_eq!(YesNo::from(false), YesNo::No);
    }

    #[test]
    fn test_field_serializes_as_yes_no() {
        let json = serde_json::to_string(&Flagged { is_public: true }).unwrap();
        assert_eq!(json, "{\"is_public\":\"yes\"}");

        let parsed: Flagged = serde_json::from_str("{\"is_public\":\"no\"}").unwrap();
        assert!(!parsed.is_public);
    }

    #[test]
    fn test_field_rejects_other_strings() {
        assert!(serde_json::from_str::<Flagged>("{\"is_public\":\"maybe\"}").is_err());
        assert!(serde_json::from_str::<Flagged>("{\"is_public\":true}").is_err());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Patch {
        #[serde(default, with = "super::option")]
        is_active: Option<bool>,
    }

    #[test]
    fn test_optional_field() {
        let parsed: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.is_active, None);

        let parsed: Patch = serde_json::from_str("{\"is_active\":\"yes\"}").unwrap();
        assert_eq!(parsed.is_active, Some(true));

        let json = serde_json::to_string(&Patch {
            is_active: Some(false),
        })
        .unwrap();
        assert_eq!(json, "{\"is_active\":\"no\"}");
    }

    #[test]
    fn test_display() {
        assert_eq!(YesNo::Yes.to_string(), "yes");
        assert_eq!(YesNo::No.to_string(), "no");
    }
}
