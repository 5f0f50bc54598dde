//! Deep-link value type.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque deep-link URL carried between the OS and the application shell.
///
/// This layer imposes no structure on the value: no parsing, no validation,
/// no normalization. Routing decisions based on the link belong to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    /// Wraps a raw URL string when it carries any non-whitespace content.
    ///
    /// Platform launch metadata reports "no link" either as a missing field
    /// or as a blank string; both collapse to `None` here. The stored value
    /// is the raw string, untouched.
    pub fn from_raw(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the link text exactly as the platform delivered it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the link and returns the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for DeepLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::DeepLink;

    #[test]
    fn from_raw_keeps_value_untouched() {
        let link = DeepLink::from_raw(" myapp://a b ").expect("non-blank input should wrap");
        assert_eq!(link.as_str(), " myapp://a b ");
    }

    #[test]
    fn from_raw_rejects_blank_input() {
        assert!(DeepLink::from_raw("").is_none());
        assert!(DeepLink::from_raw("   \t").is_none());
    }
}
