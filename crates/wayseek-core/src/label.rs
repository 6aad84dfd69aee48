//! The [`Label`] type — a named graph vertex.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// A graph vertex identified by name.
///
/// Fixture labels are usually string literals, so construction from a
/// `&'static str` does not allocate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Label(Cow<'static, str>);

impl Label {
    /// Create a label from a static name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The label's name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Label {
    #[inline]
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Label {
    #[inline]
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl Borrow<str> for Label {
    #[inline]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn label_serializes_as_string() {
        let l = Label::new("A");
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, r#""A""#);
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l);
    }
}
