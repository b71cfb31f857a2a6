use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Named protectable entity/screen (e.g. "Buyer", "Branch").
///
/// Resources are modeled as opaque strings: the catalogue is configured
/// outside this crate and grows over time. The reserved name `"All"` is a
/// sentinel; granting it any action at all grants universal access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Cow<'static, str>);

impl Resource {
    /// Reserved resource name that stands for "every resource".
    pub const UNIVERSAL: &'static str = "All";

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The universal-access sentinel resource.
    pub fn universal() -> Self {
        Self(Cow::Borrowed(Self::UNIVERSAL))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_universal(&self) -> bool {
        self.as_str() == Self::UNIVERSAL
    }
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
