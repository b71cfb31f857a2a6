use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Action, Resource};

/// Per-session grant matrix: resource → actions granted on it.
///
/// Entries round-trip exactly as received from the authentication service.
/// In particular, a resource that is present with an **empty** action list
/// stays present: it answers every check with "denied", same as an absent
/// key, but it serializes back out as an explicit entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionMatrix {
    grants: HashMap<Resource, Vec<Action>>,
}

impl PermissionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the granted actions for a resource, replacing any prior entry.
    ///
    /// Action lists are stored verbatim (order kept, duplicates kept) so
    /// external payloads survive a round-trip unchanged.
    pub fn grant(&mut self, resource: Resource, actions: impl IntoIterator<Item = Action>) {
        self.grants.insert(resource, actions.into_iter().collect());
    }

    /// The entry for a resource, if present (possibly empty).
    pub fn actions(&self, resource: &Resource) -> Option<&[Action]> {
        self.grants.get(resource).map(Vec::as_slice)
    }

    pub fn contains(&self, resource: &Resource) -> bool {
        self.grants.contains_key(resource)
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Resource, &[Action])> {
        self.grants.iter().map(|(r, a)| (r, a.as_slice()))
    }

    /// True when the `"All"` sentinel is present with at least one action.
    ///
    /// An empty action list under the sentinel grants nothing, like any
    /// other empty entry.
    pub fn has_universal_access(&self) -> bool {
        self.grants
            .get(&Resource::universal())
            .is_some_and(|actions| !actions.is_empty())
    }
}

impl FromIterator<(Resource, Vec<Action>)> for PermissionMatrix {
    fn from_iter<I: IntoIterator<Item = (Resource, Vec<Action>)>>(iter: I) -> Self {
        Self {
            grants: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_is_kept_distinct_from_absent_key() {
        let mut matrix = PermissionMatrix::new();
        matrix.grant(Resource::new("Buyer"), []);

        assert!(matrix.contains(&Resource::new("Buyer")));
        assert_eq!(matrix.actions(&Resource::new("Buyer")), Some(&[][..]));
        assert_eq!(matrix.actions(&Resource::new("Seller")), None);

        // The explicit-but-empty entry survives serialization.
        let json = serde_json::to_string(&matrix).unwrap();
        let back: PermissionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrix);
        assert!(back.contains(&Resource::new("Buyer")));
    }

    #[test]
    fn deserializes_the_external_payload_shape() {
        let matrix: PermissionMatrix =
            serde_json::from_str(r#"{"Buyer":["Read","Update"],"Branch":[]}"#).unwrap();

        assert_eq!(
            matrix.actions(&Resource::new("Buyer")),
            Some(&[Action::Read, Action::Update][..])
        );
        assert_eq!(matrix.actions(&Resource::new("Branch")), Some(&[][..]));
    }

    #[test]
    fn universal_access_requires_a_nonempty_sentinel_entry() {
        let mut matrix = PermissionMatrix::new();
        assert!(!matrix.has_universal_access());

        matrix.grant(Resource::universal(), []);
        assert!(!matrix.has_universal_access());

        matrix.grant(Resource::universal(), [Action::Read]);
        assert!(matrix.has_universal_access());
    }
}
