//! Resource ↔ route resolution.

use loomerp_auth::{PermissionMatrix, Resource, has_any_permission};

/// Ordered mapping from resource name to its canonical route.
///
/// Several resource names may alias to the same route (naming drift between
/// historical and current identifiers). Reverse lookup returns the **first**
/// entry in table order, so the name the authentication service actually
/// emits must come first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<(Resource, String)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; table order is definition order.
    pub fn insert(&mut self, resource: Resource, route: impl Into<String>) {
        self.entries.push((resource, route.into()));
    }

    /// Forward lookup: the canonical route for a resource.
    pub fn route_for(&self, resource: &Resource) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r == resource)
            .map(|(_, route)| route.as_str())
    }

    /// Reverse lookup: the first resource mapped to `route`, in table order.
    pub fn resource_for_route(&self, route: &str) -> Option<&Resource> {
        self.entries
            .iter()
            .find(|(_, r)| r == route)
            .map(|(resource, _)| resource)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Resource, &str)> {
        self.entries.iter().map(|(r, route)| (r, route.as_str()))
    }
}

impl FromIterator<(Resource, String)> for RouteTable {
    fn from_iter<I: IntoIterator<Item = (Resource, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Route-level access decision.
///
/// A route with no table entry is unprotected by definition and resolves to
/// `true`: unlisted routes (login, error pages, static content) are public.
/// This is a deliberate, documented exception to default-deny; a fail-closed
/// variant would change exactly this arm.
pub fn can_access_route(table: &RouteTable, route: &str, matrix: &PermissionMatrix) -> bool {
    match table.resource_for_route(route) {
        Some(resource) => has_any_permission(matrix, resource),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use loomerp_auth::Action;

    use super::*;

    fn table() -> RouteTable {
        let mut table = RouteTable::new();
        table.insert(Resource::new("Buyer"), "/buyers");
        table.insert(Resource::new("Supplier"), "/suppliers");
        table.insert(Resource::new("Vendor"), "/suppliers");
        table
    }

    fn matrix_with(resource: &'static str, actions: &[Action]) -> PermissionMatrix {
        let mut matrix = PermissionMatrix::new();
        matrix.grant(Resource::new(resource), actions.to_vec());
        matrix
    }

    #[test]
    fn unmapped_route_is_public() {
        assert!(can_access_route(
            &table(),
            "/unmapped/path",
            &PermissionMatrix::new()
        ));
    }

    #[test]
    fn mapped_route_requires_a_grant_on_its_resource() {
        let table = table();

        assert!(can_access_route(
            &table,
            "/buyers",
            &matrix_with("Buyer", &[Action::Read])
        ));
        assert!(!can_access_route(&table, "/buyers", &PermissionMatrix::new()));
    }

    #[test]
    fn empty_grant_does_not_open_a_mapped_route() {
        assert!(!can_access_route(
            &table(),
            "/buyers",
            &matrix_with("Buyer", &[])
        ));
    }

    #[test]
    fn aliased_route_resolves_to_the_first_entry_in_table_order() {
        let table = table();
        assert_eq!(
            table.resource_for_route("/suppliers"),
            Some(&Resource::new("Supplier"))
        );

        // The decision follows the first-listed resource, even when a grant
        // exists under a later alias.
        assert!(can_access_route(
            &table,
            "/suppliers",
            &matrix_with("Supplier", &[Action::Read])
        ));
        assert!(!can_access_route(
            &table,
            "/suppliers",
            &matrix_with("Vendor", &[Action::Read])
        ));
    }

    #[test]
    fn forward_lookup_resolves_legacy_names() {
        let table = table();
        assert_eq!(table.route_for(&Resource::new("Vendor")), Some("/suppliers"));
        assert_eq!(table.route_for(&Resource::new("Unknown")), None);
    }

    #[test]
    fn universal_grant_opens_every_mapped_route() {
        let matrix = matrix_with("All", &[Action::Read]);
        assert!(can_access_route(&table(), "/buyers", &matrix));
        assert!(can_access_route(&table(), "/suppliers", &matrix));
    }
}
