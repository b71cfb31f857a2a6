//! Access decision functions.
//!
//! Pure policy checks over a [`PermissionMatrix`] snapshot:
//! - No IO
//! - No panics
//! - Unknown resources and actions resolve to the least-privileged answer

use crate::{Action, PermissionMatrix, Resource};

/// True when the matrix grants `action` on `resource`.
///
/// The universal grant (`"All"` with at least one action) is checked first,
/// every time, and short-circuits the resource-specific lookup.
pub fn has_permission(matrix: &PermissionMatrix, resource: &Resource, action: Action) -> bool {
    if matrix.has_universal_access() {
        return true;
    }
    matrix
        .actions(resource)
        .is_some_and(|granted| granted.contains(&action))
}

/// True when the matrix grants *any* action on `resource`.
pub fn has_any_permission(matrix: &PermissionMatrix, resource: &Resource) -> bool {
    if matrix.has_universal_access() {
        return true;
    }
    matrix
        .actions(resource)
        .is_some_and(|granted| !granted.is_empty())
}

/// True when the matrix grants `Read` on `resource`.
///
/// Routed through [`has_permission`], never [`has_any_permission`]: a
/// resource granted only `Create` must still fail this check.
pub fn can_read(matrix: &PermissionMatrix, resource: &Resource) -> bool {
    has_permission(matrix, resource, Action::Read)
}

/// True when the matrix grants `Create` on `resource`.
pub fn can_create(matrix: &PermissionMatrix, resource: &Resource) -> bool {
    has_permission(matrix, resource, Action::Create)
}

/// True when the matrix grants `Update` on `resource`.
pub fn can_update(matrix: &PermissionMatrix, resource: &Resource) -> bool {
    has_permission(matrix, resource, Action::Update)
}

/// True when the matrix grants `Delete` on `resource`.
pub fn can_delete(matrix: &PermissionMatrix, resource: &Resource) -> bool {
    has_permission(matrix, resource, Action::Delete)
}

/// The actions granted on `resource`, exactly as stored.
///
/// Returns the explicit entry only (empty when absent). The universal grant
/// is honored by the boolean checks above, not by enumeration: a matrix with
/// universal access does not report phantom per-resource grants here, so UI
/// code that renders action badges shows what was actually granted.
pub fn resource_actions<'m>(matrix: &'m PermissionMatrix, resource: &Resource) -> &'m [Action] {
    matrix.actions(resource).unwrap_or(&[])
}
