//! Authenticated session model.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use loomerp_core::{DomainError, UserId};

use crate::PermissionMatrix;

/// Role identifier attached to a session.
///
/// Roles are opaque strings at this layer and are carried for display and
/// grouping only; the permission matrix is the authority for access
/// decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer credential issued by the authentication service.
///
/// Carried for outbound API plumbing; this crate never inspects it. `Debug`
/// is redacted and `Display` is deliberately not implemented: tokens do not
/// belong in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// An authenticated identity and everything it may do.
///
/// The field layout (and its camelCase serialization) matches the payload
/// delivered by the external authentication service, so a successful login
/// response deserializes straight into a `Session`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<Role>,
    pub token: AuthToken,
    pub permissions: PermissionMatrix,
}

impl Session {
    /// Boundary validation for inbound payloads.
    ///
    /// The store accepts any `Session` it is handed; callers that ingest
    /// payloads from the wire use this to reject obviously malformed ones.
    pub fn validated(self) -> Result<Self, DomainError> {
        if self.user_name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be empty"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        Ok(self)
    }

    /// True when this session carries the universal grant.
    pub fn is_super_admin(&self) -> bool {
        self.permissions.has_universal_access()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.as_str() == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Resource};

    fn sample_session() -> Session {
        let mut permissions = PermissionMatrix::new();
        permissions.grant(Resource::new("Buyer"), [Action::Read, Action::Update]);
        permissions.grant(Resource::new("Branch"), []);

        Session {
            user_id: UserId::new(),
            user_name: "asmith".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Smith".to_string(),
            roles: vec![Role::new("merchandiser")],
            token: AuthToken::new("opaque-bearer-token"),
            permissions,
        }
    }

    #[test]
    fn round_trips_through_the_camel_case_payload_shape() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"userName\""));
        assert!(json.contains("\"fullName\""));

        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
        // The present-but-empty Branch entry survives the trip.
        assert!(back.permissions.contains(&Resource::new("Branch")));
    }

    #[test]
    fn deserializes_a_raw_auth_service_payload() {
        let json = r#"{
            "userId": "018f2c2a-5a8e-7cc3-b27b-3b2a1d7e8f90",
            "userName": "bkhan",
            "email": "bilal@example.com",
            "fullName": "Bilal Khan",
            "roles": ["admin"],
            "token": "jwt-goes-here",
            "permissions": {"All": ["Read"]}
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert!(session.is_super_admin());
        assert!(session.has_role("admin"));
        assert!(!session.has_role("merchandiser"));
    }

    #[test]
    fn validation_rejects_blank_user_name() {
        let mut session = sample_session();
        session.user_name = "   ".to_string();
        assert!(session.validated().is_err());
    }

    #[test]
    fn validation_rejects_malformed_email() {
        let mut session = sample_session();
        session.email = "not-an-email".to_string();
        assert!(session.validated().is_err());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let session = sample_session();
        let debug = format!("{session:?}");
        assert!(!debug.contains("opaque-bearer-token"));
        assert!(debug.contains("AuthToken(***)"));
    }
}
