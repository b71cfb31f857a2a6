//! Single source of truth for the active session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::storage::{SessionStorage, StorageError, keys};
use crate::{PermissionMatrix, Session};

/// Envelope written to durable storage on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub session: Session,
    pub saved_at: DateTime<Utc>,
}

/// Holds the one active session per client context and mediates all access
/// to it.
///
/// # Invariants
/// - `login` persists before it swaps: no caller ever observes an in-memory
///   session whose durable write failed.
/// - `logout` always clears in-memory state, even when the durable clear
///   fails.
/// - Everything except `initialize`/`login`/`logout` is pure computation
///   over the current snapshot.
///
/// There is no change-notification mechanism here; after login/logout,
/// dependents re-fetch rather than expecting live mutation of earlier
/// snapshots.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// An unauthenticated store over the given durable storage.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Restore a previously persisted session, if one exists.
    ///
    /// Absent, unreadable, and corrupt payloads all resolve to `None`: a
    /// client that cannot restore its session is simply logged out. This
    /// never panics and never surfaces an error.
    pub fn initialize(&mut self) -> Option<&Session> {
        let raw = match self.storage.get(keys::SESSION) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "session restore failed; continuing unauthenticated");
                return None;
            }
        };

        match serde_json::from_str::<StoredSession>(&raw) {
            Ok(stored) => {
                info!(
                    user = %stored.session.user_name,
                    saved_at = %stored.saved_at,
                    "restored persisted session"
                );
                self.session = Some(stored.session);
                self.session.as_ref()
            }
            Err(e) => {
                warn!(error = %e, "persisted session is corrupt; continuing unauthenticated");
                None
            }
        }
    }

    /// Make `session` the active session.
    ///
    /// The durable write happens first; the in-memory swap only after every
    /// key persisted. On failure the previous session (if any) stays active
    /// and the error is returned to the caller.
    pub fn login(&mut self, session: Session) -> Result<(), StorageError> {
        let stored = StoredSession {
            session,
            saved_at: Utc::now(),
        };

        let blob = serde_json::to_string(&stored)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let permissions = serde_json::to_string(&stored.session.permissions)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.storage.set(keys::SESSION, &blob)?;
        self.storage.set(keys::TOKEN, stored.session.token.as_str())?;
        self.storage.set(keys::PERMISSIONS, &permissions)?;

        info!(user = %stored.session.user_name, "session established");
        self.session = Some(stored.session);
        Ok(())
    }

    /// Clear the active session.
    ///
    /// The in-memory clear is unconditional. Durable-clear failures are
    /// logged and swallowed so the caller can always proceed as logged out.
    /// Idempotent.
    pub fn logout(&mut self) {
        self.session = None;

        for key in [keys::SESSION, keys::TOKEN, keys::PERMISSIONS] {
            if let Err(e) = self.storage.remove(key) {
                warn!(key, error = %e, "durable session clear failed");
            }
        }

        debug!("session cleared");
    }

    /// Snapshot of the active session's permission matrix.
    ///
    /// Empty when unauthenticated. Callers treat the result as an immutable
    /// snapshot and re-fetch after login/logout.
    pub fn current_permissions(&self) -> PermissionMatrix {
        self.session
            .as_ref()
            .map(|s| s.permissions.clone())
            .unwrap_or_default()
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}
