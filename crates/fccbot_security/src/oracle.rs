//! Permission oracle trait and the role-based implementation.

use crate::AdminPolicy;
use async_trait::async_trait;
use fccbot_error::{DiscordResult, SecurityError, SecurityResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Answers whether a member holds the admin capability.
#[async_trait]
pub trait PermissionOracle: Send + Sync {
    /// `Ok(true)` for admins, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when the answer could not be determined. Callers must
    /// treat that as "deny and stop".
    async fn is_admin(&self, user_id: &str) -> SecurityResult<bool>;
}

/// Source of a member's guild roles.
#[async_trait]
pub trait MemberRoleLookup: Send + Sync {
    /// Role ids held by the member in the configured guild.
    async fn member_roles(&self, user_id: &str) -> DiscordResult<Vec<String>>;
}

/// Oracle that checks an [`AdminPolicy`] against the member's live roles.
#[derive(derive_new::new)]
pub struct RoleAdminOracle {
    policy: AdminPolicy,
    roles: Arc<dyn MemberRoleLookup>,
}

#[async_trait]
impl PermissionOracle for RoleAdminOracle {
    #[instrument(skip(self))]
    async fn is_admin(&self, user_id: &str) -> SecurityResult<bool> {
        if self.policy.is_admin_user(user_id) {
            debug!("User is listed as admin");
            return Ok(true);
        }

        let roles = self.roles.member_roles(user_id).await.map_err(|e| {
            warn!(error = %e, "Member role lookup failed");
            SecurityError::lookup_failed(user_id, &e)
        })?;

        Ok(self.policy.grants_admin(&roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fccbot_error::{DiscordError, DiscordErrorKind, SecurityErrorKind};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeRoles {
        roles: HashMap<String, Vec<String>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MemberRoleLookup for FakeRoles {
        async fn member_roles(&self, user_id: &str) -> DiscordResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.roles.get(user_id).cloned().ok_or_else(|| {
                DiscordError::new(DiscordErrorKind::MemberNotFound(user_id.to_string()))
            })
        }
    }

    fn oracle() -> (RoleAdminOracle, Arc<FakeRoles>) {
        let mut roles = HashMap::new();
        roles.insert("1".to_string(), vec!["900".to_string()]);
        roles.insert("2".to_string(), vec!["100".to_string()]);
        let lookup = Arc::new(FakeRoles {
            roles,
            calls: AtomicUsize::new(0),
        });
        let policy = AdminPolicy::new()
            .with_role_ids(["900".to_string()].into_iter().collect())
            .with_user_ids(["42".to_string()].into_iter().collect());
        (RoleAdminOracle::new(policy, lookup.clone()), lookup)
    }

    #[tokio::test]
    async fn test_member_with_admin_role() {
        let (oracle, _) = oracle();
        assert!(oracle.is_admin("1").await.unwrap());
    }

    #[tokio::test]
    async fn test_member_without_admin_role() {
        let (oracle, _) = oracle();
        assert!(!oracle.is_admin("2").await.unwrap());
    }

    #[tokio::test]
    async fn test_listed_user_skips_role_lookup() {
        let (oracle, lookup) = oracle();
        assert!(oracle.is_admin("42").await.unwrap());
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_an_error() {
        let (oracle, _) = oracle();
        let err = oracle.is_admin("3").await.unwrap_err();
        assert!(matches!(
            err.kind,
            SecurityErrorKind::LookupFailed { ref user_id, .. } if user_id == "3"
        ));
    }
}
