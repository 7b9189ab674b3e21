//! Admin policy configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Which members count as admins.
///
/// A member is an admin when their user id is listed directly or when they
/// hold at least one of the listed roles.
#[derive(
    Debug,
    Clone,
    Serialize,
    Deserialize,
    Default,
    PartialEq,
    Eq,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_new::new,
)]
#[setters(prefix = "with_")]
pub struct AdminPolicy {
    /// Role ids that grant admin
    #[serde(default)]
    #[new(default)]
    role_ids: HashSet<String>,

    /// User ids that are admins regardless of roles
    #[serde(default)]
    #[new(default)]
    user_ids: HashSet<String>,
}

impl AdminPolicy {
    /// Whether the user is listed directly.
    pub fn is_admin_user(&self, user_id: &str) -> bool {
        self.user_ids.contains(user_id)
    }

    /// Whether any of the member's roles grants admin.
    #[instrument(skip(self, member_roles), fields(role_count = member_roles.len()))]
    pub fn grants_admin(&self, member_roles: &[String]) -> bool {
        let granted = member_roles.iter().any(|role| self.role_ids.contains(role));
        debug!(granted, "Checked member roles against admin roles");
        granted
    }

    /// Whether neither roles nor users are configured.
    pub fn is_empty(&self) -> bool {
        self.role_ids.is_empty() && self.user_ids.is_empty()
    }
}
