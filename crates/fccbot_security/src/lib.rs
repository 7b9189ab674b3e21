//! Admin privilege checks.
//!
//! The dispatcher asks a [`PermissionOracle`] whether the invoking member may
//! run admin-tier commands. Lookup failures are errors, never a quiet deny:
//! callers must stop handling the event when they get one.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod oracle;
mod permission;

pub use oracle::{MemberRoleLookup, PermissionOracle, RoleAdminOracle};
pub use permission::AdminPolicy;

pub use fccbot_error::{SecurityError, SecurityErrorKind, SecurityResult};
