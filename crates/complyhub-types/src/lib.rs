//! Shared entity model, access levels and error types for the ComplyHub platform.
//!
//! Everything here is plain data: organizations, operating units, groups, users,
//! module and feature permissions, and the inheritance configuration an
//! organization uses to push its grants down into operating units. The
//! resolution engine itself lives in `complyhub-access`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access_level;
pub mod error;
pub mod inheritance;
pub mod org;
pub mod permission;
pub mod prelude;
pub mod types;

pub use access_level::AccessLevel;
pub use error::{ClResult, Error};
pub use inheritance::{
	CreateInheritanceRule, InheritLevel, InheritanceConfig, InheritanceRestrictions,
	InheritanceRule, UpdateInheritanceRule,
};
pub use org::{
	DataAccessScope, Group, GroupType, OperatingUnit, OrgStatus, Organization, RoleType, Scope,
	User, UserStatus, UserWithDetails,
};
pub use permission::{FeaturePermission, InheritedPermission, ModulePermission};

// vim: ts=4
