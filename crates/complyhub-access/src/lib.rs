//! Permission inheritance and effective-access resolution.
//!
//! Organization-scoped groups grant module permissions that may flow down into
//! operating units under the organization's [`InheritanceConfig`]. This crate
//! computes those inherited grants, merges them with the permissions a user
//! holds explicitly in their operating unit, and answers access queries against
//! the merged result.
//!
//! A resolution always runs in the same order:
//! validate → compute inherited → merge → evaluate.
//! Every function is pure and synchronous; nothing here holds state between
//! calls.
//!
//! [`InheritanceConfig`]: complyhub_types::InheritanceConfig

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod defaults;
pub mod evaluate;
pub mod inherit;
pub mod merge;
pub mod prelude;
pub mod resolver;
pub mod roles;
pub mod rules;
pub mod scope;
pub mod validate;

pub use catalog::{
	FeatureDef, MODULE_CATALOG, ModuleDef, all_modules, create_module_permission, module_features,
};
pub use defaults::{InheritanceDefaults, WELL_KNOWN_MODULES, create_default_inheritance_config};
pub use evaluate::{
	effective_module_levels, has_access_level, has_feature_access, has_module_access,
	module_access_level,
};
pub use inherit::compute_inherited_permissions;
pub use merge::merge_permissions;
pub use resolver::{AccessResolver, get_effective_permissions_with_inheritance};
pub use roles::{predefined_group, role_permissions};
pub use rules::{add_rule, remove_rule, update_rule};
pub use scope::{
	Scoped, can_access_operating_unit, can_access_organization, data_access_scope, filter_scoped,
};
pub use validate::{ensure_valid_config, validate_inheritance_config};

// vim: ts=4
