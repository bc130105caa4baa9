//! Access evaluator
//!
//! Predicates over a merged permission list. A module or feature that is not
//! listed is treated as `none`; absence is never an error.

use std::collections::BTreeMap;

use crate::prelude::*;

fn find_module<'a>(perms: &'a [ModulePermission], module_key: &str) -> Option<&'a ModulePermission> {
	perms.iter().find(|p| p.module_key == module_key)
}

/// Module-wide access level, `None` if the module is not listed
pub fn module_access_level(perms: &[ModulePermission], module_key: &str) -> Option<AccessLevel> {
	find_module(perms, module_key).map(|p| p.access_level)
}

pub fn has_module_access(perms: &[ModulePermission], module_key: &str) -> bool {
	find_module(perms, module_key).is_some_and(|p| !p.access_level.is_none())
}

/// True if the module lists the feature with a level above `none`.
///
/// Only the feature's own level counts; the module level is not consulted.
pub fn has_feature_access(perms: &[ModulePermission], module_key: &str, feature_key: &str) -> bool {
	find_module(perms, module_key)
		.and_then(|p| p.feature(feature_key))
		.is_some_and(|f| !f.access_level.is_none())
}

/// True if the module's level is at least `required`.
///
/// An unlisted module never passes, whatever `required` is.
pub fn has_access_level(perms: &[ModulePermission], module_key: &str, required: AccessLevel) -> bool {
	module_access_level(perms, module_key).is_some_and(|level| level.satisfies(required))
}

/// Highest access level per module.
///
/// Tolerates lists that repeat a module (e.g. raw group permissions that were
/// never merged), keeping the most permissive entry.
pub fn effective_module_levels(perms: &[ModulePermission]) -> BTreeMap<String, AccessLevel> {
	let mut levels: BTreeMap<String, AccessLevel> = BTreeMap::new();
	for perm in perms {
		levels
			.entry(perm.module_key.clone())
			.and_modify(|l| *l = l.higher(perm.access_level))
			.or_insert(perm.access_level);
	}
	levels
}


// vim: ts=4
