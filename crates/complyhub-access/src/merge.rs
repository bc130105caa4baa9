//! Permission merge resolver
//!
//! Explicit operating-unit grants and inherited organization grants meet here.
//! At module granularity the more permissive level wins; at feature granularity
//! entries already present are kept and only new feature keys are added.

use std::collections::HashSet;

use crate::prelude::*;

/// Merge explicit permissions with inherited ones into the effective list.
///
/// The caller's slices are never modified. `explicit` must hold at most one
/// entry per module; a repeated module key is rejected with
/// [`Error::DuplicateModule`]. Inherited entries are folded in one by one, so
/// the result holds one entry per module with feature keys unique inside it.
pub fn merge_permissions(
	explicit: &[ModulePermission],
	inherited: &[InheritedPermission],
) -> ClResult<Vec<ModulePermission>> {
	let mut seen = HashSet::with_capacity(explicit.len());
	for perm in explicit {
		if !seen.insert(perm.module_key.as_str()) {
			warn!(module = %perm.module_key, "Explicit permission list repeats a module");
			return Err(Error::DuplicateModule(perm.module_key.clone()));
		}
	}

	let mut merged: Vec<ModulePermission> = explicit.to_vec();
	for perm in &mut merged {
		dedup_features(&mut perm.features);
	}

	for inh in inherited {
		match merged.iter_mut().find(|p| p.module_key == inh.module_key) {
			Some(existing) => {
				let before = existing.access_level;
				merge_into(existing, inh.access_level, &inh.features);
				debug!(
					module = %inh.module_key,
					from = %inh.inherited_from_id,
					before = %before,
					after = %existing.access_level,
					"Merged inherited permission"
				);
			}
			None => {
				let mut perm = inh.clone().into_module_permission();
				dedup_features(&mut perm.features);
				debug!(module = %perm.module_key, from = %inh.inherited_from_id, "Added inherited module");
				merged.push(perm);
			}
		}
	}

	Ok(merged)
}

/// Fold `level` and `features` into `target`: higher level wins, features are
/// only added under keys `target` does not have yet.
pub(crate) fn merge_into(
	target: &mut ModulePermission,
	level: AccessLevel,
	features: &[FeaturePermission],
) {
	target.access_level = target.access_level.higher(level);

	let mut keys: HashSet<String> = target.features.iter().map(|f| f.feature_key.clone()).collect();
	for feature in features {
		if keys.insert(feature.feature_key.clone()) {
			target.features.push(feature.clone());
		}
	}
}

/// Keep the first occurrence of every feature key
fn dedup_features(features: &mut Vec<FeaturePermission>) {
	let mut keys = HashSet::new();
	features.retain(|f| keys.insert(f.feature_key.clone()));
}


// vim: ts=4
