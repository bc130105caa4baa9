//! Inheritance rule engine
//!
//! Decides which organization-level grants flow into an operating unit:
//! 1. Only organization-scoped groups of the config's organization contribute
//! 2. Each module needs a rule; `none` (or no rule) stops it
//! 3. The rule's restrictions cap the access level and, for `partial`, filter features
//! 4. On `partial`, an explicit operating-unit grant for the module suppresses inheritance;
//!    `full` always inherits

use crate::prelude::*;

/// Compute the permissions `operating_unit_id` inherits from its organization.
///
/// `ou_groups` are the operating-unit groups whose explicit grants may suppress
/// `partial` inheritance. The result keeps insertion order; a module granted
/// by several organization groups appears once per group, each with its own
/// provenance. Deduplication is left to [`merge_permissions`].
///
/// [`merge_permissions`]: crate::merge::merge_permissions
pub fn compute_inherited_permissions(
	org_groups: &[Group],
	ou_groups: &[Group],
	config: &InheritanceConfig,
	operating_unit_id: &str,
) -> Vec<InheritedPermission> {
	let mut inherited = Vec::new();

	if !config.enable_inheritance {
		debug!(
			org = %config.organization_id,
			ou = operating_unit_id,
			"Inheritance disabled for organization"
		);
		return inherited;
	}

	let sources = org_groups
		.iter()
		.filter(|g| g.is_org_scoped() && g.organization_id == config.organization_id);

	for group in sources {
		for perm in &group.permissions {
			let Some(rule) = config.find_rule(&perm.module_key) else {
				debug!(group = %group.id, module = %perm.module_key, "No inheritance rule, skipping");
				continue;
			};

			match rule.inherit_level {
				InheritLevel::None => {
					debug!(group = %group.id, module = %perm.module_key, "Inheritance level none, skipping");
					continue;
				}
				InheritLevel::Partial => {
					if has_explicit_permission(ou_groups, &perm.module_key) {
						debug!(
							group = %group.id,
							module = %perm.module_key,
							ou = operating_unit_id,
							"Explicit operating unit grant suppresses partial inheritance"
						);
						continue;
					}
				}
				InheritLevel::Full => {}
			}

			let inherited_perm = inherit_permission(perm, group, rule);
			debug!(
				group = %group.id,
				module = %perm.module_key,
				ou = operating_unit_id,
				level = %inherited_perm.access_level,
				inherit_level = %rule.inherit_level,
				"Inheriting module permission"
			);
			inherited.push(inherited_perm);
		}
	}

	inherited
}

/// Whether any operating-unit group grants `module_key` explicitly
fn has_explicit_permission(ou_groups: &[Group], module_key: &str) -> bool {
	ou_groups.iter().any(|g| g.permission(module_key).is_some())
}

fn inherit_permission(
	perm: &ModulePermission,
	group: &Group,
	rule: &InheritanceRule,
) -> InheritedPermission {
	let access_level = match rule.access_ceiling() {
		Some(ceiling) => perm.access_level.restrict(ceiling),
		None => perm.access_level,
	};

	// Without a feature filter, partial passes the whole list through
	let features = match (rule.inherit_level, rule.feature_filter()) {
		(InheritLevel::Partial, Some(allowed)) => perm
			.features
			.iter()
			.filter(|f| allowed.iter().any(|k| *k == f.feature_key))
			.cloned()
			.collect(),
		_ => perm.features.clone(),
	};

	InheritedPermission {
		module_key: perm.module_key.clone(),
		module_name: perm.module_name.clone(),
		access_level,
		features,
		inherited_from: Scope::Organization,
		inherited_from_id: group.id.clone(),
		inheritance_rule: rule.clone(),
	}
}


// vim: ts=4
