//! Effective permission resolution
//!
//! Ties the stages together for one user in one operating unit.

use crate::evaluate;
use crate::inherit::compute_inherited_permissions;
use crate::merge::{merge_into, merge_permissions};
use crate::prelude::*;
use crate::validate::{ensure_valid_config, validate_inheritance_config};
use complyhub_types::UserWithDetails;

/// Flatten the permissions of operating-unit groups into one explicit list.
///
/// A module granted by several of the user's unit groups is folded into a
/// single entry (higher level, first feature grant wins) so the list meets the
/// merge resolver's one-entry-per-module precondition.
fn explicit_permissions<'a>(ou_groups: impl IntoIterator<Item = &'a Group>) -> Vec<ModulePermission> {
	let mut explicit: Vec<ModulePermission> = Vec::new();
	for group in ou_groups {
		for perm in &group.permissions {
			match explicit.iter_mut().find(|p| p.module_key == perm.module_key) {
				Some(existing) => merge_into(existing, perm.access_level, &perm.features),
				None => explicit.push(perm.clone()),
			}
		}
	}
	explicit
}

/// Effective permissions of a user with `user_groups` in `operating_unit_id`.
///
/// The user's operating-unit groups provide the explicit grants and decide
/// which `partial` inheritances are suppressed. The user's own organization
/// groups play no direct part; organization grants arrive only through
/// `org_groups` and the inheritance rules.
///
/// `operating_unit_id` does not filter `user_groups`: every unit-scoped group
/// passed in counts as an explicit grant, so callers pass only the groups of
/// the unit being resolved.
pub fn get_effective_permissions_with_inheritance(
	user_groups: &[Group],
	org_groups: &[Group],
	config: &InheritanceConfig,
	operating_unit_id: &str,
) -> ClResult<Vec<ModulePermission>> {
	let ou_groups: Vec<Group> = user_groups.iter().filter(|g| g.is_ou_scoped()).cloned().collect();
	let explicit = explicit_permissions(&ou_groups);
	let inherited = compute_inherited_permissions(org_groups, &ou_groups, config, operating_unit_id);
	debug!(
		ou = operating_unit_id,
		explicit = explicit.len(),
		inherited = inherited.len(),
		"Resolving effective permissions"
	);
	merge_permissions(&explicit, &inherited)
}

/// Stateless entry point to the whole pipeline.
///
/// Unlike the free functions, [`AccessResolver::resolve`] refuses configs that
/// fail validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessResolver;

impl AccessResolver {
	pub fn new() -> Self {
		Self
	}

	pub fn validate(&self, config: &InheritanceConfig) -> Vec<String> {
		validate_inheritance_config(config)
	}

	pub fn inherited(
		&self,
		org_groups: &[Group],
		ou_groups: &[Group],
		config: &InheritanceConfig,
		operating_unit_id: &str,
	) -> Vec<InheritedPermission> {
		compute_inherited_permissions(org_groups, ou_groups, config, operating_unit_id)
	}

	pub fn merge(
		&self,
		explicit: &[ModulePermission],
		inherited: &[InheritedPermission],
	) -> ClResult<Vec<ModulePermission>> {
		merge_permissions(explicit, inherited)
	}

	/// Validate `config`, then resolve the effective permissions
	pub fn resolve(
		&self,
		user_groups: &[Group],
		org_groups: &[Group],
		config: &InheritanceConfig,
		operating_unit_id: &str,
	) -> ClResult<Vec<ModulePermission>> {
		ensure_valid_config(config)?;
		get_effective_permissions_with_inheritance(user_groups, org_groups, config, operating_unit_id)
	}

	/// Resolve for a user in their own operating unit
	pub fn resolve_user(
		&self,
		user: &UserWithDetails,
		org_groups: &[Group],
		config: &InheritanceConfig,
	) -> ClResult<Vec<ModulePermission>> {
		self.resolve(&user.groups, org_groups, config, &user.user.operating_unit_id)
	}

	/// Recompute the user's `effective_permissions` cache from their groups
	pub fn refresh_user(
		&self,
		user: &mut UserWithDetails,
		org_groups: &[Group],
		config: &InheritanceConfig,
	) -> ClResult<()> {
		user.effective_permissions = self.resolve_user(user, org_groups, config)?;
		Ok(())
	}

	pub fn has_module_access(&self, perms: &[ModulePermission], module_key: &str) -> bool {
		evaluate::has_module_access(perms, module_key)
	}

	pub fn has_feature_access(
		&self,
		perms: &[ModulePermission],
		module_key: &str,
		feature_key: &str,
	) -> bool {
		evaluate::has_feature_access(perms, module_key, feature_key)
	}

	pub fn has_access_level(
		&self,
		perms: &[ModulePermission],
		module_key: &str,
		required: AccessLevel,
	) -> bool {
		evaluate::has_access_level(perms, module_key, required)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::defaults::InheritanceDefaults;
	use complyhub_types::{GroupType, OperatingUnit, User, UserStatus};

	fn group(id: &str, scope: Scope, perms: Vec<ModulePermission>) -> Group {
		Group {
			id: id.into(),
			name: id.into(),
			group_type: GroupType::Custom,
			role_type: None,
			scope,
			organization_id: "org1".into(),
			operating_unit_id: None,
			permissions: perms,
			description: None,
			is_system_group: false,
			created_at: Timestamp(0),
			updated_at: Timestamp(0),
			created_by: "test".into(),
		}
	}

	fn user(ou_id: &str, groups: Vec<Group>) -> UserWithDetails {
		UserWithDetails {
			user: User {
				id: "u1".into(),
				email: "u1@example.gov".into(),
				first_name: "U".into(),
				last_name: "One".into(),
				operating_unit_id: ou_id.into(),
				group_ids: groups.iter().map(|g| g.id.clone()).collect(),
				status: UserStatus::Active,
				last_login: None,
				created_at: Timestamp(0),
				updated_at: Timestamp(0),
				created_by: "test".into(),
				invited_by: None,
			},
			operating_unit: OperatingUnit {
				id: ou_id.into(),
				organization_id: "org1".into(),
				name: ou_id.into(),
				domains: vec![],
				description: None,
				created_at: Timestamp(0),
				updated_at: Timestamp(0),
			},
			organization: None,
			groups,
			effective_permissions: vec![],
		}
	}

	fn full_reports_config() -> InheritanceConfig {
		InheritanceDefaults::builder()
			.modules(["reports"])
			.inherit_level(InheritLevel::Full)
			.access_restriction(None)
			.build()
			.create_config("org1", Timestamp(0))
	}

	#[test]
	fn test_refresh_user_replaces_stale_cache() {
		let mut u = user(
			"ou1",
			vec![group("ou-readers", Scope::OperatingUnit, vec![ModulePermission::new("scans", "Scans", AccessLevel::Read)])],
		);
		u.effective_permissions = vec![ModulePermission::new("settings", "Settings", AccessLevel::Execute)];
		let org = vec![group("org-admins", Scope::Organization, vec![ModulePermission::new("reports", "Reports", AccessLevel::Write)])];

		AccessResolver::new().refresh_user(&mut u, &org, &full_reports_config()).unwrap();

		let keys: Vec<_> = u.effective_permissions.iter().map(|p| p.module_key.as_str()).collect();
		assert_eq!(keys, vec!["scans", "reports"]);
		assert!(!evaluate::has_module_access(&u.effective_permissions, "settings"));
		assert!(evaluate::has_access_level(&u.effective_permissions, "reports", AccessLevel::Write));

		// a second refresh must not feed on the cache it produced
		AccessResolver::new().refresh_user(&mut u, &[], &full_reports_config()).unwrap();
		assert_eq!(u.effective_permissions.len(), 1);
		assert_eq!(u.effective_permissions[0].module_key, "scans");
	}

	#[test]
	fn test_resolve_user_uses_own_operating_unit() {
		let u = user(
			"ou7",
			vec![group("ou-writers", Scope::OperatingUnit, vec![ModulePermission::new("reports", "Reports", AccessLevel::Read)])],
		);
		let org = vec![group("org-admins", Scope::Organization, vec![ModulePermission::new("reports", "Reports", AccessLevel::Execute)])];
		let cfg = full_reports_config();
		let resolver = AccessResolver::new();

		let via_user = resolver.resolve_user(&u, &org, &cfg).unwrap();
		let direct = resolver.resolve(&u.groups, &org, &cfg, "ou7").unwrap();
		assert_eq!(via_user, direct);
		assert_eq!(via_user[0].access_level, AccessLevel::Execute);
	}

	#[test]
	fn test_resolve_user_rejects_invalid_config() {
		let u = user("ou1", vec![]);
		let mut cfg = full_reports_config();
		cfg.organization_id = String::new();
		assert!(matches!(
			AccessResolver::new().resolve_user(&u, &[], &cfg),
			Err(Error::ValidationError(_))
		));
	}

	#[test]
	fn test_explicit_from_several_unit_groups_folded() {
		let user_groups = vec![
			group("a", Scope::OperatingUnit, vec![ModulePermission::new("scans", "Scans", AccessLevel::Read)
				.with_feature(FeaturePermission::new("view_logs", "View Logs", AccessLevel::Read))]),
			group("b", Scope::OperatingUnit, vec![ModulePermission::new("scans", "Scans", AccessLevel::Write)
				.with_feature(FeaturePermission::new("view_logs", "View Logs", AccessLevel::Execute))
				.with_feature(FeaturePermission::new("retry_scans", "Retry", AccessLevel::Write))]),
		];
		let cfg = InheritanceDefaults::builder().modules(["reports"]).build().create_config("org1", Timestamp(0));
		let perms = get_effective_permissions_with_inheritance(&user_groups, &[], &cfg, "ou1").unwrap();
		assert_eq!(perms.len(), 1);
		assert_eq!(perms[0].access_level, AccessLevel::Write);
		assert_eq!(perms[0].features.len(), 2);
		assert_eq!(perms[0].feature("view_logs").unwrap().access_level, AccessLevel::Read);
	}

	#[test]
	fn test_user_org_groups_not_explicit() {
		let user_groups =
			vec![group("org", Scope::Organization, vec![ModulePermission::new("audit", "Audit", AccessLevel::Write)])];
		let cfg = InheritanceDefaults::builder().modules(["reports"]).build().create_config("org1", Timestamp(0));
		let perms = get_effective_permissions_with_inheritance(&user_groups, &[], &cfg, "ou1").unwrap();
		assert!(perms.is_empty());
	}

	#[test]
	fn test_resolve_rejects_invalid_config() {
		let mut cfg = InheritanceDefaults::default().create_config("org1", Timestamp(0));
		cfg.rules.push(cfg.rules[0].clone());
		let res = AccessResolver::new().resolve(&[], &[], &cfg, "ou1");
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
