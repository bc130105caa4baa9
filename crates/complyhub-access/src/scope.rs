//! Data access scoping
//!
//! Which organizations and operating units a user may read data from, derived
//! from the role types of the user's groups:
//! - global admin: everything
//! - organization admin: every operating unit of their organization
//! - anyone else: their own operating unit only

use crate::prelude::*;
use complyhub_types::{DataAccessScope, OperatingUnit, RoleType, UserWithDetails};

/// Anything owned by an organization and one of its operating units
pub trait Scoped {
	fn organization_id(&self) -> &str;
	fn operating_unit_id(&self) -> &str;
}

impl Scoped for OperatingUnit {
	fn organization_id(&self) -> &str {
		&self.organization_id
	}

	fn operating_unit_id(&self) -> &str {
		&self.id
	}
}

pub fn data_access_scope(user: &UserWithDetails) -> DataAccessScope {
	if user.has_role(RoleType::GlobalAdmin) {
		return DataAccessScope {
			organization_ids: Vec::new(),
			operating_unit_ids: Vec::new(),
			can_view_all_in_org: true,
		};
	}

	let org_id = user.organization_id();
	if user.has_role(RoleType::OrganizationAdmin) {
		if let Some(org_id) = org_id {
			return DataAccessScope {
				organization_ids: vec![org_id.to_string()],
				operating_unit_ids: Vec::new(),
				can_view_all_in_org: true,
			};
		}
		warn!(user = %user.user.id, "Organization admin without organization, falling back to unit scope");
	}

	DataAccessScope {
		organization_ids: org_id.map(|id| vec![id.to_string()]).unwrap_or_default(),
		operating_unit_ids: if user.user.operating_unit_id.is_empty() {
			Vec::new()
		} else {
			vec![user.user.operating_unit_id.clone()]
		},
		can_view_all_in_org: false,
	}
}

fn is_unrestricted(scope: &DataAccessScope) -> bool {
	scope.can_view_all_in_org && scope.organization_ids.is_empty()
}

fn scope_allows(scope: &DataAccessScope, organization_id: &str, operating_unit_id: &str) -> bool {
	if is_unrestricted(scope) {
		return true;
	}
	if !scope.organization_ids.iter().any(|id| id == organization_id) {
		return false;
	}
	scope.can_view_all_in_org || scope.operating_unit_ids.iter().any(|id| id == operating_unit_id)
}

pub fn can_access_organization(user: &UserWithDetails, organization_id: &str) -> bool {
	let scope = data_access_scope(user);
	is_unrestricted(&scope) || scope.organization_ids.iter().any(|id| id == organization_id)
}

pub fn can_access_operating_unit(user: &UserWithDetails, ou: &OperatingUnit) -> bool {
	scope_allows(&data_access_scope(user), &ou.organization_id, &ou.id)
}

/// Keep the items `scope` lets its holder see
pub fn filter_scoped<'a, T: Scoped>(items: &'a [T], scope: &DataAccessScope) -> Vec<&'a T> {
	items
		.iter()
		.filter(|item| scope_allows(scope, item.organization_id(), item.operating_unit_id()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use complyhub_types::{Group, GroupType, Organization, OrgStatus, User, UserStatus};

	fn ou(id: &str, org: &str) -> OperatingUnit {
		OperatingUnit {
			id: id.into(),
			organization_id: org.into(),
			name: id.into(),
			domains: vec![],
			description: None,
			created_at: Timestamp(0),
			updated_at: Timestamp(0),
		}
	}

	fn user(role: Option<RoleType>) -> UserWithDetails {
		let group = Group {
			id: "g1".into(),
			name: "g1".into(),
			group_type: GroupType::Predefined,
			role_type: role,
			scope: Scope::OperatingUnit,
			organization_id: "org1".into(),
			operating_unit_id: Some("ou1".into()),
			permissions: vec![],
			description: None,
			is_system_group: true,
			created_at: Timestamp(0),
			updated_at: Timestamp(0),
			created_by: "system".into(),
		};
		UserWithDetails {
			user: User {
				id: "u1".into(),
				email: "u1@example.gov".into(),
				first_name: "U".into(),
				last_name: "One".into(),
				operating_unit_id: "ou1".into(),
				group_ids: vec!["g1".into()],
				status: UserStatus::Active,
				last_login: None,
				created_at: Timestamp(0),
				updated_at: Timestamp(0),
				created_by: "system".into(),
				invited_by: None,
			},
			operating_unit: ou("ou1", "org1"),
			organization: Some(Organization {
				id: "org1".into(),
				name: "Org One".into(),
				slug: "org-one".into(),
				domains: vec![],
				status: OrgStatus::Active,
				billing_email: None,
				created_at: Timestamp(0),
				updated_at: Timestamp(0),
				created_by: "system".into(),
			}),
			groups: vec![group],
			effective_permissions: vec![],
		}
	}

	#[test]
	fn test_global_admin_sees_everything() {
		let u = user(Some(RoleType::GlobalAdmin));
		assert!(can_access_organization(&u, "org2"));
		assert!(can_access_operating_unit(&u, &ou("ou9", "org2")));
	}

	#[test]
	fn test_org_admin_sees_own_org() {
		let u = user(Some(RoleType::OrganizationAdmin));
		assert!(can_access_operating_unit(&u, &ou("ou2", "org1")));
		assert!(!can_access_operating_unit(&u, &ou("ou2", "org2")));
		assert!(!can_access_organization(&u, "org2"));
	}

	fn units() -> Vec<OperatingUnit> {
		vec![ou("ou1", "org1"), ou("ou2", "org1"), ou("ou3", "org2"), ou("ou4", "org3")]
	}

	#[test]
	fn test_filter_scoped_global_admin_keeps_everything() {
		let scope = data_access_scope(&user(Some(RoleType::GlobalAdmin)));
		assert!(scope.organization_ids.is_empty());
		assert!(scope.operating_unit_ids.is_empty());

		let units = units();
		let visible = filter_scoped(&units, &scope);
		assert_eq!(visible.len(), units.len());
	}

	#[test]
	fn test_filter_scoped_org_admin_keeps_own_org() {
		let scope = data_access_scope(&user(Some(RoleType::OrganizationAdmin)));
		assert_eq!(scope.organization_ids, vec!["org1"]);

		let units = units();
		let visible: Vec<_> = filter_scoped(&units, &scope).into_iter().map(|u| u.id.as_str()).collect();
		assert_eq!(visible, vec!["ou1", "ou2"]);
	}

	#[test]
	fn test_regular_user_sees_own_unit() {
		let u = user(Some(RoleType::Viewer));
		let scope = data_access_scope(&u);
		assert!(!scope.can_view_all_in_org);
		assert_eq!(scope.operating_unit_ids, vec!["ou1"]);

		let units = vec![ou("ou1", "org1"), ou("ou2", "org1"), ou("ou1", "org2")];
		let visible = filter_scoped(&units, &scope);
		assert_eq!(visible.len(), 1);
		assert_eq!(visible[0].organization_id, "org1");
	}
}

// vim: ts=4
