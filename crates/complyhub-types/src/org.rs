//! Organizations, operating units, groups and users

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::permission::ModulePermission;
use crate::types::Timestamp;

/// Where a group's permissions apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
	Organization,
	OperatingUnit,
}

impl Scope {
	pub fn as_str(self) -> &'static str {
		match self {
			Scope::Organization => "organization",
			Scope::OperatingUnit => "operating_unit",
		}
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
	#[default]
	Active,
	Inactive,
	Trial,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
	pub id: String,
	pub name: String,
	/// URL-friendly identifier
	pub slug: String,
	#[serde(default)]
	pub domains: Vec<String>,
	#[serde(default)]
	pub status: OrgStatus,
	pub billing_email: Option<String>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
	pub created_by: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingUnit {
	pub id: String,
	pub organization_id: String,
	pub name: String,
	#[serde(default)]
	pub domains: Vec<String>,
	pub description: Option<String>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
	Predefined,
	#[default]
	Custom,
}

/// Built-in roles attached to predefined groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
	Viewer,
	Administrator,
	GlobalAdmin,
	RemediatorTester,
	OperatingUnitAdmin,
	OrganizationAdmin,
}

/// A named bundle of module permissions.
///
/// Organization-scoped groups have no `operating_unit_id`; operating-unit
/// groups carry the unit they apply to.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	pub id: String,
	pub name: String,
	#[serde(rename = "type", default)]
	pub group_type: GroupType,
	pub role_type: Option<RoleType>,
	pub scope: Scope,
	pub organization_id: String,
	pub operating_unit_id: Option<String>,
	#[serde(default)]
	pub permissions: Vec<ModulePermission>,
	pub description: Option<String>,
	#[serde(default)]
	pub is_system_group: bool,
	#[serde(default)]
	pub created_at: Timestamp,
	#[serde(default)]
	pub updated_at: Timestamp,
	#[serde(default)]
	pub created_by: String,
}

impl Group {
	pub fn is_org_scoped(&self) -> bool {
		self.scope == Scope::Organization
	}

	pub fn is_ou_scoped(&self) -> bool {
		self.scope == Scope::OperatingUnit
	}

	pub fn has_role(&self, role: RoleType) -> bool {
		self.role_type == Some(role)
	}

	pub fn permission(&self, module_key: &str) -> Option<&ModulePermission> {
		self.permissions.iter().find(|p| p.module_key == module_key)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
	#[default]
	Active,
	Inactive,
	Pending,
	Suspended,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: String,
	pub email: String,
	pub first_name: String,
	pub last_name: String,
	pub operating_unit_id: String,
	#[serde(default)]
	pub group_ids: Vec<String>,
	#[serde(default)]
	pub status: UserStatus,
	pub last_login: Option<Timestamp>,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
	pub created_by: String,
	pub invited_by: Option<String>,
}

/// A user joined with the entities it references.
///
/// `effective_permissions` is a derived cache filled in by the resolution
/// engine. It is never an input to a later resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithDetails {
	#[serde(flatten)]
	pub user: User,
	pub operating_unit: OperatingUnit,
	pub organization: Option<Organization>,
	#[serde(default)]
	pub groups: Vec<Group>,
	#[serde(default)]
	pub effective_permissions: Vec<ModulePermission>,
}

impl UserWithDetails {
	pub fn organization_id(&self) -> Option<&str> {
		self.organization.as_ref().map(|o| o.id.as_str())
	}

	pub fn has_role(&self, role: RoleType) -> bool {
		self.groups.iter().any(|g| g.has_role(role))
	}
}

/// Which organizations and operating units a user may see data from.
///
/// With `can_view_all_in_org` set, an empty id list means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataAccessScope {
	pub organization_ids: Vec<String>,
	pub operating_unit_ids: Vec<String>,
	pub can_view_all_in_org: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_group_json() {
		let json = r#"{
			"id": "g1",
			"name": "Org readers",
			"type": "predefined",
			"roleType": "organization_admin",
			"scope": "organization",
			"organizationId": "org1",
			"permissions": [],
			"isSystemGroup": true
		}"#;
		let group: Group = serde_json::from_str(json).unwrap();
		assert!(group.is_org_scoped());
		assert_eq!(group.group_type, GroupType::Predefined);
		assert!(group.has_role(RoleType::OrganizationAdmin));
		assert_eq!(group.operating_unit_id, None);

		let out = serde_json::to_value(&group).unwrap();
		assert_eq!(out["scope"], "organization");
		assert_eq!(out["type"], "predefined");
		assert!(out.get("operatingUnitId").is_none());
	}

	#[test]
	fn test_unknown_scope_rejected() {
		let json = r#"{"id": "g1", "name": "x", "scope": "tenant", "organizationId": "o"}"#;
		assert!(serde_json::from_str::<Group>(json).is_err());
	}
}

// vim: ts=4
