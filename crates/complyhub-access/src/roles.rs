//! Predefined role groups
//!
//! Each [`RoleType`] has a template listing the catalog modules it grants and
//! at what level. Groups are stamped from a template for an organization, or
//! for one of its operating units.

use uuid::Uuid;

use crate::catalog::{MODULE_CATALOG, create_module_permission};
use crate::prelude::*;
use complyhub_types::AccessLevel::{Execute, Read, Write};
use complyhub_types::{GroupType, RoleType};

/// One module in a role template
struct Grant {
	module: &'static str,
	level: AccessLevel,
	overrides: &'static [(&'static str, AccessLevel)],
}

const fn grant(module: &'static str, level: AccessLevel) -> Grant {
	Grant { module, level, overrides: &[] }
}

struct RoleTemplate {
	name: &'static str,
	description: &'static str,
	grants: &'static [Grant],
}

const VIEWER: RoleTemplate = RoleTemplate {
	name: "Viewer",
	description: "Read-only access to dashboards, data queries, guidelines, and support",
	grants: &[
		grant("dashboard", Read),
		grant("dataQuery", Read),
		grant("guidelines", Read),
		grant("supportBot", Read),
	],
};

const ADMINISTRATOR: RoleTemplate = RoleTemplate {
	name: "Administrator",
	description: "Can run assessments and view results, but cannot manage users or system settings",
	grants: &[
		grant("dashboard", Read),
		grant("dataQuery", Read),
		grant("webpageScan", Execute),
		grant("pdfScan", Execute),
		grant("sitemap", Execute),
		grant("scanMonitor", Read),
		grant("scansScheduler", Execute),
		grant("guidelines", Read),
		grant("supportBot", Read),
	],
};

const OPERATING_UNIT_ADMIN: RoleTemplate = RoleTemplate {
	name: "Operating Unit Administrator",
	description: "Full access to all modules within their operating unit, including intake and settings",
	grants: &[
		grant("dashboard", Read),
		grant("dataQuery", Read),
		grant("uptimeMonitoring", Execute),
		grant("webpageScan", Execute),
		grant("pdfScan", Execute),
		grant("sitemap", Execute),
		grant("scanMonitor", Read),
		grant("scansScheduler", Execute),
		grant("intake", Write),
		Grant {
			module: "settings",
			level: Write,
			overrides: &[
				("view_settings", Read),
				("edit_domains", Write),
				("edit_branding", Write),
				("edit_integrations", Write),
			],
		},
		grant("guidelines", Read),
		grant("supportBot", Read),
	],
};

const REMEDIATOR_TESTER: RoleTemplate = RoleTemplate {
	name: "Remediator/Tester",
	description: "Access to all modules plus specialized testing and remediation tools",
	grants: &[
		grant("dashboard", Read),
		grant("dataQuery", Read),
		grant("webpageScan", Execute),
		grant("pdfScan", Execute),
		grant("sitemap", Execute),
		grant("scanMonitor", Read),
		grant("scansScheduler", Execute),
		grant("manualTesting", Write),
		grant("pdfRemediation", Write),
		grant("guidelines", Read),
		grant("supportBot", Read),
	],
};

const ORGANIZATION_ADMIN: RoleTemplate = RoleTemplate {
	name: "Organization Administrator",
	description: "Full access to all modules within their organization, can manage users/groups across all operating units",
	grants: &[
		grant("dashboard", Read),
		grant("dataQuery", Read),
		grant("uptimeMonitoring", Execute),
		grant("webpageScan", Execute),
		grant("pdfScan", Execute),
		grant("sitemap", Execute),
		grant("scanMonitor", Read),
		grant("scansScheduler", Execute),
		grant("intake", Write),
		grant("manualTesting", Write),
		grant("pdfRemediation", Write),
		grant("settings", Write),
		Grant {
			module: "usersRoles",
			level: Execute,
			overrides: &[
				("view_users", Read),
				("create_users", Execute),
				("edit_users", Execute),
				("manage_groups", Execute),
				("view_audit_logs", Read),
			],
		},
		grant("guidelines", Read),
		grant("supportBot", Read),
	],
};

// global admin grants every catalog module at execute, see `role_permissions`
const GLOBAL_ADMIN: RoleTemplate = RoleTemplate {
	name: "Global Administrator",
	description: "Full system access including user management and global settings",
	grants: &[],
};

fn template(role: RoleType) -> &'static RoleTemplate {
	match role {
		RoleType::Viewer => &VIEWER,
		RoleType::Administrator => &ADMINISTRATOR,
		RoleType::OperatingUnitAdmin => &OPERATING_UNIT_ADMIN,
		RoleType::RemediatorTester => &REMEDIATOR_TESTER,
		RoleType::OrganizationAdmin => &ORGANIZATION_ADMIN,
		RoleType::GlobalAdmin => &GLOBAL_ADMIN,
	}
}

/// Module permissions a role grants
pub fn role_permissions(role: RoleType) -> ClResult<Vec<ModulePermission>> {
	if role == RoleType::GlobalAdmin {
		return MODULE_CATALOG
			.iter()
			.map(|m| create_module_permission(m.key, Execute, &[]))
			.collect();
	}
	template(role)
		.grants
		.iter()
		.map(|g| create_module_permission(g.module, g.level, g.overrides))
		.collect()
}

/// Stamp a predefined group for `role`.
///
/// With an `operating_unit_id` the group is scoped to that unit, otherwise to
/// the whole organization.
pub fn predefined_group(
	role: RoleType,
	organization_id: &str,
	operating_unit_id: Option<&str>,
	created_by: &str,
) -> ClResult<Group> {
	let tpl = template(role);
	let scope = if operating_unit_id.is_some() { Scope::OperatingUnit } else { Scope::Organization };
	let now = Timestamp::now();
	debug!(role = ?role, org = organization_id, scope = %scope, "Creating predefined group");

	Ok(Group {
		id: Uuid::new_v4().to_string(),
		name: tpl.name.to_string(),
		group_type: GroupType::Predefined,
		role_type: Some(role),
		scope,
		organization_id: organization_id.to_string(),
		operating_unit_id: operating_unit_id.map(str::to_string),
		permissions: role_permissions(role)?,
		description: Some(tpl.description.to_string()),
		is_system_group: true,
		created_at: now,
		updated_at: now,
		created_by: created_by.to_string(),
	})
}


// vim: ts=4
