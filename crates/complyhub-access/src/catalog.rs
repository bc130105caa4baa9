//! Module catalog
//!
//! Every module a group can be granted, with its display name and the
//! features it exposes. Predefined role groups are built from this table.

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
	pub key: &'static str,
	pub name: &'static str,
	pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDef {
	pub key: &'static str,
	pub name: &'static str,
	pub features: &'static [FeatureDef],
}

const fn f(key: &'static str, name: &'static str, description: &'static str) -> FeatureDef {
	FeatureDef { key, name, description }
}

pub const MODULE_CATALOG: &[ModuleDef] = &[
	ModuleDef {
		key: "dashboard",
		name: "Dashboard",
		features: &[
			f("view_metrics", "View Metrics", "View accessibility metrics and KPIs"),
			f("view_alerts", "View Alerts", "View system alerts and notifications"),
			f("export_data", "Export Data", "Export dashboard data to various formats"),
		],
	},
	ModuleDef {
		key: "dataQuery",
		name: "Data Query Module",
		features: &[
			f("run_queries", "Run Queries", "Execute data queries and searches"),
			f("save_queries", "Save Queries", "Save and manage query templates"),
			f("export_results", "Export Results", "Export query results to files"),
			f("schedule_queries", "Schedule Queries", "Schedule recurring queries"),
		],
	},
	ModuleDef {
		key: "uptimeMonitoring",
		name: "Uptime Monitoring Tool",
		features: &[
			f("view_status", "View Status", "View uptime status and availability metrics"),
			f(
				"configure_monitors",
				"Configure Monitors",
				"Configure uptime monitoring targets and thresholds",
			),
			f("view_alerts", "View Alerts", "View uptime alerts and notifications"),
			f("view_reports", "View Reports", "View uptime reports and historical data"),
		],
	},
	ModuleDef {
		key: "webpageScan",
		name: "Webpage Scan",
		features: &[
			f("start_scan", "Start Scan", "Initiate new webpage scans"),
			f("view_results", "View Results", "View scan results and reports"),
			f("download_reports", "Download Reports", "Download scan reports"),
			f("schedule_scans", "Schedule Scans", "Schedule recurring scans"),
		],
	},
	ModuleDef {
		key: "pdfScan",
		name: "PDF Accessibility Scan",
		features: &[
			f("upload_pdf", "Upload PDF", "Upload PDF files for scanning"),
			f("view_results", "View Results", "View PDF scan results"),
			f("download_reports", "Download Reports", "Download PDF scan reports"),
		],
	},
	ModuleDef {
		key: "sitemap",
		name: "Sitemap Generator",
		features: &[
			f("generate_sitemap", "Generate Sitemap", "Generate sitemaps from URLs"),
			f("view_structure", "View Structure", "View site structure visualization"),
			f("export_sitemap", "Export Sitemap", "Export sitemap in various formats"),
		],
	},
	ModuleDef {
		key: "scanMonitor",
		name: "Scans Monitor",
		features: &[
			f("view_scans", "View Scans", "View all scan statuses"),
			f("cancel_scans", "Cancel Scans", "Cancel running scans"),
			f("retry_scans", "Retry Scans", "Retry failed scans"),
			f("view_logs", "View Logs", "View detailed scan logs"),
		],
	},
	ModuleDef {
		key: "scansScheduler",
		name: "Scans Scheduler",
		features: &[
			f("create_schedules", "Create Schedules", "Create new scan schedules"),
			f("edit_schedules", "Edit Schedules", "Modify existing schedules"),
			f("delete_schedules", "Delete Schedules", "Delete scan schedules"),
			f("view_schedules", "View Schedules", "View all scheduled scans"),
		],
	},
	ModuleDef {
		key: "intake",
		name: "Intake Form",
		features: &[
			f("create_intake", "Create Intake", "Create new intake forms"),
			f("edit_intake", "Edit Intake", "Edit existing intake forms"),
			f("view_intakes", "View Intakes", "View all intake forms"),
			f("approve_intakes", "Approve Intakes", "Approve submitted intakes"),
		],
	},
	ModuleDef {
		key: "manualTesting",
		name: "Manual Testing Tool",
		features: &[
			f("create_test", "Create Test", "Create new manual test sessions"),
			f("edit_test", "Edit Test", "Edit test sessions"),
			f("view_tests", "View Tests", "View all test sessions"),
			f("score_tests", "Score Tests", "Score and evaluate tests"),
			f("upload_evidence", "Upload Evidence", "Upload test evidence files"),
		],
	},
	ModuleDef {
		key: "pdfRemediation",
		name: "PDF Remediation Module",
		features: &[
			f("view_issues", "View Issues", "View PDF accessibility issues"),
			f("remediate_pdf", "Remediate PDF", "Fix PDF accessibility issues"),
			f("track_progress", "Track Progress", "Track remediation progress"),
			f("export_fixed", "Export Fixed", "Export remediated PDFs"),
		],
	},
	ModuleDef {
		key: "guidelines",
		name: "Guidelines & Resources",
		features: &[
			f("view_guidelines", "View Guidelines", "View WCAG and compliance guidelines"),
			f("download_resources", "Download Resources", "Download compliance resources"),
			f("search_content", "Search Content", "Search through guidelines content"),
		],
	},
	ModuleDef {
		key: "supportBot",
		name: "Training & Customer Service Chatbot",
		features: &[
			f("chat_support", "Chat Support", "Use chatbot for support"),
			f("view_history", "View History", "View chat history"),
			f("rate_responses", "Rate Responses", "Rate chatbot responses"),
		],
	},
	ModuleDef {
		key: "settings",
		name: "Settings",
		features: &[
			f("view_settings", "View Settings", "View system settings"),
			f("edit_domains", "Edit Domains", "Manage domain settings"),
			f("edit_branding", "Edit Branding", "Manage branding settings"),
			f("edit_integrations", "Edit Integrations", "Manage integrations"),
		],
	},
	ModuleDef {
		key: "usersRoles",
		name: "Users & Roles",
		features: &[
			f("view_users", "View Users", "View all users"),
			f("create_users", "Create Users", "Create new users"),
			f("edit_users", "Edit Users", "Edit user details"),
			f("manage_groups", "Manage Groups", "Manage user groups"),
			f("view_audit_logs", "View Audit Logs", "View system audit logs"),
		],
	},
];

pub fn module_def(module_key: &str) -> Option<&'static ModuleDef> {
	MODULE_CATALOG.iter().find(|m| m.key == module_key)
}

/// Keys of every catalog module, in catalog order
pub fn all_modules() -> Vec<&'static str> {
	MODULE_CATALOG.iter().map(|m| m.key).collect()
}

/// Feature keys of a module, empty for an unknown module
pub fn module_features(module_key: &str) -> Vec<&'static str> {
	module_def(module_key).map(|m| m.features.iter().map(|f| f.key).collect()).unwrap_or_default()
}

/// Grant `module_key` at `level` with every catalog feature.
///
/// Features default to the module level; `overrides` sets individual features
/// to another level. Unknown modules and override keys the module does not
/// have are rejected.
pub fn create_module_permission(
	module_key: &str,
	level: AccessLevel,
	overrides: &[(&str, AccessLevel)],
) -> ClResult<ModulePermission> {
	let def = module_def(module_key)
		.ok_or_else(|| Error::ValidationError(format!("unknown module '{}'", module_key)))?;
	if let Some((key, _)) = overrides.iter().find(|(key, _)| !def.features.iter().any(|f| f.key == *key)) {
		return Err(Error::ValidationError(format!(
			"module '{}' has no feature '{}'",
			module_key, key
		)));
	}

	let mut perm = ModulePermission::new(def.key, def.name, level);
	for feat in def.features {
		let feat_level = overrides
			.iter()
			.find(|(key, _)| *key == feat.key)
			.map_or(level, |(_, l)| *l);
		let mut fp = FeaturePermission::new(feat.key, feat.name, feat_level);
		fp.description = Some(feat.description.to_string());
		perm = perm.with_feature(fp);
	}
	Ok(perm)
}


// vim: ts=4
