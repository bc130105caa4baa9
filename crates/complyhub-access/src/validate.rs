//! Inheritance config validation
//!
//! Validation is advisory: it reports every problem it finds as a human-readable
//! message and leaves the decision (reject the write or warn) to the caller.
//! The rest of the engine assumes it only sees configs that passed.

use std::collections::HashSet;

use crate::prelude::*;

/// Check `config` for structural problems. An empty list means valid.
pub fn validate_inheritance_config(config: &InheritanceConfig) -> Vec<String> {
	let mut errors = Vec::new();

	if config.organization_id.is_empty() {
		errors.push("Organization ID is required".to_string());
	}

	if config.enable_inheritance && config.rules.is_empty() {
		errors.push(
			"At least one inheritance rule is required when inheritance is enabled".to_string(),
		);
	}

	let mut seen = HashSet::new();
	let mut duplicates: Vec<&str> = Vec::new();
	for rule in &config.rules {
		if !seen.insert(rule.module_key.as_str()) && !duplicates.contains(&rule.module_key.as_str())
		{
			duplicates.push(&rule.module_key);
		}
	}
	if !duplicates.is_empty() {
		errors.push(format!(
			"Duplicate inheritance rules found for modules: {}",
			duplicates.join(", ")
		));
	}

	for rule in &config.rules {
		errors.extend(check_rule(config, rule));
	}

	errors
}

fn check_rule(config: &InheritanceConfig, rule: &InheritanceRule) -> Vec<String> {
	let mut errors = Vec::new();

	if rule.module_key.is_empty() {
		errors.push(format!("Inheritance rule '{}' has no module key", rule.id));
	}
	if !config.organization_id.is_empty() && rule.organization_id != config.organization_id {
		errors.push(format!(
			"Inheritance rule '{}' belongs to organization '{}', not '{}'",
			rule.id, rule.organization_id, config.organization_id
		));
	}
	if rule.source_scope != Scope::Organization {
		errors.push(format!(
			"Inheritance rule '{}' must inherit from organization scope, got '{}'",
			rule.id, rule.source_scope
		));
	}
	if rule.target_scope != Scope::OperatingUnit {
		errors.push(format!(
			"Inheritance rule '{}' must target operating_unit scope, got '{}'",
			rule.id, rule.target_scope
		));
	}

	errors
}

/// [`validate_inheritance_config`] as a `Result`, for callers that reject
/// invalid configs outright.
pub fn ensure_valid_config(config: &InheritanceConfig) -> ClResult<()> {
	let errors = validate_inheritance_config(config);
	if errors.is_empty() {
		return Ok(());
	}
	warn!(org = %config.organization_id, errors = ?errors, "Invalid inheritance config");
	Err(Error::ValidationError(errors.join("; ")))
}


// vim: ts=4
