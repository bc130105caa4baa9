pub use complyhub_types::prelude::*;
pub use complyhub_types::{
	FeaturePermission, Group, InheritLevel, InheritanceConfig, InheritanceRule,
	InheritedPermission, ModulePermission, Scope,
};

pub use tracing::{debug, info, warn};

// vim: ts=4
