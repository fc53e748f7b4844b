//! Toolchain artifacts required by the configured GWT version

use crate::{config::Config, error::Result, version::GwtVersion};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

pub const GWT_GROUP: &str = "com.google.gwt";
pub const GWT_DEV: &str = "gwt-dev";
pub const GWT_USER: &str = "gwt-user";
pub const GWT_CODESERVER: &str = "gwt-codeserver";
pub const GWT_ELEMENTAL: &str = "gwt-elemental";
pub const GWT_SERVLET: &str = "gwt-servlet";

/// Oldest release that ships the code server and elemental artifacts
pub const SUPER_DEV_MIN_VERSION: (u32, u32) = (2, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyScope {
    /// The GWT SDK itself, needed by every GWT task
    GwtSdk,
    /// Additional GWT libraries
    Gwt,
    /// Needed by the application at runtime
    Runtime,
}

impl DependencyScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyScope::GwtSdk => "gwtSdk",
            DependencyScope::Gwt => "gwt",
            DependencyScope::Runtime => "runtime",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub scope: DependencyScope,
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Dependency {
    fn gwt(scope: DependencyScope, artifact: &str, version: &str) -> Self {
        Self {
            scope,
            group: GWT_GROUP.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// What to do with a version string that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Log a warning and skip the version specific dependencies
    #[default]
    Warn,
    /// Fail with the parse error
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum VersionState {
    Unspecified,
    Malformed(String),
    Parsed(GwtVersion),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyPlan {
    pub version: VersionState,
    pub dependencies: Vec<Dependency>,
    pub super_dev_available: bool,
}

impl DependencyPlan {
    pub fn resolve(config: &Config, policy: VersionPolicy) -> Result<Self> {
        let raw = config.gwt_version.as_deref();
        let version = match GwtVersion::parse_optional(raw) {
            Ok(Some(version)) => VersionState::Parsed(version),
            Ok(None) => VersionState::Unspecified,
            Err(e) => match policy {
                VersionPolicy::Strict => return Err(e.into()),
                VersionPolicy::Warn => {
                    warn!("{}", e);
                    VersionState::Malformed(e.version)
                }
            },
        };

        let (major_min, minor_min) = SUPER_DEV_MIN_VERSION;
        let mut dependencies = Vec::new();

        let super_dev_available = match &version {
            VersionState::Parsed(parsed) => {
                // Use the string as written so suffixes survive unchanged
                let v = raw.unwrap_or_default();
                dependencies.push(Dependency::gwt(DependencyScope::GwtSdk, GWT_DEV, v));
                dependencies.push(Dependency::gwt(DependencyScope::GwtSdk, GWT_USER, v));
                dependencies.push(Dependency::gwt(DependencyScope::Runtime, GWT_SERVLET, v));

                if parsed.is_at_least(major_min, minor_min) {
                    if config.codeserver_enabled() {
                        dependencies.push(Dependency::gwt(DependencyScope::Gwt, GWT_CODESERVER, v));
                    }
                    if config.elemental_enabled() {
                        dependencies.push(Dependency::gwt(DependencyScope::Gwt, GWT_ELEMENTAL, v));
                    }
                    config.codeserver_enabled()
                } else {
                    warn!("GWT version is <2.5 -> additional dependencies are not added.");
                    false
                }
            }
            // Without a usable version the code server floor is assumed
            VersionState::Unspecified | VersionState::Malformed(_) => config.codeserver_enabled(),
        };

        debug!(
            "Resolved {} GWT dependencies, super dev available: {}",
            dependencies.len(),
            super_dev_available
        );

        Ok(Self {
            version,
            dependencies,
            super_dev_available,
        })
    }

    pub fn for_scope(&self, scope: DependencyScope) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(move |dep| dep.scope == scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn config(version: &str) -> Config {
        Config {
            gwt_version: Some(version.to_string()),
            ..Default::default()
        }
    }

    fn coordinates(plan: &DependencyPlan) -> Vec<String> {
        plan.dependencies.iter().map(|dep| dep.to_string()).collect()
    }

    #[test]
    fn test_unspecified_version() {
        let plan = DependencyPlan::resolve(&Config::default(), VersionPolicy::Strict).unwrap();
        assert_eq!(plan.version, VersionState::Unspecified);
        assert!(plan.dependencies.is_empty());
        assert!(plan.super_dev_available);
    }

    #[test]
    fn test_old_version_skips_codeserver() {
        let plan = DependencyPlan::resolve(&config("2.4.0"), VersionPolicy::Warn).unwrap();
        assert_eq!(
            coordinates(&plan),
            vec![
                "com.google.gwt:gwt-dev:2.4.0",
                "com.google.gwt:gwt-user:2.4.0",
                "com.google.gwt:gwt-servlet:2.4.0",
            ]
        );
        assert!(!plan.super_dev_available);
    }

    #[test]
    fn test_codeserver_and_elemental() {
        let mut config = config("2.8.2");
        config.elemental = Some(true);

        let plan = DependencyPlan::resolve(&config, VersionPolicy::Warn).unwrap();
        assert_eq!(plan.dependencies.len(), 5);
        assert!(plan.super_dev_available);

        let extra: Vec<String> = plan
            .for_scope(DependencyScope::Gwt)
            .map(|dep| dep.artifact.clone())
            .collect();
        assert_eq!(extra, vec![GWT_CODESERVER, GWT_ELEMENTAL]);
        assert_eq!(plan.for_scope(DependencyScope::Runtime).count(), 1);
    }

    #[test]
    fn test_codeserver_disabled() {
        let mut config = config("2.8.2");
        config.codeserver = Some(false);

        let plan = DependencyPlan::resolve(&config, VersionPolicy::Warn).unwrap();
        assert_eq!(plan.dependencies.len(), 3);
        assert!(!plan.super_dev_available);
    }

    #[test]
    fn test_two_part_version_keeps_raw_string() {
        let plan = DependencyPlan::resolve(&config("2.8"), VersionPolicy::Warn).unwrap();
        assert_eq!(plan.dependencies[0].version, "2.8");
    }

    #[test]
    fn test_malformed_version_policies() {
        let plan = DependencyPlan::resolve(&config("abc.5.0"), VersionPolicy::Warn).unwrap();
        assert_eq!(plan.version, VersionState::Malformed("abc.5.0".to_string()));
        assert!(plan.dependencies.is_empty());

        let err = DependencyPlan::resolve(&config("abc.5.0"), VersionPolicy::Strict).unwrap_err();
        assert!(matches!(err, Error::VersionParse(e) if e.version == "abc.5.0"));
    }
}
