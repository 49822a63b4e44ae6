use serde::{Deserialize, Serialize};

use crate::AppError;

/// Backend services the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Security,
    BusinessObjects,
    Reporting,
}

/// All service kinds in display order.
pub const ALL_SERVICES: &[ServiceKind] = &[
    ServiceKind::Security,
    ServiceKind::BusinessObjects,
    ServiceKind::Reporting,
];

impl ServiceKind {
    /// Environment variable the build reads.
    pub fn env_key(&self) -> &'static str {
        match self {
            ServiceKind::Security => "SECURITY_SERVICE_URL",
            ServiceKind::BusinessObjects => "BUSINESS_OBJECT_SERVICE_URL",
            ServiceKind::Reporting => "REPORTING_SERVICE_URL",
        }
    }

    /// Compile-time env name the build exports the validated URL under.
    ///
    /// Distinct from [`env_key`](Self::env_key) so that a raw value set in
    /// the shell never reaches `option_env!` unvalidated.
    pub fn compiled_key(&self) -> &'static str {
        match self {
            ServiceKind::Security => "APP_SECURITY_SERVICE_URL",
            ServiceKind::BusinessObjects => "APP_BUSINESS_OBJECT_SERVICE_URL",
            ServiceKind::Reporting => "APP_REPORTING_SERVICE_URL",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceKind::Security => "Security",
            ServiceKind::BusinessObjects => "Business objects",
            ServiceKind::Reporting => "Reporting",
        }
    }
}

/// Base URLs of the backend services.
///
/// Mirrors the `[endpoints]` table of `config.toml`. Every field is
/// optional so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ServiceEndpoints {
    #[serde(default)]
    pub security: Option<String>,
    #[serde(default)]
    pub business_objects: Option<String>,
    #[serde(default)]
    pub reporting: Option<String>,
}

impl ServiceEndpoints {
    pub fn get(&self, kind: ServiceKind) -> Option<&str> {
        match kind {
            ServiceKind::Security => self.security.as_deref(),
            ServiceKind::BusinessObjects => self.business_objects.as_deref(),
            ServiceKind::Reporting => self.reporting.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: ServiceKind) -> &mut Option<String> {
        match kind {
            ServiceKind::Security => &mut self.security,
            ServiceKind::BusinessObjects => &mut self.business_objects,
            ServiceKind::Reporting => &mut self.reporting,
        }
    }

    /// Services with no configured URL.
    pub fn missing(&self) -> Vec<ServiceKind> {
        ALL_SERVICES
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }

    /// Merge file values with environment values and validate the result.
    ///
    /// `lookup` is consulted with each [`ServiceKind::env_key`]. A non-blank
    /// environment value wins over the file; blank values count as unset.
    pub fn resolve<F>(file: &ServiceEndpoints, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut resolved = ServiceEndpoints::default();
        for kind in ALL_SERVICES.iter().copied() {
            let from_env = lookup(kind.env_key()).filter(|v| !v.trim().is_empty());
            let from_file = file
                .get(kind)
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string);
            if let Some(raw) = from_env.or(from_file) {
                *resolved.slot_mut(kind) = Some(validate_endpoint(kind, &raw)?);
            }
        }
        Ok(resolved)
    }
}

/// Check that `raw` is an absolute http(s) URL with a host and return it
/// trimmed, without a trailing slash.
pub fn validate_endpoint(kind: ServiceKind, raw: &str) -> Result<String, AppError> {
    let url = raw.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::invalid_endpoint(format!(
                "{} must start with http:// or https:// (got `{url}`)",
                kind.env_key()
            ))
        })?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() {
        return Err(AppError::invalid_endpoint(format!(
            "{} has no host (got `{url}`)",
            kind.env_key()
        )));
    }
    if url.chars().any(char::is_whitespace) {
        return Err(AppError::invalid_endpoint(format!(
            "{} contains whitespace (got `{url}`)",
            kind.env_key()
        )));
    }

    Ok(url.trim_end_matches('/').to_string())
}
