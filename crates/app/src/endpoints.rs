use shared_types::{ServiceEndpoints, ALL_SERVICES};
use shared_ui::Locale;

/// Service URLs baked in by `build.rs`.
///
/// Values were validated at build time; an unset service is `None`.
pub fn compiled_endpoints() -> ServiceEndpoints {
    endpoints_from_values(
        option_env!("APP_SECURITY_SERVICE_URL"),
        option_env!("APP_BUSINESS_OBJECT_SERVICE_URL"),
        option_env!("APP_REPORTING_SERVICE_URL"),
    )
}

/// Blank values count as unset.
fn endpoints_from_values(
    security: Option<&str>,
    business_objects: Option<&str>,
    reporting: Option<&str>,
) -> ServiceEndpoints {
    let present = |v: Option<&str>| {
        v.map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    ServiceEndpoints {
        security: present(security),
        business_objects: present(business_objects),
        reporting: present(reporting),
    }
}

/// UI locale baked in by `build.rs`, falling back to the default locale.
pub fn compiled_locale() -> Locale {
    option_env!("APP_UI_LOCALE")
        .map(Locale::from_tag)
        .unwrap_or_default()
}

/// Log which services are configured. Called once at startup.
pub fn log_endpoints(endpoints: &ServiceEndpoints) {
    for kind in ALL_SERVICES {
        match endpoints.get(*kind) {
            Some(url) => tracing::info!(service = kind.display_name(), %url, "service endpoint"),
            None => tracing::warn!(
                service = kind.display_name(),
                env = kind.env_key(),
                "service endpoint not configured"
            ),
        }
    }
}
