use dioxus::prelude::*;
use shared_types::{ServiceEndpoints, ServiceKind, ALL_SERVICES};
use shared_ui::components::{ActionControl, ActionKind, ActionVariant, FilterInput};
use shared_ui::Locale;

/// Report names shown until the reporting service is queried.
pub const SAMPLE_REPORTS: &[&str] = &[
    "Ventas por región",
    "Inventario mensual",
    "Cuentas por cobrar",
    "Usuarios activos",
    "Auditoría de accesos",
];

/// Page texts for one locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageText {
    pub title: &'static str,
    pub clear: &'static str,
    pub refresh: &'static str,
    pub empty: &'static str,
    pub services: &'static str,
    pub not_configured: &'static str,
}

impl PageText {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Es => PageText {
                title: "Reportes",
                clear: "Limpiar",
                refresh: "Actualizar",
                empty: "Ningún reporte coincide con la búsqueda.",
                services: "Servicios",
                not_configured: "sin configurar",
            },
            Locale::En => PageText {
                title: "Reports",
                clear: "Clear",
                refresh: "Refresh",
                empty: "No report matches the search.",
                services: "Services",
                not_configured: "not configured",
            },
        }
    }
}

/// Case-insensitive substring match; a blank query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_reports<'a>(reports: &[&'a str], query: &str) -> Vec<&'a str> {
    reports
        .iter()
        .copied()
        .filter(|name| matches_query(name, query))
        .collect()
}

/// Report list with a search field and toolbar actions.
#[component]
pub fn ReportsPage(endpoints: ServiceEndpoints, locale: Locale) -> Element {
    let text = PageText::for_locale(locale);
    let mut query = use_signal(String::new);
    let mut refreshes = use_signal(|| 0u32);

    let visible = filter_reports(SAMPLE_REPORTS, &query.read());
    let reporting_url = endpoints.get(ServiceKind::Reporting).map(str::to_string);
    let can_refresh = reporting_url.is_some();

    let PageText {
        title,
        clear,
        refresh,
        empty,
        not_configured,
        ..
    } = text;
    let service_lines: Vec<(&'static str, String)> = ALL_SERVICES
        .iter()
        .map(|kind| {
            let status = endpoints.get(*kind).unwrap_or(not_configured);
            (kind.env_key(), format!("{}: {status}", kind.display_name()))
        })
        .collect();
    let services = text.services;

    rsx! {
        main { class: "mx-auto max-w-2xl p-6 space-y-4",
            h1 { class: "text-xl font-semibold text-gray-900", "{title}" }
            form {
                class: "flex items-center gap-2",
                onsubmit: move |evt| evt.prevent_default(),
                FilterInput {
                    value: query.read().clone(),
                    placeholder: locale.search_placeholder().to_string(),
                    class: "flex-1",
                    on_change: move |value: String| query.set(value),
                }
                ActionControl {
                    variant: ActionVariant::Secondary,
                    disabled: query.read().is_empty(),
                    on_activate: move |_| query.set(String::new()),
                    "{clear}"
                }
                ActionControl {
                    kind: ActionKind::Submit,
                    disabled: !can_refresh,
                    on_activate: move |_| {
                        refreshes += 1;
                        tracing::info!(
                            url = reporting_url.as_deref().unwrap_or_default(),
                            count = *refreshes.peek(),
                            "report refresh requested"
                        );
                    },
                    "{refresh}"
                }
            }
            if visible.is_empty() {
                p { class: "text-sm text-gray-500", "{empty}" }
            } else {
                ul { class: "divide-y divide-gray-200 rounded-md border border-gray-200",
                    for name in visible {
                        li { key: "{name}", class: "px-4 py-2 text-sm text-gray-800", "{name}" }
                    }
                }
            }
            footer { class: "pt-4 text-xs text-gray-500",
                h2 { class: "font-medium", "{services}" }
                ul {
                    for (key, line) in service_lines {
                        li { key: "{key}", "{line}" }
                    }
                }
            }
        }
    }
}
