use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

use crate::Locale;

pub const FILTER_CONTAINER_CLASS: &str =
    "relative flex items-center w-full rounded-md border border-gray-300 bg-white";
pub const FILTER_ICON_CLASS: &str = "pointer-events-none absolute left-3 text-gray-400";
pub const FILTER_FIELD_CLASS: &str =
    "w-full h-10 pl-9 pr-3 bg-transparent text-sm text-gray-900 placeholder:text-gray-400 focus:outline-none";

/// Container class: fixed container style, then the caller's extra classes.
pub fn filter_input_class(extra: &str) -> String {
    format!("{FILTER_CONTAINER_CLASS} {extra}")
}

/// The placeholder is only shown while the field is empty.
pub fn visible_placeholder<'a>(value: &str, placeholder: &'a str) -> Option<&'a str> {
    value.is_empty().then_some(placeholder)
}

/// A single-line search field with a leading search icon.
///
/// The field is controlled: `value` is rendered verbatim and every edit is
/// reported through `on_change` with the raw text. Nothing is trimmed,
/// debounced or stored here.
#[component]
pub fn FilterInput(
    value: String,
    #[props(default)] on_change: EventHandler<String>,
    #[props(default = Locale::default().search_placeholder().to_string())] placeholder: String,
    #[props(default)] class: String,
) -> Element {
    let placeholder = visible_placeholder(&value, &placeholder).map(str::to_string);

    rsx! {
        div { class: filter_input_class(&class),
            span { class: FILTER_ICON_CLASS, aria_hidden: "true",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
            }
            input {
                r#type: "text",
                class: FILTER_FIELD_CLASS,
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
