use std::str::FromStr;

use dioxus::prelude::*;
use shared_types::AppError;

/// Sizing, shape and transition shared by every variant.
pub const ACTION_BASE_CLASS: &str =
    "inline-flex items-center justify-center h-10 px-4 rounded-md text-sm font-medium transition-colors";

pub const PRIMARY_CLASS: &str = "bg-blue-600 text-white hover:bg-blue-700";
pub const PRIMARY_DISABLED_CLASS: &str = "bg-gray-300 text-gray-500 cursor-not-allowed";
pub const SECONDARY_CLASS: &str = "border border-gray-300 text-gray-700 hover:bg-gray-50";
pub const SECONDARY_DISABLED_CLASS: &str = "border border-gray-200 text-gray-400 cursor-not-allowed";

/// Visual variant for action controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Primary,
    Secondary,
}

/// All variants in display order.
pub const ALL_VARIANTS: &[ActionVariant] = &[ActionVariant::Primary, ActionVariant::Secondary];

impl ActionVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionVariant::Primary => "primary",
            ActionVariant::Secondary => "secondary",
        }
    }

    /// Variant classes for the given disabled state.
    ///
    /// The disabled row replaces the enabled one entirely, so no hover
    /// affordance survives on a disabled control.
    pub fn class(&self, disabled: bool) -> &'static str {
        match (self, disabled) {
            (ActionVariant::Primary, false) => PRIMARY_CLASS,
            (ActionVariant::Primary, true) => PRIMARY_DISABLED_CLASS,
            (ActionVariant::Secondary, false) => SECONDARY_CLASS,
            (ActionVariant::Secondary, true) => SECONDARY_DISABLED_CLASS,
        }
    }
}

impl FromStr for ActionVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ActionVariant::Primary),
            "secondary" => Ok(ActionVariant::Secondary),
            _ => Err(AppError::unknown_variant(s)),
        }
    }
}

/// Submission role of the rendered `button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionKind {
    /// Plain button, never submits a surrounding form.
    #[default]
    Button,
    Submit,
    Reset,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Button => "button",
            ActionKind::Submit => "submit",
            ActionKind::Reset => "reset",
        }
    }
}

/// Full class string: base, then variant, then the caller's extra classes.
///
/// The order is stable so caller utilities win conflicts. The extra slot
/// is always emitted, even when empty.
pub fn action_class(variant: ActionVariant, disabled: bool, extra: &str) -> String {
    format!("{ACTION_BASE_CLASS} {} {extra}", variant.class(disabled))
}

/// Forward one activation to `handler` unless the control is disabled.
///
/// Returns whether the handler ran.
pub fn dispatch_activation<E>(disabled: bool, evt: E, handler: impl FnOnce(E)) -> bool {
    if disabled {
        tracing::trace!("activation ignored on disabled control");
        return false;
    }
    handler(evt);
    true
}

/// Ensure a text label has visible content.
pub fn require_label(label: &str) -> Result<&str, AppError> {
    if label.trim().is_empty() {
        Err(AppError::missing_content("action control label is empty"))
    } else {
        Ok(label)
    }
}

/// A styled activatable control rendered as a native `button`.
#[derive(Props, Clone, PartialEq)]
pub struct ActionControlProps {
    #[props(default)]
    pub variant: ActionVariant,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub kind: ActionKind,
    /// Extra classes appended after the variant classes.
    #[props(default, into)]
    pub class: String,
    #[props(default)]
    pub on_activate: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn ActionControl(props: ActionControlProps) -> Element {
    let class = action_class(props.variant, props.disabled, &props.class);
    let disabled = props.disabled;
    let on_activate = props.on_activate;

    rsx! {
        button {
            r#type: props.kind.as_str(),
            class: class,
            disabled: disabled,
            "data-variant": props.variant.as_str(),
            onclick: move |evt| {
                if let Some(handler) = on_activate {
                    dispatch_activation(disabled, evt, |evt| handler.call(evt));
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;
    use std::cell::Cell;

    #[test]
    fn variant_default_is_primary() {
        assert_eq!(ActionVariant::default(), ActionVariant::Primary);
    }

    #[test]
    fn kind_default_does_not_submit() {
        assert_eq!(ActionKind::default().as_str(), "button");
    }

    #[test]
    fn variant_as_str_roundtrip() {
        for variant in ALL_VARIANTS {
            assert_eq!(variant.as_str().parse::<ActionVariant>().unwrap(), *variant);
        }
    }

    #[test]
    fn variant_parse_ignores_case_and_whitespace() {
        assert_eq!(
            " Secondary ".parse::<ActionVariant>().unwrap(),
            ActionVariant::Secondary
        );
    }

    #[test]
    fn unknown_variant_fails_fast() {
        let err = "danger".parse::<ActionVariant>().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::UnknownVariant);
        assert!("".parse::<ActionVariant>().is_err());
    }

    #[test]
    fn primary_enabled_has_accent_and_hover() {
        let class = action_class(ActionVariant::Primary, false, "");
        assert!(class.contains("bg-blue-600 text-white"));
        assert!(class.contains("hover:bg-blue-700"));
        assert!(!class.contains("bg-gray-300"));
        assert!(!class.contains("cursor-not-allowed"));
    }

    #[test]
    fn primary_disabled_is_muted_without_hover() {
        let class = action_class(ActionVariant::Primary, true, "");
        assert!(class.contains("bg-gray-300 text-gray-500"));
        assert!(class.contains("cursor-not-allowed"));
        assert!(!class.contains("hover:bg-blue-700"));
        assert!(!class.contains("bg-blue-600"));
    }

    #[test]
    fn secondary_enabled_is_outlined() {
        let class = action_class(ActionVariant::Secondary, false, "");
        assert!(class.contains("border border-gray-300 text-gray-700"));
        assert!(class.contains("hover:bg-gray-50"));
    }

    #[test]
    fn secondary_disabled_drops_hover_fill() {
        let class = action_class(ActionVariant::Secondary, true, "");
        assert!(class.contains("cursor-not-allowed"));
        assert!(!class.contains("hover:"));
    }

    #[test]
    fn class_order_is_base_variant_extra() {
        let class = action_class(ActionVariant::Secondary, false, "w-full mt-2");
        assert_eq!(class, format!("{ACTION_BASE_CLASS} {SECONDARY_CLASS} w-full mt-2"));
    }

    #[test]
    fn empty_extra_keeps_its_slot() {
        let class = action_class(ActionVariant::Primary, false, "");
        assert_eq!(class, format!("{ACTION_BASE_CLASS} {PRIMARY_CLASS} "));
    }

    #[test]
    fn extra_is_appended_verbatim() {
        let extra = "  bg-red-500   ";
        let class = action_class(ActionVariant::Primary, false, extra);
        assert!(class.ends_with(extra));
        assert!(class.starts_with(ACTION_BASE_CLASS));
    }

    #[test]
    fn disabled_activation_never_calls_handler() {
        let calls = Cell::new(0);
        for _ in 0..25 {
            let ran = dispatch_activation(true, (), |_| calls.set(calls.get() + 1));
            assert!(!ran);
        }
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn enabled_activation_calls_handler_once_per_event() {
        let calls = Cell::new(0);
        for expected in 1..=5 {
            assert!(dispatch_activation(false, (), |_| calls.set(calls.get() + 1)));
            assert_eq!(calls.get(), expected);
        }
    }

    #[test]
    fn activation_forwards_the_event() {
        let mut seen = None;
        dispatch_activation(false, 42u32, |evt| seen = Some(evt));
        assert_eq!(seen, Some(42));
    }

    #[test]
    fn require_label_rejects_blank() {
        assert_eq!(require_label("Save").unwrap(), "Save");
        let err = require_label("   ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::MissingContent);
    }
}
