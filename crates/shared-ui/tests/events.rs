use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dioxus::dioxus_core::{ElementId, Event, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedFormData, SerializedHtmlEventConverter,
    SerializedMouseData,
};
use pretty_assertions::assert_eq;
use shared_ui::components::*;

thread_local! {
    static CLICKS: Cell<usize> = const { Cell::new(0) };
    static CHANGES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn record_click() {
    CLICKS.with(|c| c.set(c.get() + 1));
}

fn clicks() -> usize {
    CLICKS.with(Cell::get)
}

fn changes() -> Vec<String> {
    CHANGES.with(|c| c.borrow().clone())
}

/// Build the dom and collect every registered listener as `(event, element)`.
fn mount(app: fn() -> Element) -> (VirtualDom, Vec<(String, ElementId)>) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mut dom = VirtualDom::new(app);
    let mut mutations = Mutations::default();
    dom.rebuild(&mut mutations);
    let listeners = mutations
        .edits
        .into_iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } => Some((name, id)),
            _ => None,
        })
        .collect();
    (dom, listeners)
}

fn listener(listeners: &[(String, ElementId)], name: &str) -> ElementId {
    listeners
        .iter()
        .find(|(event, _)| event == name)
        .map(|(_, id)| *id)
        .unwrap_or_else(|| panic!("no `{name}` listener registered"))
}

fn click(dom: &VirtualDom, id: ElementId) {
    let data = PlatformEventData::new(Box::<SerializedMouseData>::default());
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("click", event, id);
}

fn type_text(dom: &VirtualDom, id: ElementId, value: &str) {
    let form: SerializedFormData =
        serde_json::from_value(serde_json::json!({ "value": value })).unwrap();
    let data = PlatformEventData::new(Box::new(form));
    let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
    dom.runtime().handle_event("input", event, id);
}

fn enabled_save() -> Element {
    rsx! {
        ActionControl { on_activate: move |_| record_click(), "Save" }
    }
}

fn disabled_save() -> Element {
    rsx! {
        ActionControl { disabled: true, on_activate: move |_| record_click(), "Save" }
    }
}

fn recording_filter() -> Element {
    rsx! {
        FilterInput {
            value: "",
            on_change: move |value: String| CHANGES.with(|c| c.borrow_mut().push(value)),
        }
    }
}

#[test]
fn enabled_control_runs_handler_once_per_click() {
    let (dom, listeners) = mount(enabled_save);
    let button = listener(&listeners, "click");

    click(&dom, button);
    assert_eq!(clicks(), 1);
    click(&dom, button);
    click(&dom, button);
    assert_eq!(clicks(), 3);
}

#[test]
fn disabled_control_never_runs_handler() {
    let (dom, listeners) = mount(disabled_save);
    let button = listener(&listeners, "click");

    for _ in 0..10 {
        click(&dom, button);
    }
    assert_eq!(clicks(), 0);
}

#[test]
fn filter_input_forwards_raw_text() {
    let (dom, listeners) = mount(recording_filter);
    let field = listener(&listeners, "input");

    type_text(&dom, field, "a");
    type_text(&dom, field, "  abc  ");
    type_text(&dom, field, "");
    assert_eq!(changes(), vec!["a".to_string(), "  abc  ".to_string(), String::new()]);
}
