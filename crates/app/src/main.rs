use dioxus::prelude::*;

mod endpoints;
mod reports;

use endpoints::{compiled_endpoints, compiled_locale, log_endpoints};
use reports::ReportsPage;

const TAILWIND: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let endpoints = use_hook(|| {
        let endpoints = compiled_endpoints();
        log_endpoints(&endpoints);
        endpoints
    });
    let locale = compiled_locale();

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND }
        ReportsPage { endpoints, locale }
    }
}
