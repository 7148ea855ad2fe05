use dioxus::prelude::*;

use crate::ui::navigation::Route;
use crate::ui::state::app_state::AppState;

#[component]
pub fn DashboardHome() -> Element {
    let AppState { session, .. } = use_context::<AppState>();
    let greeting = match &*session.read() {
        Some(current) => format!(
            "Signed in as {} since {}",
            current.email,
            current.signed_in_at.format("%Y-%m-%d %H:%M")
        ),
        None => String::new(),
    };

    rsx! {
        section {
            h1 { style: "font-size: 1.5rem; margin: 0 0 8px 0;", "Dashboard" }
            p { style: "color: #4b5563;", "{greeting}" }
        }
    }
}

/// Placeholder for sections that have navigation but no screen yet.
#[component]
pub fn NotFoundPanel(route: Route) -> Element {
    rsx! {
        section {
            h1 { style: "font-size: 1.5rem; margin: 0 0 8px 0;", "404" }
            p { style: "color: #4b5563;", "Nothing here yet: {route.path()}" }
        }
    }
}
