use dioxus::prelude::*;

use crate::ui::navigation::{primary_nav, settings_nav, settings_toggle_label, Route};
use crate::ui::styles::sidebar_style;

const LINK_STYLE: &str = "color: #2563eb; cursor: pointer; background: none; border: none; padding: 0; font: inherit; text-align: left;";

#[component]
pub fn Sidebar(
    current: Route,
    mut settings_open: Signal<bool>,
    on_navigate: EventHandler<Route>,
    on_logout: EventHandler<()>,
) -> Element {
    let open = settings_open();

    rsx! {
        aside { style: "{sidebar_style()}",
            nav {
                ul { style: "list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 8px; font-size: 1.25rem; font-weight: bold;",
                    for item in primary_nav() {
                        li { key: "{item.route.path()}",
                            button {
                                style: "{LINK_STYLE}",
                                text_decoration: if item.route == current { "underline" } else { "none" },
                                onclick: move |_| on_navigate.call(item.route),
                                "{item.label}"
                            }
                        }
                    }
                    li {
                        button {
                            style: "{LINK_STYLE}",
                            onclick: move |_| settings_open.set(!open),
                            "{settings_toggle_label(open)}"
                        }
                        if open {
                            ul { style: "list-style: none; padding: 0 0 0 16px; margin: 4px 0 0 0; display: flex; flex-direction: column; gap: 4px; font-size: 1rem;",
                                for item in settings_nav() {
                                    li { key: "{item.route.path()}",
                                        button {
                                            style: "{LINK_STYLE}",
                                            text_decoration: if item.route == current { "underline" } else { "none" },
                                            onclick: move |_| on_navigate.call(item.route),
                                            "{item.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    li { style: "margin-top: 24px;",
                        button {
                            style: "{LINK_STYLE}",
                            onclick: move |_| on_logout.call(()),
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}
