use dioxus::prelude::*;

use crate::ui::navigation::{breadcrumb_trail, Route};

#[component]
pub fn Breadcrumb(route: Route, on_navigate: EventHandler<Route>) -> Element {
    let trail = breadcrumb_trail(route.path());

    rsx! {
        nav { aria_label: "Breadcrumb", style: "margin-bottom: 16px;",
            ol { style: "display: flex; align-items: center; gap: 8px; list-style: none; padding: 0; margin: 0; color: #6b7280;",
                {trail.into_iter().map(|crumb| {
                    let target = Route::from_path(&crumb.href);
                    let label = crumb.label.clone();
                    rsx!(
                        li { key: "{crumb.href}", style: "display: flex; align-items: center; gap: 8px;",
                            if crumb.is_last {
                                span { style: "font-weight: 600; color: #374151;", "{label}" }
                            } else if let Some(target) = target {
                                a {
                                    style: "color: #2563eb; cursor: pointer; text-decoration: none;",
                                    onclick: move |_| on_navigate.call(target),
                                    "{label}"
                                }
                            } else {
                                span { "{label}" }
                            }
                            if !crumb.is_last {
                                span { "/" }
                            }
                        }
                    )
                })}
            }
        }
    }
}
