use dioxus::prelude::*;

use crate::ui::styles::{modal_content_style, modal_overlay_style};

/// Overlay with a centered card. Clicking the backdrop or ✕ closes it.
#[component]
pub fn ModalFrame(title: &'static str, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            style: "{modal_overlay_style()}",
            onclick: move |_| on_close.call(()),
            div {
                style: "{modal_content_style()}",
                onclick: move |event| event.stop_propagation(),
                button {
                    style: "position: absolute; top: 8px; right: 8px; border: none; background: transparent; color: #6b7280; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { style: "font-size: 1.25rem; font-weight: bold; margin: 0 0 16px 0;", "{title}" }
                {children}
            }
        }
    }
}

#[component]
pub fn FormField(label: &'static str, children: Element) -> Element {
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 4px;",
            label { style: "font-weight: 600;", "{label}" }
            {children}
        }
    }
}
