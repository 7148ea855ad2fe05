use dioxus::prelude::*;
use tracing::info;

use crate::domain::entities::auth::LoginRequest;
use crate::ui::navigation::Route;
use crate::ui::pages::auth_error_text;
use crate::ui::state::app_state::AppState;
use crate::ui::state::services::AppServices;
use crate::ui::styles::{auth_page_style, button_style, input_style, ButtonKind};

#[component]
pub fn LoginPage() -> Element {
    let services = use_context::<AppServices>();
    let AppState {
        mut route,
        mut session,
        mut status,
        ..
    } = use_context::<AppState>();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let auth = services.auth.clone();
    let submit = move |_: MouseEvent| {
        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        match auth.login(&request) {
            Ok(signed_in) => {
                info!("{} opened the dashboard", signed_in.email);
                session.set(Some(signed_in));
                error.set(None);
                status.set(String::new());
                route.set(Route::Dashboard);
            }
            Err(err) => error.set(Some(auth_error_text(&err))),
        }
    };

    rsx! {
        div { style: "{auth_page_style()}",
            div { style: "display: flex; flex-direction: column; gap: 12px; width: 320px; padding: 24px; background: #fff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);",
                h1 { style: "font-size: 1.5rem; margin: 0;", "Login" }
                if !status().is_empty() {
                    p { style: "color: #15803d; margin: 0;", "{status}" }
                }
                input {
                    style: "{input_style()}",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
                input {
                    style: "{input_style()}",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }
                if let Some(message) = error() {
                    p { style: "color: #dc2626; margin: 0;", "{message}" }
                }
                button { style: "{button_style(ButtonKind::Primary, false)}", onclick: submit, "Login" }
                button {
                    style: "{button_style(ButtonKind::Plain, false)}",
                    onclick: move |_| {
                        status.set(String::new());
                        route.set(Route::Register);
                    },
                    "Register"
                }
            }
        }
    }
}
