use dioxus::prelude::*;

use crate::domain::entities::auth::RegisterRequest;
use crate::ui::navigation::Route;
use crate::ui::pages::auth_error_text;
use crate::ui::state::app_state::AppState;
use crate::ui::state::services::AppServices;
use crate::ui::styles::{auth_page_style, button_style, input_style, ButtonKind};

#[component]
pub fn RegisterPage() -> Element {
    let services = use_context::<AppServices>();
    let AppState {
        mut route,
        mut status,
        ..
    } = use_context::<AppState>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let auth = services.auth.clone();
    let submit = move |_: MouseEvent| {
        let request = RegisterRequest {
            email: email(),
            password: password(),
            name: name(),
            age: age(),
        };
        match auth.register(&request) {
            Ok(user) => {
                status.set(format!("Registered {}. Please log in.", user.name));
                route.set(Route::Login);
            }
            Err(err) => error.set(Some(auth_error_text(&err))),
        }
    };

    rsx! {
        div { style: "{auth_page_style()}",
            div { style: "display: flex; flex-direction: column; gap: 12px; width: 320px; padding: 24px; background: #fff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1);",
                h1 { style: "font-size: 1.5rem; margin: 0;", "Register" }
                input {
                    style: "{input_style()}",
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |event| name.set(event.value()),
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
                input {
                    style: "{input_style()}",
                    r#type: "number",
                    placeholder: "Age",
                    value: "{age}",
                    oninput: move |event| age.set(event.value()),
                }
                if let Some(message) = error() {
                    p { style: "color: #dc2626; margin: 0;", "{message}" }
                }
                button { style: "{button_style(ButtonKind::Primary, false)}", onclick: submit, "Register" }
                button {
                    style: "{button_style(ButtonKind::Plain, false)}",
                    onclick: move |_| route.set(Route::Login),
                    "Back to login"
                }
            }
        }
    }
}
