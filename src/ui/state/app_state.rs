use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::auth::Session;
use crate::ui::navigation::Route;

#[derive(Clone, Copy)]
pub struct AppState {
    pub route: Signal<Route>,
    pub session: Signal<Option<Session>>,
    pub settings_open: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            route: use_signal(|| Route::Login),
            session: use_signal(|| None::<Session>),
            settings_open: use_signal(|| false),
            status: use_signal(String::new),
        }
    }
}
