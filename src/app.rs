use dioxus::prelude::*;
use tracing::{info, warn};

use crate::infra::config::{default_config_path, load_config, AppConfig};
use crate::ui::components::breadcrumb::Breadcrumb;
use crate::ui::components::sidebar::Sidebar;
use crate::ui::navigation::Route;
use crate::ui::pages::categories::CategoriesPage;
use crate::ui::pages::dashboard::{DashboardHome, NotFoundPanel};
use crate::ui::pages::login::LoginPage;
use crate::ui::pages::products::ProductsPage;
use crate::ui::pages::register::RegisterPage;
use crate::ui::state::app_state::AppState;
use crate::ui::state::services::AppServices;
use crate::ui::styles::{main_content_style, root_layout_style};

fn load_app_config() -> AppConfig {
    match default_config_path().and_then(|path| load_config(&path)) {
        Ok(config) => config,
        Err(err) => {
            warn!("using built-in config: {err:#}");
            AppConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = AppState::new();
    use_context_provider(|| state);
    use_context_provider(|| AppServices::from_config(load_app_config()));

    let AppState {
        mut route,
        mut session,
        settings_open,
        mut status,
    } = state;

    let signed_in = session.read().is_some();
    let current = route().resolve(signed_in);

    let navigate = move |target: Route| {
        status.set(String::new());
        route.set(target);
    };

    match current {
        Route::Login => return rsx! { LoginPage {} },
        Route::Register => return rsx! { RegisterPage {} },
        _ => {}
    }

    let page = match current {
        Route::Dashboard => rsx! { DashboardHome {} },
        Route::Products => rsx! { ProductsPage {} },
        Route::Categories => rsx! { CategoriesPage {} },
        other => rsx! { NotFoundPanel { route: other } },
    };

    rsx! {
        div { style: "{root_layout_style()}",
            Sidebar {
                current,
                settings_open,
                on_navigate: navigate,
                on_logout: move |_| {
                    if let Some(ended) = session() {
                        info!("{} signed out", ended.email);
                    }
                    session.set(None);
                    route.set(Route::Login);
                },
            }
            main { style: "{main_content_style()}",
                Breadcrumb { route: current, on_navigate: navigate }
                if !status().is_empty() {
                    p { style: "color: #374151; margin: 0 0 12px 0;", "{status}" }
                }
                {page}
            }
        }
    }
}
