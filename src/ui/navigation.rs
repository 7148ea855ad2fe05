#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Products,
    Orders,
    Categories,
    SubCategories,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Register,
        Route::Dashboard,
        Route::Products,
        Route::Orders,
        Route::Categories,
        Route::SubCategories,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/auth/login",
            Route::Register => "/auth/register",
            Route::Dashboard => "/dashboard",
            Route::Products => "/dashboard/products",
            Route::Orders => "/dashboard/orders",
            Route::Categories => "/dashboard/settings/category",
            Route::SubCategories => "/dashboard/settings/sub-category",
        }
    }

    /// Case-insensitive, so capitalized breadcrumb hrefs resolve too.
    pub fn from_path(path: &str) -> Option<Route> {
        let wanted = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(wanted))
    }

    pub fn requires_session(self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }

    /// Route actually shown for a request, given whether someone is signed in.
    pub fn resolve(self, signed_in: bool) -> Route {
        match (self.requires_session(), signed_in) {
            (true, false) => Route::Login,
            (false, true) => Route::Dashboard,
            _ => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    pub is_last: bool,
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One crumb per non-empty path segment, first letter upper-cased.
///
/// Hrefs accumulate the capitalized segments; labels are percent-decoded.
pub fn breadcrumb_trail(path: &str) -> Vec<Crumb> {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    let last = segments.len().saturating_sub(1);
    let mut href = String::new();

    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| {
            let capitalized = capitalize(segment);
            href.push('/');
            href.push_str(&capitalized);
            let label = urlencoding::decode(&capitalized)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| capitalized.clone());
            Crumb {
                label,
                href: href.clone(),
                is_last: idx == last,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
}

pub const SETTINGS_LABEL: &str = "ตั้งค่า";

pub fn primary_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "หน้าหลัก",
            route: Route::Dashboard,
        },
        NavItem {
            label: "สินค้า",
            route: Route::Products,
        },
        NavItem {
            label: "คำสั่งซื้อ",
            route: Route::Orders,
        },
    ]
}

pub fn settings_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "หมวดหมู่",
            route: Route::Categories,
        },
        NavItem {
            label: "หมวดหมู่ย่อย",
            route: Route::SubCategories,
        },
    ]
}

pub fn settings_toggle_label(open: bool) -> String {
    let arrow = if open { "▲" } else { "▼" };
    format!("{SETTINGS_LABEL} {arrow}")
}
