pub fn root_layout_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: row; overflow: hidden; font-family: sans-serif;"
}

pub fn sidebar_style() -> &'static str {
    "width: 16rem; flex-shrink: 0; background: #4ade80; padding: 16px; overflow-y: auto;"
}

pub fn main_content_style() -> &'static str {
    "flex: 1; min-width: 0; display: flex; flex-direction: column; background: #fff; padding: 32px; overflow: auto;"
}

pub fn auth_page_style() -> &'static str {
    "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 16px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 2; background: #f3f4f6; border-right: 1px solid #ddd; border-bottom: 1px solid #ddd; padding: 8px; text-align: left;"
}

pub fn table_cell_style() -> &'static str {
    "border-right: 1px solid #ddd; padding: 8px;"
}

pub fn row_style(selected: bool) -> &'static str {
    if selected {
        "border-bottom: 1px solid #ddd; background: #eef4ff;"
    } else {
        "border-bottom: 1px solid #ddd;"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Primary,
    Danger,
    Plain,
}

pub fn button_style(kind: ButtonKind, disabled: bool) -> String {
    let (background, color) = match (kind, disabled) {
        (_, true) => ("#9ca3af", "#fff"),
        (ButtonKind::Primary, false) => ("#2563eb", "#fff"),
        (ButtonKind::Danger, false) => ("#dc2626", "#fff"),
        (ButtonKind::Plain, false) => ("#e5e7eb", "#111"),
    };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    format!(
        "padding: 8px 16px; border: none; border-radius: 6px; background: {background}; color: {color}; cursor: {cursor};"
    )
}

pub fn modal_overlay_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1200;"
}

pub fn modal_content_style() -> &'static str {
    "position: relative; background: #fff; padding: 24px; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); width: 100%; max-width: 28rem;"
}

pub fn input_style() -> &'static str {
    "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; box-sizing: border-box;"
}
