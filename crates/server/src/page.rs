//! Single-page UI rendering.

use gdap_portal_domain::Branding;

const INDEX_TEMPLATE: &str = include_str!("../assets/index.html");

/// Renders the HTML page with the branding values substituted.
///
/// The locked template id reaches the page script as a JSON string literal,
/// `""` when no template is locked.
#[must_use]
pub fn render_index(branding: &Branding) -> String {
    let locked = script_string(branding.locked_template.as_deref().unwrap_or_default());

    INDEX_TEMPLATE
        .replace("{{APP_NAME}}", &branding.app_name)
        .replace("{{LOGO_URL}}", &branding.logo_url)
        .replace("{{THEME_COLOR}}", &branding.theme_color)
        .replace("{{LOCKED_TEMPLATE}}", &locked)
}

fn script_string(value: &str) -> String {
    // `</` would close the surrounding script element.
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}
