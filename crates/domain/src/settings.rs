//! Branding shown by the single-page UI.

use serde::{Deserialize, Serialize};

/// Default application name.
pub const DEFAULT_APP_NAME: &str = "GDAP Invite";

/// Default primary theme color.
pub const DEFAULT_THEME_COLOR: &str = "#667eea";

/// Values substituted into the HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    /// Page title and heading.
    pub app_name: String,
    /// Favicon and header logo.
    pub logo_url: String,
    /// Accent color used by buttons, focus rings and spinners.
    pub theme_color: String,
    /// Template id the browser must preselect and lock, if any.
    pub locked_template: Option<String>,
}

impl Branding {
    /// Sets the locked template, treating an empty or blank id as none.
    #[must_use]
    pub fn with_locked_template(mut self, template_id: Option<String>) -> Self {
        self.locked_template = template_id.filter(|id| !id.trim().is_empty());
        self
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            logo_url: String::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            locked_template: None,
        }
    }
}
