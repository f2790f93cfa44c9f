//! Application use cases (proxy orchestration).

mod generate_invite;
mod list_role_templates;

pub use generate_invite::*;
pub use list_role_templates::*;
