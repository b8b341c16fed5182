use dioxus::prelude::*;
use shared_types::SessionUser;

use crate::auth::use_auth;

/// Shown in place of page content once the session has ended.
///
/// Offers to sign back in as the configured demo user when one exists.
#[component]
pub fn SessionNotice() -> Element {
    let mut auth = use_auth();
    let seed = crate::config::app_config().session.clone();

    rsx! {
        div { class: "glass-card session-notice",
            h2 { class: "gradient-text", "Signed out" }
            p { class: "glass-text-muted", "Your session has ended." }
            if let Some(seed) = seed {
                button {
                    class: "session-notice-action",
                    r#type: "button",
                    onclick: move |_| {
                        let user = SessionUser::from(seed.clone());
                        tracing::info!(name = %user.display_name(), "signed in with demo session");
                        auth.set_user(user);
                    },
                    "Sign in again"
                }
            }
        }
    }
}
