use dioxus::prelude::*;
use shared_types::SessionUser;

mod auth;
mod components;
mod config;
use auth::AuthState;
use components::{AppHeader, SessionNotice};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let seed = config::app_config().session.clone();
    let mut current_user = use_signal(|| seed.map(SessionUser::from));

    // Stands in for the real provider: ending the session just drops the user.
    let on_logout = use_callback(move |_: ()| {
        tracing::info!("session ended");
        current_user.set(None);
    });
    let auth = use_context_provider(|| AuthState::new(current_user, on_logout));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AppHeader {}
        main { class: "page-content",
            if auth.is_authenticated() {
                div { class: "glass-card",
                    p { class: "glass-text", "You are signed in." }
                }
            } else {
                SessionNotice {}
            }
        }
    }
}
