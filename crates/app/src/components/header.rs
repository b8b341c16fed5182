use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaListCheck, FaRightFromBracket, FaUser};
use dioxus_free_icons::Icon;
use shared_types::{display_name_of, email_of, SessionUser};
use shared_ui::{
    item_style, DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator,
    DropdownMenuTrigger, Motion, MotionVariant, Navbar, VariantTable,
};

use crate::auth::{use_auth, AuthSession, AuthState};

/// Mount entrance: fade in while sliding down from 20px above.
pub const HEADER_VARIANTS: VariantTable = VariantTable(&[
    (
        "hidden",
        MotionVariant::NEUTRAL.with_opacity(0.0).with_y(-20.0),
    ),
    ("visible", MotionVariant::NEUTRAL.with_duration(0.5)),
]);

/// User-menu affordance: grow slightly while hovered.
pub const DROPDOWN_VARIANTS: VariantTable = VariantTable(&[
    ("rest", MotionVariant::NEUTRAL.with_duration(0.2)),
    (
        "hover",
        MotionVariant::NEUTRAL.with_scale(1.05).with_duration(0.2),
    ),
]);

pub const ROW_BACKGROUND: &str = "rgba(255, 255, 255, 0.1)";
pub const ROW_HOVER_BACKGROUND: &str = "rgba(255, 255, 255, 0.2)";
const DIVIDER_STYLE: &str = "border-color: rgba(255, 255, 255, 0.3);";

const NAV_REGION_ID: &str = "basic-navbar-nav";
const USER_MENU_ID: &str = "user-nav-dropdown";

/// Rows of the user menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UserMenuAction {
    Email,
    Logout,
}

/// Text the header shows for the current session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn from_user(user: Option<&SessionUser>) -> Self {
        Self {
            name: display_name_of(user),
            email: email_of(user),
        }
    }
}

/// Forward a logout request to the auth provider.
///
/// The header does nothing else: no confirmation, no local state change and
/// no navigation. Whatever follows is up to the provider.
pub fn dispatch_logout<A: AuthSession>(auth: &A) {
    tracing::debug!("logout requested from header");
    auth.logout();
}

#[derive(Props, Clone, PartialEq)]
pub struct HeaderProps<A: AuthSession> {
    pub auth: A,
    /// Overrides the configured brand title.
    #[props(default)]
    pub brand: Option<String>,
    /// Start with the user menu expanded.
    #[props(default = false)]
    pub default_menu_open: bool,
}

/// Top navigation bar: brand, collapsible nav region and the user menu.
#[component]
pub fn Header<A: AuthSession>(props: HeaderProps<A>) -> Element {
    let Identity { name, email } = Identity::from_user(props.auth.user().as_ref());
    let brand = props
        .brand
        .clone()
        .unwrap_or_else(|| crate::config::app_config().branding.title.clone());
    let auth = props.auth.clone();

    let menu_starts_open = props.default_menu_open;
    let mut menu_open = use_signal(move || menu_starts_open);
    let mut nav_expanded = use_signal(|| false);
    let region_state = if nav_expanded() { "open" } else { "closed" };

    rsx! {
        Motion {
            variants: HEADER_VARIANTS,
            initial: "hidden",
            animate: "visible",
            Navbar { class: "glass-card app-header",
                a { class: "navbar-brand gradient-text", href: "#",
                    Icon::<FaListCheck> { icon: FaListCheck, width: 24, height: 24 }
                    span { class: "navbar-brand-title", "{brand}" }
                }
                button {
                    class: "navbar-toggle",
                    r#type: "button",
                    "aria-controls": NAV_REGION_ID,
                    "aria-expanded": nav_expanded(),
                    "aria-label": "Toggle navigation",
                    onclick: move |_| nav_expanded.toggle(),
                    Icon::<FaBars> { icon: FaBars, width: 18, height: 18 }
                }
                div { class: "navbar-collapse", id: NAV_REGION_ID, "data-state": region_state,
                    div { class: "navbar-nav",
                        Motion {
                            variants: DROPDOWN_VARIANTS,
                            animate: "rest",
                            while_hover: "hover",
                            div {
                                class: "user-menu-hover",
                                onmouseenter: move |_| menu_open.set(true),
                                onmouseleave: move |_| menu_open.set(false),
                                DropdownMenu {
                                    id: USER_MENU_ID,
                                    class: "glass-dropdown",
                                    open: menu_open(),
                                    on_open_change: move |open: bool| menu_open.set(open),
                                    DropdownMenuTrigger { class: "glass-text",
                                        Icon::<FaUser> { icon: FaUser, width: 16, height: 16 }
                                        span { class: "user-name", "{name}" }
                                    }
                                    DropdownMenuContent {
                                        DropdownMenuItem::<UserMenuAction> {
                                            id: "user-menu-email",
                                            class: "glass-text",
                                            value: UserMenuAction::Email,
                                            index: 0usize,
                                            disabled: true,
                                            style: item_style(Some(ROW_BACKGROUND), None),
                                            small { class: "glass-text-muted", "{email}" }
                                        }
                                        DropdownMenuSeparator { style: DIVIDER_STYLE }
                                        DropdownMenuItem::<UserMenuAction> {
                                            id: "user-menu-logout",
                                            class: "glass-text",
                                            value: UserMenuAction::Logout,
                                            index: 1usize,
                                            style: item_style(Some(ROW_BACKGROUND), Some(ROW_HOVER_BACKGROUND)),
                                            on_select: move |_: UserMenuAction| dispatch_logout(&auth),
                                            Icon::<FaRightFromBracket> { icon: FaRightFromBracket, width: 16, height: 16 }
                                            "Logout"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// [`Header`] wired to the ambient [`AuthState`].
#[component]
pub fn AppHeader() -> Element {
    let auth = use_auth();
    rsx! {
        Header::<AuthState> { auth }
    }
}
