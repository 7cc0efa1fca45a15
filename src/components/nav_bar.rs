//! Top navigation bar for authenticated screens.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::routes::links_for_role;
use crate::session::credentials;
use crate::session::store::SessionContext;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Route links filtered by role, the user's name, dark-mode toggle, and the
/// logout action.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<AppConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let links = {
        let session = session.clone();
        let admin_role = config.admin_role.clone();
        move || {
            let hints = credentials::read().map(|cred| cred.hints);
            session
                .state
                .with(|s| links_for_role(s.role_or_hint(hints.as_ref()), &admin_role))
                .into_iter()
                .map(|entry| {
                    view! {
                        <A href=entry.path attr:class="nav-bar__link">
                            {entry.label}
                        </A>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    // Cached hints render immediately while `/auth/me` is still in flight.
    let display_name = {
        let session = session.clone();
        move || {
            let hints = credentials::read().map(|cred| cred.hints);
            session.state.with(|s| s.display_name_or_hint(hints.as_ref()).to_owned())
        }
    };

    let on_toggle_dark = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_logout = {
        let session = session.clone();
        let entry_path = config.entry_path.clone();
        move |_| {
            session.logout();
            navigate(&entry_path, NavigateOptions::default());
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"LPA Audity"</span>
            <div class="nav-bar__links">{links}</div>
            <div class="nav-bar__user">
                <span class="nav-bar__name">{display_name}</span>
                <button class="btn btn--ghost" on:click=on_toggle_dark title="Tmavý režim">
                    "◐"
                </button>
                <button class="btn" on:click=on_logout>
                    "Odhlásit"
                </button>
            </div>
        </nav>
    }
}
