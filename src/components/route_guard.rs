//! Authorization checkpoint wrapping every protected page.
//!
//! The wrapped content renders only after the gate resolves to `Allow` —
//! while identity resolution is pending nothing of the protected screen is
//! committed. An allowed render also activates the idle watchdog for the
//! screen's lifetime; `on_cleanup` guarantees deactivation on every exit
//! path.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::AppConfig;
use crate::net::http::HttpGateway;
use crate::routes::requirement_for;
use crate::session::gate::GateOutcome;
use crate::session::idle::IdleGuard;
use crate::session::store::SessionContext;
use crate::state::ui::{Notice, UiState};

/// Gate wrapper for authenticated screens. The requirement comes from the
/// route table, keyed by the current pathname, so authorization metadata
/// lives in one place.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<HttpGateway>();
    let config = expect_context::<AppConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let decision = RwSignal::new(None::<GateOutcome>);
    let requirement = requirement_for(&location.pathname.get_untracked());

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        let gateway = gateway.clone();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = crate::session::gate::decide(requirement, &session, &gateway, &config).await;
            decision.set(Some(outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&gateway, requirement);
    }

    // Commit redirects once the gate settles.
    let navigate = use_navigate();
    Effect::new({
        let navigate = navigate.clone();
        let config = config.clone();
        move || match decision.get() {
            Some(GateOutcome::RedirectToEntry) => {
                navigate(&config.entry_path, NavigateOptions::default());
            }
            Some(GateOutcome::RedirectToLanding) => {
                ui.update(|u| u.notice = Some(Notice::access_denied()));
                navigate(&config.landing_path, NavigateOptions::default());
            }
            _ => {}
        }
    });

    // Idle watchdog scoped to the allowed screen.
    let idle_guard: StoredValue<Option<IdleGuard>, LocalStorage> = StoredValue::new_local(None);
    Effect::new({
        let session = session.clone();
        let navigate = navigate.clone();
        let config = config.clone();
        move || {
            if decision.get() == Some(GateOutcome::Allow) && idle_guard.with_value(Option::is_none) {
                let session = session.clone();
                let navigate = navigate.clone();
                let entry_path = config.entry_path.clone();
                let guard = IdleGuard::activate(config.idle_timeout_minutes, move || {
                    session.logout();
                    ui.update(|u| u.notice = Some(Notice::idle_logout()));
                    navigate(&entry_path, NavigateOptions::default());
                });
                idle_guard.set_value(Some(guard));
            }
        }
    });
    on_cleanup(move || {
        if let Some(guard) = idle_guard.try_update_value(Option::take).flatten() {
            guard.deactivate();
        }
    });

    view! {
        <Show when=move || decision.get() == Some(GateOutcome::Allow) fallback=|| ()>
            {children()}
        </Show>
    }
}
