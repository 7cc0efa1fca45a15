//! One-slot notice banner (idle logout, access denied).

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

/// Renders the current notice, if any, with a dismiss button.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.notice.is_some()) fallback=|| ()>
            {move || {
                ui.with(|u| u.notice.clone())
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::IdleLogout => "notice notice--idle",
                            NoticeKind::AccessDenied => "notice notice--denied",
                        };
                        view! {
                            <div class=class role="alert">
                                <span>{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| ui.update(|u| u.notice = None)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
