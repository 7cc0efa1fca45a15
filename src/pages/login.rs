//! Login page — the unauthenticated entry screen.
//!
//! Visiting it with a live credential bounces straight to the landing
//! screen; a stale credential falls through to the form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::net::http::HttpGateway;
use crate::session::store::SessionContext;

/// Email + password form posting to the token endpoint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let gateway = expect_context::<HttpGateway>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Entry gate: resolve a dangling credential, bounce if authenticated.
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        let gateway = gateway.clone();
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            use crate::session::gate::{EntryOutcome, decide_entry};
            if decide_entry(&session, &gateway).await == EntryOutcome::RedirectToLanding {
                navigate(&config.landing_path, NavigateOptions::default());
            }
        });
    }

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Zadejte e-mail a heslo".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;
            use crate::session::credentials::{self, Credential};

            let session = session.clone();
            let gateway = gateway.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let outcome = async {
                    let token = api::login(&gateway, &email_value, &password_value).await?;
                    // Persist the bare token first so the identity fetch is
                    // authorized, then re-persist with display hints.
                    credentials::write(&Credential::new(&token.access_token));
                    let profile = api::fetch_me(&gateway).await?;
                    credentials::write(&Credential::with_profile(&token.access_token, &profile));
                    session.login(profile);
                    Ok::<(), crate::net::http::ApiError>(())
                }
                .await;

                busy.set(false);
                match outcome {
                    Ok(()) => navigate(&config.landing_path, NavigateOptions::default()),
                    Err(crate::net::http::ApiError::Unauthorized) => {
                        error.set(Some("Nesprávný e-mail nebo heslo".to_owned()));
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &gateway, &config, &navigate, &password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"LPA Audity"</h1>
            <p>"Systém pro řízení kvality výroby"</p>
            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-page__label">
                    "E-mail"
                    <input
                        class="login-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Heslo"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.with(Option::is_some) fallback=|| ()>
                    <p class="login-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Přihlašování..." } else { "Přihlásit se" }}
                </button>
            </form>
        </div>
    }
}
