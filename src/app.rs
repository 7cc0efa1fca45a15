//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::notice::NoticeBanner;
use crate::config::AppConfig;
use crate::net::http::{self, HttpGateway};
use crate::pages::{admin::AdminPage, audits::AuditsPage, dashboard::DashboardPage, login::LoginPage};
use crate::session::credentials;
use crate::session::store::SessionContext;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="cs">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: constructs the session context once, at application
/// start, and provides it alongside configuration and UI state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let session = SessionContext::new();
    let ui = RwSignal::new(UiState { dark_mode: dark_mode::read_preference(), notice: None });
    dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/lpa-client.css"/>
        <Title text="LPA Audity"/>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Inner shell, rendered under the router so it can wire the gateway's
/// 401 redirect to client-side navigation.
#[component]
fn Shell() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<AppConfig>();

    // The gateway's invalidation callback is the single 401 reaction:
    // session teardown, then a redirect unless already on the entry screen.
    let gateway = {
        let session = session.clone();
        let config = config.clone();
        let navigate = leptos_router::hooks::use_navigate();
        HttpGateway::new(config.api_base_url.clone(), move || {
            session.logout();
            if http::should_return_to_entry(&http::current_pathname(), &config.entry_path) {
                navigate(&config.entry_path, leptos_router::NavigateOptions::default());
            }
        })
    };
    provide_context(gateway);

    // Render the chrome while a credential is still resolving so the cached
    // display hints show instead of a blank flash.
    let show_chrome = {
        let session = session.clone();
        move || session.state.with(|s| s.chrome_visible(credentials::read().is_some()))
    };

    view! {
        <Show when=show_chrome fallback=|| ()>
            <NavBar/>
        </Show>
        <NoticeBanner/>
        <main class="app-main">
            <Routes fallback=|| "Stránka nenalezena.".into_view()>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("audits") view=AuditsPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </main>
    }
}
