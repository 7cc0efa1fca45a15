//! Admin page — user management, administrator role only.

use leptos::prelude::*;

use crate::components::route_guard::Protected;
use crate::net::api;
use crate::net::http::HttpGateway;

/// User list screen behind the admin gate.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Protected>
            <AdminContent/>
        </Protected>
    }
}

#[component]
fn AdminContent() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();

    let users = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { api::fetch_users(&gateway).await }
    });

    view! {
        <div class="admin-page">
            <h1>"Správa uživatelů"</h1>
            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    users
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <table class="admin-page__table">
                                        <thead>
                                            <tr>
                                                <th>"Jméno"</th>
                                                <th>"E-mail"</th>
                                                <th>"Role"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|user| {
                                                    view! {
                                                        <tr>
                                                            <td>{user.display_name.clone()}</td>
                                                            <td>{user.email.clone()}</td>
                                                            <td>{user.role.clone()}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="admin-page__error">{err.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
