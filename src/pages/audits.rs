//! Nonconformity audit list with CSV export.

#[cfg(test)]
#[path = "audits_test.rs"]
mod audits_test;

use leptos::prelude::*;

use crate::components::route_guard::Protected;
use crate::net::api;
use crate::net::http::HttpGateway;
use crate::net::types::NokAudit;
use crate::util::csv;
use crate::util::format::{format_date, format_date_time, is_overdue, today_iso, truncate};

/// Audit list screen.
#[component]
pub fn AuditsPage() -> impl IntoView {
    view! {
        <Protected>
            <AuditsContent/>
        </Protected>
    }
}

/// Rows for the CSV export, mirroring the table columns.
fn export_rows(audits: &[NokAudit]) -> Vec<Vec<String>> {
    audits
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.line_name.clone(),
                a.category_name.clone(),
                a.status.label().to_owned(),
                a.description.clone().unwrap_or_default(),
                a.deadline.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

const EXPORT_HEADERS: [&str; 6] = ["ID", "Linka", "Kategorie", "Stav", "Popis", "Termín"];

#[component]
fn AuditsContent() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();

    let audits = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { api::fetch_audits(&gateway).await }
    });

    let on_export = move |_| {
        if let Some(Ok(list)) = audits.get() {
            let content = csv::build_csv(&EXPORT_HEADERS, &export_rows(&list));
            csv::download("neshody.csv", &content);
        }
    };

    view! {
        <div class="audits-page">
            <header class="audits-page__header">
                <h1>"Neshody"</h1>
                <button class="btn" on:click=on_export>
                    "Export CSV"
                </button>
            </header>
            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    audits
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let today = today_iso();
                                view! {
                                    <table class="audits-page__table">
                                        <thead>
                                            <tr>
                                                <th>"ID"</th>
                                                <th>"Linka"</th>
                                                <th>"Kategorie"</th>
                                                <th>"Stav"</th>
                                                <th>"Popis"</th>
                                                <th>"Vytvořeno"</th>
                                                <th>"Termín"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|a| {
                                                    let row_class = if is_overdue(
                                                        a.deadline.as_deref(),
                                                        a.status,
                                                        &today,
                                                    ) {
                                                        "audits-page__row--overdue"
                                                    } else {
                                                        ""
                                                    };
                                                    view! {
                                                        <tr class=row_class>
                                                            <td>{a.id}</td>
                                                            <td>{a.line_name.clone()}</td>
                                                            <td>{a.category_name.clone()}</td>
                                                            <td>
                                                                <span class=format!(
                                                                    "badge {}",
                                                                    a.status.badge_class(),
                                                                )>{a.status.label()}</span>
                                                            </td>
                                                            <td>
                                                                {truncate(
                                                                    a.description.as_deref().unwrap_or(""),
                                                                    60,
                                                                )}
                                                            </td>
                                                            <td>
                                                                {format_date_time(
                                                                    a.created_at.as_deref().unwrap_or(""),
                                                                )}
                                                            </td>
                                                            <td>
                                                                {format_date(a.deadline.as_deref().unwrap_or(""))}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="audits-page__error">{err.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
