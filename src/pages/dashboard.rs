//! Dashboard page — the default authenticated landing screen.

use leptos::prelude::*;

use crate::components::route_guard::Protected;
use crate::net::api;
use crate::net::http::HttpGateway;
use crate::state::audits::{by_category, by_line, stats};
use crate::util::format::today_iso;

/// Landing screen with nonconformity summary cards.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Protected>
            <DashboardContent/>
        </Protected>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let gateway = expect_context::<HttpGateway>();

    let audits = LocalResource::new(move || {
        let gateway = gateway.clone();
        async move { api::fetch_audits(&gateway).await }
    });

    view! {
        <div class="dashboard-page">
            <h1>"Přehled neshod"</h1>
            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    audits
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let s = stats(&list, &today_iso());
                                let lines = by_line(&list)
                                    .into_iter()
                                    .map(|(line, audits)| (line.to_owned(), audits.len()))
                                    .collect::<Vec<_>>();
                                let categories = by_category(&list)
                                    .into_iter()
                                    .map(|(category, audits)| (category.to_owned(), audits.len()))
                                    .collect::<Vec<_>>();
                                view! {
                                    <div class="dashboard-page__cards">
                                        <StatCard label="Celkem" value=s.total accent=""/>
                                        <StatCard label="Otevřené" value=s.open accent="stat-card--red"/>
                                        <StatCard label="Přiřazené" value=s.assigned accent="stat-card--orange"/>
                                        <StatCard label="V řešení" value=s.in_progress accent="stat-card--blue"/>
                                        <StatCard label="Vyřešené" value=s.resolved accent="stat-card--green"/>
                                        <StatCard label="Po termínu" value=s.overdue accent="stat-card--red"/>
                                    </div>
                                    <h2>"Podle linky"</h2>
                                    <ul class="dashboard-page__lines">
                                        {lines
                                            .into_iter()
                                            .map(|(line, count)| {
                                                view! {
                                                    <li>
                                                        <span>{line}</span>
                                                        <span class="dashboard-page__count">{count}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                    <h2>"Podle kategorie"</h2>
                                    <ul class="dashboard-page__lines">
                                        {categories
                                            .into_iter()
                                            .map(|(category, count)| {
                                                view! {
                                                    <li>
                                                        <span>{category}</span>
                                                        <span class="dashboard-page__count">{count}</span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => view! { <p class="dashboard-page__error">{err.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: usize, accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("stat-card {accent}")>
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
