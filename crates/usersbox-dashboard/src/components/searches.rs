//! Searches view component
//!
//! The search log as returned by the backend (newest first, capped
//! server-side), with a refresh button.

use leptos::*;

use super::icons::RefreshIcon;
use super::primitives::{Badge, BadgeVariant, EmptyState, TableCard};
use crate::api::SearchRecord;
use crate::format::format_optional_timestamp;
use crate::state::DashboardState;

/// Search log table
#[component]
pub fn SearchesView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let count = state.select(|s| s.searches.len());
    let refreshing = state.select(|s| s.is_refreshing());

    view! {
        <div class="view active" role="tabpanel" id="panel-searches" aria-labelledby="tab-searches">
            <TableCard
                title="Search History"
                badge=view! {
                    <Badge text=Signal::derive(move || format!("{} searches", count.get()))/>
                }.into_view()
                action=view! {
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| state.refresh()
                        disabled=move || refreshing.get()
                    >
                        <RefreshIcon/>
                        "Refresh"
                    </button>
                }.into_view()
            >
                <Show
                    when=move || { count.get() > 0 }
                    fallback=|| view! {
                        <EmptyState
                            title="No searches"
                            description="Searches made through the bot will appear here"
                        />
                    }
                >
                    <table role="table" aria-label="Searches">
                        <thead>
                            <tr>
                                <th scope="col">"User ID"</th>
                                <th scope="col">"Query"</th>
                                <th scope="col">"Status"</th>
                                <th scope="col">"Time"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.view.with(|s| {
                                s.searches
                                    .iter()
                                    .cloned()
                                    .map(|search| view! { <SearchRow search=search/> })
                                    .collect_view()
                            })}
                        </tbody>
                    </table>
                </Show>
            </TableCard>
        </div>
    }
}

/// One row of the search log
#[component]
pub fn SearchRow(search: SearchRecord) -> impl IntoView {
    let (text, variant) = if search.success {
        ("Success", BadgeVariant::Success)
    } else {
        ("Failed", BadgeVariant::Error)
    };

    view! {
        <tr>
            <td class="mono">{search.user_id}</td>
            <td class="mono query">{search.query}</td>
            <td><Badge text=text variant=variant with_dot=true/></td>
            <td>{format_optional_timestamp(search.timestamp.as_deref())}</td>
        </tr>
    }
}
