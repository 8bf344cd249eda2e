//! Overview/Dashboard view component
//!
//! The landing tab showing:
//! - Key statistics (users, searches, referrals, success rate)
//! - User summary card
//! - Recent searches preview (top 5)

use leptos::*;

use super::icons::{ChartIcon, HistoryIcon, ReferralIcon, UsersIcon};
use super::primitives::{ConnectionError, EmptyState, InfoRow, StatCard};
use super::searches::SearchRow;
use crate::format::{format_number, format_percent};
use crate::state::{DashboardState, Tab};

/// Main overview dashboard view
#[component]
pub fn OverviewView() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    let stats = state.select(|s| s.stats.clone());
    let offline = state.select(|s| s.connected == Some(false));
    let retry = Callback::new(move |_| state.refresh());

    view! {
        <div class="view active" role="tabpanel" id="panel-dashboard" aria-labelledby="tab-dashboard">
            <Show when=move || offline.get()>
                <ConnectionError on_retry=retry/>
            </Show>

            // Stats Grid
            <div class="stats-grid" role="region" aria-label="Key metrics">
                <StatCard
                    label="Total Users"
                    value=Signal::derive(move || format_number(stats.get().total_users))
                    color="blue"
                    icon=view! { <UsersIcon/> }.into_view()
                />
                <StatCard
                    label="Total Searches"
                    value=Signal::derive(move || format_number(stats.get().total_searches))
                    color="green"
                    icon=view! { <HistoryIcon/> }.into_view()
                />
                <StatCard
                    label="Referrals"
                    value=Signal::derive(move || format_number(stats.get().total_referrals))
                    color="purple"
                    icon=view! { <ReferralIcon/> }.into_view()
                />
                <StatCard
                    label="Success Rate"
                    value=Signal::derive(move || format_percent(stats.get().success_rate))
                    color="orange"
                    icon=view! { <ChartIcon/> }.into_view()
                />
            </div>

            <div class="overview-grid">
                <UserSummaryCard/>
                <RecentSearchesPreview/>
            </div>
        </div>
    }
}

/// Aggregates over the loaded user list
#[component]
fn UserSummaryCard() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    view! {
        <div class="table-card" role="region" aria-label="User summary">
            <div class="table-header">
                <div class="table-title">"Users"</div>
                <button class="btn btn-secondary" on:click=move |_| state.select_tab(Tab::Users)>
                    "View All"
                </button>
            </div>
            <div class="card-body">
                <InfoRow label="Loaded">
                    {move || state.view.with(|s| s.users.len())}
                </InfoRow>
                <InfoRow label="Admins">
                    {move || state.view.with(|s| s.admin_count())}
                </InfoRow>
                <InfoRow label="Attempts remaining">
                    {move || state.view.with(|s| s.total_attempts())}
                </InfoRow>
                <InfoRow label="Successful searches">
                    {move || format_number(state.view.with(|s| s.stats.successful_searches))}
                </InfoRow>
            </div>
        </div>
    }
}

/// Recent searches preview showing the newest 5 entries
#[component]
fn RecentSearchesPreview() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let has_searches = state.select(|s| !s.searches.is_empty());

    view! {
        <div class="table-card" role="region" aria-label="Recent searches">
            <div class="table-header">
                <div class="table-title">"Recent Searches"</div>
                <button class="btn btn-secondary" on:click=move |_| state.select_tab(Tab::Searches)>
                    "View All"
                </button>
            </div>
            <Show
                when=move || has_searches.get()
                fallback=|| view! { <EmptyState title="No searches yet" description="Searches appear once users query the bot"/> }
            >
                <table role="table" aria-label="Recent searches list">
                    <thead>
                        <tr>
                            <th scope="col">"User"</th>
                            <th scope="col">"Query"</th>
                            <th scope="col">"Status"</th>
                            <th scope="col">"Time"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.view.with(|s| {
                            s.searches
                                .iter()
                                .take(5)
                                .cloned()
                                .map(|search| view! { <SearchRow search=search/> })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
