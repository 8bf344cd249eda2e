//! Users view component
//!
//! Displays every bot user in backend order with:
//! - Telegram ID, name and handle
//! - Remaining attempts and referral count
//! - Admin badge and registration time

use leptos::*;

use super::icons::RefreshIcon;
use super::primitives::{Badge, BadgeVariant, EmptyState, TableCard};
use crate::api::User;
use crate::format::{format_optional_timestamp, format_username};
use crate::state::DashboardState;

/// User list view
#[component]
pub fn UsersView() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let count = state.select(|s| s.users.len());
    let refreshing = state.select(|s| s.is_refreshing());

    view! {
        <div class="view active" role="tabpanel" id="panel-users" aria-labelledby="tab-users">
            <TableCard
                title="Users"
                badge=view! {
                    <Badge text=Signal::derive(move || format!("{} users", count.get()))/>
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
                            title="No users"
                            description="Users appear after they start the bot"
                        />
                    }
                >
                    <table role="table" aria-label="Users">
                        <thead>
                            <tr>
                                <th scope="col">"Telegram ID"</th>
                                <th scope="col">"Name"</th>
                                <th scope="col">"Username"</th>
                                <th scope="col">"Attempts"</th>
                                <th scope="col">"Referrals"</th>
                                <th scope="col">"Role"</th>
                                <th scope="col">"Joined"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || state.view.with(|s| {
                                s.users
                                    .iter()
                                    .cloned()
                                    .map(|user| view! { <UserRow user=user/> })
                                    .collect_view()
                            })}
                        </tbody>
                    </table>
                </Show>
            </TableCard>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let name = user.full_name().unwrap_or_else(|| "-".to_string());
    let username = format_username(user.username.as_deref());
    let attempts_variant = if user.attempts_remaining > 0 {
        BadgeVariant::Primary
    } else {
        BadgeVariant::Warning
    };
    let referred_by = user
        .referred_by
        .map(|id| format!("Referred by {id}"))
        .unwrap_or_default();

    view! {
        <tr>
            <td class="mono">{user.telegram_id}</td>
            <td title=referred_by>{name}</td>
            <td class="mono">{username}</td>
            <td>
                <Badge text=user.attempts_remaining.to_string() variant=attempts_variant/>
            </td>
            <td>{user.total_referrals}</td>
            <td>
                {if user.is_admin {
                    view! { <Badge text="Admin" variant=BadgeVariant::Success/> }.into_view()
                } else {
                    view! { <span class="muted">"User"</span> }.into_view()
                }}
            </td>
            <td>{format_optional_timestamp(user.created_at.as_deref())}</td>
        </tr>
    }
}
