//! Header component
//!
//! The top bar showing:
//! - Current tab title
//! - Backend connection status (from the outcome of the last load)
//! - Manual refresh button

use leptos::*;

use super::icons::RefreshIcon;
use super::primitives::StatusDot;
use crate::state::DashboardState;

/// Page header with status and refresh button
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<DashboardState>();

    let title = state.select(|s| s.tab.title());
    let connected = state.select(|s| s.connected);
    let refreshing = state.select(|s| s.is_refreshing());

    let status_text = move || match connected.get() {
        Some(true) => "Connected",
        Some(false) => "Disconnected",
        None => "Connecting...",
    };

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title" aria-live="polite">
                    {move || title.get()}
                </h1>
            </div>
            <div class="header-right">
                <div
                    class="connection-status"
                    role="status"
                    aria-live="polite"
                >
                    <StatusDot connected=Signal::derive(move || connected.get() == Some(true))/>
                    <span>{status_text}</span>
                </div>
                <button
                    class="refresh-btn"
                    class:loading=move || refreshing.get()
                    on:click=move |_| state.refresh()
                    title="Refresh data"
                    aria-label="Refresh dashboard data"
                >
                    <RefreshIcon/>
                </button>
            </div>
        </header>
    }
}
