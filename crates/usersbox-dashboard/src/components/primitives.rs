//! Reusable UI primitive components
//!
//! This module provides the foundational building blocks for the dashboard UI:
//! - Loading spinner
//! - Connection error and empty states
//! - Badges and indicators
//! - Cards, info rows and the modal dialog

use leptos::*;

// ============================================================================
// Loading States
// ============================================================================

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(#[prop(optional)] message: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status" aria-live="polite">
            <svg class="spinner" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <circle class="spinner-track" cx="12" cy="12" r="10" fill="none" stroke-width="3"/>
                <circle class="spinner-head" cx="12" cy="12" r="10" fill="none" stroke-width="3"
                        stroke-dasharray="31.4 31.4" stroke-linecap="round"/>
            </svg>
            {message.map(|msg| view! { <span class="loading-message">{msg}</span> })}
        </div>
    }
}

// ============================================================================
// Error & Empty States
// ============================================================================

/// Shown when the last load could not reach the backend
#[component]
pub fn ConnectionError(
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="connection-error" role="alert" aria-live="assertive">
            <div class="connection-error-icon">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126ZM12 15.75h.007v.008H12v-.008Z"/>
                </svg>
            </div>
            <h3>"Backend unreachable"</h3>
            <p>"The last refresh failed. Showing the most recent data, if any."</p>
            {on_retry.map(|retry| view! {
                <button class="btn btn-secondary" on:click=move |_| retry.call(())>
                    "Retry Now"
                </button>
            })}
        </div>
    }
}

/// Generic empty state component
#[component]
pub fn EmptyState(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="empty-state" role="status">
            <div class="empty-icon">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M20.25 7.5l-.625 10.632a2.25 2.25 0 0 1-2.247 2.118H6.622a2.25 2.25 0 0 1-2.247-2.118L3.75 7.5m6 4.125 2.25 2.25m0 0 2.25 2.25M12 13.875l2.25-2.25M12 13.875l-2.25 2.25M3.375 7.5h17.25c.621 0 1.125-.504 1.125-1.125v-1.5c0-.621-.504-1.125-1.125-1.125H3.375c-.621 0-1.125.504-1.125 1.125v1.5c0 .621.504 1.125 1.125 1.125Z"/>
                </svg>
            </div>
            <div class="empty-text">{title}</div>
            {description.map(|desc| view! { <p class="empty-description">{desc}</p> })}
        </div>
    }
}

// ============================================================================
// Badges & Indicators
// ============================================================================

/// Badge variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Primary => "badge badge-primary",
            BadgeVariant::Success => "badge badge-success",
            BadgeVariant::Warning => "badge badge-warning",
            BadgeVariant::Error => "badge badge-error",
        }
    }
}

/// Badge component with text
#[component]
pub fn Badge<T: IntoView + 'static>(
    text: T,
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, default = false)] with_dot: bool,
) -> impl IntoView {
    view! {
        <span class=variant.class()>
            {with_dot.then(|| view! { <span class="badge-dot"></span> })}
            {text}
        </span>
    }
}

/// Status indicator dot
#[component]
pub fn StatusDot(
    #[prop(into)] connected: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <span
            class="status-dot"
            class:connected=move || connected.get()
            class:disconnected=move || !connected.get()
            role="status"
            aria-label=move || if connected.get() { "Connected" } else { "Disconnected" }
        />
    }
}

// ============================================================================
// Cards & Containers
// ============================================================================

/// Stat card for overview metrics
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] color: Option<&'static str>,
    #[prop(optional)] icon: Option<View>,
) -> impl IntoView {
    let class = format!("stat-card {}", color.unwrap_or(""));

    view! {
        <div class=class>
            <div class="stat-header">
                {icon.map(|i| view! { <div class="stat-icon">{i}</div> })}
                <span class="stat-label">{label}</span>
            </div>
            <div class="stat-value" aria-label=format!("{}: ", label)>
                {move || value.get()}
            </div>
        </div>
    }
}

/// Table card container
#[component]
pub fn TableCard(
    title: &'static str,
    children: Children,
    #[prop(optional)] action: Option<View>,
    #[prop(optional)] badge: Option<View>,
) -> impl IntoView {
    view! {
        <div class="table-card" role="region" aria-label=title>
            <div class="table-header">
                <div class="table-title-group">
                    <div class="table-title">{title}</div>
                    {badge}
                </div>
                {action}
            </div>
            {children()}
        </div>
    }
}

/// Key-value info row with children for the value
#[component]
pub fn InfoRow(
    label: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-label">{label}</span>
            <span class="info-value">
                {children()}
            </span>
        </div>
    }
}

// ============================================================================
// Dialogs
// ============================================================================

/// Modal dialog with a single dismiss button
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
    #[prop(optional)] tone: Option<&'static str>,
) -> impl IntoView {
    let class = format!("modal {}", tone.unwrap_or(""));

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.call(())>
            <div
                class=class
                role="dialog"
                aria-modal="true"
                aria-label=title.clone()
                on:click=|ev| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                </div>
                <div class="modal-body">{children()}</div>
                <div class="modal-footer">
                    <button class="btn btn-primary" on:click=move |_| on_close.call(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
