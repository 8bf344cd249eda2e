//! Sidebar navigation component
//!
//! Renders one button per [`Tab`]; clicking a button only changes the
//! selected tab. The footer shows when data was last refreshed and which
//! backend the dashboard talks to.

use leptos::*;

use super::icons::{BeakerIcon, HistoryIcon, HomeIcon, UsersIcon, WrenchIcon};
use crate::state::{Action, DashboardState, Tab};

/// Sidebar navigation with branding and status footer
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let backend_url = state.client().base_url().to_string();
    let version = state.version();

    view! {
        <aside
            class="sidebar"
            role="navigation"
            aria-label="Main navigation"
        >
            <div class="logo" aria-label="Usersbox Admin">
                <div class="logo-icon" aria-hidden="true">"U"</div>
                <span class="logo-text">"Usersbox"</span>
                {version.map(|v| view! { <span class="logo-version">{format!("v{v}")}</span> })}
            </div>

            <nav class="nav" aria-label="Primary" role="tablist">
                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Overview"</div>
                    <NavButton tab=Tab::Dashboard><HomeIcon/></NavButton>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Data"</div>
                    <NavButton tab=Tab::Users><UsersIcon/></NavButton>
                    <NavButton tab=Tab::Searches><HistoryIcon/></NavButton>
                </div>

                <div class="nav-section">
                    <div class="nav-section-title" aria-hidden="true">"Tools"</div>
                    <NavButton tab=Tab::Test><BeakerIcon/></NavButton>
                    <NavButton tab=Tab::Manage><WrenchIcon/></NavButton>
                </div>
            </nav>

            <div class="sidebar-footer" role="status" aria-label="Refresh status">
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Refreshed"</span>
                    <span class="sidebar-stat-value" aria-live="polite">
                        {move || {
                            state.view.with(|s| s.last_refresh)
                                .map(|at| at.format("%H:%M:%S").to_string())
                                .unwrap_or_else(|| "-".to_string())
                        }}
                    </span>
                </div>
                <div class="sidebar-stat">
                    <span class="sidebar-stat-label">"Backend"</span>
                    <span class="sidebar-stat-value mono" title=backend_url.clone()>{backend_url}</span>
                </div>
            </div>
        </aside>
    }
}

/// Navigation entry for one tab
#[component]
fn NavButton(tab: Tab, children: Children) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let active = state.select(move |s| s.tab == tab);

    view! {
        <button
            class="nav-link"
            class:active=move || active.get()
            role="tab"
            id=format!("tab-{}", tab.id())
            aria-selected=move || active.get().to_string()
            aria-controls=format!("panel-{}", tab.id())
            on:click=move |_| state.dispatch(Action::SelectTab(tab))
        >
            {children()}
            <span>{tab.title()}</span>
        </button>
    }
}
