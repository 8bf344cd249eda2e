//! Usersbox Admin Dashboard - Leptos-based WebAssembly UI
//!
//! An admin dashboard for the Usersbox Telegram search bot. It shows bot
//! statistics, the user list and the search log, and lets an operator run a
//! test search or give search attempts to a user.
//!
//! ## Tabs
//!
//! - **Dashboard**: key statistics and recent searches
//! - **Users**: every registered user with attempts and referrals
//! - **Searches**: the search log in backend order
//! - **Test Search**: run one query against the search backend
//! - **Manage**: give attempts to a user by Telegram ID
//!
//! ## Configuration
//!
//! The backend base URL is read once at startup (see [`config`]):
//!
//! ```html
//! <meta name="usersbox:backend-url" content="https://bot.example.com">
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Browser                           │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          usersbox-dashboard (WASM)                 │  │
//! │  │  ┌──────────┐  ┌─────────┐  ┌───────────────────┐  │  │
//! │  │  │ Leptos   │→ │ ops     │→ │ ApiClient         │  │  │
//! │  │  │ views    │← │ Action  │  │ (gloo-net)        │  │  │
//! │  │  └──────────┘  └─────────┘  └─────────┬─────────┘  │  │
//! │  └───────────────────────────────────────┼────────────┘  │
//! └──────────────────────────────────────────┼───────────────┘
//!                                            │ HTTP
//!                               ┌────────────▼────────────┐
//!                               │  bot backend  /api/*    │
//!                               └─────────────────────────┘
//! ```

pub mod api;
pub mod components;
pub mod config;
pub mod format;
pub mod ops;
pub mod state;

use leptos::*;

use api::ApiClient;
use components::{tab_view, Header, NoticeDialog, Sidebar};
use config::DashboardConfig;
use state::DashboardState;

/// Main dashboard application component
#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();

    let state = DashboardState::new(ApiClient::from_config(&config), config.version.clone());
    provide_context(state);

    // Initial load
    state.refresh();

    let tab = state.select(|s| s.tab);

    view! {
        <div class="app">
            <Sidebar/>
            <main class="main">
                <Header/>
                <div class="content">
                    {move || tab_view(tab.get())}
                </div>
            </main>
            <NoticeDialog/>
        </div>
    }
}

/// Install the panic hook and the browser tracing subscriber
fn init_logging() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
}

/// Mount the application to the DOM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting usersbox dashboard");
    mount_to_body(|| view! { <App/> });
}
