//! Dashboard UI components
//!
//! Modular Leptos components for the Usersbox admin dashboard.
//!
//! ## Architecture
//!
//! 1. **Primitives** (`primitives.rs`) - Low-level reusable building blocks
//!    - Loading/empty/error states: `LoadingSpinner`, `EmptyState`, `ConnectionError`
//!    - Data display: `StatCard`, `TableCard`, `InfoRow`, `Badge`, `StatusDot`
//!    - Dialogs: `Modal`
//!
//! 2. **Icons** (`icons.rs`) - Inline SVG icons
//!
//! 3. **Layout** (`header.rs`, `sidebar.rs`) - Title bar and tab navigation
//!
//! 4. **Views** - one component per [`Tab`], selected by [`tab_view`]
//!
//! ## Accessibility
//!
//! Navigation entries are ARIA tabs; each view is the matching tab panel.

pub mod header;
pub mod icons;
pub mod manage;
pub mod overview;
pub mod primitives;
pub mod searches;
pub mod sidebar;
pub mod users;

use leptos::*;

use crate::state::Tab;

// Re-export layout components
pub use header::Header;
pub use sidebar::Sidebar;

pub use manage::{ManageView, NoticeDialog};
pub use overview::OverviewView;
pub use search_test::SearchTestView;
pub use searches::SearchesView;
pub use users::UsersView;

/// Render the view for a tab
pub fn tab_view(tab: Tab) -> View {
    match tab {
        Tab::Dashboard => view! { <OverviewView/> }.into_view(),
        Tab::Users => view! { <UsersView/> }.into_view(),
        Tab::Searches => view! { <SearchesView/> }.into_view(),
        Tab::Test => view! { <SearchTestView/> }.into_view(),
        Tab::Manage => view! { <ManageView/> }.into_view(),
    }
}
