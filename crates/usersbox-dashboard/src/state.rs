//! Dashboard state management
//!
//! All view data lives in a single [`ViewState`] value. It is only ever
//! changed by [`ViewState::apply`], one [`Action`] per logical event, so a
//! completed load replaces stats, users and searches in one step.
//!
//! [`DashboardState`] wraps the value in a Leptos signal and is provided to
//! the component tree through context.

use chrono::{DateTime, Utc};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{ApiClient, SearchRecord, SearchResult, Stats, User};
use crate::ops;

/// Selectable dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Users,
    Searches,
    Test,
    Manage,
}

impl Tab {
    /// Tabs in navigation order
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Users,
        Tab::Searches,
        Tab::Test,
        Tab::Manage,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Users => "Users",
            Tab::Searches => "Searches",
            Tab::Test => "Test Search",
            Tab::Manage => "Manage",
        }
    }

    /// Stable identifier, used for element ids
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Users => "users",
            Tab::Searches => "searches",
            Tab::Test => "test",
            Tab::Manage => "manage",
        }
    }
}

/// Result of one aggregated load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub stats: Stats,
    pub users: Vec<User>,
    pub searches: Vec<SearchRecord>,
}

/// Kind of user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Modal message shown after a manage action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub tab: Tab,
    pub stats: Stats,
    pub users: Vec<User>,
    pub searches: Vec<SearchRecord>,
    /// Loads currently in flight; loads may overlap
    pub pending_loads: u32,
    /// `None` until the first load finishes
    pub connected: Option<bool>,
    pub last_refresh: Option<DateTime<Utc>>,
    pub search_query: String,
    pub searching: bool,
    pub search_result: Option<SearchResult>,
    pub grant_user_id: String,
    pub grant_attempts: String,
    pub granting: bool,
    pub notice: Option<Notice>,
}

/// A single state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectTab(Tab),
    LoadStarted,
    Loaded {
        snapshot: Snapshot,
        at: DateTime<Utc>,
    },
    LoadFailed,
    SetSearchQuery(String),
    SearchStarted,
    SearchFinished(SearchResult),
    SetGrantUserId(String),
    SetGrantAttempts(String),
    GrantStarted,
    /// Clears both grant inputs
    GrantSucceeded(Notice),
    GrantFailed(Notice),
    /// Input rejected before any request was sent
    GrantRejected(Notice),
    DismissNotice,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectTab(tab) => self.tab = tab,
            Action::LoadStarted => self.pending_loads = self.pending_loads.saturating_add(1),
            Action::Loaded { snapshot, at } => {
                let Snapshot {
                    stats,
                    users,
                    searches,
                } = snapshot;
                self.stats = stats;
                self.users = users;
                self.searches = searches;
                self.pending_loads = self.pending_loads.saturating_sub(1);
                self.connected = Some(true);
                self.last_refresh = Some(at);
            }
            Action::LoadFailed => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                self.connected = Some(false);
            }
            Action::SetSearchQuery(query) => self.search_query = query,
            Action::SearchStarted => self.searching = true,
            Action::SearchFinished(result) => {
                self.search_result = Some(result);
                self.searching = false;
            }
            Action::SetGrantUserId(user_id) => self.grant_user_id = user_id,
            Action::SetGrantAttempts(attempts) => self.grant_attempts = attempts,
            Action::GrantStarted => self.granting = true,
            Action::GrantSucceeded(notice) => {
                self.grant_user_id.clear();
                self.grant_attempts.clear();
                self.granting = false;
                self.notice = Some(notice);
            }
            Action::GrantFailed(notice) => {
                self.granting = false;
                self.notice = Some(notice);
            }
            Action::GrantRejected(notice) => self.notice = Some(notice),
            Action::DismissNotice => self.notice = None,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.pending_loads > 0
    }

    /// Number of admin users in the last load
    pub fn admin_count(&self) -> usize {
        self.users.iter().filter(|u| u.is_admin).count()
    }

    /// Attempts remaining across all users
    pub fn total_attempts(&self) -> i64 {
        self.users.iter().map(|u| u.attempts_remaining).sum()
    }
}

/// Receiver of state transitions.
///
/// The operations in [`crate::ops`] report progress through this trait so
/// they can run against a Leptos signal in the browser and against plain
/// state in tests.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl Dispatch for RwSignal<ViewState> {
    fn dispatch(&self, action: Action) {
        self.update(|state| state.apply(action));
    }
}

/// Dashboard state shared through Leptos context
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub view: RwSignal<ViewState>,
    client: StoredValue<ApiClient>,
    version: StoredValue<Option<String>>,
}

impl DashboardState {
    pub fn new(client: ApiClient, version: Option<String>) -> Self {
        Self {
            view: create_rw_signal(ViewState::new()),
            client: store_value(client),
            version: store_value(version),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn version(&self) -> Option<String> {
        self.version.get_value()
    }

    /// Memoized projection of the view state.
    ///
    /// Subscribers are only notified when the projected value changes, not on
    /// every action applied to the view state.
    pub fn select<T>(&self, f: impl Fn(&ViewState) -> T + 'static) -> Signal<T>
    where
        T: Clone + PartialEq + 'static,
    {
        let view = self.view;
        create_memo(move |_| view.with(|state| f(state))).into()
    }

    pub fn dispatch(&self, action: Action) {
        self.view.dispatch(action);
    }

    pub fn select_tab(&self, tab: Tab) {
        self.dispatch(Action::SelectTab(tab));
    }

    /// Run the aggregated load in the background
    pub fn refresh(&self) {
        let client = self.client();
        let view = self.view;
        spawn_local(async move {
            // Failures are logged and reflected in the view state
            let _ = ops::refresh(&client, &view).await;
        });
    }

    /// Submit the current test-search query
    pub fn run_search(&self) {
        if self.view.with_untracked(|s| s.searching) {
            return;
        }
        let query = self.view.with_untracked(|s| s.search_query.clone());
        let client = self.client();
        let view = self.view;
        spawn_local(async move {
            ops::test_search(&client, &view, &query).await;
        });
    }

    /// Submit the current grant-attempts form
    pub fn grant_attempts(&self) {
        let (granting, user_id, attempts) = self.view.with_untracked(|s| {
            (s.granting, s.grant_user_id.clone(), s.grant_attempts.clone())
        });
        if granting {
            return;
        }
        let client = self.client();
        let view = self.view;
        spawn_local(async move {
            ops::grant_attempts(&client, &view, &user_id, &attempts).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::api::SearchError;

    fn snapshot(users: usize) -> Snapshot {
        Snapshot {
            stats: Stats {
                total_users: users as u64,
                ..Stats::default()
            },
            users: (0..users)
                .map(|i| User {
                    telegram_id: i as i64,
                    attempts_remaining: 2,
                    is_admin: i == 0,
                    ..User::default()
                })
                .collect(),
            searches: vec![SearchRecord {
                user_id: 1,
                query: "+79123456789".into(),
                success: true,
                timestamp: None,
            }],
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.tab, Tab::Dashboard);
        assert!(state.users.is_empty());
        assert!(!state.searching);
        assert!(!state.granting);
        assert!(!state.is_refreshing());
        assert_eq!(state.connected, None);
    }

    #[test]
    fn test_select_each_tab() {
        let mut state = ViewState::new();
        for tab in Tab::ALL {
            state.apply(Action::SelectTab(tab));
            assert_eq!(state.tab, tab);
            assert_eq!(Tab::ALL.iter().filter(|t| **t == state.tab).count(), 1);
        }
    }

    #[test]
    fn test_tab_ids_are_unique() {
        let mut ids: Vec<_> = Tab::ALL.iter().map(Tab::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Tab::ALL.len());
    }

    #[test]
    fn test_loaded_replaces_everything_at_once() {
        let mut state = ViewState::new();
        state.apply(Action::LoadStarted);
        assert!(state.is_refreshing());

        let at = Utc::now();
        state.apply(Action::Loaded {
            snapshot: snapshot(3),
            at,
        });

        assert_eq!(state.stats.total_users, 3);
        assert_eq!(state.users.len(), 3);
        assert_eq!(state.searches.len(), 1);
        assert_eq!(state.connected, Some(true));
        assert_eq!(state.last_refresh, Some(at));
        assert!(!state.is_refreshing());
        assert_eq!(state.admin_count(), 1);
        assert_eq!(state.total_attempts(), 6);
    }

    #[test]
    fn test_load_failed_keeps_data() {
        let mut state = ViewState::new();
        state.apply(Action::Loaded {
            snapshot: snapshot(2),
            at: Utc::now(),
        });
        let before = (state.stats.clone(), state.users.clone(), state.searches.clone());

        state.apply(Action::LoadStarted);
        state.apply(Action::LoadFailed);

        assert_eq!((state.stats.clone(), state.users.clone(), state.searches.clone()), before);
        assert_eq!(state.connected, Some(false));
    }

    #[test]
    fn test_overlapping_loads() {
        let mut state = ViewState::new();
        state.apply(Action::LoadStarted);
        state.apply(Action::LoadStarted);
        state.apply(Action::LoadFailed);
        assert!(state.is_refreshing());
        state.apply(Action::Loaded {
            snapshot: Snapshot::default(),
            at: Utc::now(),
        });
        assert!(!state.is_refreshing());
        // Never underflows
        state.apply(Action::LoadFailed);
        assert_eq!(state.pending_loads, 0);
    }

    #[test]
    fn test_search_lifecycle() {
        let mut state = ViewState::new();
        state.apply(Action::SetSearchQuery("ivan".into()));
        state.apply(Action::SearchStarted);
        assert!(state.searching);

        state.apply(Action::SearchFinished(SearchResult::failed()));
        assert!(!state.searching);
        assert_eq!(
            state.search_result.as_ref().and_then(|r| r.error.clone()),
            Some(SearchError::Message("Search failed".into()))
        );
        assert_eq!(state.search_query, "ivan");
    }

    #[test]
    fn test_grant_success_clears_inputs() {
        let mut state = ViewState::new();
        state.apply(Action::SetGrantUserId("42".into()));
        state.apply(Action::SetGrantAttempts("5".into()));
        state.apply(Action::GrantStarted);
        assert!(state.granting);

        state.apply(Action::GrantSucceeded(Notice::success("ok")));
        assert!(!state.granting);
        assert!(state.grant_user_id.is_empty());
        assert!(state.grant_attempts.is_empty());
        assert_eq!(state.notice, Some(Notice::success("ok")));

        state.apply(Action::DismissNotice);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_grant_failure_keeps_inputs() {
        let mut state = ViewState::new();
        state.apply(Action::SetGrantUserId("42".into()));
        state.apply(Action::SetGrantAttempts("5".into()));
        state.apply(Action::GrantStarted);
        state.apply(Action::GrantFailed(Notice::error("nope")));

        assert!(!state.granting);
        assert_eq!(state.grant_user_id, "42");
        assert_eq!(state.grant_attempts, "5");
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_tab_selector_ignores_unrelated_updates() {
        let runtime = create_runtime();
        let state = DashboardState::new(ApiClient::new("http://localhost:8001"), None);
        let tab = state.select(|s| s.tab);

        let runs = Rc::new(Cell::new(0));
        create_effect({
            let runs = Rc::clone(&runs);
            move |_| {
                let _ = tab.get();
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        for query in ["+", "+7", "+79", "+791"] {
            state.dispatch(Action::SetSearchQuery(query.into()));
        }
        state.dispatch(Action::SetGrantUserId("42".into()));
        state.dispatch(Action::SetGrantAttempts("5".into()));
        state.dispatch(Action::LoadStarted);
        state.dispatch(Action::LoadFailed);
        assert_eq!(runs.get(), 1);

        state.select_tab(Tab::Users);
        assert_eq!(runs.get(), 2);
        state.select_tab(Tab::Users);
        assert_eq!(runs.get(), 2);
        assert_eq!(tab.get_untracked(), Tab::Users);

        runtime.dispose();
    }
}
