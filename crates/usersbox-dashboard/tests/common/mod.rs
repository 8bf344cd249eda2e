//! Test doubles for the dashboard operations

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use usersbox_dashboard::api::{
    ApiError, BotApi, GrantResponse, SearchData, SearchHits, SearchItem, SearchRecord,
    SearchResult, SearchSource, Stats, User,
};
use usersbox_dashboard::state::{Action, Dispatch, ViewState};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("usersbox_dashboard=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

/// Captures every dispatched action and applies it to a local view state
#[derive(Debug, Default)]
pub struct Recorder {
    pub state: RefCell<ViewState>,
    pub actions: RefCell<Vec<Action>>,
}

impl Recorder {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_state(state: ViewState) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(state),
            actions: RefCell::new(Vec::new()),
        })
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.actions.borrow().iter().filter(|a| pred(a)).count()
    }
}

impl Dispatch for Recorder {
    fn dispatch(&self, action: Action) {
        self.state.borrow_mut().apply(action.clone());
        self.actions.borrow_mut().push(action);
    }
}

/// In-memory bot backend with per-endpoint failure switches and call counters
#[derive(Default)]
pub struct FakeBot {
    pub stats: RefCell<Stats>,
    pub users: RefCell<Vec<User>>,
    pub searches: RefCell<Vec<SearchRecord>>,
    pub search_result: RefCell<SearchResult>,

    pub fail_stats: Cell<bool>,
    pub fail_users: Cell<bool>,
    pub fail_searches: Cell<bool>,
    pub fail_search: Cell<bool>,
    pub fail_grant: Cell<bool>,

    pub stats_calls: Cell<usize>,
    pub users_calls: Cell<usize>,
    pub searches_calls: Cell<usize>,
    pub search_queries: RefCell<Vec<String>>,
    pub grants: RefCell<Vec<(i64, i64)>>,

    /// When set, busy flags are sampled while a request is in flight
    pub observer: RefCell<Option<Rc<Recorder>>>,
    pub searching_during_request: Cell<Option<bool>>,
    pub granting_during_request: Cell<Option<bool>>,

    /// When set, `stats` stays pending until the sender fires
    stats_gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_data() -> Self {
        let bot = Self::new();
        *bot.stats.borrow_mut() = Stats {
            total_users: 2,
            total_searches: 3,
            total_referrals: 1,
            successful_searches: 2,
            success_rate: 66.7,
        };
        *bot.users.borrow_mut() = vec![
            user(111, "alice", 3, true),
            user(222, "bob", 0, false),
        ];
        *bot.searches.borrow_mut() = vec![
            search(111, "+79123456789", true),
            search(222, "ivan@example.com", false),
            search(111, "Ivan Petrov", true),
        ];
        *bot.search_result.borrow_mut() = sample_result();
        bot
    }

    pub fn observe(&self, recorder: &Rc<Recorder>) {
        *self.observer.borrow_mut() = Some(Rc::clone(recorder));
    }

    /// Hold the next stats request until the returned sender fires
    pub fn gate_stats(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.stats_gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn load_calls(&self) -> usize {
        self.stats_calls.get()
    }

    fn fail(flag: &Cell<bool>) -> Result<(), ApiError> {
        if flag.get() {
            Err(ApiError::Http(500))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl BotApi for FakeBot {
    async fn stats(&self) -> Result<Stats, ApiError> {
        self.stats_calls.set(self.stats_calls.get() + 1);
        let gate = self.stats_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Self::fail(&self.fail_stats)?;
        Ok(self.stats.borrow().clone())
    }

    async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.users_calls.set(self.users_calls.get() + 1);
        Self::fail(&self.fail_users)?;
        Ok(self.users.borrow().clone())
    }

    async fn searches(&self) -> Result<Vec<SearchRecord>, ApiError> {
        self.searches_calls.set(self.searches_calls.get() + 1);
        Self::fail(&self.fail_searches)?;
        Ok(self.searches.borrow().clone())
    }

    async fn search(&self, query: &str) -> Result<SearchResult, ApiError> {
        if let Some(observer) = self.observer.borrow().as_ref() {
            self.searching_during_request
                .set(Some(observer.state.borrow().searching));
        }
        self.search_queries.borrow_mut().push(query.to_string());
        Self::fail(&self.fail_search)?;
        Ok(self.search_result.borrow().clone())
    }

    async fn give_attempts(
        &self,
        user_id: i64,
        attempts: i64,
    ) -> Result<GrantResponse, ApiError> {
        if let Some(observer) = self.observer.borrow().as_ref() {
            self.granting_during_request
                .set(Some(observer.state.borrow().granting));
        }
        self.grants.borrow_mut().push((user_id, attempts));
        Self::fail(&self.fail_grant)?;

        let mut users = self.users.borrow_mut();
        let Some(target) = users.iter_mut().find(|u| u.telegram_id == user_id) else {
            return Err(ApiError::Http(404));
        };
        target.attempts_remaining += attempts;
        Ok(GrantResponse {
            status: Some("success".into()),
            message: Some(format!("Gave {attempts} attempts to user {user_id}")),
        })
    }
}

pub fn user(telegram_id: i64, username: &str, attempts: i64, is_admin: bool) -> User {
    User {
        telegram_id,
        username: Some(username.into()),
        first_name: Some(username.to_uppercase()),
        attempts_remaining: attempts,
        is_admin,
        created_at: Some("2025-01-15T10:30:00.123000".into()),
        ..User::default()
    }
}

pub fn search(user_id: i64, query: &str, success: bool) -> SearchRecord {
    SearchRecord {
        user_id,
        query: query.into(),
        success,
        timestamp: Some("2025-01-16T08:00:00".into()),
    }
}

pub fn sample_result() -> SearchResult {
    SearchResult {
        status: Some("success".into()),
        error: None,
        data: Some(SearchData {
            count: 2,
            items: vec![
                SearchItem {
                    source: Some(SearchSource {
                        database: Some("telegram".into()),
                        collection: Some("users".into()),
                    }),
                    hits: Some(SearchHits {
                        hits_count: Some(1),
                        count: None,
                    }),
                },
                SearchItem {
                    source: Some(SearchSource {
                        database: Some("vk".into()),
                        collection: Some("profiles".into()),
                    }),
                    hits: Some(SearchHits {
                        hits_count: None,
                        count: Some(1),
                    }),
                },
            ],
        }),
    }
}
