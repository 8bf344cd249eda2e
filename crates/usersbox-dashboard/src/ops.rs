//! Dashboard operations
//!
//! Each operation talks to a [`BotApi`] and reports its progress as
//! [`Action`]s through a [`Dispatch`] sink:
//!
//! - [`refresh`]: concurrent load of stats, users and searches, applied
//!   all-or-nothing
//! - [`test_search`]: ad-hoc search with a busy flag
//! - [`grant_attempts`]: credit attempts to a user, then refresh

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, BotApi, GrantResponse, SearchResult};
use crate::state::{Action, Dispatch, Notice, Snapshot};

/// Shown when the grant request fails for any reason
pub const GRANT_FAILED_MESSAGE: &str = "Failed to give attempts";

/// Fetch stats, users and searches concurrently.
///
/// The view is updated once, after all three requests succeed. If any of
/// them fails nothing is applied.
pub async fn load_snapshot<A: BotApi + ?Sized>(api: &A) -> Result<Snapshot, ApiError> {
    let (stats, users, searches) = futures::try_join!(api.stats(), api.users(), api.searches())?;
    Ok(Snapshot {
        stats,
        users,
        searches,
    })
}

/// Reload all dashboard data into the view
pub async fn refresh<A, D>(api: &A, sink: &D) -> Result<(), ApiError>
where
    A: BotApi + ?Sized,
    D: Dispatch + ?Sized,
{
    sink.dispatch(Action::LoadStarted);
    match load_snapshot(api).await {
        Ok(snapshot) => {
            debug!(
                users = snapshot.users.len(),
                searches = snapshot.searches.len(),
                "dashboard data loaded"
            );
            sink.dispatch(Action::Loaded {
                snapshot,
                at: Utc::now(),
            });
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "failed to load dashboard data");
            sink.dispatch(Action::LoadFailed);
            Err(err)
        }
    }
}

/// Run a test search. Blank queries are ignored.
pub async fn test_search<A, D>(api: &A, sink: &D, query: &str)
where
    A: BotApi + ?Sized,
    D: Dispatch + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return;
    }

    sink.dispatch(Action::SearchStarted);
    let result = match api.search(query).await {
        Ok(result) => {
            info!(query, "test search completed");
            result
        }
        Err(err) => {
            error!(query, error = %err, "test search failed");
            SearchResult::failed()
        }
    };
    sink.dispatch(Action::SearchFinished(result));
}

/// Why grant-attempts input was not sent
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrantInputError {
    #[error("User ID and attempts are required")]
    Missing,

    #[error("User ID must be a whole number, got {0:?}")]
    InvalidUserId(String),

    #[error("Attempts must be a whole number, got {0:?}")]
    InvalidAttempts(String),
}

/// Parse the grant form into `(user_id, attempts)`
pub fn parse_grant_input(user_id: &str, attempts: &str) -> Result<(i64, i64), GrantInputError> {
    let (user_id, attempts) = (user_id.trim(), attempts.trim());
    if user_id.is_empty() || attempts.is_empty() {
        return Err(GrantInputError::Missing);
    }
    let user_id = user_id
        .parse()
        .map_err(|_| GrantInputError::InvalidUserId(user_id.to_string()))?;
    let attempts = attempts
        .parse()
        .map_err(|_| GrantInputError::InvalidAttempts(attempts.to_string()))?;
    Ok((user_id, attempts))
}

/// Give attempts to a user, then reload the dashboard on success.
///
/// Empty inputs are a silent no-op; non-numeric inputs are rejected with a
/// notice before any request is made.
pub async fn grant_attempts<A, D>(api: &A, sink: &D, user_id: &str, attempts: &str)
where
    A: BotApi + ?Sized,
    D: Dispatch + ?Sized,
{
    let (user_id, attempts) = match parse_grant_input(user_id, attempts) {
        Ok(parsed) => parsed,
        Err(GrantInputError::Missing) => return,
        Err(err) => {
            warn!(error = %err, "rejected grant input");
            sink.dispatch(Action::GrantRejected(Notice::error(err.to_string())));
            return;
        }
    };

    sink.dispatch(Action::GrantStarted);
    match api.give_attempts(user_id, attempts).await {
        Ok(response) => {
            info!(user_id, attempts, "attempts granted");
            sink.dispatch(Action::GrantSucceeded(Notice::success(grant_message(
                &response, user_id, attempts,
            ))));
            // Failures are logged inside refresh
            let _ = refresh(api, sink).await;
        }
        Err(err) => {
            error!(user_id, attempts, error = %err, "failed to give attempts");
            sink.dispatch(Action::GrantFailed(Notice::error(GRANT_FAILED_MESSAGE)));
        }
    }
}

fn grant_message(response: &GrantResponse, user_id: i64, attempts: i64) -> String {
    response
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Gave {attempts} attempts to user {user_id}"))
}
