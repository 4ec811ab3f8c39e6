//! Submission state machine.
//!
//! The controller owns the session state (busy flag, last successful
//! username) and turns user actions into `Transition`s: pure descriptions of
//! what the view should show next. It never touches a terminal.
//!
//! ```text
//! Idle --submit(valid, new)--> Loading --complete(Ok)---> Idle (stats shown)
//!   |                             |------complete(Err)--> Idle (stats cleared)
//!   |--submit(invalid)----------> Idle (error notice)
//!   |--submit(last success)-----> Idle (duplicate notice)
//! Loading --submit(any)---------> ignored
//! ```

use leetmetric_engine::{
    Clock, StatsDisplay, present_empty, present_error, present_stats, validate_username,
};
use leetmetric_types::{LookupError, Username};
use serde::Serialize;
use tracing::{debug, warn};

use crate::fetcher::{FetchOutcome, FetchSource, Fetcher};
use crate::notice::Notice;
use crate::source::StatsSource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Last username whose lookup succeeded
    pub last_searched: Option<Username>,
    /// Set while a request is outstanding
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "username", rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading(Username),
}

/// Render instruction for the stats area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "stats", rename_all = "lowercase")]
pub enum DisplayUpdate {
    /// Leave whatever is on screen
    Keep,
    /// Replace the stats with an all-zero model
    Clear(StatsDisplay),
    Show(StatsDisplay),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    pub display: DisplayUpdate,
}

impl Transition {
    fn idle(notice: Option<Notice>, display: DisplayUpdate) -> Self {
        Self {
            phase: Phase::Idle,
            notice,
            display,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A request is outstanding; nothing changes
    Ignored,
    /// Validation failed
    Rejected(Transition),
    /// Same username as the last successful lookup
    Duplicate(Transition),
    /// Caller must now fetch `username` and hand the result to `complete`
    Started {
        username: Username,
        transition: Transition,
    },
}

#[derive(Debug, Default)]
pub struct Controller {
    state: SessionState,
    in_flight: Option<Username>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match &self.in_flight {
            Some(username) => Phase::Loading(username.clone()),
            None => Phase::Idle,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.state.busy
    }

    pub fn submit(&mut self, input: &str) -> Submission {
        if self.state.busy {
            debug!("submission ignored while a request is outstanding");
            return Submission::Ignored;
        }

        let username = match validate_username(input) {
            Ok(username) => username,
            Err(err) => {
                debug!(error = %err, "submission rejected");
                return Submission::Rejected(Transition::idle(
                    Some(Notice::rejected(err)),
                    DisplayUpdate::Keep,
                ));
            }
        };

        // Suppresses a re-fetch even when the cached entry has expired.
        if self.state.last_searched.as_ref() == Some(&username) {
            debug!(%username, "duplicate submission");
            return Submission::Duplicate(Transition::idle(
                Some(Notice::duplicate()),
                DisplayUpdate::Keep,
            ));
        }

        self.state.busy = true;
        self.in_flight = Some(username.clone());

        Submission::Started {
            username: username.clone(),
            transition: Transition {
                phase: Phase::Loading(username),
                notice: None,
                display: DisplayUpdate::Clear(present_empty()),
            },
        }
    }

    /// Enter key in the input field; same as `submit` unless busy
    pub fn press_enter(&mut self, input: &str) -> Submission {
        if self.state.busy {
            return Submission::Ignored;
        }
        self.submit(input)
    }

    /// Finish the outstanding request
    pub fn complete(&mut self, result: Result<FetchOutcome, LookupError>) -> Transition {
        let Some(username) = self.in_flight.take() else {
            warn!("completion received with no outstanding request");
            return Transition::idle(None, DisplayUpdate::Keep);
        };
        self.state.busy = false;

        match result {
            Ok(outcome) => {
                let notice = match outcome.source {
                    FetchSource::Network => Notice::fetched(&username),
                    FetchSource::Cache => Notice::loaded_from_cache(&username),
                };
                self.state.last_searched = Some(username);
                Transition::idle(
                    Some(notice),
                    DisplayUpdate::Show(present_stats(&outcome.stats)),
                )
            }
            Err(err) => Transition::idle(
                Some(Notice::failed(err)),
                DisplayUpdate::Clear(present_error(err)),
            ),
        }
    }

    /// Run one submission to completion and return every transition it produced
    pub async fn lookup<S, C>(&mut self, input: &str, fetcher: &Fetcher<S, C>) -> Vec<Transition>
    where
        S: StatsSource,
        C: Clock,
    {
        match self.submit(input) {
            Submission::Ignored => Vec::new(),
            Submission::Rejected(transition) | Submission::Duplicate(transition) => {
                vec![transition]
            }
            Submission::Started {
                username,
                transition,
            } => {
                let result = fetcher.fetch(&username).await;
                vec![transition, self.complete(result)]
            }
        }
    }
}
