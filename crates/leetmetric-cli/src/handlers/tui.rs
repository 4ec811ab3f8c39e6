//! Interactive lookup widget.
//!
//! Single-threaded: one current-thread tokio runtime runs both the key
//! polling loop and the (at most one) outstanding fetch. The pending fetch is
//! raced against a short tick so the screen keeps redrawing while loading.

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use is_terminal::IsTerminal;
use leetmetric_engine::{StatsDisplay, present_empty};
use leetmetric_runtime::{
    Config, Controller, DisplayUpdate, FetchOutcome, Fetcher, HttpStatsSource, Notice,
    NoticeLevel, StatsSource, Submission, Transition,
};
use leetmetric_types::{LookupError, Username};
use tracing::{debug, info};

use crate::presentation::TuiRenderer;
use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::TuiScreenViewModel;

const TICK: Duration = Duration::from_millis(80);
const SUCCESS_TOAST: Duration = Duration::from_secs(3);
const ERROR_TOAST: Duration = Duration::from_secs(4);

type PendingFetch<'a> = LocalBoxFuture<'a, Result<FetchOutcome, LookupError>>;

pub fn handle(config: &Config, username: Option<String>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the tui command needs an interactive terminal; use `leetmetric lookup` instead");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let fetcher = Fetcher::new(HttpStatsSource::from_config(config)?, config.cache_ttl());
    let mut app = TuiApp::new(username);

    info!(endpoint = %config.endpoint, "tui started");
    let mut renderer = TuiRenderer::start()?;
    let result = runtime.block_on(event_loop(&mut renderer, &mut app, &fetcher));
    renderer.restore()?;
    info!("tui stopped");

    result
}

async fn event_loop<S: StatsSource>(
    renderer: &mut TuiRenderer,
    app: &mut TuiApp,
    fetcher: &Fetcher<S>,
) -> Result<()> {
    let mut pending: Option<PendingFetch<'_>> = None;

    if !app.input.is_empty()
        && let Some(username) = app.submit(Instant::now())
    {
        pending = Some(fetch_owned(fetcher, username));
    }

    loop {
        let now = Instant::now();
        app.expire_toast(now);
        renderer.draw(&app.screen())?;

        for key in renderer.pending_keys()? {
            match app.handle_key(key) {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Submit) => {
                    if let Some(username) = app.submit(now) {
                        pending = Some(fetch_owned(fetcher, username));
                    }
                }
                None => {}
            }
        }

        let finished = match pending.as_mut() {
            Some(request) => tokio::select! {
                result = request => Some(result),
                _ = tokio::time::sleep(TICK) => None,
            },
            None => {
                tokio::time::sleep(TICK).await;
                None
            }
        };

        if let Some(result) = finished {
            pending = None;
            app.complete(result, Instant::now(), Local::now());
        }

        app.tick = app.tick.wrapping_add(1);
    }
}

fn fetch_owned<'a, S: StatsSource>(fetcher: &'a Fetcher<S>, username: Username) -> PendingFetch<'a> {
    async move { fetcher.fetch(&username).await }.boxed_local()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Submit,
    Quit,
}

struct Toast {
    notice: Notice,
    expires_at: Instant,
}

/// UI state of the widget: input buffer, last stats, toast
struct TuiApp {
    input: String,
    controller: Controller,
    stats: StatsDisplay,
    toast: Option<Toast>,
    updated_at: Option<DateTime<Local>>,
    tick: usize,
}

impl TuiApp {
    fn new(initial: Option<String>) -> Self {
        Self {
            input: initial.unwrap_or_default(),
            controller: Controller::new(),
            stats: present_empty(),
            toast: None,
            updated_at: None,
            tick: 0,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                None
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    /// Returns the username to fetch when the submission started a request
    fn submit(&mut self, now: Instant) -> Option<Username> {
        match self.controller.press_enter(&self.input) {
            Submission::Ignored => {
                debug!("enter ignored while loading");
                None
            }
            Submission::Rejected(transition) | Submission::Duplicate(transition) => {
                self.apply(transition, now);
                None
            }
            Submission::Started {
                username,
                transition,
            } => {
                self.toast = None;
                self.apply(transition, now);
                Some(username)
            }
        }
    }

    fn complete(
        &mut self,
        result: Result<FetchOutcome, LookupError>,
        now: Instant,
        wall_clock: DateTime<Local>,
    ) {
        let transition = self.controller.complete(result);
        if matches!(transition.display, DisplayUpdate::Show(_)) {
            self.updated_at = Some(wall_clock);
        }
        self.apply(transition, now);
    }

    fn apply(&mut self, transition: Transition, now: Instant) {
        match transition.display {
            DisplayUpdate::Keep => {}
            DisplayUpdate::Clear(stats) | DisplayUpdate::Show(stats) => self.stats = stats,
        }

        if let Some(notice) = transition.notice {
            let ttl = if notice.level == NoticeLevel::Success {
                SUCCESS_TOAST
            } else {
                ERROR_TOAST
            };
            self.toast = Some(Toast {
                notice,
                expires_at: now + ttl,
            });
        }
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
    }

    fn screen(&self) -> TuiScreenViewModel {
        present_screen(
            &self.input,
            &self.controller.phase(),
            self.toast.as_ref().map(|t| &t.notice),
            &self.stats,
            self.updated_at.as_ref(),
            self.tick,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leetmetric_runtime::FetchSource;
    use leetmetric_types::{ProfileStats, Tier};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_typing_and_editing() {
        let mut app = TuiApp::new(None);
        type_text(&mut app, "abcd");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input, "abc");

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Some(Action::Submit));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = TuiApp::new(None);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(app.input, "");
    }

    #[test]
    fn test_invalid_submit_raises_error_toast() {
        let mut app = TuiApp::new(Some("a!".to_string()));
        let now = Instant::now();

        assert_eq!(app.submit(now), None);
        let screen = app.screen();
        assert!(screen.status_bar.status_message.starts_with("Please enter a valid"));

        app.expire_toast(now + ERROR_TOAST);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_enter_while_loading_is_ignored() {
        let mut app = TuiApp::new(Some("abc".to_string()));
        let now = Instant::now();

        assert_eq!(app.submit(now), Some(Username::new("abc")));
        assert!(app.screen().input.busy);
        assert_eq!(app.submit(now), None);
    }

    #[test]
    fn test_completion_updates_stats_and_clock() {
        let mut app = TuiApp::new(Some("abc".to_string()));
        let now = Instant::now();
        app.submit(now);

        app.complete(
            Ok(FetchOutcome {
                stats: ProfileStats::with_counts(12, 8, 1),
                source: FetchSource::Network,
            }),
            now,
            Local::now(),
        );

        assert_eq!(app.stats.total_solved, 21);
        assert_eq!(app.stats.tier(Tier::Easy).percent_label, "57.1%");
        assert!(app.updated_at.is_some());

        let screen = app.screen();
        assert!(!screen.input.busy);
        assert_eq!(
            screen.status_bar.status_message,
            "Successfully fetched data for abc!"
        );

        // success toast is shorter than error toasts
        app.expire_toast(now + SUCCESS_TOAST);
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_failure_clears_stats() {
        let mut app = TuiApp::new(Some("abc".to_string()));
        let now = Instant::now();
        app.submit(now);
        app.complete(
            Ok(FetchOutcome {
                stats: ProfileStats::with_counts(1, 1, 1),
                source: FetchSource::Network,
            }),
            now,
            Local::now(),
        );

        app.input = "other".to_string();
        app.submit(now);
        app.complete(Err(LookupError::ServiceUnavailable), now, Local::now());

        assert!(app.stats.is_cleared());
        assert_eq!(
            app.screen().status_bar.status_message,
            "LeetCode API is temporarily unavailable. Please try again later."
        );
    }
}
