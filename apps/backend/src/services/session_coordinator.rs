//! Session coordinator: the two operations the HTTP layer calls.
//!
//! `submit_guess` resolves (or creates) the session, derives the round the
//! submission is meant for and applies the guess transition under the
//! session lock. `poll_wait` tells a waiting player whether the other
//! player has confirmed the guess yet.
//!
//! Rounds arriving from requests are *display* rounds: the form on the
//! page showing round `r`'s color posts `round = r + 1`. A guess posted
//! with `round = r` therefore confirms session round `r - 1`, while a
//! fetch (empty color) with `round = r` must find the session at `r`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::color_sequence::{color_for, Rgb};
use crate::domain::session::{self, GuessOutcome, PollOutcome};
use crate::domain::SessionId;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::services::session_store::{SessionHandle, SessionStore};

/// What a player should see after a confirmed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundDisplay {
    /// Session round whose color is shown.
    pub round: u64,
    /// Round value the next guess must carry.
    pub next_round: u64,
    pub color: Rgb,
}

impl RoundDisplay {
    fn for_round(round: u64) -> Self {
        Self {
            round,
            next_round: round + 1,
            color: color_for(round),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResolution {
    Win(RoundDisplay),
    Wait,
    Lose,
}

impl GuessResolution {
    pub fn outcome(&self) -> GuessOutcome {
        match self {
            GuessResolution::Win(_) => GuessOutcome::Win,
            GuessResolution::Wait => GuessOutcome::Wait,
            GuessResolution::Lose => GuessOutcome::Lose,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub session_id: SessionId,
    /// The session was created by this submission; only its creator gets a
    /// share link.
    pub created: bool,
    pub resolution: GuessResolution,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollReport {
    pub session_id: SessionId,
    pub outcome: PollOutcome,
}

#[derive(Debug, Clone)]
pub struct SessionCoordinator {
    store: Arc<SessionStore>,
}

impl SessionCoordinator {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle a submission of `color` by a player displaying `round`.
    ///
    /// Without a session id, round 0 starts a new game; any other round is
    /// rejected. An empty color fetches the current round's color.
    pub fn submit_guess(
        &self,
        session_id: Option<&str>,
        round: i64,
        color: &str,
    ) -> Result<GuessReport, DomainError> {
        let (handle, created) = match non_empty(session_id) {
            Some(id) => (self.lookup(id)?, false),
            None if round == 0 => {
                let handle = self.store.create();
                info!(session_id = %handle.id(), "session created");
                (handle, true)
            }
            None => {
                return Err(DomainError::validation(
                    ValidationKind::MissingSessionId,
                    format!("id is required for round {round}"),
                ))
            }
        };

        let expected_round = if color.is_empty() {
            round
        } else {
            round.saturating_sub(1)
        };

        let (outcome, active_round) = {
            let mut session = handle.lock();
            let outcome = session::resolve_guess(&mut session, color, expected_round)?;
            (outcome, session.active_round())
        };

        let resolution = match (outcome, active_round) {
            (GuessOutcome::Win, Some(current)) => {
                GuessResolution::Win(RoundDisplay::for_round(current))
            }
            (GuessOutcome::Wait, _) => GuessResolution::Wait,
            _ => GuessResolution::Lose,
        };

        match resolution {
            GuessResolution::Lose if !color.is_empty() => {
                info!(session_id = %handle.id(), round, "guess lost the game")
            }
            _ => debug!(
                session_id = %handle.id(),
                round,
                outcome = ?resolution.outcome(),
                "guess resolved"
            ),
        }

        Ok(GuessReport {
            session_id: handle.id().clone(),
            created,
            resolution,
        })
    }

    /// Handle a poll from a player waiting at `round`.
    pub fn poll_wait(
        &self,
        session_id: Option<&str>,
        round: i64,
    ) -> Result<PollReport, DomainError> {
        let id = non_empty(session_id).ok_or_else(|| {
            DomainError::validation(ValidationKind::MissingSessionId, "id is required to wait")
        })?;
        let handle = self.lookup(id)?;
        let outcome = session::poll(&handle.lock(), round)?;
        debug!(session_id = %handle.id(), round, outcome = ?outcome, "poll resolved");

        Ok(PollReport {
            session_id: handle.id().clone(),
            outcome,
        })
    }

    fn lookup(&self, id: &str) -> Result<SessionHandle, DomainError> {
        self.store.get(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Session, format!("session {id:?} not found"))
        })
    }
}

fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}
