//! Per-game session state and the guess/poll protocol.
//!
//! Two players look at the same color and each submit a name for it. The
//! first submission is parked as the pending color; the second either
//! matches it (case-insensitively) and the game advances a round, or it
//! doesn't and the game is lost for good.

use serde::Serialize;

use crate::errors::domain::{ConflictKind, DomainError};

/// Wire value of the round of a lost session.
pub const LOST_ROUND: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Active {
        round: u64,
        /// First guess of the round, waiting for the second one.
        pending_color: Option<String>,
    },
    /// Terminal.
    Lost,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Session::Active {
            round: 0,
            pending_color: None,
        }
    }

    /// Current round, `LOST_ROUND` once lost.
    pub fn round(&self) -> i64 {
        match self {
            Session::Active { round, .. } => i64::try_from(*round).unwrap_or(i64::MAX),
            Session::Lost => LOST_ROUND,
        }
    }

    pub fn active_round(&self) -> Option<u64> {
        match self {
            Session::Active { round, .. } => Some(*round),
            Session::Lost => None,
        }
    }

    pub fn pending_color(&self) -> Option<&str> {
        match self {
            Session::Active { pending_color, .. } => pending_color.as_deref(),
            Session::Lost => None,
        }
    }

    pub fn state(&self) -> SessionState {
        match self {
            Session::Active {
                pending_color: None,
                ..
            } => SessionState::Empty,
            Session::Active {
                pending_color: Some(_),
                ..
            } => SessionState::Pending,
            Session::Lost => SessionState::Lost,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Pending,
    Lost,
}

/// Result of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The round is confirmed; show its color.
    Win,
    /// First guess of the round; wait for the other player.
    Wait,
    /// Guesses disagreed, now or earlier.
    Lose,
}

/// Result of a waiting player polling the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PollOutcome {
    StillWaiting,
    /// The other player matched the guess; resubmit at the new round.
    Advanced,
    Lost,
}

fn same_color(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Apply a submission for `expected_round` to `session`.
///
/// An empty `submitted` color is a fetch of the current color and never
/// mutates. A lost session answers `Lose` to everything.
pub fn resolve_guess(
    session: &mut Session,
    submitted: &str,
    expected_round: i64,
) -> Result<GuessOutcome, DomainError> {
    let current = session.round();
    let Session::Active {
        round,
        pending_color,
    } = session
    else {
        return Ok(GuessOutcome::Lose);
    };

    if current != expected_round {
        return Err(DomainError::conflict(
            ConflictKind::InvalidRound,
            format!("invalid round: expected {expected_round}, session is at round {current}"),
        ));
    }

    if submitted.is_empty() {
        return Ok(GuessOutcome::Win);
    }

    let matched = match pending_color.as_deref() {
        None => {
            *pending_color = Some(submitted.to_string());
            return Ok(GuessOutcome::Wait);
        }
        Some(pending) => same_color(pending, submitted),
    };

    if matched {
        *pending_color = None;
        *round += 1;
        Ok(GuessOutcome::Win)
    } else {
        *session = Session::Lost;
        Ok(GuessOutcome::Lose)
    }
}

/// Where a player waiting at `claimed_round` stands.
///
/// A player that submitted the first guess while displaying round `r`
/// waits with `claimed_round == r`; the session sits at `r - 1` until the
/// other player confirms the guess.
pub fn poll(session: &Session, claimed_round: i64) -> Result<PollOutcome, DomainError> {
    let current = match session {
        Session::Lost => return Ok(PollOutcome::Lost),
        Session::Active { .. } => session.round(),
    };

    if current == claimed_round {
        Ok(PollOutcome::Advanced)
    } else if claimed_round.checked_sub(1) == Some(current) {
        Ok(PollOutcome::StillWaiting)
    } else {
        Err(DomainError::conflict(
            ConflictKind::InconsistentRound,
            format!("inconsistent round: waiting at {claimed_round}, session is at round {current}"),
        ))
    }
}
