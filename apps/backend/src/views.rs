//! HTML views for the three pages of the game.
//!
//! Templates are compiled into the binary and rendered with minijinja.
//! Every value is HTML-escaped; share links embed the request's `Host`
//! header and must never be marked safe.

use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;

const ROUND_TEMPLATE: &str = "round.html";
const WAIT_TEMPLATE: &str = "wait.html";
const LOST_TEMPLATE: &str = "lost.html";

/// Seconds between automatic reloads of the wait page.
pub const WAIT_REFRESH_SECS: u32 = 2;

/// The color of a confirmed round and the form for the next guess.
#[derive(Debug, Serialize)]
pub struct RoundView {
    pub session_id: String,
    /// 1-based round shown to the player; also the `round` the form posts.
    pub round: u64,
    pub color: String,
    pub share_link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WaitView {
    pub round: i64,
    pub poll_url: String,
    pub refresh_secs: u32,
}

#[derive(Debug, Serialize)]
pub struct LostView {
    pub home_link: String,
}

#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template(ROUND_TEMPLATE, include_str!("../templates/round.html"))?;
        env.add_template(WAIT_TEMPLATE, include_str!("../templates/wait.html"))?;
        env.add_template(LOST_TEMPLATE, include_str!("../templates/lost.html"))?;
        Ok(Self { env })
    }

    pub fn round(&self, view: &RoundView) -> Result<String, AppError> {
        self.render(ROUND_TEMPLATE, view)
    }

    pub fn wait(&self, view: &WaitView) -> Result<String, AppError> {
        self.render(WAIT_TEMPLATE, view)
    }

    pub fn lost(&self, view: &LostView) -> Result<String, AppError> {
        self.render(LOST_TEMPLATE, view)
    }

    fn render<S: Serialize>(&self, name: &str, view: &S) -> Result<String, AppError> {
        Ok(self.env.get_template(name)?.render(view)?)
    }
}
