//! Game pages.
//!
//! `GET /` and `POST /` submit a guess (or fetch the current color when the
//! color is empty); `GET /wait` is polled by the player whose guess is
//! waiting for the other player's.

use actix_web::http::header::{ContentType, LOCATION};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::domain::params::parse_round;
use crate::domain::PollOutcome;
use crate::error::AppError;
use crate::services::{GuessReport, GuessResolution};
use crate::state::app_state::AppState;
use crate::views::{LostView, RoundView, WaitView, WAIT_REFRESH_SECS};

#[derive(Debug, Default, Deserialize)]
pub struct GuessParams {
    pub id: Option<String>,
    pub round: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PollParams {
    pub id: Option<String>,
    pub round: Option<String>,
}

/// GET /
async fn guess_from_query(
    req: HttpRequest,
    params: web::Query<GuessParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    submit(&req, &app_state, params.into_inner())
}

/// POST /
async fn guess_from_form(
    req: HttpRequest,
    params: web::Form<GuessParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    submit(&req, &app_state, params.into_inner())
}

fn submit(
    req: &HttpRequest,
    app_state: &AppState,
    params: GuessParams,
) -> Result<HttpResponse, AppError> {
    let round = parse_round(params.round.as_deref())?;
    let color = params.color.as_deref().unwrap_or_default();

    let GuessReport {
        session_id,
        created,
        resolution,
    } = app_state
        .coordinator()
        .submit_guess(params.id.as_deref(), round, color)?;

    match resolution {
        GuessResolution::Win(display) => {
            let share_link =
                created.then(|| format!("{}/?id={session_id}", public_base(req, app_state)));
            let body = app_state.views().round(&RoundView {
                session_id: session_id.to_string(),
                round: display.next_round,
                color: display.color.to_string(),
                share_link,
            })?;
            Ok(html(body))
        }
        GuessResolution::Wait => Ok(see_other(format!(
            "/wait?id={session_id}&round={round}"
        ))),
        GuessResolution::Lose => lost(req, app_state),
    }
}

/// GET /wait
async fn wait(
    req: HttpRequest,
    params: web::Query<PollParams>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let round = parse_round(params.round.as_deref())?;
    let report = app_state
        .coordinator()
        .poll_wait(params.id.as_deref(), round)?;
    let session_id = report.session_id;

    match report.outcome {
        PollOutcome::StillWaiting => {
            let body = app_state.views().wait(&WaitView {
                round,
                poll_url: format!("/wait?id={session_id}&round={round}"),
                refresh_secs: WAIT_REFRESH_SECS,
            })?;
            Ok(html(body))
        }
        PollOutcome::Advanced => Ok(see_other(format!("/?id={session_id}&round={round}"))),
        PollOutcome::Lost => lost(&req, &app_state),
    }
}

fn lost(req: &HttpRequest, app_state: &AppState) -> Result<HttpResponse, AppError> {
    let body = app_state.views().lost(&LostView {
        home_link: format!("{}/", public_base(req, app_state)),
    })?;
    Ok(html(body))
}

/// Configured public URL, or one built from the request's `Host` header.
fn public_base(req: &HttpRequest, app_state: &AppState) -> String {
    match app_state.public_url() {
        Some(url) => url.to_string(),
        None => format!("http://{}", req.connection_info().host()),
    }
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn see_other(location: String) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(guess_from_query))
            .route(web::post().to(guess_from_form)),
    );
    cfg.service(web::resource("/wait").route(web::get().to(wait)));
}
