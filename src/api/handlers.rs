use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::models::{
    ErrorResponse, FrameScoreRequest, HighBreakRequest, ImportResponse, ResetRequest,
    StandingRow, StandingsResponse,
};
use crate::errors::{EditError, ImportError};
use crate::services::tournament::TournamentService;

pub struct AppState {
    pub tournament: Mutex<TournamentService>,
    pub export_file_name: String,
}

impl AppState {
    pub fn new(tournament: TournamentService, export_file_name: &str) -> Self {
        Self {
            tournament: Mutex::new(tournament),
            export_file_name: export_file_name.to_string(),
        }
    }
}

pub async fn get_matches(State(state): State<Arc<AppState>>) -> Response {
    let tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };
    Json(tournament.matches()).into_response()
}

pub async fn get_standings(State(state): State<Arc<AppState>>) -> Response {
    let tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    let items = tournament
        .standings()
        .into_iter()
        .enumerate()
        .map(|(i, s)| StandingRow::from_ranked(i + 1, s))
        .collect();

    Json(StandingsResponse { items }).into_response()
}

pub async fn put_frame_score(
    State(state): State<Arc<AppState>>,
    Path((match_index, frame_index)): Path<(usize, usize)>,
    Json(request): Json<FrameScoreRequest>,
) -> Response {
    let mut tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    match tournament.apply_score_edit(match_index, frame_index, request.side, request.score) {
        Ok(()) => Json(&tournament.matches()[match_index]).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn put_high_break(
    State(state): State<Arc<AppState>>,
    Path(match_index): Path<usize>,
    Json(request): Json<HighBreakRequest>,
) -> Response {
    let mut tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    let edit = tournament.apply_high_break_edit(
        match_index,
        request.high_break,
        request.high_break_player,
    );
    match edit {
        Ok(()) => Json(&tournament.matches()[match_index]).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn post_reset(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResetRequest>,
) -> Response {
    if !request.confirm {
        return message(StatusCode::BAD_REQUEST, "Reset requires confirmation");
    }

    let mut tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    match tournament.reset() {
        Ok(()) => Json(tournament.matches()).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_export(State(state): State<Arc<AppState>>) -> Response {
    let tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    let json = match tournament.export_json() {
        Ok(json) => json,
        Err(e) => return error_response(e),
    };
    let disposition = format!("attachment; filename=\"{}\"", state.export_file_name);

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        json,
    )
        .into_response()
}

pub async fn post_import(State(state): State<Arc<AppState>>, body: String) -> Response {
    let mut tournament = match lock(&state) {
        Ok(t) => t,
        Err(response) => return response,
    };

    match tournament.import_list(&body) {
        Ok(count) => Json(ImportResponse {
            message: "Tournament data imported successfully!".to_string(),
            matches: count,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

fn lock(state: &AppState) -> Result<MutexGuard<'_, TournamentService>, Response> {
    state.tournament.lock().map_err(|_| {
        log::error!("Tournament state lock poisoned");
        message(StatusCode::INTERNAL_SERVER_ERROR, "Tournament state unavailable")
    })
}

fn error_response(error: anyhow::Error) -> Response {
    if let Some(edit) = error.downcast_ref::<EditError>() {
        let status = match edit {
            EditError::MatchOutOfRange { .. } | EditError::FrameOutOfRange { .. } => {
                StatusCode::NOT_FOUND
            }
            EditError::NotAParticipant { .. } => StatusCode::BAD_REQUEST,
        };
        return message(status, &edit.to_string());
    }

    if let Some(import) = error.downcast_ref::<ImportError>() {
        return message(
            StatusCode::BAD_REQUEST,
            &format!("Error importing data. Please check the file format. ({})", import),
        );
    }

    log::error!("Request failed: {:?}", error);
    message(StatusCode::INTERNAL_SERVER_ERROR, &format!("{:#}", error))
}

fn message(status: StatusCode, text: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: text.to_string(),
        }),
    )
        .into_response()
}
