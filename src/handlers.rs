use crate::calendar::tracked_dates;
use crate::errors::AppError;
use crate::models::{
    CreateHabitRequest, DayDetailResponse, DayQuery, DaySummary, Habit, ToggleResponse,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::summary::{build_summary, possible_habits};
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::info;
use uuid::Uuid;

pub async fn index() -> Html<String> {
    Html(render_index(today()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(payload): Json<CreateHabitRequest>,
) -> Result<Json<Habit>, AppError> {
    let title = payload.title.trim();
    if title.is_empty() {
        return Err(AppError::bad_request("title must not be empty"));
    }
    if payload.week_days.iter().any(|day| *day > 6) {
        return Err(AppError::bad_request("week days must be between 0 and 6"));
    }

    let mut data = state.data.lock().await;
    let habit = data.insert_habit(
        title.to_string(),
        today(),
        payload.week_days.iter().copied().collect(),
    );
    persist_data(&state.data_path, &data).await?;

    info!("created habit {:?} ({})", habit.title, habit.id);
    Ok(Json(habit))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(params): Query<DayQuery>,
) -> Result<Json<DayDetailResponse>, AppError> {
    let data = state.data.lock().await;
    let completed_habits = data
        .day_for(params.date)
        .map(|day| data.completed_habit_ids(day.id))
        .unwrap_or_default();

    Ok(Json(DayDetailResponse {
        possible_habits: possible_habits(&data, params.date),
        completed_habits,
    }))
}

/// Toggles the habit's completion for today. The Day record for today is
/// created on first use.
pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.habit(id).is_none() {
        return Err(AppError::not_found("unknown habit"));
    }

    let day = data.or_create_day(today());
    let completed = data.toggle_completion(day.id, id);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ToggleResponse { completed }))
}

pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<DaySummary>>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(build_summary(&data)))
}

pub async fn get_calendar() -> Json<Vec<NaiveDate>> {
    Json(tracked_dates(today()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
