//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs its parameters and basic result info.

use std::sync::Arc;
use axum::{extract::{State, Query}, Json, response::IntoResponse};
use tracing::{info, instrument};

use crate::protocol::*;
use crate::state::AppState;
use crate::logic::*;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state), fields(track = %q.track))]
pub async fn http_get_lessons(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TrackQuery>,
) -> impl IntoResponse {
  let lessons = list_lessons(&state, q.track);
  Json(LessonsOut { track: q.track, lessons })
}

#[instrument(level = "info", skip(state, body), fields(track = %body.track, lesson = body.lesson, code_len = body.code.len()))]
pub async fn http_post_validate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SubmissionIn>,
) -> impl IntoResponse {
  let learner = learner_or_default(body.learner_id);
  let feedback = validate_submission(&state, &learner, body.track, body.lesson, &body.code).await;
  info!(target: "challenge", track = %body.track, lesson = body.lesson, passed = ?feedback.as_ref().map(|v| v.passed), "HTTP validate evaluated");
  Json(FeedbackOut { feedback })
}

#[instrument(level = "info", skip(state, body), fields(title = %body.title, code_len = body.code.len()))]
pub async fn http_post_practice_validate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PracticeIn>,
) -> impl IntoResponse {
  let learner = learner_or_default(body.learner_id);
  let (lesson, feedback) = validate_practice(&state, &learner, &body.title, &body.code).await;
  Json(PracticeOut { lesson, feedback })
}

#[instrument(level = "info", skip(state, body), fields(track = %body.track, lesson = body.lesson, code_len = body.code.len()))]
pub async fn http_post_run(
  State(state): State<Arc<AppState>>,
  Json(body): Json<SubmissionIn>,
) -> impl IntoResponse {
  let learner = learner_or_default(body.learner_id);
  Json(run_submission(&state, &learner, body.track, body.lesson, &body.code).await)
}

#[instrument(level = "info", skip(state), fields(track = %q.track, lesson = q.lesson))]
pub async fn http_get_feedback(
  State(state): State<Arc<AppState>>,
  Query(q): Query<LessonQuery>,
) -> impl IntoResponse {
  let learner = learner_or_default(q.learner_id);
  Json(FeedbackOut { feedback: current_feedback(&state, &learner, q.track, q.lesson).await })
}

#[instrument(level = "info", skip(state), fields(track = %q.track))]
pub async fn http_get_progress(
  State(state): State<Arc<AppState>>,
  Query(q): Query<TrackQuery>,
) -> impl IntoResponse {
  let learner = learner_or_default(q.learner_id);
  Json(progress_snapshot(&state, &learner, q.track).await)
}

#[instrument(level = "info", skip(state, body), fields(track = %body.track, lesson = body.lesson))]
pub async fn http_post_show_lesson(
  State(state): State<Arc<AppState>>,
  Json(body): Json<ShowLessonIn>,
) -> impl IntoResponse {
  let learner = learner_or_default(body.learner_id);
  let progress = show_lesson(&state, &learner, body.track, body.lesson).await;
  info!(target: "challenge", track = %body.track, lesson = body.lesson, percentage = progress.summary.percentage, "HTTP lesson shown");
  Json(progress)
}

#[instrument(level = "info", skip(state), fields(title = %q.title))]
pub async fn http_get_hint(
  State(state): State<Arc<AppState>>,
  Query(q): Query<HintQuery>,
) -> impl IntoResponse {
  let text = get_hint_text(&state, &q.title).await;
  info!(target: "challenge", title = %q.title, "HTTP hint served");
  Json(HintOut { text })
}
