//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Validating submissions (numbered tracks by lesson, practice by page title)
//!   - Building preview documents for "run"
//!   - Progress snapshots and lesson navigation
//!   - Hints and lesson listings

use tracing::{debug, error, info, instrument};

use crate::domain::{Track, Verdict};
use crate::evaluator::evaluate;
use crate::hints::hint_for_title;
use crate::progress::{LessonSet, ProgressSummary};
use crate::protocol::{to_summary, LessonSummary, ProgressOut, RunOut};
use crate::sandbox::build_document;
use crate::state::AppState;
use crate::util::trunc_for_log;

/// Learner id used when a request does not name one.
pub const DEFAULT_LEARNER: &str = "local";

pub fn learner_or_default(learner: Option<String>) -> String {
  learner
    .filter(|l| !l.trim().is_empty())
    .unwrap_or_else(|| DEFAULT_LEARNER.to_string())
}

/// Evaluate and remember. `None` when the lesson has no challenge.
#[instrument(level = "info", skip(state, code), fields(code_len = code.len()))]
pub async fn validate_submission(state: &AppState, learner: &str, track: Track, lesson: u32, code: &str) -> Option<Verdict> {
  let Some(challenge) = state.catalog.get(track, lesson) else {
    debug!(target: "challenge", %track, lesson, "No challenge for lesson; nothing to validate");
    return None;
  };
  debug!(target: "challenge", %track, lesson, code = %trunc_for_log(code, 160), "Evaluating submission");
  let verdict = evaluate(challenge, code, &state.messages.unchanged_starter);
  info!(target: "challenge", %track, lesson, passed = verdict.passed, failures = verdict.messages.len(), "Submission evaluated");
  state.remember_feedback(learner, track, lesson, verdict.clone()).await;
  Some(verdict)
}

/// Practice editor: the page title selects the lesson. Returns the resolved
/// lesson number with the verdict.
#[instrument(level = "info", skip(state, code), fields(code_len = code.len()))]
pub async fn validate_practice(state: &AppState, learner: &str, title: &str, code: &str) -> (Option<u32>, Option<Verdict>) {
  match state.catalog.find_by_title(Track::Practice, title) {
    Some(c) => {
      let lesson = c.lesson;
      (Some(lesson), validate_submission(state, learner, Track::Practice, lesson, code).await)
    }
    None => {
      debug!(target: "challenge", %title, "No practice challenge matches title");
      (None, None)
    }
  }
}

/// Preview document for the frame plus the verdict for the same code.
#[instrument(level = "info", skip(state, code), fields(code_len = code.len()))]
pub async fn run_submission(state: &AppState, learner: &str, track: Track, lesson: u32, code: &str) -> RunOut {
  let doc = build_document(track, lesson, code);
  debug!(target: "learnweb_backend", %track, lesson, mode = ?doc.mode, document_len = doc.document.len(), "Preview document built");
  let feedback = validate_submission(state, learner, track, lesson, code).await;
  RunOut { track, lesson, mode: doc.mode, document: doc.document, feedback }
}

#[instrument(level = "debug", skip(state))]
pub async fn current_feedback(state: &AppState, learner: &str, track: Track, lesson: u32) -> Option<Verdict> {
  state.current_feedback(learner, track, lesson).await
}

/// Completed lessons, total and percentage. Store failures degrade to an
/// empty record with `error` set.
#[instrument(level = "info", skip(state))]
pub async fn progress_snapshot(state: &AppState, learner: &str, track: Track) -> ProgressOut {
  let total = state.catalog.lesson_count(track);
  let who = learner.to_string();
  match state.with_progress(move |store| store.load(&who, track)).await {
    Ok(completed) => ProgressOut { track, summary: ProgressSummary::new(&completed, total), error: None },
    Err(e) => {
      error!(target: "learnweb_backend", %track, error = %e, "Progress load failed; reporting empty progress");
      ProgressOut { track, summary: ProgressSummary::new(&LessonSet::new(), total), error: Some(e.to_string()) }
    }
  }
}

/// Navigating to lesson `n > 1` marks lesson `n - 1` complete when `n` exists.
#[instrument(level = "info", skip(state))]
pub async fn show_lesson(state: &AppState, learner: &str, track: Track, lesson: u32) -> ProgressOut {
  if lesson > 1 && state.catalog.get(track, lesson).is_some() {
    let previous = lesson - 1;
    let who = learner.to_string();
    let recorded = state
      .with_progress(move |store| {
        if store.contains(&who, track, previous)? {
          return Ok(false);
        }
        store.mark_complete(&who, track, previous).map(|_| true)
      })
      .await;
    match recorded {
      Ok(true) => info!(target: "challenge", %track, completed = previous, "Lesson marked complete"),
      Ok(false) => {}
      Err(e) => {
        error!(target: "learnweb_backend", %track, lesson, error = %e, "Could not record completed lesson");
        let mut out = progress_snapshot(state, learner, track).await;
        out.error.get_or_insert_with(|| e.to_string());
        return out;
      }
    }
  }
  progress_snapshot(state, learner, track).await
}

#[instrument(level = "info", skip(state))]
pub async fn get_hint_text(state: &AppState, title: &str) -> String {
  match hint_for_title(title) {
    Some(hint) => hint.to_string(),
    None => {
      debug!(target: "challenge", %title, "No hint for title; using fallback");
      state.messages.hint_fallback.clone()
    }
  }
}

pub fn list_lessons(state: &AppState, track: Track) -> Vec<LessonSummary> {
  state.catalog.lessons(track).map(to_summary).collect()
}
