//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.
//!
//! Every connection is an anonymous learner with a fresh id, announced in a
//! `hello` message right after the upgrade. The learner's feedback and progress
//! are dropped when the connection ends.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{info, error, instrument, debug};
use uuid::Uuid;

use crate::domain::Track;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::logic::*;
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "learnweb_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

fn encode(msg: &ServerWsMessage) -> String {
  serde_json::to_string(msg).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  })
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  let learner = Uuid::new_v4().to_string();
  info!(target: "learnweb_backend", %learner, "WebSocket connected");

  let hello = ServerWsMessage::Hello { learner_id: learner.clone() };
  if let Err(e) = socket.send(Message::Text(encode(&hello))).await {
    error!(target: "learnweb_backend", error = %e, "WS send error");
    return;
  }

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "learnweb_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &learner, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        if let Err(e) = socket.send(Message::Text(encode(&reply_msg))).await {
          error!(target: "learnweb_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  state.forget_learner(&learner).await;
  info!(target: "learnweb_backend", %learner, "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, learner: &str, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::ListLessons { track } => {
      ServerWsMessage::Lessons { track, lessons: list_lessons(state, track) }
    }

    ClientWsMessage::Validate { track, lesson, code } => {
      let feedback = validate_submission(state, learner, track, lesson, &code).await;
      info!(target: "challenge", %track, lesson, passed = ?feedback.as_ref().map(|v| v.passed), "WS validate evaluated");
      ServerWsMessage::Feedback { track, lesson, feedback }
    }

    ClientWsMessage::PracticeValidate { title, code } => {
      match validate_practice(state, learner, &title, &code).await {
        (Some(lesson), feedback) => ServerWsMessage::Feedback { track: Track::Practice, lesson, feedback },
        (None, _) => ServerWsMessage::Error { message: format!("No practice challenge for title: {}", title) },
      }
    }

    ClientWsMessage::Run { track, lesson, code } => {
      ServerWsMessage::Run(run_submission(state, learner, track, lesson, &code).await)
    }

    ClientWsMessage::Feedback { track, lesson } => {
      let feedback = current_feedback(state, learner, track, lesson).await;
      ServerWsMessage::Feedback { track, lesson, feedback }
    }

    ClientWsMessage::Progress { track } => {
      ServerWsMessage::Progress(progress_snapshot(state, learner, track).await)
    }

    ClientWsMessage::ShowLesson { track, lesson } => {
      ServerWsMessage::Progress(show_lesson(state, learner, track, lesson).await)
    }

    ClientWsMessage::Hint { title } => {
      let text = get_hint_text(state, &title).await;
      info!(target: "challenge", %title, "WS hint served");
      ServerWsMessage::Hint { text }
    }
  }
}
