//! Loading tutor configuration (server paths, messages, optional challenge bank) from TOML.
//!
//! See `TutorConfig` for the expected schema. Every section is optional:
//!
//! ```toml
//! [server]
//! static_dir = "./static"
//! progress_path = "./progress.json"
//!
//! [messages]
//! unchanged_starter = "Change something first!"
//!
//! [[challenges]]
//! track = "html"
//! lesson = 6
//! title = "Images"
//! success = "Nice picture!"
//! requirements = [
//!   { message = "Add an <img> tag", check = { kind = "has_open_tag", tag = "img" } },
//! ]
//! ```

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{ChallengeSource, LessonChallenge, Requirement, Track};
use crate::evaluator::UNCHANGED_STARTER_MESSAGE;
use crate::predicates::Check;

#[derive(Clone, Debug, Deserialize, Default)]
pub struct TutorConfig {
  #[serde(default)]
  pub server: ServerCfg,
  #[serde(default)]
  pub messages: Messages,
  #[serde(default)]
  pub challenges: Vec<ChallengeCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServerCfg {
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  /// JSON file for completed lessons. Unset keeps progress in memory.
  #[serde(default)]
  pub progress_path: Option<String>,
}

fn default_static_dir() -> String {
  "./static".into()
}

impl Default for ServerCfg {
  fn default() -> Self {
    Self { static_dir: default_static_dir(), progress_path: None }
  }
}

/// Learner-facing texts that are not tied to one lesson.
#[derive(Clone, Debug, Deserialize)]
pub struct Messages {
  #[serde(default = "default_unchanged_starter")]
  pub unchanged_starter: String,
  #[serde(default = "default_hint_fallback")]
  pub hint_fallback: String,
}

fn default_unchanged_starter() -> String {
  UNCHANGED_STARTER_MESSAGE.into()
}

fn default_hint_fallback() -> String {
  "No hint for this lesson yet. Re-read the instructions above the editor.".into()
}

impl Default for Messages {
  fn default() -> Self {
    Self { unchanged_starter: default_unchanged_starter(), hint_fallback: default_hint_fallback() }
  }
}

/// Challenge entry accepted in TOML configuration. Replaces the built-in
/// lesson with the same `(track, lesson)`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChallengeCfg {
  pub track: Track,
  pub lesson: u32,
  #[serde(default)] pub title: Option<String>,
  #[serde(default)] pub starter: Option<String>,
  pub success: String,
  #[serde(default)] pub requirements: Vec<RequirementCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RequirementCfg {
  pub message: String,
  pub check: Check,
}

impl ChallengeCfg {
  pub fn to_challenge(&self) -> LessonChallenge {
    let requirements = self
      .requirements
      .iter()
      .map(|r| {
        let check = r.check.clone();
        Requirement::new(r.message.clone(), move |code, starter| check.evaluate(code, starter))
      })
      .collect();
    LessonChallenge {
      track: self.track,
      lesson: self.lesson,
      title: self.title.clone().unwrap_or_default(),
      starter_code: self.starter.clone(),
      requirements,
      success_message: self.success.clone(),
      source: ChallengeSource::LocalBank,
    }
  }
}

pub fn parse_config(s: &str) -> Result<TutorConfig, toml::de::Error> {
  toml::from_str::<TutorConfig>(s)
}

/// Attempt to load `TutorConfig` from TUTOR_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_tutor_config_from_env() -> Option<TutorConfig> {
  let path = std::env::var("TUTOR_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_config(&s) {
      Ok(cfg) => {
        info!(target: "learnweb_backend", %path, challenges = cfg.challenges.len(), "Loaded tutor config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "learnweb_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "learnweb_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg = parse_config("").unwrap();
    assert_eq!(cfg.server.static_dir, "./static");
    assert!(cfg.server.progress_path.is_none());
    assert_eq!(cfg.messages.unchanged_starter, UNCHANGED_STARTER_MESSAGE);
    assert!(cfg.challenges.is_empty());
  }

  #[test]
  fn bank_entry_becomes_challenge() {
    let cfg = parse_config(
      r#"
[messages]
hint_fallback = "Ask a mentor."

[[challenges]]
track = "html"
lesson = 6
title = "Images"
starter = '<img src="x.png">'
success = "Nice picture!"
requirements = [
  { message = "Add alt text", check = { kind = "has_attribute", tag = "img", attr = "alt" } },
  { message = "Change something", check = { kind = "changed_from_starter" } },
]
"#,
    )
    .unwrap();
    assert_eq!(cfg.messages.hint_fallback, "Ask a mentor.");
    assert_eq!(cfg.messages.unchanged_starter, UNCHANGED_STARTER_MESSAGE);

    let c = cfg.challenges[0].to_challenge();
    assert_eq!((c.track, c.lesson), (Track::Html, 6));
    assert_eq!(c.source, ChallengeSource::LocalBank);
    assert_eq!(c.requirements.len(), 2);
    assert!(c.requirements[0].is_met(r#"<img src="y.png" alt="cat">"#, ""));
    assert!(!c.requirements[0].is_met(r#"<img src="y.png">"#, ""));
  }

  #[test]
  fn unknown_track_is_rejected() {
    let err = parse_config("[[challenges]]\ntrack = \"python\"\nlesson = 1\nsuccess = \"ok\"\n");
    assert!(err.is_err());
  }
}
