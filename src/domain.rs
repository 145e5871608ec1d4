//! Domain models used by the backend: tracks, requirements, lesson challenges and verdicts.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

/// Which tutorial does a lesson belong to? Tracks never interact and their
/// lesson numbers overlap.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Track {
  Html,
  Css,
  Js,
  /// Single-page practice editor; lessons are also addressable by title.
  Practice,
}

impl Track {
  pub const ALL: [Track; 4] = [Track::Html, Track::Css, Track::Js, Track::Practice];

  pub fn as_str(self) -> &'static str {
    match self {
      Track::Html => "html",
      Track::Css => "css",
      Track::Js => "js",
      Track::Practice => "practice",
    }
  }

  /// Key under which the browser (and the file store) keeps the completed lessons.
  pub fn storage_key(self) -> &'static str {
    match self {
      Track::Html => "htmlProgress",
      Track::Css => "cssProgress",
      Track::Js => "jsProgress",
      Track::Practice => "practiceProgress",
    }
  }

  /// Feedback class used when a submission does not pass.
  pub fn failure_class(self) -> FeedbackClass {
    match self {
      Track::Practice => FeedbackClass::Incomplete,
      _ => FeedbackClass::Error,
    }
  }
}

impl fmt::Display for Track {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Where did we get the challenge from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeSource {
  BuiltIn,   // compiled-in rule tables
  LocalBank, // from user-provided TOML bank
}

/// Pure check over `(code, starter_code)`. The starter is `""` when the lesson has none.
pub type Predicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// One pass/fail check contributing to a challenge verdict.
#[derive(Clone)]
pub struct Requirement {
  predicate: Predicate,
  pub message: String,
}

impl Requirement {
  pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
  where
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
  {
    Self { predicate: Arc::new(predicate), message: message.into() }
  }

  pub fn is_met(&self, code: &str, starter: &str) -> bool {
    (self.predicate)(code, starter)
  }
}

impl fmt::Debug for Requirement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Requirement").field("message", &self.message).finish_non_exhaustive()
  }
}

/// Graded coding task of one lesson.
#[derive(Clone, Debug)]
pub struct LessonChallenge {
  pub track: Track,
  pub lesson: u32,
  pub title: String,
  pub starter_code: Option<String>,
  pub requirements: Vec<Requirement>,
  pub success_message: String,
  pub source: ChallengeSource,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackClass {
  Success,
  Error,
  Incomplete,
}

/// Result of one evaluation. `messages` holds the failed requirement messages
/// in table order; `message` is what the page displays.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
  pub passed: bool,
  pub class: FeedbackClass,
  pub message: String,
  #[serde(default)] pub messages: Vec<String>,
}
