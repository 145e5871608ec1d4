//! Completed-lesson records per learner and track.
//!
//! The record for a track is a JSON array of lesson numbers stored under the
//! track's storage key (`htmlProgress`, `cssProgress`, ...). Lesson sets only
//! grow; `forget` drops a learner's whole record (anonymous WebSocket learners
//! on disconnect).
//!
//! Stores are injected into `AppState` as `Arc<dyn ProgressStore>`; the default
//! is in-memory, and a JSON file store is used when `progress_path` is configured.
//! Store methods block (file IO, std mutex); async callers go through
//! `AppState::with_progress`, which runs them on the blocking pool.

use std::{
  collections::{BTreeMap, BTreeSet, HashMap},
  fs,
  io::ErrorKind,
  path::{Path, PathBuf},
  sync::Mutex,
};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::Track;

pub type LessonSet = BTreeSet<u32>;

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
  #[error("progress file {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("progress file is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("progress store lock poisoned")]
  Poisoned,
  #[error("progress task failed: {0}")]
  Join(#[from] tokio::task::JoinError),
}

/// Load/save capability for completed lessons.
pub trait ProgressStore: Send + Sync {
  fn load(&self, learner: &str, track: Track) -> Result<LessonSet, ProgressError>;

  fn save(&self, learner: &str, track: Track, completed: &LessonSet) -> Result<(), ProgressError>;

  /// Drop every record of `learner`.
  fn forget(&self, learner: &str) -> Result<(), ProgressError>;

  fn contains(&self, learner: &str, track: Track, lesson: u32) -> Result<bool, ProgressError> {
    Ok(self.load(learner, track)?.contains(&lesson))
  }

  /// Add `lesson` and write the record back. Returns the updated set.
  fn mark_complete(&self, learner: &str, track: Track, lesson: u32) -> Result<LessonSet, ProgressError> {
    let mut completed = self.load(learner, track)?;
    completed.insert(lesson);
    self.save(learner, track, &completed)?;
    Ok(completed)
  }
}

/// Progress bar numbers for one track.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProgressSummary {
  pub completed: Vec<u32>,
  pub total: usize,
  pub percentage: u32,
}

impl ProgressSummary {
  pub fn new(completed: &LessonSet, total: usize) -> Self {
    let percentage = if total == 0 {
      0
    } else {
      (completed.len() as f64 / total as f64 * 100.0).round() as u32
    };
    Self { completed: completed.iter().copied().collect(), total, percentage }
  }
}

// -------- In-memory --------

#[derive(Default)]
pub struct MemoryProgressStore {
  records: Mutex<HashMap<(String, Track), LessonSet>>,
}

impl MemoryProgressStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ProgressStore for MemoryProgressStore {
  fn load(&self, learner: &str, track: Track) -> Result<LessonSet, ProgressError> {
    let records = self.records.lock().map_err(|_| ProgressError::Poisoned)?;
    Ok(records.get(&(learner.to_string(), track)).cloned().unwrap_or_default())
  }

  fn save(&self, learner: &str, track: Track, completed: &LessonSet) -> Result<(), ProgressError> {
    let mut records = self.records.lock().map_err(|_| ProgressError::Poisoned)?;
    records.insert((learner.to_string(), track), completed.clone());
    Ok(())
  }

  fn forget(&self, learner: &str) -> Result<(), ProgressError> {
    let mut records = self.records.lock().map_err(|_| ProgressError::Poisoned)?;
    records.retain(|(who, _), _| who != learner);
    Ok(())
  }

  fn mark_complete(&self, learner: &str, track: Track, lesson: u32) -> Result<LessonSet, ProgressError> {
    let mut records = self.records.lock().map_err(|_| ProgressError::Poisoned)?;
    let completed = records.entry((learner.to_string(), track)).or_default();
    completed.insert(lesson);
    Ok(completed.clone())
  }
}

// -------- JSON file --------

/// `{ "<learner>": { "<storageKey>": [1, 2, ...] } }`
type FileLayout = BTreeMap<String, BTreeMap<String, Vec<u32>>>;

/// Whole-file JSON store. Every mutation rewrites the file through a
/// temporary sibling and a rename.
pub struct JsonFileProgressStore {
  path: PathBuf,
  lock: Mutex<()>,
}

impl JsonFileProgressStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into(), lock: Mutex::new(()) }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn io_err(&self, source: std::io::Error) -> ProgressError {
    ProgressError::Io { path: self.path.display().to_string(), source }
  }

  fn read_layout(&self) -> Result<FileLayout, ProgressError> {
    match fs::read_to_string(&self.path) {
      Ok(s) if s.trim().is_empty() => Ok(FileLayout::new()),
      Ok(s) => Ok(serde_json::from_str(&s)?),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(FileLayout::new()),
      Err(e) => Err(self.io_err(e)),
    }
  }

  fn write_layout(&self, layout: &FileLayout) -> Result<(), ProgressError> {
    let body = serde_json::to_string_pretty(layout)?;
    let tmp = self.path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(|e| self.io_err(e))?;
    fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))
  }

  fn set_record(layout: &mut FileLayout, learner: &str, track: Track, completed: &LessonSet) {
    layout
      .entry(learner.to_string())
      .or_default()
      .insert(track.storage_key().to_string(), completed.iter().copied().collect());
  }

  fn record(layout: &FileLayout, learner: &str, track: Track) -> LessonSet {
    layout
      .get(learner)
      .and_then(|tracks| tracks.get(track.storage_key()))
      .map(|lessons| lessons.iter().copied().collect())
      .unwrap_or_default()
  }
}

impl ProgressStore for JsonFileProgressStore {
  #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
  fn load(&self, learner: &str, track: Track) -> Result<LessonSet, ProgressError> {
    let _guard = self.lock.lock().map_err(|_| ProgressError::Poisoned)?;
    Ok(Self::record(&self.read_layout()?, learner, track))
  }

  #[instrument(level = "debug", skip(self, completed), fields(path = %self.path.display(), count = completed.len()))]
  fn save(&self, learner: &str, track: Track, completed: &LessonSet) -> Result<(), ProgressError> {
    let _guard = self.lock.lock().map_err(|_| ProgressError::Poisoned)?;
    let mut layout = self.read_layout()?;
    Self::set_record(&mut layout, learner, track, completed);
    self.write_layout(&layout)
  }

  fn forget(&self, learner: &str) -> Result<(), ProgressError> {
    let _guard = self.lock.lock().map_err(|_| ProgressError::Poisoned)?;
    let mut layout = self.read_layout()?;
    if layout.remove(learner).is_some() {
      self.write_layout(&layout)?;
      debug!(target: "learnweb_backend", %learner, "Progress record removed");
    }
    Ok(())
  }

  fn mark_complete(&self, learner: &str, track: Track, lesson: u32) -> Result<LessonSet, ProgressError> {
    let _guard = self.lock.lock().map_err(|_| ProgressError::Poisoned)?;
    let mut layout = self.read_layout()?;
    let mut completed = Self::record(&layout, learner, track);
    completed.insert(lesson);
    Self::set_record(&mut layout, learner, track, &completed);
    self.write_layout(&layout)?;
    debug!(target: "learnweb_backend", %learner, %track, lesson, "Progress written");
    Ok(completed)
  }
}
