//! Application state: challenge catalog, progress store, remembered feedback, and messages.
//!
//! This module owns:
//!   - the catalog (built-in tables overlaid with the TOML bank)
//!   - the injected progress store (memory or JSON file)
//!   - the latest verdict per (learner, track, lesson)
//!   - learner-facing messages (from TOML or defaults)

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument};

use crate::config::{load_tutor_config_from_env, Messages, TutorConfig};
use crate::domain::{ChallengeSource, Track, Verdict};
use crate::progress::{JsonFileProgressStore, MemoryProgressStore, ProgressError, ProgressStore};
use crate::rules::Catalog;

type FeedbackKey = (String, Track, u32);

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub progress: Arc<dyn ProgressStore>,
    pub feedback: Arc<RwLock<HashMap<FeedbackKey, Verdict>>>,
    pub messages: Messages,
    pub static_dir: String,
}

impl AppState {
    /// Build state from env: load config, build the catalog, pick the progress store.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_tutor_config_from_env().unwrap_or_default();
        Self::from_config(&cfg)
    }

    #[instrument(level = "info", skip_all, fields(bank = cfg.challenges.len()))]
    pub fn from_config(cfg: &TutorConfig) -> Self {
        let mut catalog = Catalog::built_in();

        // Bank entries replace built-ins with the same (track, lesson).
        for cc in &cfg.challenges {
            if cc.requirements.is_empty() {
                error!(target: "challenge", track = %cc.track, lesson = cc.lesson, "Skipping bank item: no requirements.");
                continue;
            }
            if catalog.insert(cc.to_challenge()).is_some() {
                info!(target: "challenge", track = %cc.track, lesson = cc.lesson, "Bank challenge replaces built-in lesson");
            }
        }

        // Inventory summary by track/source.
        for track in Track::ALL {
            let (mut bank, mut built_in) = (0usize, 0usize);
            for c in catalog.lessons(track) {
                match c.source {
                    ChallengeSource::LocalBank => bank += 1,
                    ChallengeSource::BuiltIn => built_in += 1,
                }
            }
            info!(target: "challenge", %track, local_bank = bank, built_in = built_in, "Startup challenge inventory");
        }

        let progress: Arc<dyn ProgressStore> = match &cfg.server.progress_path {
            Some(path) => {
                let store = JsonFileProgressStore::new(path);
                info!(target: "learnweb_backend", path = %store.path().display(), "Progress persisted to JSON file.");
                Arc::new(store)
            }
            None => {
                info!(target: "learnweb_backend", "Progress kept in memory (no server.progress_path).");
                Arc::new(MemoryProgressStore::new())
            }
        };

        Self::with_parts(catalog, progress, cfg.messages.clone(), cfg.server.static_dir.clone())
    }

    pub fn with_parts(
        catalog: Catalog,
        progress: Arc<dyn ProgressStore>,
        messages: Messages,
        static_dir: String,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            progress,
            feedback: Arc::new(RwLock::new(HashMap::new())),
            messages,
            static_dir,
        }
    }

    /// Replace the learner's current feedback for one lesson.
    #[instrument(level = "debug", skip(self, verdict), fields(passed = verdict.passed))]
    pub async fn remember_feedback(&self, learner: &str, track: Track, lesson: u32, verdict: Verdict) {
        let mut feedback = self.feedback.write().await;
        feedback.insert((learner.to_string(), track, lesson), verdict);
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn current_feedback(&self, learner: &str, track: Track, lesson: u32) -> Option<Verdict> {
        let feedback = self.feedback.read().await;
        feedback.get(&(learner.to_string(), track, lesson)).cloned()
    }

    /// Run a progress store call on the blocking pool.
    pub async fn with_progress<T, F>(&self, f: F) -> Result<T, ProgressError>
    where
        F: FnOnce(&dyn ProgressStore) -> Result<T, ProgressError> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.progress);
        tokio::task::spawn_blocking(move || f(store.as_ref())).await?
    }

    /// Drop everything kept for `learner`: remembered feedback and progress.
    #[instrument(level = "debug", skip(self))]
    pub async fn forget_learner(&self, learner: &str) {
        let dropped = {
            let mut feedback = self.feedback.write().await;
            let before = feedback.len();
            feedback.retain(|(who, _, _), _| who != learner);
            before - feedback.len()
        };
        let who = learner.to_string();
        if let Err(e) = self.with_progress(move |store| store.forget(&who)).await {
            error!(target: "learnweb_backend", %learner, error = %e, "Could not drop learner progress");
        }
        debug!(target: "learnweb_backend", %learner, feedback = dropped, "Learner state dropped");
    }
}
