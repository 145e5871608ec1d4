//! Challenge rule tables for every track, and the catalog that indexes them.
//!
//! The numbered tracks (html, css, js) follow the tutorial pages lesson by
//! lesson; the practice track backs the single-page practice editor, where the
//! page title selects the lesson.

use std::collections::BTreeMap;

use crate::domain::{ChallengeSource, LessonChallenge, Requirement, Track};
use crate::predicates::{all_matches, first_capture};

mod css;
mod html;
mod js;
mod practice;

pub use js::FIRST_DOM_LESSON;

/// Lesson challenges keyed by `(track, lesson)`.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
  lessons: BTreeMap<(Track, u32), LessonChallenge>,
}

impl Catalog {
  /// Catalog holding the compiled-in tables of all tracks.
  pub fn built_in() -> Self {
    let mut catalog = Self::default();
    for c in html::lessons()
      .into_iter()
      .chain(css::lessons())
      .chain(js::lessons())
      .chain(practice::lessons())
    {
      catalog.insert(c);
    }
    catalog
  }

  /// Insert or replace; returns the challenge previously stored under the same key.
  pub fn insert(&mut self, c: LessonChallenge) -> Option<LessonChallenge> {
    self.lessons.insert((c.track, c.lesson), c)
  }

  pub fn get(&self, track: Track, lesson: u32) -> Option<&LessonChallenge> {
    self.lessons.get(&(track, lesson))
  }

  /// Lessons of one track in ascending lesson order.
  pub fn lessons(&self, track: Track) -> impl Iterator<Item = &LessonChallenge> + '_ {
    self.lessons.range((track, 0)..=(track, u32::MAX)).map(|(_, c)| c)
  }

  pub fn lesson_count(&self, track: Track) -> usize {
    self.lessons(track).count()
  }

  /// First lesson (in lesson order) whose title is contained in `page_title`.
  pub fn find_by_title(&self, track: Track, page_title: &str) -> Option<&LessonChallenge> {
    self.lessons(track)
      .find(|c| !c.title.is_empty() && page_title.contains(c.title.as_str()))
  }
}

// -------- Table-building helpers shared by the track modules --------

pub(crate) fn req<F>(message: &str, predicate: F) -> Requirement
where
  F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
  Requirement::new(message, predicate)
}

pub(crate) fn lesson(
  track: Track,
  number: u32,
  title: &str,
  starter_code: Option<&str>,
  requirements: Vec<Requirement>,
  success_message: &str,
) -> LessonChallenge {
  LessonChallenge {
    track,
    lesson: number,
    title: title.to_string(),
    starter_code: starter_code.map(str::to_string),
    requirements,
    success_message: success_message.to_string(),
    source: ChallengeSource::BuiltIn,
  }
}

/// Both texts have a first capture for `pattern` and the captures differ.
pub(crate) fn capture_changed(code: &str, starter: &str, pattern: &str) -> bool {
  match (first_capture(code, pattern), first_capture(starter, pattern)) {
    (Some(now), Some(before)) => now != before,
    _ => false,
  }
}

/// The ordered list of matches of `pattern` differs between the texts.
pub(crate) fn matches_changed(code: &str, starter: &str, pattern: &str) -> bool {
  all_matches(code, pattern) != all_matches(starter, pattern)
}

pub(crate) fn contains_any(code: &str, needles: &[&str]) -> bool {
  needles.iter().any(|n| code.contains(n))
}
