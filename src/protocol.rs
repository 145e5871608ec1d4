//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{ChallengeSource, LessonChallenge, Track, Verdict};
use crate::progress::ProgressSummary;
use crate::sandbox::SandboxMode;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    ListLessons {
        track: Track,
    },
    Validate {
        track: Track,
        lesson: u32,
        code: String,
    },
    PracticeValidate {
        title: String,
        code: String,
    },
    Run {
        track: Track,
        lesson: u32,
        code: String,
    },
    Feedback {
        track: Track,
        lesson: u32,
    },
    Progress {
        track: Track,
    },
    ShowLesson {
        track: Track,
        lesson: u32,
    },
    Hint {
        title: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Hello {
        #[serde(rename = "learnerId")]
        learner_id: String,
    },
    Lessons {
        track: Track,
        lessons: Vec<LessonSummary>,
    },
    Feedback {
        track: Track,
        lesson: u32,
        feedback: Option<Verdict>,
    },
    Run(RunOut),
    Progress(ProgressOut),
    Hint {
        text: String,
    },
    Error {
        message: String,
    },
}

/// Lesson listing entry. Requirement predicates stay server-side.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonSummary {
    pub lesson: u32,
    pub title: String,
    #[serde(rename = "hasStarter")]
    pub has_starter: bool,
    pub requirements: usize,
    pub source: ChallengeSource,
}

/// Convert a full `LessonChallenge` (internal) to the public DTO.
pub fn to_summary(c: &LessonChallenge) -> LessonSummary {
    LessonSummary {
        lesson: c.lesson,
        title: c.title.clone(),
        has_starter: c.starter_code.is_some(),
        requirements: c.requirements.len(),
        source: c.source.clone(),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub track: Track,
    #[serde(rename = "learnerId", default)]
    pub learner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LessonQuery {
    pub track: Track,
    pub lesson: u32,
    #[serde(rename = "learnerId", default)]
    pub learner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmissionIn {
    pub track: Track,
    pub lesson: u32,
    pub code: String,
    #[serde(rename = "learnerId", default)]
    pub learner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PracticeIn {
    pub title: String,
    pub code: String,
    #[serde(rename = "learnerId", default)]
    pub learner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ShowLessonIn {
    pub track: Track,
    pub lesson: u32,
    #[serde(rename = "learnerId", default)]
    pub learner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HintQuery {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackOut {
    pub feedback: Option<Verdict>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PracticeOut {
    /// Practice lesson number the title resolved to.
    pub lesson: Option<u32>,
    pub feedback: Option<Verdict>,
}

#[derive(Debug, Serialize)]
pub struct RunOut {
    pub track: Track,
    pub lesson: u32,
    pub mode: SandboxMode,
    pub document: String,
    pub feedback: Option<Verdict>,
}

#[derive(Debug, Serialize)]
pub struct ProgressOut {
    pub track: Track,
    #[serde(flatten)]
    pub summary: ProgressSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LessonsOut {
    pub track: Track,
    pub lessons: Vec<LessonSummary>,
}

#[derive(Serialize)]
pub struct HintOut {
    pub text: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
