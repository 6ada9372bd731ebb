//! # stress-survey
//!
//! A paginated questionnaire engine with skip navigation and reverse scoring.
//! Backend-agnostic.
//!
//! The engine holds the answers and navigation state of one session. A
//! presentation backend renders [`SurveyEngine::current_question`], feeds user
//! input back in as operations (or [`SurveyEvent`]s) and lets the settle delay
//! play out between an answer and the move it triggers.
//!
//! ## Usage
//!
//! ```rust
//! use stress_survey::{AnswerValue, Config, SurveyError, pss};
//!
//! let mut engine = pss::engine(&Config::default());
//!
//! engine.select_answer(0, AnswerValue::Often).unwrap();
//! engine.settle();
//! assert_eq!(engine.current_index(), 1);
//!
//! // Scoring early sends the user back to the first gap.
//! let err = engine.compute_score().unwrap_err();
//! assert!(matches!(err, SurveyError::Incomplete { first_unanswered: 1 }));
//! assert!(engine.is_skip_mode());
//! ```
//!
//! ## Skip mode
//!
//! When a score or submit is requested with questions still open, the engine
//! jumps to the earliest gap and enters skip mode. From then on each answer
//! routes to the next remaining gap (scanning forward and wrapping around)
//! until every question is answered.
//!
//! ## Backends
//!
//! Backends are separate crates that implement `SurveyBackend`:
//! - `stress-survey-dialoguer` - CLI prompts via dialoguer

// Re-export all types from stress-survey-types
pub use stress_survey_types::*;

pub mod config;
pub use config::{Config, ConfigError, EditPolicy};

mod engine;
pub use engine::{AfterAnswer, SubmitOutcome, SurveyEngine, SurveyState};

mod event;
pub use event::{EventOutcome, SurveyEvent};

mod navigation;
pub use navigation::find_next_unanswered;

pub mod pss;

pub mod scoring;
pub use scoring::{ItemScoring, Score};

mod settle;
pub use settle::{PendingMove, SettleSlot};

mod traits;
pub use traits::{SessionOutcome, SurveyBackend};

// Test backend for running surveys without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
