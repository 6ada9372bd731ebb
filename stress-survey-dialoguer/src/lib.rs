//! # stress-survey-dialoguer
//!
//! Dialoguer backend for stress-survey.
//!
//! Questions are shown one at a time as a selection menu: the four answer
//! options, then navigation entries (previous, next) and, once the final
//! question has an answer, the result and counseling entries.
//!
//! ## Example
//!
//! ```rust,ignore
//! use stress_survey::{Config, pss};
//! use stress_survey_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut engine = pss::engine(&Config::default());
//!     let outcome = engine.run(DialoguerBackend::new())?;
//!     if let Some(score) = outcome.score {
//!         println!("Score: {score}");
//!     }
//!     Ok(())
//! }
//! ```

mod backend;
pub mod cli;

pub use backend::{DialoguerBackend, DialoguerError, MenuItem, menu_items, progress_bar};
