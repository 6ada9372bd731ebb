//! Dialoguer backend implementation for SurveyBackend trait.

use std::thread;

use dialoguer::{Select, theme::ColorfulTheme};
use stress_survey::{
    AfterAnswer, AnswerValue, EditPolicy, SessionOutcome, SubmitOutcome, SurveyBackend,
    SurveyEngine, SurveyError,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The engine rejected an operation.
    #[error(transparent)]
    Survey(#[from] SurveyError),
}

impl DialoguerError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

const INCOMPLETE_NOTICE: &str = "모든 질문에 답변해주세요.";
const REDIRECT_NOTICE: &str = "답변하지 않은 질문으로 이동합니다.";
const READY_NOTICE: &str = "당신의 스트레스 지수를 확인할 준비가 되었습니다.";
const LOCKED_NOTICE: &str = "결과를 확인한 뒤에는 답변을 바꿀 수 없습니다.";

/// One entry of the per-question menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Answer(AnswerValue),
    Previous,
    Next,
    CheckResult,
    Counseling,
    Quit,
}

/// Menu entries for the engine's current state, in display order.
///
/// Mirrors what the page shows: the chevrons only where a move is possible,
/// the result button until a score exists, and the counseling link once the
/// final question has been answered. Under the locked edit policy the
/// answer entries disappear once a score exists.
pub fn menu_items(engine: &SurveyEngine) -> Vec<MenuItem> {
    let locked = engine.score().is_some() && engine.edit_policy() == EditPolicy::Locked;
    let mut items: Vec<MenuItem> = if locked {
        Vec::new()
    } else {
        engine
            .options()
            .iter()
            .map(|option| MenuItem::Answer(option.value))
            .collect()
    };

    if engine.has_previous() {
        items.push(MenuItem::Previous);
    }
    if engine.has_next() {
        items.push(MenuItem::Next);
    }
    if engine.is_last_question_answered() {
        if engine.score().is_none() {
            items.push(MenuItem::CheckResult);
        }
        items.push(MenuItem::Counseling);
    }
    items.push(MenuItem::Quit);
    items
}

/// A text progress bar, or `None` while it is still hidden.
pub fn progress_bar(engine: &SurveyEngine, width: usize) -> Option<String> {
    if !engine.is_progress_visible() {
        return None;
    }
    let filled = engine.answered_count() * width / engine.total();
    Some(format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        engine.progress_percent()
    ))
}

/// Dialoguer backend for interactive CLI prompts.
///
/// This backend uses the `dialoguer` library to present one question at a
/// time in a command-line interface with colorful themes.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn label(engine: &SurveyEngine, item: MenuItem) -> String {
        let index = engine.current_index();
        match item {
            MenuItem::Answer(value) => {
                let label = engine
                    .options()
                    .iter()
                    .find(|option| option.value == value)
                    .map_or(value.as_str(), |option| option.label.as_str());
                if engine.selected(index) == Some(value) {
                    format!("● {label}")
                } else {
                    format!("  {label}")
                }
            }
            MenuItem::Previous => "◀ 이전".to_string(),
            MenuItem::Next => "다음 ▶".to_string(),
            MenuItem::CheckResult => "결과 확인하기".to_string(),
            MenuItem::Counseling => "상담하기".to_string(),
            MenuItem::Quit => "종료".to_string(),
        }
    }

    /// Show the current question and return the chosen menu entry.
    fn ask_current(&self, engine: &SurveyEngine) -> Result<MenuItem, DialoguerError> {
        let index = engine.current_index();
        let items = menu_items(engine);
        let labels: Vec<String> = items
            .iter()
            .map(|item| Self::label(engine, *item))
            .collect();

        if let Some(bar) = progress_bar(engine, 20) {
            println!("{bar}");
        }
        let prompt = format!(
            "{}/{}  {}",
            index + 1,
            engine.total(),
            engine.current_question().ask()
        );

        let default = engine
            .selected(index)
            .and_then(|value| items.iter().position(|item| *item == MenuItem::Answer(value)))
            .unwrap_or(0);

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(prompt).items(&labels).default(default);

        match builder.interact() {
            Ok(selection) => Ok(items[selection]),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    fn answer(&self, engine: &mut SurveyEngine, value: AnswerValue) -> Result<(), DialoguerError> {
        let index = engine.current_index();
        match engine.select_answer(index, value) {
            Ok(AfterAnswer::Advancing { target, .. }) => {
                thread::sleep(engine.settle_delay());
                engine.settle();
                debug!(to = target, "Moved after settle delay");
            }
            Ok(_) => {}
            Err(SurveyError::ScoreLocked) => {
                println!("{LOCKED_NOTICE}");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
        if engine.is_all_answered() && engine.score().is_none() {
            println!("{READY_NOTICE}");
        }
        Ok(())
    }

    fn check_result(&self, engine: &mut SurveyEngine) -> Result<(), DialoguerError> {
        match engine.compute_score() {
            Ok(score) => {
                println!();
                println!("나의 스트레스 지수: {score}");
                if let Some(epilogue) = &engine.definition().epilogue {
                    println!("{epilogue}");
                }
                println!();
                Ok(())
            }
            Err(e) if e.is_incomplete() => {
                println!("{INCOMPLETE_NOTICE}");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl SurveyBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn conduct(&self, engine: &mut SurveyEngine) -> Result<SessionOutcome, Self::Error> {
        let mut outcome = SessionOutcome::default();

        let definition = engine.definition();
        println!("{}", definition.title);
        if let Some(subtitle) = &definition.subtitle {
            println!("{subtitle}");
        }
        println!();

        loop {
            match self.ask_current(engine)? {
                MenuItem::Answer(value) => self.answer(engine, value)?,
                MenuItem::Previous => {
                    engine.previous_question();
                }
                MenuItem::Next => {
                    engine.next_question();
                }
                MenuItem::CheckResult => self.check_result(engine)?,
                MenuItem::Counseling => match engine.request_submit() {
                    SubmitOutcome::Proceed { link } => {
                        println!("{link}");
                        outcome.submitted_link = Some(link);
                        break;
                    }
                    SubmitOutcome::Blocked { .. } => println!("{REDIRECT_NOTICE}"),
                },
                MenuItem::Quit => break,
            }
        }

        outcome.score = engine.score();
        Ok(outcome)
    }
}
