//! Panel actions: one per button in the front-end.
//!
//! `Action::build_prompt` trims the user's inputs, rejects blank required fields with the
//! panel's fixed message, and otherwise fills the panel's template.

use std::fmt;

use thiserror::Error;

use crate::prep::prompts::{
    CHECK_SOLUTION_PROMPT_TEMPLATE, INTERVIEW_PROMPT_TEMPLATE, NEW_PROBLEM_PROMPT,
    PROJECT_BLANK, PROJECT_PROMPT_TEMPLATE, QUESTION_BLANK, RESUME_BLANK,
    RESUME_PROMPT_TEMPLATE, SOLUTION_BLANK,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepError {
    /// A required field was blank; carries the message shown in place of an answer.
    #[error("{0}")]
    BlankInput(&'static str),
}

/// Interview question category offered by the Q&A panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    Technical,
    Hr,
    Behavioral,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Technical => "Technical",
            Category::Hr => "HR",
            Category::Behavioral => "Behavioral",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ReviewResume { resume: String },
    AskInterview { category: Category, question: String },
    NewProblem,
    /// `problem` is whatever text the problem panel currently shows; it may be empty.
    CheckSolution { problem: String, solution: String },
    ExplainProject { description: String },
}

impl Action {
    /// Builds the prompt for this action, or the blank-input message if a required field is empty.
    pub fn build_prompt(&self) -> Result<String, PrepError> {
        match self {
            Action::ReviewResume { resume } => {
                let resume = required(resume, RESUME_BLANK)?;
                Ok(RESUME_PROMPT_TEMPLATE.replace("{resume}", resume))
            }
            Action::AskInterview { category, question } => {
                let question = required(question, QUESTION_BLANK)?;
                Ok(INTERVIEW_PROMPT_TEMPLATE
                    .replace("{category}", &category.to_string())
                    .replace("{question}", question))
            }
            Action::NewProblem => Ok(NEW_PROBLEM_PROMPT.to_string()),
            Action::CheckSolution { problem, solution } => {
                let solution = required(solution, SOLUTION_BLANK)?;
                Ok(CHECK_SOLUTION_PROMPT_TEMPLATE
                    .replace("{problem}", problem)
                    .replace("{solution}", solution))
            }
            Action::ExplainProject { description } => {
                let description = required(description, PROJECT_BLANK)?;
                Ok(PROJECT_PROMPT_TEMPLATE.replace("{project}", description))
            }
        }
    }
}

fn required<'a>(input: &'a str, blank_message: &'static str) -> Result<&'a str, PrepError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(PrepError::BlankInput(blank_message))
    } else {
        Ok(trimmed)
    }
}
