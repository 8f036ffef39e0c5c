//! Contract between the resolver and whatever asks the user questions
//!
//! The interactive implementation lives in `tui` (cliclack). Tests drive the
//! resolver with `ScriptedPrompter` instead.

use crate::error::ScaffoldError;
use anyhow::{anyhow, bail, Result};
use std::collections::VecDeque;

/// A source of answers for the prompt phase
///
/// Implementations return `ScaffoldError::Aborted` (wrapped in `anyhow::Error`)
/// when the user interrupts a prompt.
pub trait Prompter {
    /// Pick one of `items`; each item is a value and its label
    fn select<T: Clone + Eq>(&mut self, message: &str, items: &[(T, &str)]) -> Result<T>;

    /// Free text that must not be empty; `required` is shown when it is
    fn text(&mut self, message: &str, placeholder: &str, required: &str) -> Result<String>;

    /// Free text pre-filled with `default`; an empty answer is allowed
    fn input(&mut self, message: &str, default: &str) -> Result<String>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Show a titled block of text
    fn note(&mut self, title: &str, body: &str) -> Result<()>;

    /// Start a new group of related questions
    fn section(&mut self, title: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;
}

/// One pre-recorded answer for `ScriptedPrompter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Index into the items of a `select`
    Choose(usize),
    /// Literal text for `text` / `input`
    Text(String),
    /// Accept whatever the prompt offers by default
    Default,
    Yes,
    No,
}

impl Answer {
    pub fn text(value: impl Into<String>) -> Self {
        Answer::Text(value.into())
    }
}

/// Answers prompts from a fixed script instead of a terminal
///
/// Running out of answers behaves like the user interrupting the prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Every message, note and warning shown so far, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, message: &str) -> Result<Answer> {
        self.transcript.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| ScaffoldError::Aborted.into())
    }
}

impl Prompter for ScriptedPrompter {
    fn select<T: Clone + Eq>(&mut self, message: &str, items: &[(T, &str)]) -> Result<T> {
        let index = match self.next_answer(message)? {
            Answer::Choose(index) => index,
            Answer::Default => 0,
            other => bail!("expected a choice for '{}', got {:?}", message, other),
        };

        items
            .get(index)
            .map(|(value, _)| value.clone())
            .ok_or_else(|| anyhow!("no item {} for '{}'", index, message))
    }

    fn text(&mut self, message: &str, _placeholder: &str, required: &str) -> Result<String> {
        loop {
            match self.next_answer(message)? {
                Answer::Text(value) if value.trim().is_empty() => {
                    self.transcript.push(required.to_string());
                }
                Answer::Text(value) => return Ok(value),
                other => bail!("expected text for '{}', got {:?}", message, other),
            }
        }
    }

    fn input(&mut self, message: &str, default: &str) -> Result<String> {
        match self.next_answer(message)? {
            Answer::Text(value) => Ok(value),
            Answer::Default => Ok(default.to_string()),
            other => bail!("expected input for '{}', got {:?}", message, other),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        match self.next_answer(message)? {
            Answer::Yes => Ok(true),
            Answer::No => Ok(false),
            Answer::Default => Ok(default),
            other => bail!("expected yes/no for '{}', got {:?}", message, other),
        }
    }

    fn note(&mut self, title: &str, body: &str) -> Result<()> {
        self.transcript.push(format!("{}\n{}", title, body));
        Ok(())
    }

    fn section(&mut self, title: &str) -> Result<()> {
        self.transcript.push(title.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.transcript.push(message.to_string());
        Ok(())
    }
}
