//! Interactive input.
//!
//! The renamer asks for a prefix and a confirmation through the [`Prompt`] trait so the
//! same flow runs against a terminal or a queue of scripted answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::shutdown;

/// Source of answers to questions shown to the user.
pub trait Prompt {
    /// Show `question` and return the answer with surrounding whitespace removed.
    /// `None` means input ended (EOF) before an answer was given.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Reads answers from stdin, writing questions to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        // Marked before the question shows, so an interrupt never lands unmarked.
        let _wait = shutdown::awaiting_input();
        let mut stdout = io::stdout();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Answers queued up front. Records the questions it was asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().map(|a| a.trim().to_string()))
    }
}

/// Ask for the prefix to strip; an empty answer or EOF selects `default`.
pub fn ask_prefix<P: Prompt + ?Sized>(prompt: &mut P, default: &str) -> io::Result<String> {
    let answer = prompt.ask("Prefix to strip (press Enter for the default): ")?;
    Ok(match answer {
        Some(a) if !a.is_empty() => a,
        _ => default.to_string(),
    })
}

/// Accepted confirmations, compared case-insensitively.
const YES_ANSWERS: [&str; 3] = ["y", "yes", "是"];

/// Ask a yes/no question; anything but an explicit yes (including EOF) is a no.
pub fn confirm<P: Prompt + ?Sized>(prompt: &mut P, question: &str) -> io::Result<bool> {
    let answer = prompt.ask(&format!("{question} (y/N): "))?;
    Ok(answer
        .map(|a| a.to_lowercase())
        .is_some_and(|a| YES_ANSWERS.contains(&a.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_answer_uses_default() {
        let mut p = ScriptedPrompt::new(["   "]);
        assert_eq!(ask_prefix(&mut p, "2-XP01-_2025-").unwrap(), "2-XP01-_2025-");
    }

    #[test]
    fn eof_prefix_uses_default() {
        let mut p = ScriptedPrompt::default();
        assert_eq!(ask_prefix(&mut p, "pre-").unwrap(), "pre-");
    }

    #[test]
    fn typed_prefix_is_trimmed() {
        let mut p = ScriptedPrompt::new(["  IMG_ \n"]);
        assert_eq!(ask_prefix(&mut p, "pre-").unwrap(), "IMG_");
        assert_eq!(p.asked().len(), 1);
    }

    #[test]
    fn confirm_accepts_yes_variants() {
        for yes in ["y", "Y", "yes", "YES", "是"] {
            let mut p = ScriptedPrompt::new([yes]);
            assert!(confirm(&mut p, "Proceed?").unwrap(), "{yes} should confirm");
        }
    }

    #[test]
    fn confirm_defaults_to_no() {
        for no in ["", "n", "no", "yep"] {
            let mut p = ScriptedPrompt::new([no]);
            assert!(!confirm(&mut p, "Proceed?").unwrap(), "{no:?} should not confirm");
        }
        let mut eof = ScriptedPrompt::default();
        assert!(!confirm(&mut eof, "Proceed?").unwrap());
        assert_eq!(eof.asked(), &["Proceed? (y/N): ".to_string()]);
    }
}
