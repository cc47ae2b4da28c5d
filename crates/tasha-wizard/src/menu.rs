//! Single-select menus.
//!
//! The pipeline only ever asks "pick one of these". [`Menu::choose`] is the
//! one required operation; the typed helpers on top of it return the chosen
//! value itself, so callers never have to parse an answer back.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

use colored::Colorize;

use crate::error::{MenuError, MenuResult};

/// Answer text for a positive confirmation.
pub const YES: &str = "Yes";
/// Answer text for a negative confirmation.
pub const NO: &str = "No";

/// Something that can present options and return the user's pick.
pub trait Menu {
    /// Present `options` under `label` and return the index of the pick.
    fn choose(&mut self, label: &str, options: &[String]) -> MenuResult<usize>;

    /// Show an informational line. Silent by default.
    fn notify(&mut self, _message: &str) -> MenuResult<()> {
        Ok(())
    }

    /// Pick one string option.
    fn select(&mut self, label: &str, options: &[&str]) -> MenuResult<String> {
        let mut owned: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let index = self.choose(label, &owned)?;
        Ok(owned.swap_remove(index))
    }

    /// Pick one numeric option.
    fn select_number<N>(&mut self, label: &str, options: &[N]) -> MenuResult<N>
    where
        N: Copy + Display,
        Self: Sized,
    {
        let owned: Vec<String> = options.iter().map(|n| n.to_string()).collect();
        let index = self.choose(label, &owned)?;
        Ok(options[index])
    }

    /// Ask a yes/no question.
    fn confirm(&mut self, label: &str) -> MenuResult<bool> {
        Ok(self.select(label, &[YES, NO])? == YES)
    }
}

impl<M: Menu + ?Sized> Menu for &mut M {
    fn choose(&mut self, label: &str, options: &[String]) -> MenuResult<usize> {
        (**self).choose(label, options)
    }

    fn notify(&mut self, message: &str) -> MenuResult<()> {
        (**self).notify(message)
    }
}

/// Remove the first element equal to `item`, returning it.
pub fn remove_first<T, Q>(items: &mut Vec<T>, item: &Q) -> Option<T>
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    let index = items.iter().position(|x| x == item)?;
    Some(items.remove(index))
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// A numbered-list menu over a line-oriented reader and writer.
///
/// Accepts an option's exact text or its number in the list, text first.
/// Anything else re-prompts; end of input is [`MenuError::Closed`].
pub struct TerminalMenu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalMenu<R, W> {
    /// Create a menu reading answers from `input` and prompting on `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> MenuResult<String> {
        write!(self.output, "{} ", ">".green().bold())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::Closed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Menu for TerminalMenu<R, W> {
    fn choose(&mut self, label: &str, options: &[String]) -> MenuResult<usize> {
        if options.is_empty() {
            return Err(MenuError::NoOptions(label.to_string()));
        }
        writeln!(self.output)?;
        writeln!(self.output, "{}", label.bold())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {option}", (i + 1).to_string().cyan())?;
        }
        loop {
            let answer = self.read_answer()?;
            if let Some(index) = parse_answer(&answer, options) {
                return Ok(index);
            }
            writeln!(
                self.output,
                "{}",
                format!("Enter a number between 1 and {}.", options.len()).yellow()
            )?;
        }
    }

    fn notify(&mut self, message: &str) -> MenuResult<()> {
        writeln!(self.output, "{}", message.dimmed())?;
        Ok(())
    }
}

fn parse_answer(answer: &str, options: &[String]) -> Option<usize> {
    if let Some(index) = options.iter().position(|o| o == answer) {
        return Some(index);
    }
    let n = answer.parse::<usize>().ok()?;
    (1..=options.len()).contains(&n).then(|| n - 1)
}

// ---------------------------------------------------------------------------
// Scripted
// ---------------------------------------------------------------------------

/// A menu that replays canned answers, matched by option text.
#[derive(Debug, Default)]
pub struct ScriptedMenu {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    notes: Vec<String>,
}

impl ScriptedMenu {
    /// Create a menu that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Labels of every prompt raised so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Messages passed to [`Menu::notify`].
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Menu for ScriptedMenu {
    fn choose(&mut self, label: &str, options: &[String]) -> MenuResult<usize> {
        self.prompts.push(label.to_string());
        if options.is_empty() {
            return Err(MenuError::NoOptions(label.to_string()));
        }
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| MenuError::Exhausted(label.to_string()))?;
        options
            .iter()
            .position(|o| *o == answer)
            .ok_or_else(|| MenuError::NotOffered {
                label: label.to_string(),
                answer,
            })
    }

    fn notify(&mut self, message: &str) -> MenuResult<()> {
        self.notes.push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal(input: &str) -> TerminalMenu<&[u8], Vec<u8>> {
        TerminalMenu::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn remove_first_only_takes_one() {
        let mut scores = vec![15, 14, 14, 10];
        assert_eq!(remove_first(&mut scores, &14), Some(14));
        assert_eq!(scores, vec![15, 14, 10]);
        assert_eq!(remove_first(&mut scores, &9), None);
        assert_eq!(scores.len(), 3);
    }

    #[test]
    fn terminal_accepts_number_or_text() {
        let mut menu = terminal("2\nMale\n");
        assert_eq!(menu.select("Gender", &["Female", "Male"]).unwrap(), "Male");
        assert_eq!(menu.select("Gender", &["Female", "Male"]).unwrap(), "Male");
    }

    #[test]
    fn terminal_reprompts_on_bad_input() {
        let mut menu = terminal("0\nfoo\n7\n1\n");
        assert_eq!(menu.select_number("Level", &[1u32, 2, 3]).unwrap(), 1);
        let printed = String::from_utf8(menu.output).unwrap();
        assert_eq!(printed.matches("Enter a number between 1 and 3.").count(), 3);
        assert!(printed.contains("Level"));
    }

    #[test]
    fn terminal_closed_input() {
        let mut menu = terminal("");
        assert!(matches!(
            menu.select("Species", &["Elf"]),
            Err(MenuError::Closed)
        ));
    }

    #[test]
    fn empty_options_rejected() {
        let mut menu = terminal("1\n");
        assert!(matches!(
            menu.select("Subclass", &[]),
            Err(MenuError::NoOptions(_))
        ));
    }

    #[test]
    fn scripted_answers_by_text() {
        let mut menu = ScriptedMenu::new(["14", "Yes"]);
        assert_eq!(menu.select_number("Score", &[15, 14, 14]).unwrap(), 14);
        assert!(menu.confirm("Again?").unwrap());
        assert_eq!(menu.prompts(), &["Score".to_string(), "Again?".to_string()]);
        assert_eq!(menu.remaining(), 0);
    }

    #[test]
    fn scripted_rejects_unoffered_answer() {
        let mut menu = ScriptedMenu::new(["Arcana"]);
        let err = menu.select("Skill", &["History", "Insight"]).unwrap_err();
        match err {
            MenuError::NotOffered { label, answer } => {
                assert_eq!(label, "Skill");
                assert_eq!(answer, "Arcana");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn scripted_exhausted() {
        let mut menu = ScriptedMenu::new(Vec::<String>::new());
        assert!(matches!(
            menu.confirm("More?"),
            Err(MenuError::Exhausted(_))
        ));
    }

    #[test]
    fn terminal_prefers_option_text_over_position() {
        let mut menu = terminal("8\n2\n");
        assert_eq!(menu.select_number("Score", &[15, 12, 8]).unwrap(), 8);
        assert_eq!(menu.select_number("Score", &[15, 12]).unwrap(), 12);
    }

    #[test]
    fn menu_through_mutable_reference() {
        fn ask<M: Menu>(mut menu: M) -> bool {
            menu.confirm("More?").unwrap()
        }
        let mut inner = ScriptedMenu::new(["No"]);
        assert!(!ask(&mut inner));
        assert_eq!(inner.remaining(), 0);
    }
}
