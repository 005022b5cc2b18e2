//! Numbered menus and prompts on the operator's terminal.

use colored::*;
use console::Term;
use provision_common::ProvisionError;
use provision_core::ports::prompt::{Layout, Prompter};
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

const COLUMN_GAP: usize = 3;

pub struct ConsolePrompter {
    term: Term,
}

impl Default for ConsolePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn read_answer(&self) -> anyhow::Result<String> {
        let line = self.term.read_line()?;
        if line.is_empty() && !self.term.is_term() {
            anyhow::bail!("input closed while waiting for an answer");
        }
        Ok(line)
    }
}

impl Prompter for ConsolePrompter {
    fn ask(&self, question: &str, default: &str) -> anyhow::Result<String> {
        self.term.write_str(&format!(
            "{} {} ",
            question.color(colors::PRIMARY).bold(),
            format!("|{default}|").color(colors::SEPARATOR)
        ))?;
        let answer = self.read_answer()?;
        let answer = answer.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    fn ask_secret(&self, question: &str) -> anyhow::Result<String> {
        self.term
            .write_str(&format!("{} ", question.color(colors::PRIMARY).bold()))?;
        Ok(self.term.read_secure_line()?)
    }

    fn choose(&self, prompt: &str, options: &[String], layout: Layout) -> anyhow::Result<String> {
        if options.is_empty() {
            return Err(ProvisionError::EmptyChoices(String::from("options")).into());
        }

        let (_rows, cols) = self.term.size();
        for line in render_menu(options, layout, cols as usize) {
            self.term.write_line(&line)?;
        }

        loop {
            self.term
                .write_str(&format!("{} ", prompt.color(colors::PRIMARY).bold()))?;
            let input = self.read_answer()?;
            if let Some(idx) = parse_selection(&input, options) {
                return Ok(options[idx].clone());
            }
            self.term.write_line(&format!(
                "{}",
                "You must choose one of the numbers listed above.".color(colors::ACCENT)
            ))?;
        }
    }
}

/// Maps operator input to an option index: a 1-based number, or the label itself.
pub fn parse_selection(input: &str, options: &[String]) -> Option<usize> {
    let input = input.trim();
    if let Ok(number) = input.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options.iter().position(|option| option == input)
}

/// Renders `N) label` entries, either one per line or flowing across `width`.
pub fn render_menu(options: &[String], layout: Layout, width: usize) -> Vec<String> {
    let entries: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}) {}", i + 1, option))
        .collect();

    match layout {
        Layout::List => entries,
        Layout::Columns => {
            let cell: usize = entries
                .iter()
                .map(|e| UnicodeWidthStr::width(e.as_str()))
                .max()
                .unwrap_or(0)
                + COLUMN_GAP;
            let per_row: usize = (width / cell.max(1)).max(1);

            entries
                .chunks(per_row)
                .map(|row| {
                    let mut line = String::new();
                    for (i, entry) in row.iter().enumerate() {
                        line.push_str(entry);
                        if i + 1 != row.len() {
                            let pad = cell - UnicodeWidthStr::width(entry.as_str());
                            line.push_str(&" ".repeat(pad));
                        }
                    }
                    line
                })
                .collect()
        }
    }
}
