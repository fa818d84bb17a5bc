//! Line-oriented operator input and output.
//!
//! Implementors of `Prompt` only need to read a line and print some text; selecting from a list,
//! confirming and the like are built on top of those two.

use crate::error::{Error, ErrorType, IntoResult};
use crate::Result;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// The outcome of a selection that offers a way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Chosen(T),
    /// The operator chose "Back". Nothing should happen.
    Back,
}

#[async_trait]
pub trait Prompt: Send {
    /// Shows `message` and reads one line, without its line ending. `None` when input is closed.
    async fn ask(&mut self, message: &str) -> Result<Option<String>>;

    /// Prints `text` followed by a newline.
    fn say(&mut self, text: &str) -> Result<()>;

    /// Reads one line of free text.
    async fn input(&mut self, message: &str) -> Result<String> {
        match self.ask(message).await? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(Error::msg(ErrorType::Console, "Input was closed")),
        }
    }

    /// Offers `choices` numbered from 1, plus `0) Back`.
    async fn select(&mut self, message: &str, choices: &[String]) -> Result<Selection<usize>> {
        self.say(&numbered(choices, true))?;
        loop {
            let Some(line) = self.ask(message).await? else {
                return Ok(Selection::Back);
            };
            match line.trim().parse::<usize>() {
                Ok(0) => return Ok(Selection::Back),
                Ok(n) if n <= choices.len() => return Ok(Selection::Chosen(n - 1)),
                _ => self.say(&format!(
                    "Please enter a number between 0 and {}.",
                    choices.len()
                ))?,
            }
        }
    }

    /// Offers `choices` numbered from 1 with no way back. `None` when input is closed.
    async fn choose(&mut self, message: &str, choices: &[String]) -> Result<Option<usize>> {
        self.say(&numbered(choices, false))?;
        loop {
            let Some(line) = self.ask(message).await? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(Some(n - 1)),
                _ => self.say(&format!(
                    "Please enter a number between 1 and {}.",
                    choices.len()
                ))?,
            }
        }
    }

    /// Asks a yes/no question. An empty answer, or closed input, gives `default`.
    async fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        let question = format!("{message} {hint}");
        loop {
            let Some(line) = self.ask(&question).await? else {
                return Ok(default);
            };
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Waits for the operator to press Enter.
    async fn pause(&mut self, message: &str) -> Result<()> {
        let _ = self.ask(message).await?;
        Ok(())
    }
}

fn numbered(choices: &[String], back: bool) -> String {
    let mut menu = String::new();
    for (ix, choice) in choices.iter().enumerate() {
        let _ = writeln!(menu, "  {}) {choice}", ix + 1);
    }
    if back {
        menu.push_str("  0) Back");
    }
    menu.trim_end().to_string()
}

/// A `Prompt` over any buffered reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl Console<BufReader<Stdin>, std::io::Stdout> {
    /// A console on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), std::io::stdout())
    }
}

#[async_trait]
impl<R, W> Prompt for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn ask(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message} ")
            .and_then(|_| self.output.flush())
            .pub_result(ErrorType::Console)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .pub_result(ErrorType::Console)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").pub_result(ErrorType::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{console, printed};

    fn choices(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_select() {
        let mut c = console(&["2"]);
        let chosen = c.select("Pick:", &choices(&["a", "b"])).await.unwrap();
        assert_eq!(chosen, Selection::Chosen(1));
        assert_eq!(printed(&c), "  1) a\n  2) b\n  0) Back\nPick: ");
    }

    #[tokio::test]
    async fn test_select_back_and_retry() {
        let mut c = console(&["7", "x", "0"]);
        let chosen = c.select("Pick:", &choices(&["a", "b"])).await.unwrap();
        assert_eq!(chosen, Selection::Back);
        assert_eq!(
            printed(&c)
                .matches("Please enter a number between 0 and 2.")
                .count(),
            2
        );
    }

    #[tokio::test]
    async fn test_select_closed_input_is_back() {
        let mut c = console(&[]);
        let chosen = c.select("Pick:", &choices(&["a"])).await.unwrap();
        assert_eq!(chosen, Selection::Back);
    }

    #[tokio::test]
    async fn test_choose_has_no_back() {
        let mut c = console(&["0", "1"]);
        let chosen = c.choose("Pick:", &choices(&["a"])).await.unwrap();
        assert_eq!(chosen, Some(0));
        assert!(!printed(&c).contains("Back"));
        assert_eq!(c.choose("Pick:", &choices(&["a"])).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_confirm() {
        let mut c = console(&["", "YES", "maybe", "n"]);
        assert!(!c.confirm("Sure?", false).await.unwrap());
        assert!(c.confirm("Sure?", false).await.unwrap());
        assert!(!c.confirm("Sure?", true).await.unwrap());
        assert!(printed(&c).contains("Sure? (y/N) "));
        assert!(printed(&c).contains("Please answer y or n."));
        // Closed input takes the default.
        assert!(c.confirm("Sure?", true).await.unwrap());
    }

    #[tokio::test]
    async fn test_input() {
        let mut c = console(&["  Big TV \r"]);
        assert_eq!(c.input("Title:").await.unwrap(), "Big TV");
        let err = c.input("Title:").await.unwrap_err();
        assert_eq!(err.kind(), ErrorType::Console);
    }
}
