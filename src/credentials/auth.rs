use std::io::{self, BufRead, Write};

use tracing::info;

use super::SecretStore;
use crate::error::{Error, Result};

const PROMPT: &str = "Enter your shortcut API key:";

/// The person at the keyboard: told things, and asked for a line of input.
pub trait Operator {
    fn notify(&mut self, message: &str) -> Result<()>;
    fn prompt(&mut self, message: &str) -> Result<String>;
}

/// Talks to the operator over stdout/stdin.
pub struct TerminalOperator;

impl Operator for TerminalOperator {
    fn notify(&mut self, message: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{message}")?;
        out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.notify(message)?;
        read_secret_line(&mut io::stdin().lock())
    }
}

/// Read one line, dropping exactly one trailing `\n`. An empty line is a valid answer.
fn read_secret_line(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;
    if read == 0 || !line.ends_with('\n') {
        return Err(Error::Prompt(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a newline",
        )));
    }
    line.pop();
    Ok(line)
}

/// What `de sc auth` was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Delete,
    Set,
}

impl AuthAction {
    pub fn from_flags(delete: bool, set: bool) -> Result<Self> {
        match (delete, set) {
            (true, false) => Ok(Self::Delete),
            (false, true) => Ok(Self::Set),
            _ => Err(Error::Usage(
                "Please specify either --delete or --set".to_string(),
            )),
        }
    }
}

/// Resolves the API key, asking the operator for one when the store is empty.
pub struct AuthFlow<'a, S, O> {
    store: &'a S,
    operator: &'a mut O,
}

impl<'a, S: SecretStore, O: Operator> AuthFlow<'a, S, O> {
    pub fn new(store: &'a S, operator: &'a mut O) -> Self {
        Self { store, operator }
    }

    pub fn authenticate(&mut self) -> Result<String> {
        if let Some(secret) = self.store.get()? {
            return Ok(secret);
        }
        self.operator.notify("API Key not found")?;
        self.set()
    }

    /// Always prompt and overwrite, whether or not a key is stored.
    pub fn set(&mut self) -> Result<String> {
        let secret = self.operator.prompt(PROMPT)?;
        self.store.set(&secret)?;
        info!("API key stored");
        self.operator.notify("API Key set")?;
        Ok(secret)
    }

    pub fn delete(&mut self) -> Result<()> {
        self.store.delete()?;
        info!("API key deleted");
        self.operator.notify("Key deleted")
    }

    pub fn run(&mut self, action: AuthAction) -> Result<()> {
        match action {
            AuthAction::Delete => self.delete(),
            AuthAction::Set => self.set().map(|_| ()),
        }
    }
}

#[cfg(test)]
pub mod scripted {
    use std::collections::VecDeque;
    use std::io;

    use super::Operator;
    use crate::error::{Error, Result};

    /// Replays canned answers and records everything shown to the operator.
    #[derive(Default)]
    pub struct ScriptedOperator {
        pub answers: VecDeque<String>,
        pub shown: Vec<String>,
    }

    impl ScriptedOperator {
        pub fn answering(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                shown: Vec::new(),
            }
        }
    }

    impl Operator for ScriptedOperator {
        fn notify(&mut self, message: &str) -> Result<()> {
            self.shown.push(message.to_string());
            Ok(())
        }

        fn prompt(&mut self, message: &str) -> Result<String> {
            self.shown.push(message.to_string());
            self.answers.pop_front().ok_or_else(|| {
                Error::Prompt(io::Error::new(io::ErrorKind::UnexpectedEof, "no input"))
            })
        }
    }
}
