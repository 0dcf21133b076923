//! Terminal rendering of the sign-up form and its notifications.

use std::io::{self, IsTerminal, Write};

use async_trait::async_trait;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal;
use gobarber_lib::model::Field;
use gobarber_lib::notify::{Notification, NotificationKind, Notifier};
use gobarber_lib::validation::FieldErrorMap;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::form::Answers;

/// Prints notifications to stdout.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        println!();
        println!("{}", notification_line(&notification));
        if !notification.description.is_empty() {
            println!("  {}", notification.description.as_str().dim());
        }
        println!();
    }
}

fn notification_line(notification: &Notification) -> String {
    let title = notification.title.as_str();
    match notification.kind {
        NotificationKind::Info => format!("{} {}", "i".blue(), title.bold()),
        NotificationKind::Success => format!("{} {}", "✔".green(), title.bold().green()),
        NotificationKind::Warning => format!("{} {}", "!".yellow(), title.bold().yellow()),
        NotificationKind::Error => format!("{} {}", "✘".red(), title.bold().red()),
    }
}

/// Prints the form heading.
pub fn heading() -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", "Create your account".bold())?;
    writeln!(
        stdout,
        "{}",
        "Type / to go back to sign in, /signup to start over. Leave with Ctrl+D.".dim()
    )?;
    writeln!(stdout)
}

/// Prints the prompt for a field, with its error from the last attempt.
pub fn prompt(field: Field, errors: &FieldErrorMap) -> io::Result<()> {
    let mut stdout = io::stdout();
    if let Some(message) = errors.get(field.key()) {
        writeln!(stdout, "  {}", message.red())?;
    }
    write!(stdout, "{}: ", field.placeholder().bold())?;
    stdout.flush()
}

/// Prints a yes/no question.
pub fn confirm(question: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [Y/n]: ", question)?;
    stdout.flush()
}

/// Reads answers from stdin, masking secret fields on a terminal.
pub struct TerminalAnswers {
    lines: Lines<BufReader<Stdin>>,
}

impl TerminalAnswers {
    /// Reads from the process's standard input.
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait]
impl Answers for TerminalAnswers {
    async fn line(&mut self) -> io::Result<Option<String>> {
        self.lines.next_line().await
    }

    async fn secret(&mut self) -> io::Result<Option<String>> {
        // Piped input has no echo to hide.
        if !io::stdin().is_terminal() {
            return self.lines.next_line().await;
        }
        tokio::task::spawn_blocking(read_masked)
            .await
            .map_err(io::Error::other)?
    }
}

/// Leaves raw mode when dropped.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Reads one line with echo off, printing `*` per character.
///
/// Returns `None` on Ctrl+C or Ctrl+D.
fn read_masked() -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    let mut secret = String::new();
    let raw = RawMode::enable()?;

    let result = loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => break Some(secret),
            KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => break None,
            KeyCode::Backspace => {
                if secret.pop().is_some() {
                    write!(stdout, "\u{8} \u{8}")?;
                    stdout.flush()?;
                }
            }
            KeyCode::Char(c) => {
                secret.push(c);
                write!(stdout, "*")?;
                stdout.flush()?;
            }
            _ => {}
        }
    };

    drop(raw);
    writeln!(stdout)?;
    Ok(result)
}
