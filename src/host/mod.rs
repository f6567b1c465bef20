//! Terminal front end: reads commands from stdin, feeds them to the dialer
//! and prints the screen after every change.

mod command;

pub use command::{CommandProcessor, CommandResult};

use std::io::{ErrorKind, Write};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::app::{Dialer, Event, EventReceiver, Notice, View};
use crate::config::HeaderConfig;
use crate::error::Result;
use crate::integration::Confirmer;
use crate::view::{HeaderWidget, render};

/// Stdin lines, shared between the command loop and the confirmation prompt.
pub type SharedLines = Arc<Mutex<Lines<BufReader<Stdin>>>>;

pub fn stdin_lines() -> SharedLines {
    Arc::new(Mutex::new(BufReader::new(tokio::io::stdin()).lines()))
}

/// Asks yes/no questions on the terminal.
pub struct StdinConfirmer {
    lines: SharedLines,
}

impl StdinConfirmer {
    pub fn new(lines: SharedLines) -> Self {
        Self { lines }
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "是" | "确定"
    )
}

#[async_trait]
impl Confirmer for StdinConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        let _ = std::io::stdout().flush();

        match self.lines.lock().await.next_line().await {
            Ok(Some(answer)) => is_yes(&answer),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

enum Input {
    Line(Option<String>),
    Event(Event),
    Tick,
}

pub struct Terminal {
    dialer: Dialer,
    events: EventReceiver,
    lines: SharedLines,
    header: HeaderWidget,
    processor: CommandProcessor,
}

impl Terminal {
    pub fn new(
        dialer: Dialer,
        events: EventReceiver,
        lines: SharedLines,
        header: HeaderConfig,
    ) -> Self {
        Self {
            dialer,
            events,
            lines,
            header: HeaderWidget::new(Local::now().naive_local(), header),
            processor: CommandProcessor::new(),
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw(None);
        loop {
            let input = tokio::select! {
                line = next_line(&self.lines) => Input::Line(line?),
                Some(event) = self.events.recv() => Input::Event(event),
                _ = ticker.tick() => Input::Tick,
            };

            match input {
                Input::Line(None) => {
                    info!("Input closed");
                    break;
                }
                Input::Line(Some(line)) => {
                    let Some((command, args)) = self.processor.parse_command(&line) else {
                        continue;
                    };
                    match self.processor.process(&command, &args, self.dialer.state()) {
                        CommandResult::Quit => break,
                        CommandResult::Help(text) => println!("{}", text),
                        CommandResult::Error(message) => println!("{}", message),
                        CommandResult::Event(event) => {
                            let notice = self.dialer.handle(event).await;
                            self.draw(notice);
                        }
                    }
                }
                Input::Event(event) => {
                    let notice = self.dialer.handle(event).await;
                    self.draw(notice);
                }
                Input::Tick => {
                    let changed = self.header.tick(Local::now().naive_local());
                    let state = self.dialer.state();
                    if changed && state.view() == View::Home && state.dialog().is_none() {
                        self.draw(None);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw(&self, notice: Option<Notice>) {
        println!("\n{}", render(self.dialer.state(), &self.header));
        if let Some(Notice::Alert(message)) = notice {
            println!("!! {}", message);
        }
    }
}

async fn next_line(lines: &SharedLines) -> std::io::Result<Option<String>> {
    read_command_line(&mut *lines.lock().await).await
}

/// Reads the next command line, skipping lines that are not valid UTF-8.
/// `Ok(None)` means the input is closed.
pub async fn read_command_line<R>(lines: &mut Lines<R>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        match lines.next_line().await {
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                warn!("Skipping unreadable input line: {}", e);
            }
            other => return other,
        }
    }
}
