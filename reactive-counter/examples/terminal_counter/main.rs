/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

// Terminal Counter Example: the reactive counter driven from the keyboard.
//
// The number on screen is rendered by a display actor that owns the terminal on
// its own thread. The counter agent hands it one value per tick and waits for it
// to be drawn before moving on.
//
// Keys: `u` counts up, `d` counts down, `s` stops, `q`/Esc/Ctrl+C quits.
// After ten seconds (configurable) the counter stops itself and the keys go dead.

use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::*;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

use reactive_counter::common::config::CONFIG;
use reactive_counter::prelude::*;

const LOG_DIRECTORY: &str = "logs";
const LOG_FILENAME: &str = "terminal_counter.log";
const HELP: &str = "[u] up  [d] down  [s] stop  [q] quit";

// Restores the terminal however main exits.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), cursor::Show, Print("\r\n"));
    }
}

/// Draws the counter value on the second terminal row.
struct TerminalSurface {
    out: Stdout,
}

impl TerminalSurface {
    fn new() -> Self {
        Self { out: stdout() }
    }
}

impl PresentationSurface for TerminalSurface {
    fn render(&mut self, text: &str) -> Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 1),
            Clear(ClearType::CurrentLine),
            Print(format!("count: {text}"))
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn disable_controls(&mut self) -> Result<()> {
        execute!(
            self.out,
            cursor::MoveTo(0, 0),
            Clear(ClearType::CurrentLine),
            Print("auto-stopped, [q] quit")
        )?;
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    initialize_tracing();
    info!("** App startup **");

    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard;
    execute!(
        stdout(),
        Clear(ClearType::All),
        cursor::Hide,
        cursor::MoveTo(0, 0),
        Print(HELP)
    )?;

    // The terminal is blocking I/O, so the display gets a thread of its own.
    let display = DisplayActor::spawn_on_thread(
        Ern::with_root(CONFIG.defaults.display_name.as_str())?,
        CONFIG.limits.display_inbox_capacity,
        TerminalSurface::new,
    );
    let mut controller = Controller::launch_with_display(&CONFIG, display)?;
    let mut errors = controller.take_errors();

    let mut reader = EventStream::new();
    loop {
        tokio::select! {
            event = reader.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('u') => {
                        controller.on_up_clicked();
                    }
                    KeyCode::Char('d') => {
                        controller.on_down_clicked();
                    }
                    KeyCode::Char('s') => {
                        controller.on_stop_clicked();
                    }
                    _ => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    error!("Error reading event: {:?}", e);
                    break;
                }
                None => break,
            },
            error = next_error(&mut errors) => {
                warn!("Counter reported: {}", error);
            }
        }
    }

    controller.shutdown().await?;
    info!("Shutdown complete.");
    Ok(())
}

// Resolves with the next reported error, or never once the channel is gone.
async fn next_error(errors: &mut Option<mpsc::Receiver<CounterError>>) -> CounterError {
    if let Some(receiver) = errors {
        if let Some(error) = receiver.recv().await {
            return error;
        }
    }
    *errors = None;
    std::future::pending().await
}

fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reactive_counter=debug,terminal_counter=debug"));

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIRECTORY, LOG_FILENAME);

    let subscriber = FmtSubscriber::builder()
        .with_span_events(FmtSpan::NONE)
        .compact()
        .with_line_number(false)
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(file_appender)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting default subscriber failed: {e}");
    }
}
