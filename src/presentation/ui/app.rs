//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::TodoState;
use crate::infrastructure::AppConfig;
use crate::presentation::events::{EventResult, InputEvent};
use crate::presentation::ui::todo_screen::{TodoScreen, TodoScreenState};

const TOAST_TICK_RATE: Duration = Duration::from_millis(250);

pub struct App {
    screen: TodoScreenState,
    mouse_enabled: bool,
    exiting: bool,
}

impl App {
    #[must_use]
    pub fn new(todo: TodoState, config: &AppConfig) -> Self {
        Self {
            screen: TodoScreenState::new(todo, config),
            mouse_enabled: config.mouse,
            exiting: false,
        }
    }

    /// # Errors
    /// Returns error if drawing to or reading from the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        if self.mouse_enabled {
            crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;
        }

        let result = self.run_event_loop(terminal).await;

        if self.mouse_enabled {
            crossterm::execute!(std::io::stdout(), DisableMouseCapture)?;
        }

        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut toast_interval = interval(TOAST_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            tokio::select! {
                maybe_event = terminal_events.next() => {
                    let Some(event) = maybe_event else {
                        debug!("Terminal event stream closed");
                        break;
                    };
                    let Some(event) = InputEvent::from_terminal(event?) else {
                        continue;
                    };
                    if self.handle_event(event) == EventResult::Exit {
                        self.exiting = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = toast_interval.tick() => {
                    if self.screen.tick() {
                        terminal.draw(|frame| self.render(frame))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.screen.handle_key(key),
            InputEvent::Mouse(mouse) => self.screen.handle_mouse(mouse),
            InputEvent::Resize => EventResult::Continue,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(TodoScreen, frame.area(), &mut self.screen);
    }
}
