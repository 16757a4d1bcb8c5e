use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::config::AppConfig;
use crate::game::{GameSession, TurnOutcome};

pub struct App {
    session: GameSession,
    save_path: PathBuf,
    thinking_delay: Duration,
    /// When set, the computer moves once this instant passes. Cosmetic only;
    /// the core call itself is synchronous.
    computer_due: Option<Instant>,
    show_registers: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(session: GameSession, config: &AppConfig) -> Self {
        App {
            session,
            save_path: config.game.save_path.clone(),
            thinking_delay: Duration::from_millis(config.ui.thinking_delay_ms),
            computer_due: None,
            show_registers: false,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick();
            self.handle_events()?;
        }
        Ok(())
    }

    /// Run the computer's turn once its thinking delay has elapsed.
    fn tick(&mut self) {
        if let Some(due) = self.computer_due {
            if Instant::now() >= due {
                self.computer_due = None;
                self.computer_move();
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.play_factor(c as i32 - '0' as i32);
            }
            KeyCode::Char('n') => {
                self.computer_due = None;
                let factor = self.session.new_game();
                self.message = Some(format!("New game! Computer chooses {factor}."));
            }
            KeyCode::Char('s') => {
                // The record has no turn field, so a half-played round must
                // not reach disk: land the pending computer reply first.
                if self.computer_due.take().is_some() {
                    self.computer_move();
                }
                self.message = Some(match self.session.save_game(&self.save_path) {
                    Ok(()) => "Game saved successfully!".to_string(),
                    Err(e) => format!("Save failed: {e}"),
                });
            }
            KeyCode::Char('l') => match self.session.load_game(&self.save_path) {
                Ok(()) => {
                    self.computer_due = None;
                    self.message = Some("Game loaded successfully!".to_string());
                }
                Err(e) => {
                    self.message = Some(format!("Load failed: {e}"));
                }
            },
            KeyCode::Char('c') => {
                self.show_registers = !self.show_registers;
            }
            _ => {}
        }
    }

    /// Submit the player's factor and schedule the computer's reply.
    fn play_factor(&mut self, factor: i32) {
        if self.computer_due.is_some() {
            // Computer is still "thinking"
            return;
        }
        if self.session.is_over() {
            self.message = Some("Game over! Press 'n' for a new game.".to_string());
            return;
        }

        match self.session.submit_player_factor(factor) {
            Ok(mv) => match mv.outcome {
                TurnOutcome::Continue => {
                    self.message = Some(format!(
                        "You chose {factor}: product {} marked. Computer thinking...",
                        mv.product
                    ));
                    self.computer_due = Some(Instant::now() + self.thinking_delay);
                }
                TurnOutcome::PlayerWon => {
                    self.message = Some("You win by 4 in a line!".to_string());
                }
                TurnOutcome::Draw => {
                    self.message = Some("It's a tie. No 4 in a line achieved.".to_string());
                }
                TurnOutcome::ComputerWon => {}
            },
            Err(e) => {
                self.message = Some(format!("Invalid move: {e}"));
            }
        }
    }

    fn computer_move(&mut self) {
        match self.session.computer_turn() {
            Ok(mv) => match mv.outcome {
                TurnOutcome::Continue => {
                    self.message = Some(format!(
                        "Computer chooses {}: product {} marked. Your turn.",
                        mv.factor, mv.product
                    ));
                }
                TurnOutcome::ComputerWon => {
                    self.message = Some("Computer wins by 4 in a line!".to_string());
                }
                TurnOutcome::Draw => {
                    self.message = Some("It's a tie. No 4 in a line achieved.".to_string());
                }
                TurnOutcome::PlayerWon => {}
            },
            Err(e) => {
                self.message = Some(format!("Computer cannot move: {e}"));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session.snapshot(),
            self.show_registers,
            &self.message,
        );
    }
}
