use crate::clock::Clock;
use crate::input::edit_field;
use crate::random::RandomSource;
use crate::session::{Phase, Session};
use crate::share::share_url;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do after a key was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
    Share(String),
}

/// Key dispatch on top of a session; rendered by `ui`
#[derive(Debug)]
pub struct App<C: Clock, R: RandomSource> {
    pub session: Session<C, R>,
}

impl<C: Clock, R: RandomSource> App<C, R> {
    pub fn new(session: Session<C, R>) -> Self {
        Self { session }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            return Action::Quit;
        }

        match self.session.phase() {
            Phase::NotStarted => {
                if key.code == KeyCode::Enter {
                    self.session.start();
                }
            }
            Phase::InProgress => {
                // the field always shows the session's input, so edits start from it
                if let Some(text) = edit_field(self.session.current_input(), &key) {
                    self.session.submit_input(&text);
                }
            }
            Phase::Completed => match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.session.reset(),
                KeyCode::Char('t') => {
                    return Action::Share(share_url(self.session.score().words_per_minute))
                }
                _ => {}
            },
        }

        Action::Continue
    }
}
