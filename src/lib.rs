// Library surface for headless/integration tests and reuse.
// main.rs only wires the terminal, cli and config together.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod corpus;
pub mod error;
pub mod highlight;
pub mod input;
pub mod logging;
pub mod random;
pub mod runtime;
pub mod scoring;
pub mod session;
pub mod share;
pub mod ui;

pub use app::{Action, App};
pub use corpus::Corpus;
pub use error::TyperushError;
pub use session::{Phase, Session, Snapshot};
