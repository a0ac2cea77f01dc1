use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};
use typerush::{
    clock::{Clock, SystemClock},
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    random::{PassagePicker, RandomSource},
    runtime::{AppEvent, EventSource, Runner, TerminalEvents},
    Action, App, Corpus, Session,
};
use webbrowser::Browser;

/// terminal typing-speed trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a randomly chosen passage word by word. Each word commits on a space or period once it matches exactly, and your words-per-minute is shown when the passage is done."
)]
pub struct Cli {
    /// json corpus file to draw passages from: {"name": ..., "passages": [...]}
    #[clap(short = 'c', long)]
    corpus: Option<PathBuf>,

    /// custom passage to type instead of a random one
    #[clap(short = 'p', long)]
    prompt: Option<String>,

    /// seed for reproducible passage selection
    #[clap(long)]
    seed: Option<u64>,

    /// event loop tick interval in milliseconds
    #[clap(long)]
    tick_rate_ms: Option<u64>,

    /// store the effective corpus and tick rate as future defaults
    #[clap(long)]
    save_config: bool,
}

/// Cli flags layered over the stored config
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    corpus_path: Option<PathBuf>,
    prompt: Option<String>,
    seed: Option<u64>,
    tick_rate_ms: u64,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            corpus_path: cli.corpus.clone().or_else(|| config.corpus_path.clone()),
            prompt: cli.prompt.clone(),
            seed: cli.seed,
            tick_rate_ms: cli.tick_rate_ms.unwrap_or(config.tick_rate_ms).max(1),
        }
    }

    fn to_config(&self) -> Config {
        Config {
            corpus_path: self.corpus_path.clone(),
            tick_rate_ms: self.tick_rate_ms,
        }
    }

    fn load_corpus(&self) -> Result<Corpus, typerush::TyperushError> {
        if let Some(prompt) = &self.prompt {
            return Corpus::from_passages(vec![prompt.clone()]);
        }
        match &self.corpus_path {
            Some(path) => Corpus::from_file(path),
            None => Corpus::builtin(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init_tracing();

    let store = FileConfigStore::new();
    let settings = Settings::resolve(&cli, &store.load());
    if cli.save_config {
        store.save(&settings.to_config())?;
        tracing::info!(path = ?store.path(), "saved config");
    }

    let corpus = match settings.load_corpus() {
        Ok(corpus) => corpus,
        Err(err) => {
            tracing::error!(%err, "failed to load corpus");
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::InvalidValue, err.to_string()).exit();
        }
    };

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let session = Session::new(SystemClock, PassagePicker::from_seed(settings.seed), corpus);
    let mut app = App::new(session);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        TerminalEvents::new(),
        Duration::from_millis(settings.tick_rate_ms),
    );

    let result = run(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B, C, R, E>(
    terminal: &mut Terminal<B>,
    app: &mut App<C, R>,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>>
where
    B: Backend,
    C: Clock,
    R: RandomSource,
    E: EventSource,
{
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            AppEvent::Tick => continue,
            AppEvent::Resize => {}
            AppEvent::Key(key) => match app.handle_key(key) {
                Action::Quit => break,
                Action::Share(url) => {
                    if Browser::is_available() {
                        if let Err(err) = webbrowser::open(&url) {
                            tracing::warn!(%err, "failed to open share url");
                        }
                    }
                }
                Action::Continue => {}
            },
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
