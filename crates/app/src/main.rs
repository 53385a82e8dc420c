use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuestionService, TriviaClient, TriviaConfig};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Help,
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        match args.next() {
            None => Ok(Self::Run),
            Some(arg) if arg == "--help" || arg == "-h" => Ok(Self::Help),
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Opens the trivia quiz window. Questions are fetched once from");
    eprintln!("  {}", TriviaConfig::default().endpoint());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG    log filter (default: info)");
}

struct DesktopApp {
    question_service: Arc<QuestionService>,
}

impl UiApp for DesktopApp {
    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Dioxus may install its own subscriber; keep whichever came first.
    let _ = log_fmt().with_env_filter(filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Command::parse(std::env::args().skip(1)).inspect_err(|_| print_usage())?;
    if command == Command::Help {
        print_usage();
        return Ok(());
    }

    init_logging();

    let client = TriviaClient::new(TriviaConfig::default());
    tracing::info!(endpoint = %client.config().endpoint(), "starting quiz");
    let question_service = Arc::new(QuestionService::new(Arc::new(client)));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { question_service });
    let context = build_app_context(&app);

    // tao can default to always-on-top on macOS dev builds.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
