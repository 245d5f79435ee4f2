use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::QuestionBank;
use services::QuizLoopService;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::{QuizConfig, load_config_from};

#[derive(Parser, Debug)]
#[command(name = "myth-or-fact", version, about = "Timed Myth-or-Fact trivia quiz")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Question bank JSON file (defaults to the built-in coffee questions)
    #[arg(long, global = true, env = "QUIZ_QUESTIONS")]
    questions: Option<PathBuf>,

    /// Config file path (defaults to ./myth-or-fact.toml when present)
    #[arg(long, global = true, env = "QUIZ_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Open the quiz window
    Ui,

    /// Check a question bank file and report its size
    Validate {
        /// Path to the question bank JSON file
        path: PathBuf,
    },
}

struct DesktopApp {
    title: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> &str {
        &self.title
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line file first, then the config file, then the built-in bank.
fn resolve_bank(cli_questions: Option<&Path>, config: &QuizConfig) -> Result<QuestionBank> {
    match cli_questions.or(config.questions.as_deref()) {
        Some(path) => services::load_from_path(path)
            .with_context(|| format!("failed to load questions from {}", path.display())),
        None => services::load_builtin().context("built-in question bank is invalid"),
    }
}

fn validate(path: &Path) -> Result<()> {
    let bank = services::load_from_path(path)
        .with_context(|| format!("{} is not a valid question bank", path.display()))?;
    println!("{}: {} questions", path.display(), bank.len());
    Ok(())
}

fn launch_ui(cli: &Cli, config: &QuizConfig) -> Result<()> {
    let bank = resolve_bank(cli.questions.as_deref(), config)?;
    tracing::info!(questions = bank.len(), "starting quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: config.window_title.clone(),
        quiz_loop: Arc::new(QuizLoopService::new(Arc::new(bank))),
    });
    let context = build_app_context(&app);

    // Some platforms default dev windows to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title.clone())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    match &cli.command {
        Some(Command::Validate { path }) => validate(path),
        Some(Command::Ui) | None => launch_ui(&cli, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(2);
    }
}
