use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::Year;
use services::{AppServices, BankReport, QuestionStore};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_ASSET_ROOT: &str = "/";
const WINDOW_TITLE: &str = "臨床工学技士 ME2種試験対策アプリ";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDataDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    question_store: Arc<QuestionStore>,
    available_years: Vec<Year>,
    asset_root: String,
}

impl UiApp for DesktopApp {
    fn question_store(&self) -> Arc<QuestionStore> {
        Arc::clone(&self.question_store)
    }

    fn available_years(&self) -> Vec<Year> {
        self.available_years.clone()
    }

    fn asset_root(&self) -> String {
        self.asset_root.clone()
    }
}

struct Args {
    data_dir: PathBuf,
    asset_root: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--data-dir <dir>] [--asset-root <prefix>]");
    eprintln!("  cargo run -p app -- check [--data-dir <dir>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-dir {DEFAULT_DATA_DIR}");
    eprintln!("  --asset-root {DEFAULT_ASSET_ROOT}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DATA_DIR, QUIZ_ASSET_ROOT, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut data_dir = std::env::var("QUIZ_DATA_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let mut asset_root = std::env::var("QUIZ_ASSET_ROOT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ASSET_ROOT.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = require_value(args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    data_dir = PathBuf::from(value);
                }
                "--asset-root" if cmd == Command::Ui => {
                    asset_root = require_value(args, "--asset-root")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data_dir,
            asset_root,
        })
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(0);
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing::info!(data_dir = %parsed.data_dir.display(), "opening question banks");
    let services = AppServices::open_json_dir(parsed.data_dir.clone()).await?;

    match cmd {
        Command::Ui => {
            if services.available_years().is_empty() {
                tracing::warn!(
                    data_dir = %parsed.data_dir.display(),
                    "no questions_YYYY.json files found"
                );
            }

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                question_store: services.question_store(),
                available_years: services.available_years().to_vec(),
                asset_root: parsed.asset_root,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(WINDOW_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(0)
        }
        Command::Check => {
            let reports = services.question_store().inspect_all().await?;
            if reports.is_empty() {
                println!("no question banks in {}", parsed.data_dir.display());
                return Ok(1);
            }
            for report in &reports {
                println!("{}", check_line(report));
            }
            Ok(if reports.iter().all(BankReport::is_ok) { 0 } else { 1 })
        }
    }
}

fn check_line(report: &BankReport) -> String {
    match &report.result {
        Ok(stats) => format!(
            "{}: {} questions, {} invalid, {} unmatched answers",
            report.year, stats.questions, stats.rejected, stats.unmatched_answers
        ),
        Err(err) => format!("{}: failed to load ({err})", report.year),
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    match run().await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
