use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{ApiConfig, AppServices, ConfigError, parse_timeout_secs};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
    InvalidTimeout { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout <secs>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::DEFAULT_BASE_URL);
    eprintln!("  --timeout {}", services::DEFAULT_TIMEOUT.as_secs());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLASH_API_BASE_URL, FLASH_API_TIMEOUT_SECS, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    api_url: Option<String>,
    timeout: Option<Duration>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.api_url = Some(value);
                }
                "--timeout" => {
                    let value = require_value(args, "--timeout")?;
                    let timeout = parse_timeout_secs(&value)
                        .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.timeout = Some(timeout);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Flags win over the environment.
    fn resolve(self) -> Result<ApiConfig, ConfigError> {
        let mut config = match self.api_url {
            Some(url) => {
                let from_env = ApiConfig::from_env()?;
                ApiConfig::new(&url)?.with_timeout(from_env.timeout)
            }
            None => ApiConfig::from_env()?,
        };
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let config = parsed.resolve()?;
    let services = AppServices::from_config(&config)?;

    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
