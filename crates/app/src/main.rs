use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::TagAllocator;
use quiz_core::model::PageContent;
use services::{AppServices, AssessmentService, SubmissionConfig, parse_base_url};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingPage,
    InvalidBaseUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingPage => write!(f, "no page given (use --page or QUIZ_PAGE)"),
            ArgsError::InvalidBaseUrl { raw } => write!(f, "invalid --base-url value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn page(&self) -> Arc<PageContent> {
        self.services.page()
    }

    fn tags(&self) -> Arc<TagAllocator> {
        self.services.tags()
    }

    fn assessment_service(&self) -> Option<Arc<AssessmentService>> {
        self.services.assessment_service()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    page: PathBuf,
    submission: SubmissionConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- --page <page.json> [--base-url <url>] [--offline]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {}", services::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_PAGE, QUIZ_BASE_URL, QUIZ_OFFLINE, RUST_LOG");
}

impl Args {
    /// Flags win over the environment-derived defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        page: Option<String>,
        submission: SubmissionConfig,
    ) -> Result<Parsed, ArgsError> {
        let mut page = page.filter(|value| !value.trim().is_empty()).map(PathBuf::from);
        let mut submission = submission;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--page" => page = Some(PathBuf::from(require_value(args, "--page")?)),
                "--base-url" => {
                    let value = require_value(args, "--base-url")?;
                    submission.base_url = parse_base_url(&value)
                        .map_err(|_| ArgsError::InvalidBaseUrl { raw: value.clone() })?;
                }
                "--offline" => submission.offline = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let page = page.ok_or(ArgsError::MissingPage)?;
        Ok(Parsed::Run(Self { page, submission }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let submission = SubmissionConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var("QUIZ_PAGE").ok(), submission).map_err(
        |e| {
            eprintln!("{e}");
            print_usage();
            e
        },
    )?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let json = std::fs::read_to_string(&args.page)?;
    let page = PageContent::from_json(&json)?;
    tracing::info!(
        page = %args.page.display(),
        kind = page.kind(),
        base_url = %args.submission.base_url,
        offline = args.submission.offline,
        "loaded page"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::new(page, &args.submission),
    });
    let context = build_app_context(&app);

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
    init_tracing();
    if let Err(err) = run() {
        tracing::error!(error = %err, "quiz failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> SubmissionConfig {
        SubmissionConfig {
            base_url: parse_base_url(services::DEFAULT_BASE_URL).unwrap(),
            offline: false,
        }
    }

    fn parse(args: &[&str], page: Option<&str>) -> Result<Parsed, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, page.map(str::to_string), defaults())
    }

    #[test]
    fn flags_override_environment() {
        let Parsed::Run(args) = parse(
            &["--page", "lesson.json", "--base-url", "https://quiz.example/unit/", "--offline"],
            Some("ignored.json"),
        )
        .unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.page, PathBuf::from("lesson.json"));
        assert_eq!(args.submission.base_url.as_str(), "https://quiz.example/unit/");
        assert!(args.submission.offline);
    }

    #[test]
    fn page_falls_back_to_environment() {
        let Parsed::Run(args) = parse(&[], Some("env.json")).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.page, PathBuf::from("env.json"));
        assert_eq!(args.submission, defaults());
    }

    #[test]
    fn missing_page_is_an_error() {
        assert!(matches!(parse(&[], None), Err(ArgsError::MissingPage)));
        assert!(matches!(parse(&[], Some("  ")), Err(ArgsError::MissingPage)));
    }

    #[test]
    fn bad_flags_are_reported() {
        assert!(matches!(
            parse(&["--page"], None),
            Err(ArgsError::MissingValue { flag: "--page" })
        ));
        assert!(matches!(
            parse(&["--base-url", "not a url"], Some("p.json")),
            Err(ArgsError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse(&["--lesson", "1"], Some("p.json")),
            Err(ArgsError::UnknownArg(arg)) if arg == "--lesson"
        ));
        assert_eq!(parse(&["--help"], None).unwrap(), Parsed::Help);
    }
}
