use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use gram_core::model::{Catalog, Portal, SessionDefaults, Theme};
use gram_core::time::whole_millis;
use services::{AppServices, Clock, DemoConfig, SessionService, Viewport};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_HEIGHT: u32 = 820;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTheme { raw: String },
    InvalidPortal { raw: String },
    InvalidMillis { flag: &'static str, raw: String },
    InvalidWidth { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTheme { raw } => write!(f, "invalid --theme value: {raw}"),
            ArgsError::InvalidPortal { raw } => write!(f, "invalid --portal value: {raw}"),
            ArgsError::InvalidMillis { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidWidth { raw } => write!(f, "invalid --width value: {raw}"),
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
    fn session(&self) -> Arc<SessionService> {
        self.services.session()
    }

    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn config(&self) -> DemoConfig {
        self.services.config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    theme: Theme,
    portal: Portal,
    login_delay: Duration,
    toast_duration: Duration,
    width: u32,
}

impl Default for Args {
    fn default() -> Self {
        let config = DemoConfig::default();
        Self {
            theme: Theme::from_dark_mode(config.defaults.dark_mode),
            portal: config.defaults.portal,
            login_delay: config.login_latency,
            toast_duration: config.toast_duration,
            width: config.viewport.width(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--theme <light|dark>] [--portal <learner|educator>]");
    eprintln!("                      [--login-delay-ms <ms>] [--toast-ms <ms>] [--width <px>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --theme light --portal learner --login-delay-ms 1500 --toast-ms 3000 --width 1280");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GRAM_THEME, GRAM_PORTAL, GRAM_LOGIN_DELAY_MS, RUST_LOG");
}

fn parse_theme(raw: String) -> Result<Theme, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidTheme { raw })
}

fn parse_portal(raw: String) -> Result<Portal, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidPortal { raw })
}

fn parse_millis(flag: &'static str, raw: String) -> Result<Duration, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ArgsError::InvalidMillis { flag, raw })
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        if let Some(raw) = env("GRAM_THEME") {
            parsed.theme = parse_theme(raw)?;
        }
        if let Some(raw) = env("GRAM_PORTAL") {
            parsed.portal = parse_portal(raw)?;
        }
        if let Some(raw) = env("GRAM_LOGIN_DELAY_MS") {
            parsed.login_delay = parse_millis("GRAM_LOGIN_DELAY_MS", raw)?;
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" => parsed.theme = parse_theme(require_value(args, "--theme")?)?,
                "--portal" => parsed.portal = parse_portal(require_value(args, "--portal")?)?,
                "--login-delay-ms" => {
                    let value = require_value(args, "--login-delay-ms")?;
                    parsed.login_delay = parse_millis("--login-delay-ms", value)?;
                }
                "--toast-ms" => {
                    let value = require_value(args, "--toast-ms")?;
                    parsed.toast_duration = parse_millis("--toast-ms", value)?;
                }
                "--width" => {
                    let value = require_value(args, "--width")?;
                    parsed.width = match value.trim().parse::<u32>() {
                        Ok(width) if width > 0 => width,
                        _ => return Err(ArgsError::InvalidWidth { raw: value }),
                    };
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn demo_config(&self) -> DemoConfig {
        let defaults = SessionDefaults {
            portal: self.portal,
            dark_mode: self.theme.is_dark(),
            ..SessionDefaults::default()
        };
        DemoConfig::default()
            .with_login_latency(self.login_delay)
            .with_toast_duration(self.toast_duration)
            .with_viewport(Viewport::new(self.width))
            .with_defaults(defaults)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    let config = parsed.demo_config();
    tracing::info!(
        theme = %parsed.theme,
        portal = %parsed.portal,
        login_delay_ms = whole_millis(parsed.login_delay),
        width = parsed.width,
        "launching GramShiksha"
    );

    let services = AppServices::demo(config, Clock::default_clock())?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // Keep the window a normal, non-floating window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("GramShiksha")
            .with_inner_size(LogicalSize::new(f64::from(parsed.width), f64::from(WINDOW_HEIGHT)))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| {
            env.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        })
    }

    #[test]
    fn no_arguments_use_demo_defaults() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.demo_config(), DemoConfig::default());
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--portal", "educator", "--login-delay-ms", "10"],
            &[("GRAM_PORTAL", "learner"), ("GRAM_THEME", "dark")],
        )
        .unwrap();
        assert_eq!(args.portal, Portal::Educator);
        assert_eq!(args.theme, Theme::Dark);
        assert_eq!(args.login_delay, Duration::from_millis(10));

        let config = args.demo_config();
        assert!(config.defaults.dark_mode);
        assert_eq!(config.defaults.portal, Portal::Educator);
        assert_eq!(config.defaults.xp, 1250);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            parse(&["--theme", "neon"], &[]),
            Err(ArgsError::InvalidTheme { .. })
        ));
        assert!(matches!(
            parse(&["--width", "0"], &[]),
            Err(ArgsError::InvalidWidth { .. })
        ));
        assert!(matches!(
            parse(&["--toast-ms"], &[]),
            Err(ArgsError::MissingValue { flag: "--toast-ms" })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&[], &[("GRAM_LOGIN_DELAY_MS", "soon")]),
            Err(ArgsError::InvalidMillis { .. })
        ));
    }

    #[test]
    fn width_drives_compact_viewport() {
        let config = parse(&["--width", "600"], &[]).unwrap().demo_config();
        assert!(config.viewport.is_compact());
    }
}
