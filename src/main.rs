//! termo - a minimal GUI pseudo-terminal
//!
//! Opens one window with a read-only text surface. Type a command and press
//! Enter to run it through your shell.

mod app;

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use eframe::egui;
use tracing::{debug, error, info, warn};

use termo::config::{loader::ConfigLoader, Config};

use app::TermoApp;

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug mode
    debug: bool,
    /// Start fullscreen
    fullscreen: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> termo::Result<Self> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> termo::Result<Self> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => match args.next() {
                    Some(path) => app_args.config_path = Some(PathBuf::from(path)),
                    None => return Err("Missing config file path".into()),
                },
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--fullscreen" | "-f" => {
                    app_args.fullscreen = true;
                }
                "--width" | "-w" => {
                    app_args.width = Some(parse_size(&arg, args.next())?);
                }
                "--height" | "-h" => {
                    app_args.height = Some(parse_size(&arg, args.next())?);
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("{} v{}", termo::NAME, termo::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(format!("Unknown option: {}", other).into());
                }
                other => {
                    warn!("Ignoring positional argument: {}", other);
                }
            }
        }

        Ok(app_args)
    }
}

/// Parse the value following a size flag
fn parse_size(flag: &str, value: Option<String>) -> termo::Result<f32> {
    let value = value.ok_or_else(|| format!("Missing value for {}", flag))?;
    value
        .parse::<f32>()
        .map_err(|_| format!("Invalid value for {}: {}", flag, value).into())
}

/// Print help information
fn print_help() {
    println!("{} - {}", termo::NAME, termo::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    termo [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -f, --fullscreen       Start fullscreen");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("BUILT-INS:");
    println!("    exit                   Close the window");
    println!("    clear                  Clear the screen");
    println!();
    println!("CONFIGURATION:");
    println!("    termo looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $TERMO_CONFIG");
    println!("    3. <config dir>/termo/config.{{toml,json}} (e.g. ~/.config)");
    println!("    4. ~/.termo/config.{{toml,json}}");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHELL                  Shell used to run commands (default /bin/sh)");
    println!("    TERMO_CONFIG           Path to configuration file");
    println!("    TERMO_DEBUG            Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments first
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    init_logging(&args);
    info!("Starting {} v{}", termo::NAME, termo::VERSION);

    let config = load_configuration(&args);
    let session = termo::init_with_config(&config);
    let app = TermoApp::new(&config, session);
    let native_options = create_native_options(&config);

    info!("Initializing GUI...");
    let ui_config = config.ui.clone();
    eframe::run_native(
        &config.ui.title,
        native_options,
        Box::new(move |cc| {
            if let Err(e) = termo::ui::install_fonts(&cc.egui_ctx, &ui_config) {
                warn!("{}. Using built-in monospace font", e);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))
    .context("Application failed")?;

    info!("{} shutdown complete", termo::NAME);
    Ok(())
}

/// Initialize logging based on the debug flag and environment.
///
/// Logs go to stderr, which is also where command failures are reported.
fn init_logging(args: &AppArgs) {
    let debug_env = env::var("TERMO_DEBUG")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    let log_level = if args.debug || debug_env { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    debug!("Debug logging enabled");
}

/// Load configuration from file or use defaults, then apply flag overrides
fn load_configuration(args: &AppArgs) -> Config {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("TERMO_CONFIG").ok().map(PathBuf::from));

    let mut config = if let Some(path) = &config_path {
        debug!("Loading config from: {}", path.display());
        match ConfigLoader::load_from_path(path) {
            Ok(config) => {
                info!("Configuration loaded from: {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                Config::default()
            }
        }
    } else {
        match ConfigLoader::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load configuration: {}. Using defaults", e);
                Config::default()
            }
        }
    };

    apply_overrides(&mut config, args);
    config
}

fn apply_overrides(config: &mut Config, args: &AppArgs) {
    if args.fullscreen {
        config.ui.fullscreen = true;
    }
    if let Some(width) = args.width.filter(|w| *w >= 100.0) {
        config.ui.window_width = width;
    }
    if let Some(height) = args.height.filter(|h| *h >= 100.0) {
        config.ui.window_height = height;
    }
}

/// Create native options for the application window
fn create_native_options(config: &Config) -> eframe::NativeOptions {
    let ui = &config.ui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui.title.clone())
            .with_app_id(ui.app_id.clone())
            .with_icon(std::sync::Arc::new(load_or_create_window_icon()))
            .with_inner_size([ui.window_width, ui.window_height])
            .with_min_inner_size([200.0, 100.0])
            .with_resizable(true)
            .with_fullscreen(ui.fullscreen),
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    debug!(
        "Window setup: {}x{} fullscreen={}",
        ui.window_width, ui.window_height, ui.fullscreen
    );
    options
}

/// Create window icon
fn create_window_icon() -> egui::IconData {
    // 32x32: dark frame, a caret-colored prompt bar in the content area
    let bg_color = [24, 24, 27, 255];
    let fg_color = [220, 220, 220, 255];
    let caret_color = [255, 0, 80, 255];

    let mut rgba = Vec::with_capacity(32 * 32 * 4);
    for y in 0..32 {
        for x in 0..32 {
            let pixel = if (6..10).contains(&x) && (18..24).contains(&y) {
                caret_color
            } else if (4..28).contains(&x) && (y == 4 || y == 27) {
                fg_color
            } else {
                bg_color
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}

/// Try loading `icon.png` from the working directory; fall back to the generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates: [&Path; 2] = [Path::new("icon.png"), Path::new("assets/icon.png")];

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                return egui::IconData {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                };
            }
            Err(e) => error!("Failed to load icon {}: {}", path.display(), e),
        }
    }

    create_window_icon()
}
