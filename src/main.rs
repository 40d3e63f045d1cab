use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use eframe::NativeOptions;

use camino_rosary::config::{self, Config, DEFAULT_CONFIG_FILE};
use camino_rosary::error::{Result, RosaryError};
use camino_rosary::svg_export::render_svg;
use camino_rosary::text_format::render_snapshot;
use camino_rosary::viewer::RosaryApp;
use camino_rosary::{MysteryType, Navigator, RosaryModel};

#[derive(Parser, Debug)]
#[command(name = "rosary", version, about = "Interactive rosary: viewer and command line")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the desktop viewer (default)
    Gui,
    /// Print what is shown at a step
    Show {
        #[arg(long)]
        mystery: Option<MysteryType>,
        #[arg(long, default_value_t = 0)]
        step: usize,
        /// Plain text instead of JSON
        #[arg(long)]
        text: bool,
    },
    /// List every step of the recitation
    Walk {
        #[arg(long)]
        mystery: Option<MysteryType>,
    },
    /// Export the bead diagram as SVG
    Svg {
        #[arg(long, default_value_t = 0)]
        step: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str())).init();
    match &config.source {
        Some(path) => log::info!("Loaded settings from {}", path.display()),
        None => log::warn!("No settings file found, using defaults"),
    }
}

fn navigator_at(model: Arc<RosaryModel>, config: &Config, mystery: Option<MysteryType>, step: usize) -> Result<Navigator> {
    let mut navigator = Navigator::for_today(model).starting_with(mystery.unwrap_or_else(|| config.starting_mystery()));
    if !navigator.go_to_step(step) {
        return Err(RosaryError::StepOutOfRange { index: step, total: navigator.total_steps() });
    }
    Ok(navigator)
}

fn run_viewer(model: Arc<RosaryModel>, config: &Config) -> Result<()> {
    let navigator = Navigator::for_today(model).starting_with(config.starting_mystery());
    let config_display = match &config.source {
        Some(path) => format!("Config: {}", path.display()),
        None => "Config: defaults".to_string(),
    };
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Rosario Interactivo",
        options,
        Box::new(move |cc| Box::new(RosaryApp::new(cc, navigator, config_display))),
    )
    .map_err(|e| RosaryError::Viewer(e.to_string()))
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let model = RosaryModel::shared();

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_viewer(model, &config),
        Command::Show { mystery, step, text } => {
            let snapshot = navigator_at(model, &config, mystery, step)?.snapshot();
            if text {
                println!("{}", render_snapshot(&snapshot));
            } else {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            }
            Ok(())
        }
        Command::Walk { mystery } => {
            let mut navigator = navigator_at(model, &config, mystery, 0)?;
            loop {
                let snapshot = navigator.snapshot();
                println!(
                    "{:>2}  bead {:>2}  {:<16} {}",
                    snapshot.current_index,
                    snapshot.highlighted_bead,
                    format!("{:?}", snapshot.phase),
                    snapshot.prayer.name
                );
                if navigator.is_last() {
                    break;
                }
                navigator.next();
            }
            Ok(())
        }
        Command::Svg { step, out } => {
            let navigator = navigator_at(model, &config, None, step)?;
            let svg = render_svg(navigator.model(), navigator.highlighted_bead());
            match out {
                Some(path) => {
                    fs::write(&path, svg).map_err(|source| RosaryError::Io { path: path.clone(), source })?;
                    log::info!("Wrote diagram to {}", path.display());
                }
                None => print!("{}", svg),
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config_from_file(&cli.config)?;
    init_logging(&config);

    run(cli, config).inspect_err(|e| log::error!("{}", e))
}
