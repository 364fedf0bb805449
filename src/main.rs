mod app;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use harmonia::config;
use harmonia::{ExportFormat, HarmonyType, PaletteEngine};

#[derive(Debug, Parser)]
#[command(name = "harmonia", version, about = "Color-harmony palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive palette editor (default).
    Tui,
    /// Print a harmony palette derived from a base color.
    Generate {
        /// Base color, e.g. "#3366CC".
        #[arg(long)]
        base: Option<String>,
        /// monochromatic, analogous, complementary, triadic, split-complementary, tetradic.
        #[arg(long, value_parser = parse_harmony)]
        harmony: Option<HarmonyType>,
        /// Number of colors (1-10).
        #[arg(long)]
        count: Option<usize>,
        /// text, css or json.
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,
    },
    /// Print a palette of independent random colors.
    Random {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, value_parser = parse_format)]
        format: Option<ExportFormat>,
    },
    /// Print the overlay text color (#000000 or #FFFFFF) for a background.
    Contrast {
        hex: String,
    },
}

fn parse_harmony(s: &str) -> Result<HarmonyType, String> {
    s.parse().map_err(|e: harmonia::PaletteError| e.to_string())
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    s.parse().map_err(|e: harmonia::PaletteError| e.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut app = app::App::new(cfg.clone(), cfg_path)?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate {
            base,
            harmony,
            count,
            format,
        } => {
            let base = base.unwrap_or_else(|| cfg.palette.base.clone());
            let harmony = harmony.unwrap_or_else(|| cfg.palette.harmony());
            let count = count.unwrap_or(cfg.palette.count);

            let engine = PaletteEngine::new(&base, harmony, count)
                .with_context(|| format!("generate {harmony} palette from {base}"))?;
            print_palette(&engine, format.unwrap_or(cfg.export.format))?;
        }
        Command::Random { count, format } => {
            let count = count.unwrap_or(cfg.palette.count);
            let mut engine = PaletteEngine::new(&cfg.palette.base, HarmonyType::Random, count)
                .context("build palette")?;
            engine.randomize();
            print_palette(&engine, format.unwrap_or(cfg.export.format))?;
        }
        Command::Contrast { hex } => {
            let text = harmonia::contrast_text_color(&hex).with_context(|| format!("contrast for {hex}"))?;
            println!("{text}");
        }
    }

    Ok(())
}

fn print_palette(engine: &PaletteEngine, format: ExportFormat) -> anyhow::Result<()> {
    let out = format.render(engine.palette()).context("render palette")?;
    println!("{out}");
    Ok(())
}
