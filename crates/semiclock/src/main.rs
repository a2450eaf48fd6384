use clap::{Parser, Subcommand};
use semiclock::config::{self, Config};
use semiclock::render::{self, Format};
use semiclock_core::{ActivationMode, Fill, Gauge, Overflow};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semiclock", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Current progress; not clamped to 0..=100
    #[arg(short, long, allow_negative_numbers = true)]
    percentage: Option<f64>,

    /// Activation mode: "closest" or "range"
    #[arg(short, long)]
    mode: Option<ActivationMode>,

    /// Canvas width; height and radius are derived from it
    #[arg(short, long)]
    width: Option<f64>,

    /// Number of ticks (at least 2)
    #[arg(short, long)]
    count: Option<usize>,

    #[arg(long)]
    tick_width: Option<f64>,

    #[arg(long)]
    tick_height: Option<f64>,

    /// Color of inactive ticks
    #[arg(long)]
    fill: Option<String>,

    /// Color of active ticks
    #[arg(long)]
    active_fill: Option<String>,

    /// SVG overflow attribute: "hidden" or "visible"
    #[arg(long)]
    overflow: Option<Overflow>,

    /// Output format: svg, png or json
    #[arg(short, long, default_value_t = Format::Svg)]
    format: Format,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render the gauge (default)
    Render,
    /// Write the default config file if none exists
    Init,
}

impl Cli {
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(p) = self.percentage {
            cfg.percentage = p;
        }
        if let Some(m) = self.mode {
            cfg.mode = m;
        }
        if let Some(w) = self.width {
            cfg.canvas_width = w;
        }
        if let Some(c) = self.count {
            cfg.rectangle.count = c;
        }
        if let Some(w) = self.tick_width {
            cfg.rectangle.width = w;
        }
        if let Some(h) = self.tick_height {
            cfg.rectangle.height = h;
        }
        if let Some(f) = &self.fill {
            cfg.rectangle.colors.fill = Fill::new(f.as_str());
        }
        if let Some(f) = &self.active_fill {
            cfg.rectangle.colors.active_fill = Fill::new(f.as_str());
        }
        if self.overflow.is_some() {
            cfg.overflow = self.overflow;
        }
        cfg
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Init) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Commands::Render) | None => run_render(&cli),
    }
}

fn run_render(cli: &Cli) -> anyhow::Result<()> {
    let cfg = cli.apply(config::load_config(cli.config.as_deref())?);
    log::debug!("Resolved config: {:?}", cfg);

    let gauge = Gauge::new(cfg.gauge_options())?;
    let frame = gauge.render(cfg.percentage);

    match &cli.output {
        Some(path) => {
            let mut file = fs_err::File::create(path)?;
            render::write_frame(&frame, cli.format, &mut file)?;
            log::info!("Wrote {} to {}", cli.format, path.display());
        }
        None => {
            if cli.format == Format::Png {
                anyhow::bail!("PNG output needs --output <FILE>");
            }
            let mut stdout = std::io::stdout().lock();
            render::write_frame(&frame, cli.format, &mut stdout)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
