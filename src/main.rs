use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process;

use termslides::ColourScheme;
use termslides::core::config::{self, Overrides};
use termslides::core::content;
use termslides::core::pages::PageRef;
use termslides::core::session::Session;

#[derive(Parser)]
#[command(name = "termslides", version, about = "Text presentations in the terminal")]
struct Args {
    /// Slide document (.toml, .json or .yaml)
    content: PathBuf,

    /// Bullet point character (overrides the config file)
    #[arg(short, long)]
    bullet: Option<String>,

    /// Turn bullet points off
    #[arg(short = 'n', long, visible_alias = "nobulletpoints")]
    no_bullets: bool,

    /// Pages to show, in order: slide numbers (from 1) or "title"
    #[arg(short, long, num_args = 1..)]
    pages: Option<Vec<PageRef>>,

    /// Predefined colour scheme
    #[arg(short, long = "colour", visible_alias = "color", value_enum)]
    colour: Option<ColourScheme>,

    /// Skip the title page
    #[arg(long, visible_alias = "notitle")]
    no_title: bool,

    /// Skip the conclusion page
    #[arg(long, visible_alias = "nofinale")]
    no_conclusion: bool,

    /// Log level for ~/.termslides/termslides.log
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level);

    if let Err(e) = run(args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Everything is validated before the terminal is taken over
    let presentation = content::load(&args.content)?;
    let style = config::load_config()?;
    let overrides = Overrides {
        bullet: args.bullet,
        no_bullets: args.no_bullets,
        scheme: args.colour,
        pages: args.pages,
        no_title: args.no_title,
        no_conclusion: args.no_conclusion,
    };
    let session_config = config::resolve(&style, &overrides)?;
    let session = Session::new(presentation, session_config)?;

    termslides::tui::run(&session)?;
    Ok(())
}

/// File logger under `~/.termslides/`; stdout belongs to the presentation.
fn init_logging(level: LevelFilter) {
    let Some(dir) = config::config_dir() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(dir.join("termslides.log")) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("termslides {} starting up", env!("CARGO_PKG_VERSION"));
}
