//! Replays a whiteboard session and prints the resulting drawing.

use clap::{ArgAction, Parser, ValueEnum};
use sketchboard_app::{App, AppConfig, AppError, SessionScript, ShortcutRegistry};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// SVG document of the final frame
    Svg,
    /// Scene as a JSON array of shapes
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, about = "Replay a whiteboard session and print the result")]
struct Cli {
    /// Session script (JSON array of steps); read from stdin when omitted
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Application config (JSON)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// List keyboard shortcuts and exit
    #[arg(long, action = ArgAction::SetTrue)]
    shortcuts: bool,
}

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.shortcuts {
        ShortcutRegistry::print_all();
        return Ok(());
    }

    run(&cli).inspect_err(|e| log::error!("{}", e))
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let script = match &cli.script {
        Some(path) => SessionScript::load(path)?,
        None => {
            let json = std::io::read_to_string(std::io::stdin()).map_err(|source| AppError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
            SessionScript::from_json(&json)?
        }
    };

    let mut app = App::new(config)?;
    app.run_script(&script)?;

    let output = match cli.format {
        OutputFormat::Svg => app.render_svg()?,
        OutputFormat::Json => app.board().scene().to_json()?,
    };
    println!("{}", output);
    Ok(())
}
