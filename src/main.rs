mod cli;
mod settings;

use std::fs;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use moveit_data::cart_script::{import_media, strip_comments};
use moveit_data::convert_levels;

use crate::cli::{Cli, Command};
use crate::settings::Settings;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Convert { input, output } => convert(cli.config.as_deref(), input, output),
        Command::StripComments { input, output } => strip(input, output),
        Command::ImportMedia {
            source,
            destination,
        } => import(source, destination),
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn read(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("unable to open {what} {}", path.display()))
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .wrap_err_with(|| format!("unable to write output file {}", path.display()))
}

fn convert(config: Option<&Path>, input: &Path, output: &Path) -> Result<()> {
    let settings = Settings::load(config).wrap_err("failed to load settings")?;
    let options = settings.levels.encode_options();
    log::debug!("encode options: {options:?}");

    let text = read(input, "source file")?;
    let conversion = convert_levels(&text, &options)
        .wrap_err_with(|| format!("malformed level set {}", input.display()))?;
    write(output, &conversion.table)?;

    log::info!(
        "wrote {} of {} levels to {}",
        conversion.included,
        conversion.parsed(),
        output.display()
    );
    Ok(())
}

fn strip(input: &Path, output: &Path) -> Result<()> {
    let script = read(input, "source file")?;
    let stripped = strip_comments(&script);
    write(output, &stripped)?;
    log::info!(
        "stripped {} down to {} bytes",
        input.display(),
        stripped.len()
    );
    Ok(())
}

fn import(source: &Path, destination: &Path) -> Result<()> {
    let source_text = read(source, "source file")?;
    let destination_text = read(destination, "destination file")?;
    let merged = import_media(&source_text, &destination_text)
        .wrap_err_with(|| format!("cannot import media from {}", source.display()))?;
    write(destination, &merged)?;
    log::info!(
        "copied media from {} into {}",
        source.display(),
        destination.display()
    );
    Ok(())
}
