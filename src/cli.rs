use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Styles};
use clap::{ArgAction, Parser, Subcommand};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::Yellow.on_default().bold())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Debug, Parser)]
#[command(version, about, long_about = None, styles = STYLES)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file; `moveit.toml` in the working directory is used if present
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a Move-it level set into a TIC-80 Lua level table
    Convert {
        /// Level set to read
        input: PathBuf,
        /// Lua table to write
        output: PathBuf,
    },
    /// Strip comments from a cartridge script, keeping its header and media
    StripComments { input: PathBuf, output: PathBuf },
    /// Copy the media section of one cartridge script into another
    ImportMedia {
        /// Script to take the media section from
        source: PathBuf,
        /// Script whose media section is replaced in place
        destination: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_takes_two_paths() {
        let cli = Cli::try_parse_from(["moveit-rs", "-vv", "convert", "levels.txt", "levels.lua"])
            .expect("parse args");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Convert { input, output } => {
                assert_eq!(input, PathBuf::from("levels.txt"));
                assert_eq!(output, PathBuf::from("levels.lua"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(Cli::try_parse_from(["moveit-rs", "convert", "levels.txt"]).is_err());
    }

    #[test]
    fn config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "moveit-rs",
            "import-media",
            "a.lua",
            "b.lua",
            "--config",
            "custom.toml",
        ])
        .expect("parse args");
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::ImportMedia { .. }));
    }
}
