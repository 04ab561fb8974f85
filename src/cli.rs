use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "apod")]
#[command(about = "Browse NASA's Astronomy Picture of the Day in the terminal", long_about = None)]
pub struct Cli {
    /// Theme name or path to a TOML theme file
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Force dark mode (overrides auto-detection)
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Force light mode (overrides auto-detection)
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Custom config directory (default: ~/.config/apod)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// api.nasa.gov key (overrides the settings file)
    #[arg(long, value_name = "KEY", env = "APOD_API_KEY")]
    pub api_key: Option<String>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage themes
    Theme(ThemeArgs),
    /// Manage the stored api.nasa.gov key
    Key(KeyArgs),
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub command: KeyCommands,
}

#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Store a key in the settings file
    Set {
        /// Key issued by api.nasa.gov
        key: String,
    },
    /// Show which key will be used
    Show,
    /// Remove the stored key, falling back to the demo key
    Clear,
}

#[derive(Args, Debug)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommands,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// List available themes
    List {
        /// Show detailed information about each theme
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show a theme's configuration
    Show {
        /// Theme name to show
        name: String,

        /// Output format (toml or json)
        #[arg(short, long, default_value = "toml")]
        format: OutputFormat,
    },
    /// Show path where custom themes can be placed
    Path,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {s}. Use 'toml' or 'json'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["apod", "--dark", "--api-key", "abc", "-v"]).unwrap();
        assert!(cli.dark);
        assert!(cli.verbose);
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn dark_and_light_conflict() {
        assert!(Cli::try_parse_from(["apod", "--dark", "--light"]).is_err());
    }

    #[test]
    fn parses_key_set() {
        let cli = Cli::try_parse_from(["apod", "key", "set", "secret"]).unwrap();
        match cli.command {
            Some(Commands::Key(KeyArgs {
                command: KeyCommands::Set { key },
            })) => assert_eq!(key, "secret"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_theme_show_format() {
        let cli = Cli::try_parse_from(["apod", "theme", "show", "nord", "-f", "json"]).unwrap();
        match cli.command {
            Some(Commands::Theme(ThemeArgs {
                command: ThemeCommands::Show { name, format },
            })) => {
                assert_eq!(name, "nord");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
