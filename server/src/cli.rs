//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the BorderPass server
#[derive(Parser, Debug)]
#[command(name = "borderpass")]
#[command(author, version, about = "BorderPass - travel questionnaire with a streaming AI assistant")]
#[command(long_about = r#"
BorderPass serves a travel questionnaire API and relays assistant
conversations to a hosted completion service, streaming replies back
as plain text chunks.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./borderpass.toml   Project-level config
3. ~/.config/borderpass/config.toml   Global config

Example:
  borderpass
  borderpass --port 3000 -vv
  borderpass --catalog ./questions.json
"#)]
pub struct Cli {
    /// Address to bind the HTTP listener to (overrides config)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Path to a JSON questionnaire file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Print the active questionnaire catalog as JSON and exit
    #[arg(long)]
    pub print_catalog: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
