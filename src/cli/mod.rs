pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "frontpage")]
#[command(about = "Today's top posts in the terminal", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/frontpage/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List today's top posts
    Top {
        /// Posts per page (defaults to the configured page size)
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Keep paging until the session limit is reached
        #[arg(short, long)]
        all: bool,

        /// Hide posts with these ids
        #[arg(long = "hide", value_name = "ID")]
        hide: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one post in detail and mark it read
    Show {
        /// Id of the post
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location and effective settings
    Config,
}
