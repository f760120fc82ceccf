pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hnreader")]
#[command(about = "Renders Hacker News pages from the HNPWA API", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/hnreader/config.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Navigate through fragments and print the final page
    Render {
        /// Fragments to visit in order, e.g. "#/page/2" "#/show/8863"
        fragments: Vec<String>,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read fragments from stdin and re-render a page file after each
    Browse {
        /// Page file to keep up to date
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Open the page in the default browser after the first render
        #[arg(long)]
        open: bool,
    },
    /// Show the config file location and effective settings
    Config,
}
