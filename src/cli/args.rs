//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

const AFTER_HELP: &str = "\
Aesthetics:
  cyber-neon, brutalist, organic, retro-future, editorial, minimal-luxury

Examples:
  moltron init my-app --aesthetic=cyber-neon --dark
  moltron theme --aesthetic=brutalist --output my-app/my-app/app/globals.css
  moltron seo \"Acme\" --description \"Handmade furniture\"";

/// Frontend specialist: scaffold Next.js + shadcn/ui projects with aesthetic presets
#[derive(Parser, Debug)]
#[command(name = "moltron")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize new project with shadcn/ui
    Init {
        /// Project name (directory to create)
        name: Option<String>,
        /// Aesthetic preset
        #[arg(long, value_name = "ID")]
        aesthetic: Option<String>,
        /// Use the dark theme
        #[arg(long)]
        dark: bool,
    },

    /// Generate a new component
    Component {
        /// Component name
        name: Option<String>,
    },

    /// Generate a new page
    Page {
        /// Page name
        name: Option<String>,
    },

    /// Print or inject theme CSS variables
    Theme {
        /// Aesthetic preset
        #[arg(long, value_name = "ID")]
        aesthetic: Option<String>,
        /// Use the dark theme
        #[arg(long)]
        dark: bool,
        /// Stylesheet to inject into (printed to stdout if omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print or write SEO metadata
    Seo {
        /// Project name
        name: String,
        /// Site description
        #[arg(long)]
        description: Option<String>,
        /// JSON file to write (printed to stdout if omitted)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
