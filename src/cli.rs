//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// avkg - Ayurveda knowledge graph
///
/// Query a knowledge graph of Ayurveda facts and diagnose elevated doshas.
#[derive(Parser, Debug)]
#[command(
    name = "avkg",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Ayurveda knowledge graph: query facts and diagnose elevated doshas",
    long_about = "Ayurveda knowledge graph: query facts and diagnose elevated doshas.\n\n\
                  avkg loads a directory of JSON files into a knowledge graph of \
                  (head, relation, tail) facts, answers queries over it, and runs \
                  a symptom-based dosha diagnosis with food suggestions.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  avkg -d ./data search --head sweet\n    \
                  avkg -d ./data objects food\n    \
                  avkg -d ./data food vata pitta\n    \
                  avkg -d ./data diagnose --symptom \"dry skin=7\"\n    \
                  avkg -d ./data stats"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory of JSON data files
    #[arg(long, short = 'd', global = true, env = "AVKG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to <data dir>/avkg.yaml)
    #[arg(long, short = 'c', global = true, env = "AVKG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search facts by head, relation and/or tail
    Search(SearchArgs),

    /// List the leaf objects of a category
    Objects(ObjectsArgs),

    /// Show food that pacifies all given doshas
    Food(FoodArgs),

    /// Rate symptoms and find elevated doshas
    Diagnose(DiagnoseArgs),

    /// Show knowledge graph statistics
    Stats,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Facts about a head:\n    avkg search --head sweet\n\n\
                  Everything that pacifies vata:\n    avkg search --relation pacifies --tail vata\n\n\
                  Scan every fact instead of using the indexes:\n    avkg search --tail vata --fuzzy")]
pub struct SearchArgs {
    /// Head entity
    #[arg(long)]
    pub head: Option<String>,

    /// Relation name
    #[arg(long, short = 'r')]
    pub relation: Option<String>,

    /// Tail entity
    #[arg(long, short = 't')]
    pub tail: Option<String>,

    /// Match by scanning all facts instead of the exact indexes
    #[arg(long)]
    pub fuzzy: bool,
}

/// Arguments for the objects command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  All food items:\n    avkg objects food\n\n\
                  All symptoms:\n    avkg objects diagnosis")]
pub struct ObjectsArgs {
    /// Category name
    pub category: String,
}

/// Arguments for the food command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Food for one dosha:\n    avkg food vata\n\n\
                  Food that pacifies both vata and pitta:\n    avkg food vata pitta")]
pub struct FoodArgs {
    /// Doshas to pacify
    #[arg(required = true, num_args = 1..)]
    pub doshas: Vec<String>,
}

/// Arguments for the diagnose command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Interactive diagnosis:\n    avkg diagnose\n\n\
                  Interactive, starting at a position:\n    avkg diagnose --position skin\n\n\
                  Non-interactive:\n    avkg diagnose --symptom \"dry skin=7\" --symptom \"cracking joints=4\"")]
pub struct DiagnoseArgs {
    /// Symptom and score as "description=score"; skips the prompts
    #[arg(long = "symptom", short = 's', value_name = "DESCRIPTION=SCORE")]
    pub symptoms: Vec<String>,

    /// Body position to rate symptoms for, instead of choosing interactively
    #[arg(long, short = 'p', conflicts_with = "symptoms")]
    pub position: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    avkg completions --shell bash > ~/.bash_completion.d/avkg\n\n\
                  Generate zsh completions:\n    avkg completions --shell zsh > ~/.zfunc/_avkg\n\n\
                  Generate fish completions:\n    avkg completions --shell fish > ~/.config/fish/completions/avkg.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
