use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Concurrent directory digester.
#[derive(Clone, Parser)]
#[command(name = "treesum")]
#[command(about = "Digest every file under a directory; print sorted `<digest> <path>` lines.")]
pub struct Cli {
    /// Directory to digest. Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Worker thread count. Default: derived from available threads.
    #[arg(long, short = 'j')]
    pub workers: Option<usize>,

    /// Follow symbolic links.
    #[arg(long, short = 'f', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub follow_links: Option<bool>,

    /// Exclude patterns (glob syntax). Can specify multiple: -e pattern1 pattern2
    #[arg(long, short = 'e', num_args = 1..)]
    pub exclude: Vec<String>,

    /// Skip unreadable files instead of failing on the first one.
    #[arg(long, short = 'k', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub keep_going: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,
}
