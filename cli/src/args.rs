use clap::Parser;
use ketban_core::Algorithm;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ketban")]
#[command(about = "Suggest new friends from a population of profiles")]
pub struct Args {
    /// Directory holding profiles.json and ketban.json
    #[arg(short = 'd', long, value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Profiles file (defaults to DIR/profiles.json)
    #[arg(long, value_name = "FILE")]
    pub profiles: Option<PathBuf>,

    /// Location and interest group config (defaults to DIR/ketban.json if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Your full name
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Your birth date
    #[arg(short = 'b', long)]
    pub birth_date: Option<String>,

    /// Your gender
    #[arg(short = 'g', long)]
    pub gender: Option<String>,

    /// Where you live
    #[arg(short = 'l', long)]
    pub location: Option<String>,

    /// Your profession
    #[arg(short = 'p', long)]
    pub profession: Option<String>,

    /// Your interests, separated by ';'
    #[arg(short = 'i', long)]
    pub interests: Option<String>,

    /// Your marital status
    #[arg(short = 'm', long)]
    pub marital_status: Option<String>,

    /// Number of suggestions per list
    #[arg(short = 't', long, value_name = "COUNT", default_value = "30")]
    pub limit: usize,

    /// Hop bound of the depth-first search
    #[arg(long, value_name = "HOPS", default_value = "3")]
    pub max_depth: usize,

    /// Show the per-search list of only one search [bfs, dfs]
    #[arg(short = 'a', long, value_parser = ["bfs", "dfs"])]
    pub algorithm: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - debug logging and traversal statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only the combined list and the path to the top match
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Searches whose own ranked list is printed after the combined one.
    pub fn detail_algorithms(&self) -> Vec<Algorithm> {
        match &self.algorithm {
            Some(name) => vec![Algorithm::from(name.as_str())],
            None => vec![Algorithm::Bfs, Algorithm::Dfs],
        }
    }
}
