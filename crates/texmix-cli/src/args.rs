//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "texmix")]
#[command(version, about = "Texture channel and normal map transforms", long_about = None)]
pub struct Args {
    /// Transform to run, by menu index or key. Starts the interactive menu when omitted
    pub transform: Option<String>,

    /// Input images, in the order the transform expects them
    pub inputs: Vec<PathBuf>,

    /// Output image path (single-output transforms)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for derived output names
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the transform catalog and exit
    #[arg(long)]
    pub list: bool,

    /// Print the catalog as JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Pick files with native dialogs
    #[arg(long)]
    pub dialog: bool,

    /// Log filter, e.g. `debug` or `texmix_core=trace`
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}
