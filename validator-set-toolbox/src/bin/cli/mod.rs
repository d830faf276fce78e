mod networks;
mod project;

use color_eyre::Report;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub enum Cli {
    /// Print the weighted validator set of a single network
    Project(project::Project),
    /// List every network of a snapshot with its validator count and total weight
    Networks(networks::Networks),
}

impl Cli {
    pub fn exec(self) -> Result<(), Report> {
        match self {
            Self::Project(project) => project.exec(),
            Self::Networks(networks) => networks.exec(),
        }
    }
}

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Common {
    /// Path to a json (or yaml, by extension) encoded list of stake registrations
    #[structopt(long)]
    pub snapshot: PathBuf,

    /// Output file, stdout when missing
    #[structopt(long)]
    pub output: Option<PathBuf>,
}
