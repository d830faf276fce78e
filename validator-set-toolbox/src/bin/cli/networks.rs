use super::Common;
use color_eyre::Report;
use structopt::StructOpt;
use validator_set_toolbox::output::{open_output, write_summaries};
use validator_set_toolbox::projection::summarize;
use validator_set_toolbox::snapshot::load_stakers;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Networks {
    #[structopt(flatten)]
    common: Common,
}

impl Networks {
    pub fn exec(self) -> Result<(), Report> {
        let Networks { common } = self;

        let stakers = load_stakers(&common.snapshot)?;
        let summaries = summarize(&stakers)?;
        tracing::info!(networks = summaries.len(), "summarized networks");
        write_summaries(open_output(common.output.as_deref())?, &summaries)?;
        Ok(())
    }
}
