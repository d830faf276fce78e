use super::Common;
use color_eyre::Report;
use structopt::StructOpt;
use validator_set_lib::Id;
use validator_set_toolbox::output::{open_output, write_validators, OutputFormat};
use validator_set_toolbox::parse_network_id;
use validator_set_toolbox::projection::NetworkValidators;
use validator_set_toolbox::snapshot::load_stakers;

#[derive(StructOpt)]
#[structopt(rename_all = "kebab-case")]
pub struct Project {
    #[structopt(flatten)]
    common: Common,

    /// Network to project: `primary` or a hex encoded subnet id
    #[structopt(long, default_value = "primary", parse(try_from_str = parse_network_id))]
    network: Id,

    /// Output format, csv or json
    #[structopt(long, default_value = "csv")]
    format: OutputFormat,
}

impl Project {
    pub fn exec(self) -> Result<(), Report> {
        let Project {
            common,
            network,
            format,
        } = self;

        let stakers = load_stakers(&common.snapshot)?;
        let validators = NetworkValidators::project(&stakers, network)?;
        write_validators(open_output(common.output.as_deref())?, &validators, format)?;
        Ok(())
    }
}
