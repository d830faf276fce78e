pub mod output;
pub mod projection;
pub mod snapshot;

use validator_set_lib::{Id, PRIMARY_NETWORK_ID};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    ValidatorSet(#[from] validator_set_lib::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Unknown output format {0}, expected csv or json")]
    UnknownOutputFormat(String),
}

/// Parses a network id given on the command line: either `primary` or a hex
/// encoded subnet id.
pub fn parse_network_id(s: &str) -> Result<Id, validator_set_lib::Error> {
    if s.eq_ignore_ascii_case("primary") {
        Ok(PRIMARY_NETWORK_ID)
    } else {
        s.parse()
    }
}
