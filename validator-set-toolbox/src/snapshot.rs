use crate::Error;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use validator_set_lib::{CurrentStakers, RawStakers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
}

impl SnapshotFormat {
    /// `.yaml` and `.yml` files are read as YAML, anything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

pub fn read_stakers<R: Read>(reader: R, format: SnapshotFormat) -> Result<CurrentStakers, Error> {
    let raw: RawStakers = match format {
        SnapshotFormat::Json => serde_json::from_reader(reader)?,
        SnapshotFormat::Yaml => serde_yaml::from_reader(reader)?,
    };
    let registrations = raw.registrations().len();
    let stakers = CurrentStakers::from_raw_stakers(raw)?;
    tracing::debug!(
        registrations,
        nodes = stakers.len(),
        "folded stake registrations"
    );
    Ok(stakers)
}

pub fn load_stakers(path: &Path) -> Result<CurrentStakers, Error> {
    let format = SnapshotFormat::from_path(path);
    let file = File::open(path)?;
    let stakers = read_stakers(BufReader::new(file), format).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "could not load staker snapshot");
        e
    })?;
    tracing::info!(
        path = %path.display(),
        nodes = stakers.len(),
        "loaded staker snapshot"
    );
    Ok(stakers)
}
