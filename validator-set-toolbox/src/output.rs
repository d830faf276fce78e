use crate::projection::{NetworkSummary, NetworkValidators};
use crate::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_ref() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(Error::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Opens `path` for writing, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, Error> {
    Ok(match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    })
}

// Headers are written by hand so an empty report still carries them.
fn headerless_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer)
}

pub fn write_validators<W: Write>(
    writer: W,
    validators: &NetworkValidators,
    format: OutputFormat,
) -> Result<(), Error> {
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = headerless_writer(writer);
            csv_writer.write_record(["node_id", "weight"])?;
            for record in &validators.validators {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, validators)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn write_summaries<W: Write>(writer: W, summaries: &[NetworkSummary]) -> Result<(), Error> {
    let mut csv_writer = headerless_writer(writer);
    csv_writer.write_record(["network_id", "validators", "total_weight"])?;
    for summary in summaries {
        csv_writer.serialize(summary)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ValidatorWeight;
    use validator_set_lib::{Id, NodeId, PRIMARY_NETWORK_ID};

    fn validators() -> NetworkValidators {
        NetworkValidators {
            network_id: PRIMARY_NETWORK_ID,
            total_weight: 3,
            validators: vec![
                ValidatorWeight {
                    node_id: NodeId::new([1; 20]),
                    weight: 1,
                },
                ValidatorWeight {
                    node_id: NodeId::new([2; 20]),
                    weight: 2,
                },
            ],
        }
    }

    #[test]
    fn parse_format() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(Error::UnknownOutputFormat(_))
        ));
    }

    #[test]
    fn csv_rows() {
        let mut buffer = Vec::new();
        write_validators(&mut buffer, &validators(), OutputFormat::Csv).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "node_id,weight\n\
             0x0101010101010101010101010101010101010101,1\n\
             0x0202020202020202020202020202020202020202,2\n"
        );
    }

    #[test]
    fn empty_projection_keeps_header() {
        let empty = NetworkValidators {
            network_id: Id::new([7; 32]),
            total_weight: 0,
            validators: Vec::new(),
        };
        let mut buffer = Vec::new();
        write_validators(&mut buffer, &empty, OutputFormat::Csv).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "node_id,weight\n");

        let mut buffer = Vec::new();
        write_summaries(&mut buffer, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "network_id,validators,total_weight\n"
        );
    }

    #[test]
    fn json_document() {
        let mut buffer = Vec::new();
        write_validators(&mut buffer, &validators(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total_weight"], 3);
        assert_eq!(value["network_id"], PRIMARY_NETWORK_ID.to_string());
        assert_eq!(value["validators"][1]["weight"], 2);
    }

    #[test]
    fn summary_rows() {
        let mut buffer = Vec::new();
        write_summaries(
            &mut buffer,
            &[NetworkSummary {
                network_id: Id::new([9; 32]),
                validators: 2,
                total_weight: 20,
            }],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "network_id,validators,total_weight\n\
             0x0909090909090909090909090909090909090909090909090909090909090909,2,20\n"
        );
    }
}
