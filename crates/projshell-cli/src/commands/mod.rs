//! Command handlers, one module per subcommand.

pub mod check;
pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod new;

use serde::Serialize;

use projshell_adapters::{SequenceIdGenerator, UuidV4Generator};
use projshell_core::{application::RecordService, domain::Record};

use crate::{cli::IdStrategy, output::OutputManager};

/// Build a [`RecordService`] backed by the generator `strategy` names.
pub(crate) fn record_service(strategy: IdStrategy, sequence_prefix: &str) -> RecordService {
    match strategy {
        IdStrategy::Uuid => RecordService::new(Box::new(UuidV4Generator::new())),
        IdStrategy::Sequence => {
            RecordService::new(Box::new(SequenceIdGenerator::new(sequence_prefix)))
        }
    }
}

/// JSON shape for a record plus its format-check result.
#[derive(Debug, Serialize)]
pub(crate) struct RecordView<'a> {
    #[serde(flatten)]
    pub record: &'a Record,
    pub valid_email: bool,
}

/// Print the three-line record summary, or its JSON equivalent.
pub(crate) fn print_record(output: &OutputManager, record: &Record) -> std::io::Result<()> {
    let valid_email = record.is_valid_email();
    if output.is_json() {
        return output.json(&RecordView {
            record,
            valid_email,
        });
    }
    output.field("Created record:", &record.to_string())?;
    output.field("Record ID:", record.id())?;
    output.field("Valid email:", &valid_email.to_string())
}
