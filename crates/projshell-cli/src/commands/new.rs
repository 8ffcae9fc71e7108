//! Implementation of the `projshell new` command.
//!
//! Responsibility: pick an identifier strategy, build the record through
//! `RecordService`, and display it. No domain rules live here.

use tracing::{debug, instrument};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `projshell new` command.
///
/// `--strict` and `records.validate_on_create` both switch on the opt-in
/// construction-time email check.
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let strategy = args.id_strategy.unwrap_or(config.records.id_strategy);
    let strict = args.strict || config.records.validate_on_create;
    debug!(%strategy, strict, "Building record");

    let service = super::record_service(strategy, &config.records.sequence_prefix);
    let record = if strict {
        service.create_validated(args.name, args.email)?
    } else {
        service.create(args.name, args.email)
    };

    super::print_record(output, &record)?;
    Ok(())
}
