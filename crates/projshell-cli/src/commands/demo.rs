//! `projshell demo`: the default action.
//!
//! Builds one record from fixed inputs and prints the formatted record, its
//! identifier and the email check. Always exits 0: write failures are
//! logged and otherwise ignored.

use tracing::{info, instrument, warn};

use crate::{cli::IdStrategy, output::OutputManager};

pub const DEMO_NAME: &str = "Alice";
pub const DEMO_EMAIL: &str = "alice@example.com";

#[instrument(skip_all)]
pub fn execute(output: &OutputManager) {
    let service = super::record_service(IdStrategy::Uuid, "");
    let record = service.create(DEMO_NAME, DEMO_EMAIL);
    info!(id = record.id(), "Demo record built");

    if let Err(e) = super::print_record(output, &record) {
        warn!("Failed to write demo output: {e}");
    }
}
