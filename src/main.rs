mod args;
mod config;
mod reader;
mod writer;

use args::OutputMode;
use bank::{input::InputRecord, Accounts, Result};

use std::path::Path;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let input_args = args::parse_input_args()?;
    log::debug!("Parsed input args: {input_args:?}");

    let mut accounts = Accounts::new();

    process_data(&input_args.path, &mut accounts)?;

    log::debug!("Process complete. Beginning report...");

    report_to_std_out(&accounts, input_args.output)?;

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and apply every command in order, skipping rejected rows
fn process_data(input_path: &Path, accounts: &mut Accounts) -> Result {
    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputRecord>() {
        log::debug!("Parsing record into InputRecord: {record:?}");
        let input_record = match record {
            Ok(input_record) => input_record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let command = match input_record.parse_command() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = command.apply(accounts) {
            log::warn!("{e}");
        }
    }

    Ok(())
}

/// Build report from results, and write report to stdout
fn report_to_std_out(accounts: &Accounts, output: OutputMode) -> Result {
    let output = match output {
        OutputMode::Accounts => {
            let report = accounts.build_report();
            log::debug!("Successfully built reports for {} accounts", report.len());
            writer::write_rows_to_string(&report)?
        }
        OutputMode::History => {
            let report = accounts.build_history_report();
            log::debug!("Successfully built {} history rows", report.len());
            writer::write_rows_to_string(&report)?
        }
    };

    print!("{}", output);

    Ok(())
}
