mod args;
mod config;
mod reader;
mod writer;

use hrr::services::{RecordStore, ReviewService, SessionIdentity, TransactionLookup};
use hrr::{Result, RoleReport, RoleResolutionError};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found filepath as input arg: {:?}", input_args.input_path);

    let store = load_records(&input_args.input_path)?;
    log::debug!("Loaded {} records", store.len());

    let identity = SessionIdentity::new(input_args.current_user_id)?;
    let service = hrr::build_review_service(store, identity);

    let reports = resolve_all(&service);

    log::debug!("Process complete. Beginning report...");

    let output = writer::write_reports(&reports)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read input file and normalize every usable record into the store
fn load_records(input_path: &std::path::Path) -> Result<RecordStore> {
    let mut store = RecordStore::new();

    for record in reader::read_raw_records(input_path)? {
        log::debug!("Normalizing raw record: {record:?}");
        let record = match record.and_then(|raw| raw.normalize()) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let index = store.insert(record);
        log::debug!("Stored at index: {index}");
    }

    Ok(store)
}

/// Resolve roles for every stored record, skipping the ones the current user can't review
fn resolve_all(service: &ReviewService<RecordStore, SessionIdentity>) -> Vec<RoleReport> {
    let mut reports = vec![];

    for id in service.lookup().ids() {
        match service.report(&id) {
            Ok(report) => reports.push(report),
            Err(e) => match e.downcast_ref::<RoleResolutionError>() {
                Some(RoleResolutionError::SelfReview { .. }) => {
                    log::error!("{e}: {:?}", service.lookup().find(&id));
                }
                _ => log::warn!("{e}"),
            },
        }
    }

    reports
}
