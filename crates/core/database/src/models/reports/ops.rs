use beacon_models::v0::{ReportStatus, ReportStatusFilter};
use beacon_result::Result;

use crate::Report;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractReports: Sync + Send {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()>;

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report>;

    /// Fetch all reports with the given status, most recent first
    async fn fetch_reports_by_status(&self, filter: &ReportStatusFilter) -> Result<Vec<Report>>;

    /// Transition a pending report to a new status
    ///
    /// Compare-and-set: fails with `AlreadyResolved` if the report has
    /// already left the pending state, `ReportNotFound` if it does not
    /// exist.
    async fn update_report_status(&self, id: &str, status: &ReportStatus) -> Result<()>;
}
