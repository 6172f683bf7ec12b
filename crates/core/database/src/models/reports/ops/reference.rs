use beacon_models::v0::{ReportStatus, ReportStatusFilter};
use beacon_result::Result;

use crate::ReferenceDb;
use crate::Report;

use super::AbstractReports;

#[async_trait]
impl AbstractReports for ReferenceDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        let mut reports = self.reports.lock().await;
        if reports.contains_key(&report.id) {
            Err(create_store_error!("insert", "report"))
        } else {
            reports.insert(report.id.to_string(), report.clone());
            Ok(())
        }
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        let reports = self.reports.lock().await;
        reports
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(ReportNotFound))
    }

    /// Fetch all reports with the given status, most recent first
    async fn fetch_reports_by_status(&self, filter: &ReportStatusFilter) -> Result<Vec<Report>> {
        let reports = self.reports.lock().await;
        let mut reports: Vec<Report> = reports
            .values()
            .filter(|report| {
                matches!(
                    (filter, &report.status),
                    (ReportStatusFilter::Pending, ReportStatus::Pending { .. })
                        | (ReportStatusFilter::Agreed, ReportStatus::Agreed { .. })
                        | (
                            ReportStatusFilter::Disagreed,
                            ReportStatus::Disagreed { .. }
                        )
                )
            })
            .cloned()
            .collect();

        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }

    /// Transition a pending report to a new status
    async fn update_report_status(&self, id: &str, status: &ReportStatus) -> Result<()> {
        let mut reports = self.reports.lock().await;
        match reports.get_mut(id) {
            Some(report) if matches!(report.status, ReportStatus::Pending {}) => {
                report.status = status.clone();
                Ok(())
            }
            Some(_) => Err(create_error!(AlreadyResolved)),
            None => Err(create_error!(ReportNotFound)),
        }
    }
}
