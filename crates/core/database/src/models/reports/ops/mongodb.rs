use bson::{to_document, Document};
use beacon_models::v0::{ReportStatus, ReportStatusFilter};
use beacon_result::Result;
use mongodb::options::FindOptions;

use crate::MongoDb;
use crate::Report;

use super::AbstractReports;

static COL: &str = "reports";

#[async_trait]
impl AbstractReports for MongoDb {
    /// Insert a new report into the database
    async fn insert_report(&self, report: &Report) -> Result<()> {
        query!(self, insert_one, COL, &report).map(|_| ())
    }

    /// Fetch a report by its id
    async fn fetch_report(&self, id: &str) -> Result<Report> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(ReportNotFound))
    }

    /// Fetch all reports with the given status, most recent first
    async fn fetch_reports_by_status(&self, filter: &ReportStatusFilter) -> Result<Vec<Report>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "status": filter.as_str(),
            },
            FindOptions::builder()
                .sort(doc! {
                    "created_at": -1,
                })
                .build()
        )
    }

    /// Transition a pending report to a new status
    async fn update_report_status(&self, id: &str, status: &ReportStatus) -> Result<()> {
        let status = to_document(status).map_err(|_| create_store_error!("serialize", COL))?;

        let result = self
            .col::<Document>(COL)
            .update_one(
                doc! {
                    "_id": id,
                    "status": "Pending",
                },
                doc! {
                    "$set": status,
                },
            )
            .await
            .map_err(|_| create_store_error!("update_one", COL))?;

        if result.matched_count == 0 {
            // Distinguish a missing report from one already handled
            if query!(self, find_one_by_id, COL, id)?
                .map(|_: Report| ())
                .is_none()
            {
                Err(create_error!(ReportNotFound))
            } else {
                Err(create_error!(AlreadyResolved))
            }
        } else {
            Ok(())
        }
    }
}
