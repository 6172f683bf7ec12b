use beacon_models::v0::{ReportAction, ReportStatus, ReportedContent};
use beacon_result::{ErrorType, Result};
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// User-filed report against a post or comment
    pub struct Report {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user who filed this report
        pub author_id: String,
        /// Username of the reporting user, snapshotted for display
        pub author_username: String,
        /// Content this report is filed against
        pub target: ReportedContent,
        /// Reporter-supplied reason, survives deletion of the content
        pub content: String,
        /// Status of the report
        #[serde(flatten)]
        pub status: ReportStatus,
        /// When the report was filed
        pub created_at: Timestamp,
    }
);

impl Report {
    /// File a new report
    pub async fn create(
        db: &Database,
        target: ReportedContent,
        content: String,
        author_id: String,
        author_username: String,
    ) -> Result<Report> {
        let report = Report {
            id: ulid::Ulid::new().to_string(),
            author_id,
            author_username,
            target,
            content,
            status: ReportStatus::Pending {},
            created_at: Timestamp::now_utc(),
        };

        db.insert_report(&report).await?;
        Ok(report)
    }

    /// Apply a moderator verdict to this report
    ///
    /// The status write is a compare-and-set on `Pending`, so two handlers
    /// racing on the same report serialize in the store and the loser
    /// observes `AlreadyResolved`. On `Agree` the reported content is
    /// deleted after the status write; if that deletion fails the call
    /// surfaces `PartialFailure` while the status transition stands.
    pub async fn apply(&mut self, db: &Database, action: ReportAction) -> Result<()> {
        if !matches!(self.status, ReportStatus::Pending {}) {
            return Err(create_error!(AlreadyResolved));
        }

        let status = match action {
            ReportAction::Agree => ReportStatus::Agreed {
                closed_at: Some(Timestamp::now_utc()),
            },
            ReportAction::Disagree => ReportStatus::Disagreed {
                closed_at: Some(Timestamp::now_utc()),
            },
            ReportAction::Read => ReportStatus::Read {},
        };

        db.update_report_status(&self.id, &status).await?;
        self.status = status;

        if let ReportAction::Agree = action {
            let deletion = match &self.target {
                ReportedContent::Post { id } => db.delete_post(id).await,
                ReportedContent::Comment { id, .. } => db.delete_comment(id).await,
            };

            if let Err(error) = deletion {
                // Content that is already gone counts as deleted
                if !matches!(error.error_type, ErrorType::NotFound) {
                    error!("Report {} agreed but content deletion failed.", self.id);
                    return Err(create_error!(PartialFailure {
                        report_id: self.id.clone()
                    }));
                }
            }
        }

        Ok(())
    }
}
