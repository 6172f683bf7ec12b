use iso8601_timestamp::Timestamp;

auto_derived!(
    /// The content a report is filed against
    #[cfg_attr(feature = "serde", serde(tag = "type"))]
    pub enum ReportedContent {
        /// Report a post
        Post {
            /// ID of the post
            id: String,
        },
        /// Report a comment on a post
        Comment {
            /// ID of the post the comment belongs to
            post_id: String,
            /// ID of the comment
            id: String,
        },
    }

    /// Status of a report
    ///
    /// Flattened into the report document, tagged by `status`.
    #[cfg_attr(feature = "serde", serde(tag = "status"))]
    pub enum ReportStatus {
        /// Report is waiting for moderator action
        Pending {},

        /// Moderator agreed with the report, reported content was removed
        Agreed {
            closed_at: Option<Timestamp>,
        },

        /// Moderator disagreed with the report, content left in place
        Disagreed {
            closed_at: Option<Timestamp>,
        },

        /// Report was marked as read without a verdict
        Read {},
    }

    /// Filterable report statuses
    pub enum ReportStatusFilter {
        /// Reports waiting for moderator action
        Pending,

        /// Reports that were agreed with
        Agreed,

        /// Reports that were disagreed with
        Disagreed,
    }

    /// Moderator verdict applied to a pending report
    pub enum ReportAction {
        /// Agree with the report and remove the reported content
        Agree,

        /// Disagree with the report, leaving the content in place
        Disagree,

        /// Mark the report as read
        Read,
    }
);

impl ReportStatusFilter {
    /// Tag value this filter matches in serialized report documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatusFilter::Pending => "Pending",
            ReportStatusFilter::Agreed => "Agreed",
            ReportStatusFilter::Disagreed => "Disagreed",
        }
    }
}

impl std::str::FromStr for ReportStatusFilter {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pending" => Ok(ReportStatusFilter::Pending),
            "agreed" => Ok(ReportStatusFilter::Agreed),
            "disagreed" => Ok(ReportStatusFilter::Disagreed),
            _ => Err(()),
        }
    }
}

impl std::str::FromStr for ReportAction {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "agree" => Ok(ReportAction::Agree),
            "disagree" => Ok(ReportAction::Disagree),
            "read" => Ok(ReportAction::Read),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_filter() {
        assert_eq!("pending".parse(), Ok(ReportStatusFilter::Pending));
        assert_eq!("Agreed".parse(), Ok(ReportStatusFilter::Agreed));
        assert_eq!("DISAGREED".parse(), Ok(ReportStatusFilter::Disagreed));

        // `read` is not a filterable status
        assert_eq!("read".parse::<ReportStatusFilter>(), Err(()));
        assert_eq!("resolved".parse::<ReportStatusFilter>(), Err(()));
        assert_eq!("".parse::<ReportStatusFilter>(), Err(()));
    }

    #[test]
    fn parse_action() {
        assert_eq!("agree".parse(), Ok(ReportAction::Agree));
        assert_eq!("Disagree".parse(), Ok(ReportAction::Disagree));
        assert_eq!("READ".parse(), Ok(ReportAction::Read));

        assert_eq!("bogus-action".parse::<ReportAction>(), Err(()));
        assert_eq!("".parse::<ReportAction>(), Err(()));
    }
}
