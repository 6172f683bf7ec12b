#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

#[cfg(feature = "rocket")]
pub mod rocket;

#[cfg(feature = "okapi")]
pub mod okapi;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub enum ErrorType {
    // ? Moderation related errors
    /// Status filter is not one of the filterable report statuses
    InvalidFilter,
    /// Action is not one of agree, disagree or read
    InvalidAction,
    /// No report exists with the given id
    ReportNotFound,
    /// Report has already left the pending state
    AlreadyResolved,
    /// Report was marked agreed but the reported content was not deleted
    PartialFailure {
        report_id: String,
    },

    // ? Content related errors
    NotFound,

    // ? General errors
    /// Underlying store failed to service the operation, safe to retry
    StoreUnavailable {
        operation: String,
        collection: String,
    },
    FailedValidation {
        error: String,
    },
    InternalError,
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_store_error {
    ( $operation: expr, $collection: expr ) => {
        create_error!(StoreUnavailable {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        Ok($self.$type($collection, $($rest),+).await.unwrap())
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| create_store_error!(stringify!($type), $collection))
    };
}

#[cfg(test)]
mod tests {
    use crate::ErrorType;

    #[test]
    fn use_macro_to_construct_error() {
        let error = create_error!(AlreadyResolved);
        assert!(matches!(error.error_type, ErrorType::AlreadyResolved));
    }

    #[test]
    fn use_macro_to_construct_store_error() {
        let error = create_store_error!("find", "reports");
        assert!(matches!(
            error.error_type,
            ErrorType::StoreUnavailable { .. }
        ));
    }
}
