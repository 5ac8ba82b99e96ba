//! Core data model for learner actions.
//!
//! A learner action is one of three kinds, each with its own customization
//! args. The kind is fixed at construction; args and schema version can be
//! changed afterwards, but the schema version never drops below 1.

mod action;
mod customization;
mod record;
mod schema_version;

pub use action::{ActionCustomizationArgs, ActionCustomizationArgsMut, ActionType, LearnerAction};
pub use customization::{
    AnswerSubmitArgs, CustomizationArg, ExplorationQuitArgs, ExplorationStartArgs,
};
pub use record::LearnerActionRecord;
pub use schema_version::{LATEST_SCHEMA_VERSION, SchemaVersion};

/// Errors that can occur when building or decoding a learner action.
#[derive(Debug, thiserror::Error)]
pub enum LearnerActionError {
    #[error("given invalid schema version: {0}")]
    InvalidSchemaVersion(i64),

    #[error("record does not match any known action type ({action_type}): {record}")]
    UnknownActionType { action_type: String, record: String },

    #[error("malformed {action_type} record: {source}")]
    MalformedRecord {
        action_type: ActionType,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, LearnerActionError>;
