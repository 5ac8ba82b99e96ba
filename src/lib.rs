//! Learner actions: typed records of what a learner did inside an exploration.
//!
//! Three kinds of action are recorded: starting an exploration, submitting an
//! answer, and quitting. Each carries a fixed set of customization args and a
//! schema version. [`LearnerActionStore`] builds actions and converts them to
//! and from the record shape exchanged with the backend:
//!
//! ```text
//! {
//!   "action_type": "AnswerSubmit",
//!   "action_customization_args": { "state_name": { "value": "Intro" }, ... },
//!   "schema_version": 1
//! }
//! ```

pub mod config;
pub mod model;
pub mod store;

pub use config::{Config, ConfigError};
pub use model::{
    ActionCustomizationArgs, ActionCustomizationArgsMut, ActionType, AnswerSubmitArgs,
    CustomizationArg, ExplorationQuitArgs, ExplorationStartArgs, LATEST_SCHEMA_VERSION,
    LearnerAction, LearnerActionError, LearnerActionRecord, SchemaVersion,
};
pub use store::LearnerActionStore;
