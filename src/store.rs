//! Builds learner actions and converts them to and from records.
//!
//! The store holds one piece of configuration, the schema version given to
//! actions created without an explicit one. It is cheap to copy; construct it
//! once at startup (usually via [`LearnerActionStore::from_config`]) and pass
//! it wherever actions are made.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::{
    ActionCustomizationArgs, AnswerSubmitArgs, ExplorationQuitArgs, ExplorationStartArgs,
    LATEST_SCHEMA_VERSION, LearnerAction, LearnerActionRecord, Result, SchemaVersion,
};

/// Factory and converter for [`LearnerAction`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LearnerActionStore {
    latest_schema_version: SchemaVersion,
}

impl Default for LearnerActionStore {
    fn default() -> Self {
        Self::new(LATEST_SCHEMA_VERSION)
    }
}

impl LearnerActionStore {
    /// Creates a store that defaults new actions to `latest_schema_version`.
    #[must_use]
    pub fn new(latest_schema_version: SchemaVersion) -> Self {
        Self {
            latest_schema_version,
        }
    }

    /// Creates a store using the configured latest schema version.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.latest_schema_version())
    }

    /// The version given to actions created without one.
    #[must_use]
    pub fn latest_schema_version(&self) -> SchemaVersion {
        self.latest_schema_version
    }

    // ── Construction ──

    /// Creates an `ExplorationStart` action.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::InvalidSchemaVersion`] if `schema_version`
    /// is given and below 1.
    ///
    /// [`LearnerActionError::InvalidSchemaVersion`]: crate::LearnerActionError::InvalidSchemaVersion
    pub fn create_exploration_start(
        &self,
        args: ExplorationStartArgs,
        schema_version: Option<i64>,
    ) -> Result<LearnerAction> {
        self.create(ActionCustomizationArgs::ExplorationStart(args), schema_version)
    }

    /// Creates an `AnswerSubmit` action.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::InvalidSchemaVersion`] if `schema_version`
    /// is given and below 1.
    ///
    /// [`LearnerActionError::InvalidSchemaVersion`]: crate::LearnerActionError::InvalidSchemaVersion
    pub fn create_answer_submit(
        &self,
        args: AnswerSubmitArgs,
        schema_version: Option<i64>,
    ) -> Result<LearnerAction> {
        self.create(ActionCustomizationArgs::AnswerSubmit(args), schema_version)
    }

    /// Creates an `ExplorationQuit` action.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::InvalidSchemaVersion`] if `schema_version`
    /// is given and below 1.
    ///
    /// [`LearnerActionError::InvalidSchemaVersion`]: crate::LearnerActionError::InvalidSchemaVersion
    pub fn create_exploration_quit(
        &self,
        args: ExplorationQuitArgs,
        schema_version: Option<i64>,
    ) -> Result<LearnerAction> {
        self.create(ActionCustomizationArgs::ExplorationQuit(args), schema_version)
    }

    /// Only `None` selects the latest version. An explicit 0 is invalid.
    fn create(
        &self,
        args: ActionCustomizationArgs,
        schema_version: Option<i64>,
    ) -> Result<LearnerAction> {
        let action_type = args.action_type();
        let schema_version = match schema_version {
            Some(v) => SchemaVersion::new(v).inspect_err(|e| {
                warn!(%action_type, error = %e, "rejected learner action");
            })?,
            None => self.latest_schema_version,
        };
        debug!(%action_type, %schema_version, "created learner action");
        Ok(LearnerAction::new(args, schema_version))
    }

    // ── Records ──

    /// Projects an action onto its record shape.
    #[must_use]
    pub fn to_record(&self, action: &LearnerAction) -> LearnerActionRecord {
        LearnerActionRecord::from(action)
    }

    /// Rebuilds an action from a raw record.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::UnknownActionType`] if the record's
    /// `action_type` isn't a known kind, [`LearnerActionError::MalformedRecord`]
    /// if its args don't fit that kind, and
    /// [`LearnerActionError::InvalidSchemaVersion`] if its version is below 1.
    ///
    /// [`LearnerActionError::UnknownActionType`]: crate::LearnerActionError::UnknownActionType
    /// [`LearnerActionError::MalformedRecord`]: crate::LearnerActionError::MalformedRecord
    /// [`LearnerActionError::InvalidSchemaVersion`]: crate::LearnerActionError::InvalidSchemaVersion
    pub fn from_record(&self, record: Value) -> Result<LearnerAction> {
        let record = LearnerActionRecord::from_value(record)
            .inspect_err(|e| warn!(error = %e, "rejected learner action record"))?;
        self.from_typed_record(record)
    }

    /// Rebuilds an action from a typed record, such as one returned by
    /// [`Self::to_record`].
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::InvalidSchemaVersion`] if the record's
    /// version is below 1.
    ///
    /// [`LearnerActionError::InvalidSchemaVersion`]: crate::LearnerActionError::InvalidSchemaVersion
    pub fn from_typed_record(&self, record: LearnerActionRecord) -> Result<LearnerAction> {
        let action = LearnerAction::try_from(record)
            .inspect_err(|e| warn!(error = %e, "rejected learner action record"))?;
        debug!(
            action_type = %action.action_type(),
            schema_version = %action.schema_version(),
            "decoded learner action"
        );
        Ok(action)
    }

    /// Parses a JSON record and rebuilds the action.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::Json`] if `json` isn't valid JSON, and
    /// otherwise the errors of [`Self::from_record`].
    ///
    /// [`LearnerActionError::Json`]: crate::LearnerActionError::Json
    pub fn from_json(&self, json: &str) -> Result<LearnerAction> {
        let record: Value = serde_json::from_str(json)?;
        self.from_record(record)
    }
}
