//! Learner action: one recorded event in a learner's playthrough.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AnswerSubmitArgs, ExplorationQuitArgs, ExplorationStartArgs, LearnerActionError,
    LearnerActionRecord, Result, SchemaVersion,
};

/// What kind of action the learner took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    ExplorationStart,
    AnswerSubmit,
    ExplorationQuit,
}

impl ActionType {
    /// Every kind, in wire order.
    pub const ALL: [Self; 3] = [
        Self::ExplorationStart,
        Self::AnswerSubmit,
        Self::ExplorationQuit,
    ];

    /// The name used for `action_type` on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExplorationStart => "ExplorationStart",
            Self::AnswerSubmit => "AnswerSubmit",
            Self::ExplorationQuit => "ExplorationQuit",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = LearnerActionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| LearnerActionError::UnknownActionType {
                action_type: s.to_string(),
                record: Value::from(s).to_string(),
            })
    }
}

/// Customization args, keyed by action kind.
///
/// The variant is the action's type.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCustomizationArgs {
    ExplorationStart(ExplorationStartArgs),
    AnswerSubmit(AnswerSubmitArgs),
    ExplorationQuit(ExplorationQuitArgs),
}

impl ActionCustomizationArgs {
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::ExplorationStart(_) => ActionType::ExplorationStart,
            Self::AnswerSubmit(_) => ActionType::AnswerSubmit,
            Self::ExplorationQuit(_) => ActionType::ExplorationQuit,
        }
    }
}

/// Mutable access to an action's args.
///
/// Borrows the inner args only, so the action's type can't be swapped out.
#[derive(Debug)]
pub enum ActionCustomizationArgsMut<'a> {
    ExplorationStart(&'a mut ExplorationStartArgs),
    AnswerSubmit(&'a mut AnswerSubmitArgs),
    ExplorationQuit(&'a mut ExplorationQuitArgs),
}

/// A single learner action.
///
/// Serializes as a [`LearnerActionRecord`]. Deserializing re-validates the
/// schema version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "LearnerActionRecord", try_from = "LearnerActionRecord")]
pub struct LearnerAction {
    customization_args: ActionCustomizationArgs,
    schema_version: SchemaVersion,
}

impl LearnerAction {
    /// Builds an action from already-validated parts.
    #[must_use]
    pub fn new(customization_args: ActionCustomizationArgs, schema_version: SchemaVersion) -> Self {
        Self {
            customization_args,
            schema_version,
        }
    }

    #[must_use]
    pub fn action_type(&self) -> ActionType {
        self.customization_args.action_type()
    }

    #[must_use]
    pub fn customization_args(&self) -> &ActionCustomizationArgs {
        &self.customization_args
    }

    pub fn customization_args_mut(&mut self) -> ActionCustomizationArgsMut<'_> {
        match &mut self.customization_args {
            ActionCustomizationArgs::ExplorationStart(args) => {
                ActionCustomizationArgsMut::ExplorationStart(args)
            }
            ActionCustomizationArgs::AnswerSubmit(args) => {
                ActionCustomizationArgsMut::AnswerSubmit(args)
            }
            ActionCustomizationArgs::ExplorationQuit(args) => {
                ActionCustomizationArgsMut::ExplorationQuit(args)
            }
        }
    }

    #[must_use]
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    pub fn set_schema_version(&mut self, schema_version: SchemaVersion) {
        self.schema_version = schema_version;
    }

    #[must_use]
    pub fn into_parts(self) -> (ActionCustomizationArgs, SchemaVersion) {
        (self.customization_args, self.schema_version)
    }

    /// The state this action happened in. Every kind records one.
    #[must_use]
    pub fn state_name(&self) -> &str {
        match &self.customization_args {
            ActionCustomizationArgs::ExplorationStart(args) => &args.state_name.value,
            ActionCustomizationArgs::AnswerSubmit(args) => &args.state_name.value,
            ActionCustomizationArgs::ExplorationQuit(args) => &args.state_name.value,
        }
    }
}
