//! Record: the shape a learner action takes when exchanged with the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    ActionCustomizationArgs, ActionType, AnswerSubmitArgs, ExplorationQuitArgs,
    ExplorationStartArgs, LearnerAction, LearnerActionError, Result, SchemaVersion,
};

/// A learner action as stored or sent over the wire.
///
/// Tagged on `action_type`, so each record is self-describing when read back.
/// The schema version is kept raw here; it is checked when the record is
/// turned back into a [`LearnerAction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action_type")]
pub enum LearnerActionRecord {
    ExplorationStart {
        action_customization_args: ExplorationStartArgs,
        schema_version: i64,
    },

    AnswerSubmit {
        action_customization_args: AnswerSubmitArgs,
        schema_version: i64,
    },

    ExplorationQuit {
        action_customization_args: ExplorationQuitArgs,
        schema_version: i64,
    },
}

impl LearnerActionRecord {
    /// Decodes a record from a raw JSON value.
    ///
    /// The `action_type` is checked first so an unknown kind is reported as
    /// such, with the whole record attached, rather than as a shape error.
    ///
    /// # Errors
    ///
    /// Returns [`LearnerActionError::UnknownActionType`] if `action_type` is
    /// missing or not one of the known kinds, and
    /// [`LearnerActionError::MalformedRecord`] if the rest of the record does
    /// not fit that kind.
    pub fn from_value(record: Value) -> Result<Self> {
        let action_type = record
            .get("action_type")
            .and_then(Value::as_str)
            .and_then(|name| name.parse::<ActionType>().ok());

        let Some(action_type) = action_type else {
            return Err(LearnerActionError::UnknownActionType {
                action_type: record
                    .get("action_type")
                    .map_or_else(|| "<missing>".to_string(), describe_action_type),
                record: record.to_string(),
            });
        };

        serde_json::from_value(record)
            .map_err(|source| LearnerActionError::MalformedRecord { action_type, source })
    }

    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::ExplorationStart { .. } => ActionType::ExplorationStart,
            Self::AnswerSubmit { .. } => ActionType::AnswerSubmit,
            Self::ExplorationQuit { .. } => ActionType::ExplorationQuit,
        }
    }

    #[must_use]
    pub fn schema_version(&self) -> i64 {
        match self {
            Self::ExplorationStart { schema_version, .. }
            | Self::AnswerSubmit { schema_version, .. }
            | Self::ExplorationQuit { schema_version, .. } => *schema_version,
        }
    }
}

/// Strings are shown bare; anything else as JSON.
fn describe_action_type(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<LearnerAction> for LearnerActionRecord {
    fn from(action: LearnerAction) -> Self {
        let (args, schema_version) = action.into_parts();
        let schema_version = schema_version.get();
        match args {
            ActionCustomizationArgs::ExplorationStart(args) => Self::ExplorationStart {
                action_customization_args: args,
                schema_version,
            },
            ActionCustomizationArgs::AnswerSubmit(args) => Self::AnswerSubmit {
                action_customization_args: args,
                schema_version,
            },
            ActionCustomizationArgs::ExplorationQuit(args) => Self::ExplorationQuit {
                action_customization_args: args,
                schema_version,
            },
        }
    }
}

impl From<&LearnerAction> for LearnerActionRecord {
    fn from(action: &LearnerAction) -> Self {
        action.clone().into()
    }
}

impl TryFrom<LearnerActionRecord> for LearnerAction {
    type Error = LearnerActionError;

    fn try_from(record: LearnerActionRecord) -> Result<Self> {
        let (args, schema_version) = match record {
            LearnerActionRecord::ExplorationStart {
                action_customization_args,
                schema_version,
            } => (
                ActionCustomizationArgs::ExplorationStart(action_customization_args),
                schema_version,
            ),
            LearnerActionRecord::AnswerSubmit {
                action_customization_args,
                schema_version,
            } => (
                ActionCustomizationArgs::AnswerSubmit(action_customization_args),
                schema_version,
            ),
            LearnerActionRecord::ExplorationQuit {
                action_customization_args,
                schema_version,
            } => (
                ActionCustomizationArgs::ExplorationQuit(action_customization_args),
                schema_version,
            ),
        };
        Ok(Self::new(args, SchemaVersion::new(schema_version)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Number, json};

    fn sample_answer_submit() -> LearnerAction {
        LearnerAction::new(
            ActionCustomizationArgs::AnswerSubmit(AnswerSubmitArgs {
                state_name: "S1".to_string().into(),
                dest_state_name: "S2".to_string().into(),
                interaction_id: "TextInput".to_string().into(),
                submitted_answer: "42".to_string().into(),
                feedback: "Good".to_string().into(),
                time_spent_state_in_msecs: Number::from(1500).into(),
            }),
            SchemaVersion::new(2).unwrap(),
        )
    }

    #[test]
    fn record_has_backend_shape() {
        let record = LearnerActionRecord::from(&sample_answer_submit());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "action_type": "AnswerSubmit",
                "action_customization_args": {
                    "state_name": { "value": "S1" },
                    "dest_state_name": { "value": "S2" },
                    "interaction_id": { "value": "TextInput" },
                    "submitted_answer": { "value": "42" },
                    "feedback": { "value": "Good" },
                    "time_spent_state_in_msecs": { "value": 1500 },
                },
                "schema_version": 2,
            })
        );
    }

    #[test]
    fn action_serializes_through_record() {
        let action = sample_answer_submit();

        let json = serde_json::to_string(&action).unwrap();
        let back: LearnerAction = serde_json::from_str(&json).unwrap();

        assert_eq!(back, action);
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            serde_json::to_value(LearnerActionRecord::from(&action)).unwrap()
        );
    }

    #[test]
    fn deserializing_action_rejects_zero_version() {
        let result = serde_json::from_value::<LearnerAction>(json!({
            "action_type": "ExplorationStart",
            "action_customization_args": { "state_name": { "value": "Intro" } },
            "schema_version": 0,
        }));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid schema version"));
    }

    #[test]
    fn try_from_record_validates_version() {
        let record = LearnerActionRecord::ExplorationStart {
            action_customization_args: ExplorationStartArgs {
                state_name: "Intro".to_string().into(),
            },
            schema_version: -3,
        };

        let err = LearnerAction::try_from(record).unwrap_err();
        assert!(matches!(err, LearnerActionError::InvalidSchemaVersion(-3)));
    }

    #[test]
    fn from_value_reports_unknown_action_type_with_record() {
        let value = json!({
            "action_type": "Bogus",
            "action_customization_args": {},
            "schema_version": 1,
        });

        let err = LearnerActionRecord::from_value(value).unwrap_err();
        match err {
            LearnerActionError::UnknownActionType {
                action_type,
                record,
            } => {
                assert_eq!(action_type, "Bogus");
                assert!(record.contains("\"action_type\":\"Bogus\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_value_reports_missing_action_type() {
        let err = LearnerActionRecord::from_value(json!({ "schema_version": 1 })).unwrap_err();
        assert!(matches!(
            err,
            LearnerActionError::UnknownActionType { ref action_type, .. } if action_type == "<missing>"
        ));
    }

    #[test]
    fn from_value_reports_non_string_action_type() {
        let err = LearnerActionRecord::from_value(json!({ "action_type": 7 })).unwrap_err();
        assert!(matches!(
            err,
            LearnerActionError::UnknownActionType { ref action_type, .. } if action_type == "7"
        ));
    }

    #[test]
    fn from_value_reports_args_for_wrong_kind() {
        let value = json!({
            "action_type": "ExplorationStart",
            "action_customization_args": {
                "state_name": { "value": "S1" },
                "time_spent_in_state_in_msecs": { "value": 10 },
            },
            "schema_version": 1,
        });

        let err = LearnerActionRecord::from_value(value).unwrap_err();
        assert!(matches!(
            err,
            LearnerActionError::MalformedRecord {
                action_type: ActionType::ExplorationStart,
                ..
            }
        ));
    }

    #[test]
    fn from_value_rejects_fractional_version() {
        let value = json!({
            "action_type": "ExplorationStart",
            "action_customization_args": { "state_name": { "value": "S1" } },
            "schema_version": 1.5,
        });

        let err = LearnerActionRecord::from_value(value).unwrap_err();
        assert!(matches!(err, LearnerActionError::MalformedRecord { .. }));
    }

    #[test]
    fn record_accessors() {
        let record = LearnerActionRecord::from(sample_answer_submit());
        assert_eq!(record.action_type(), ActionType::AnswerSubmit);
        assert_eq!(record.schema_version(), 2);
    }
}
