//! Customization args: the per-kind payload of a learner action.
//!
//! Every field is wrapped as `{ "value": T }` on the wire. Unknown fields are
//! rejected so a record for one kind can't be read as another. Durations are
//! kept as JSON numbers so they are always finite and keep their integer or
//! fractional form.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A single customization arg, serialized as `{ "value": T }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomizationArg<T> {
    pub value: T,
}

impl<T> CustomizationArg<T> {
    /// Wraps a value.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> From<T> for CustomizationArg<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Args for a learner entering the first state of an exploration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplorationStartArgs {
    pub state_name: CustomizationArg<String>,
}

/// Args for a learner submitting an answer in a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSubmitArgs {
    /// State the answer was submitted in.
    pub state_name: CustomizationArg<String>,

    /// State the learner was sent to.
    pub dest_state_name: CustomizationArg<String>,

    /// Interaction that received the answer (e.g. `TextInput`).
    pub interaction_id: CustomizationArg<String>,

    pub submitted_answer: CustomizationArg<String>,

    /// Feedback shown in response.
    pub feedback: CustomizationArg<String>,

    pub time_spent_state_in_msecs: CustomizationArg<Number>,
}

/// Args for a learner leaving an exploration before finishing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplorationQuitArgs {
    /// State the learner quit from.
    pub state_name: CustomizationArg<String>,

    pub time_spent_in_state_in_msecs: CustomizationArg<Number>,
}
