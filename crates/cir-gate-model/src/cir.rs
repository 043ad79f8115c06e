// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Canonical Intermediate Representation of one requirement.
///
/// Every field is required on the wire except `cir_version`, which is an
/// explicit optional and is not consulted by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cir {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cir_version: Option<String>,
    pub story_metadata: StoryMetadata,
    pub functional_requirements: Vec<AcceptanceCriterion>,
    pub state_and_external_persistence: StatePersistence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryMetadata {
    pub story_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcceptanceCriterion {
    pub ac_id: String,
    pub description: String,
    pub preconditions: Vec<String>,
    pub triggers: Vec<String>,
    pub expected_outcome: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatePersistence {
    pub externalized_state_required: bool,
    pub rules: Vec<String>,
}

impl Cir {
    #[must_use]
    pub fn new(
        story_metadata: StoryMetadata,
        functional_requirements: Vec<AcceptanceCriterion>,
        state_and_external_persistence: StatePersistence,
    ) -> Self {
        Self {
            cir_version: None,
            story_metadata,
            functional_requirements,
            state_and_external_persistence,
        }
    }

    #[must_use]
    pub fn acceptance_criteria_count(&self) -> usize {
        self.functional_requirements.len()
    }
}

impl StoryMetadata {
    #[must_use]
    pub fn new(story_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            story_id: story_id.into(),
            name: name.into(),
        }
    }
}

impl AcceptanceCriterion {
    #[must_use]
    pub fn new(ac_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            ac_id: ac_id.into(),
            description: description.into(),
            preconditions: Vec::new(),
            triggers: Vec::new(),
            expected_outcome: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_preconditions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preconditions = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_triggers<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = items.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_expected_outcome<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_outcome = items.into_iter().map(Into::into).collect();
        self
    }

    /// Preconditions, triggers and expected outcomes combined.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.preconditions.len() + self.triggers.len() + self.expected_outcome.len()
    }

    /// Description followed by every step string, in encounter order.
    pub fn text_items(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.description.as_str())
            .chain(self.preconditions.iter().map(String::as_str))
            .chain(self.triggers.iter().map(String::as_str))
            .chain(self.expected_outcome.iter().map(String::as_str))
    }
}

impl StatePersistence {
    #[must_use]
    pub fn new<I, S>(externalized_state_required: bool, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            externalized_state_required,
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn not_required() -> Self {
        Self {
            externalized_state_required: false,
            rules: Vec::new(),
        }
    }
}
