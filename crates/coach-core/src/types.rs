//! Core types for goal validation
//!
//! Defines the vocabulary shared by every validator:
//! - Validation categories and goal categories
//! - The validation subject (a partially filled goal artifact)
//! - Validation results and SMART analysis
//!
//! Field names serialize in camelCase because results cross into the host
//! application's JSON API unchanged.

use crate::error::CategoryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of goal artifact being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationCategory {
    /// Long-horizon ambition
    Ambition,
    /// Measurable key result
    KeyResult,
    /// Objective with attached key results
    Okr,
    /// Short-horizon action item
    Action,
}

impl ValidationCategory {
    /// All categories, in display order
    pub const ALL: [ValidationCategory; 4] = [
        ValidationCategory::Ambition,
        ValidationCategory::KeyResult,
        ValidationCategory::Okr,
        ValidationCategory::Action,
    ];

    /// Wire tag for this category
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationCategory::Ambition => "ambition",
            ValidationCategory::KeyResult => "keyResult",
            ValidationCategory::Okr => "okr",
            ValidationCategory::Action => "action",
        }
    }
}

impl std::fmt::Display for ValidationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidationCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ambition" => Ok(ValidationCategory::Ambition),
            "keyResult" => Ok(ValidationCategory::KeyResult),
            "okr" => Ok(ValidationCategory::Okr),
            "action" => Ok(ValidationCategory::Action),
            other => Err(CategoryError::UnknownValidationCategory(other.to_string())),
        }
    }
}

/// Business domain a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Revenue and sales targets
    Revenue,
    /// Customer and audience growth
    Growth,
    /// Product development
    Product,
    /// Team building and hiring
    Team,
    /// Market positioning
    Market,
    /// Internal operations
    Operational,
    /// Personal development
    Personal,
}

impl GoalCategory {
    /// All categories, in display order
    pub const ALL: [GoalCategory; 7] = [
        GoalCategory::Revenue,
        GoalCategory::Growth,
        GoalCategory::Product,
        GoalCategory::Team,
        GoalCategory::Market,
        GoalCategory::Operational,
        GoalCategory::Personal,
    ];

    /// Wire tag for this category
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GoalCategory::Revenue => "revenue",
            GoalCategory::Growth => "growth",
            GoalCategory::Product => "product",
            GoalCategory::Team => "team",
            GoalCategory::Market => "market",
            GoalCategory::Operational => "operational",
            GoalCategory::Personal => "personal",
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revenue" => Ok(GoalCategory::Revenue),
            "growth" => Ok(GoalCategory::Growth),
            "product" => Ok(GoalCategory::Product),
            "team" => Ok(GoalCategory::Team),
            "market" => Ok(GoalCategory::Market),
            "operational" => Ok(GoalCategory::Operational),
            "personal" => Ok(GoalCategory::Personal),
            other => Err(CategoryError::UnknownGoalCategory(other.to_string())),
        }
    }
}

/// Overall tone of a free-text note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative markers
    Positive,
    /// More negative than positive markers
    Negative,
    /// Tied counts, including zero hits
    Neutral,
}

impl Sentiment {
    /// Wire tag for this sentiment
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight carried by one attached key result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildWeight {
    /// Relative weight, expected to sum to 100 across siblings
    pub weight: f64,
}

/// A goal artifact under validation
///
/// Every field is optional: subjects arrive half-written from a form, and
/// validation must always produce a result rather than reject the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationSubject {
    /// Title, or objective text for an OKR
    pub title: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Numeric target to reach
    pub target_value: Option<f64>,
    /// Current measured value
    pub current_value: Option<f64>,
    /// Unit of the target value ("€", "clients", "%")
    pub unit: Option<String>,
    /// Deadline
    pub deadline: Option<DateTime<Utc>>,
    /// Weight relative to siblings
    pub weight: Option<f64>,
    /// Attached key results (OKR subjects only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_items: Vec<ChildWeight>,
}

impl ValidationSubject {
    /// Create an empty subject
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With target value
    #[inline]
    #[must_use]
    pub fn with_target_value(mut self, target: f64) -> Self {
        self.target_value = Some(target);
        self
    }

    /// With current value
    #[inline]
    #[must_use]
    pub fn with_current_value(mut self, current: f64) -> Self {
        self.current_value = Some(current);
        self
    }

    /// With unit
    #[inline]
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// With deadline
    #[inline]
    #[must_use]
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// With weight
    #[inline]
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// With attached key-result weights
    #[inline]
    #[must_use]
    pub fn with_child_weights(mut self, weights: impl IntoIterator<Item = f64>) -> Self {
        self.child_items = weights.into_iter().map(|weight| ChildWeight { weight }).collect();
        self
    }

    /// Title text, empty when absent
    #[inline]
    #[must_use]
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Description text, empty when absent
    #[inline]
    #[must_use]
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Unit text, empty when absent
    #[inline]
    #[must_use]
    pub fn unit_text(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// Target value, with missing or NaN coerced to zero
    #[inline]
    #[must_use]
    pub fn target_value_or_zero(&self) -> f64 {
        match self.target_value {
            Some(value) if !value.is_nan() => value,
            _ => 0.0,
        }
    }

    /// Sum of attached key-result weights, with NaN entries coerced to zero
    #[inline]
    #[must_use]
    pub fn child_weight_sum(&self) -> f64 {
        self.child_items
            .iter()
            .map(|child| if child.weight.is_nan() { 0.0 } else { child.weight })
            .sum()
    }
}

/// SMART flags and score for a key result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartAnalysis {
    /// Title and description reach their minimum lengths
    pub specific: bool,
    /// Positive target value with a unit
    pub measurable: bool,
    /// Target value within the realistic ceiling
    pub achievable: bool,
    /// Always true; relevance is judged by the author, not the rubric
    pub relevant: bool,
    /// Deadline defined and not in the past
    pub time_bound: bool,
    /// Twenty points per satisfied flag (0-100)
    pub score: u8,
    /// One recommendation per unsatisfied core flag
    pub recommendations: Vec<String>,
}

/// Outcome of validating one goal artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AIValidation {
    /// Whether confidence cleared the validity threshold
    pub is_valid: bool,
    /// Remaining confidence after penalties (0-100)
    pub confidence: u8,
    /// Actionable improvement suggestions, in rubric order
    pub suggestions: Vec<String>,
    /// Risk warnings that do not affect confidence
    pub warnings: Vec<String>,
    /// Category that was validated
    pub category: ValidationCategory,
    /// Instant the validation ran
    pub validated_at: DateTime<Utc>,
}

/// Key-result validation with its SMART breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResultValidation {
    /// Shared validation outcome
    #[serde(flatten)]
    pub validation: AIValidation,
    /// Per-flag SMART breakdown
    pub smart_analysis: SmartAnalysis,
}

impl KeyResultValidation {
    /// Drop the SMART breakdown and keep the shared outcome
    #[inline]
    #[must_use]
    pub fn into_validation(self) -> AIValidation {
        self.validation
    }
}
