use chrono::{DateTime, SubsecRound, Utc};

use crate::features::categories::models::CategoryId;
use crate::shared::constants::CATEGORY_NAME_MIN_LENGTH;
use crate::shared::validation::ValidationErrors;

pub const NAME_BLANK_MESSAGE: &str = "category validation error: name cannot be empty or blank";
pub const NAME_TOO_SHORT_MESSAGE: &str =
    "category validation error: name must have at least 3 characters";

/// Timestamps are kept at microsecond precision, the resolution of `TIMESTAMPTZ`
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A catalog category.
///
/// `is_active` and `deleted_at` move together: an active category has no
/// `deleted_at`, an inactive one carries the time it was deactivated. Only
/// [`Category::activate`] and [`Category::deactivate`] change either field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Build a new category with a fresh id.
    ///
    /// Structural rules are not checked here, call [`Category::validate`].
    pub fn new(name: impl Into<String>, description: impl Into<String>, is_active: bool) -> Self {
        let now = now();

        Self {
            id: CategoryId::new(),
            name: name.into(),
            description: description.into(),
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// Rehydrate a category from stored state
    pub fn from_parts(
        id: CategoryId,
        name: String,
        description: String,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Check every rule and report all violations at once.
    ///
    /// A blank name breaks both the blank rule and the length rule, so it
    /// yields two violations.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = self.name.trim();

        if name.is_empty() {
            errors.push(NAME_BLANK_MESSAGE);
        }

        if name.chars().count() < CATEGORY_NAME_MIN_LENGTH {
            errors.push(NAME_TOO_SHORT_MESSAGE);
        }

        errors.into_result()
    }

    pub fn activate(&mut self) {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = now();
    }

    /// Mark inactive. An existing `deleted_at` is kept.
    pub fn deactivate(&mut self) {
        let now = now();

        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.is_active = false;
        self.updated_at = now;
    }

    /// Replace the editable fields. Callers validate afterwards.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.into();
        self.description = description.into();
        self.updated_at = now();
    }
}
