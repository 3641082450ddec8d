mod controller;
mod strength;
mod validation;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

pub use controller::{FormController, SubmitHandler, SubmitOutcome};
pub use strength::{strength_indicator, StrengthBand, StrengthScore, MAX_STRENGTH_SCORE};
pub use validation::{
    FieldError, ValidationResult, ValidationSchema, ValidationState, ALLOWED_EMAIL_DOMAIN,
};

/// Identifies one input slot of the form.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Password,
}

impl FieldName {
    /// All fields in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Current text of every field. All three are always present and start empty.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Eq, PartialEq)]
pub struct FormValues {
    name: String,
    email: String,
    password: String,
}

impl FormValues {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    pub(crate) fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
        }
    }
}
