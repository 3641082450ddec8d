mod email_validation;
mod name_validation;
pub(crate) mod pwd_validation;

use thiserror::Error;

use crate::{FieldName, FormValues};

pub const ALLOWED_EMAIL_DOMAIN: &str = "gmail.com";

/// A failed rule, identified by the field and the rule that failed.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum FieldError {
    #[error("name must be at least 3 characters.")]
    NameTooShort,
    #[error("invalid email format")]
    EmailFormat,
    #[error("email must be on the allowed domain.")]
    EmailDomain,
    #[error("password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("password must include at least one uppercase letter.")]
    PasswordNoUppercase,
    #[error("password must include at least one number.")]
    PasswordNoDigit,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> FieldName {
        match self {
            Self::NameTooShort => FieldName::Name,
            Self::EmailFormat | Self::EmailDomain => FieldName::Email,
            Self::PasswordTooShort | Self::PasswordNoUppercase | Self::PasswordNoDigit => {
                FieldName::Password
            }
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValidationState<T> {
    Unused,
    Valid,
    Invalid(T),
}

impl<T> Default for ValidationState<T> {
    fn default() -> Self {
        Self::Unused
    }
}

impl<T> ValidationState<T> {
    pub const fn is_valid(&self) -> bool {
        matches!(&self, Self::Valid)
    }

    pub const fn is_invalid(&self) -> bool {
        matches!(&self, Self::Invalid(_))
    }

    pub const fn is_unused(&self) -> bool {
        matches!(&self, Self::Unused)
    }

    pub const fn error(&self) -> Option<&T> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Unused | Self::Valid => None,
        }
    }
}

/// Outcome of evaluating every field rule against one [`FormValues`] snapshot.
///
/// Only [`ValidationSchema::validate`] builds one, so a result always
/// reflects a full evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidationResult {
    name: Option<FieldError>,
    email: Option<FieldError>,
    password: Option<FieldError>,
}

impl ValidationResult {
    #[must_use]
    pub const fn error(&self, field: FieldName) -> Option<FieldError> {
        match field {
            FieldName::Name => self.name,
            FieldName::Email => self.email,
            FieldName::Password => self.password,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = (FieldName, FieldError)> + '_ {
        FieldName::all().filter_map(|field| self.error(field).map(|e| (field, e)))
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidationSchema {
    allowed_domain: String,
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::new(ALLOWED_EMAIL_DOMAIN)
    }
}

impl ValidationSchema {
    #[must_use]
    pub fn new(allowed_domain: impl Into<String>) -> Self {
        Self {
            allowed_domain: allowed_domain.into(),
        }
    }

    #[must_use]
    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }

    /// Evaluates the rule of a single field. Fields never depend on each other.
    #[must_use]
    pub fn check_field(&self, field: FieldName, values: &FormValues) -> Option<FieldError> {
        let v = values.get(field);

        match field {
            FieldName::Name => name_validation::check(v),
            FieldName::Email => email_validation::check(v, &self.allowed_domain),
            FieldName::Password => pwd_validation::check(v),
        }
    }

    #[must_use]
    pub fn validate(&self, values: &FormValues) -> ValidationResult {
        ValidationResult {
            name: self.check_field(FieldName::Name, values),
            email: self.check_field(FieldName::Email, values),
            password: self.check_field(FieldName::Password, values),
        }
    }
}
