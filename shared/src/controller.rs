use std::collections::HashSet;

use crate::{
    strength_indicator, FieldError, FieldName, FormValues, StrengthBand, StrengthScore,
    ValidationResult, ValidationSchema, ValidationState,
};

/// Receives the form values once a submit passed validation.
pub trait SubmitHandler {
    fn on_submit(&mut self, values: &FormValues);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormValues),
{
    fn on_submit(&mut self, values: &FormValues) {
        self(values);
    }
}

#[must_use]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SubmitOutcome {
    Submitted,
    /// form was invalid, the handler was not called
    Rejected,
}

/// Owns the form values and keeps validation and strength in sync with them.
///
/// Every [`FormController::set_field`] re-validates the whole form, so
/// [`FormController::is_valid`] never lags behind the displayed errors.
pub struct FormController<H> {
    schema: ValidationSchema,
    values: FormValues,
    result: ValidationResult,
    strength: StrengthScore,
    touched: HashSet<FieldName>,
    handler: H,
}

impl<H: SubmitHandler> FormController<H> {
    pub fn new(schema: ValidationSchema, handler: H) -> Self {
        let values = FormValues::default();
        let result = schema.validate(&values);
        let strength = StrengthScore::of(values.get(FieldName::Password));

        Self {
            schema,
            values,
            result,
            strength,
            touched: HashSet::new(),
            handler,
        }
    }

    pub fn with_handler(handler: H) -> Self {
        Self::new(ValidationSchema::default(), handler)
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value.into());
        self.touched.insert(field);

        self.result = self.schema.validate(&self.values);

        if field == FieldName::Password {
            self.strength = StrengthScore::of(self.values.get(FieldName::Password));
        }

        log::debug!(
            "field changed: {field} (valid form: {})",
            self.result.is_valid()
        );
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.result.is_valid() {
            log::debug!(
                "submit rejected, invalid fields: {}",
                self.result.errors().count()
            );
            return SubmitOutcome::Rejected;
        }

        log::info!("form submitted");
        self.handler.on_submit(&self.values);

        SubmitOutcome::Submitted
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub const fn result(&self) -> &ValidationResult {
        &self.result
    }

    #[must_use]
    pub const fn error(&self, field: FieldName) -> Option<FieldError> {
        self.result.error(field)
    }

    /// Per field state for display: errors of fields the user has not
    /// edited yet stay hidden.
    #[must_use]
    pub fn field_state(&self, field: FieldName) -> ValidationState<FieldError> {
        if !self.touched.contains(&field) {
            return ValidationState::Unused;
        }

        self.result
            .error(field)
            .map_or(ValidationState::Valid, ValidationState::Invalid)
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    #[must_use]
    pub const fn can_submit(&self) -> bool {
        self.is_valid()
    }

    #[must_use]
    pub const fn strength(&self) -> StrengthScore {
        self.strength
    }

    #[must_use]
    pub fn strength_indicator(&self) -> Option<StrengthBand> {
        strength_indicator(self.values.get(FieldName::Password))
    }
}
