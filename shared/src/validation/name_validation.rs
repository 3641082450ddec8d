use super::FieldError;

const TRIMMED_MIN_LEN: usize = 3;

pub fn check(v: &str) -> Option<FieldError> {
    (v.trim().chars().count() < TRIMMED_MIN_LEN).then_some(FieldError::NameTooShort)
}
