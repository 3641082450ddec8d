use super::FieldError;

const MIN_LEN: usize = 6;

type Rule = (fn(&str) -> bool, FieldError);

/// Evaluated in order, the first failing rule wins.
const RULES: [Rule; 3] = [
    (has_min_len, FieldError::PasswordTooShort),
    (has_uppercase, FieldError::PasswordNoUppercase),
    (has_digit, FieldError::PasswordNoDigit),
];

pub fn check(v: &str) -> Option<FieldError> {
    RULES
        .iter()
        .find(|(passes, _)| !passes(v))
        .map(|&(_, err)| err)
}

fn has_min_len(v: &str) -> bool {
    v.chars().count() >= MIN_LEN
}

pub fn has_uppercase(v: &str) -> bool {
    v.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(v: &str) -> bool {
    v.chars().any(|c| c.is_ascii_digit())
}
