use email_address::{EmailAddress, Options};

use super::FieldError;

/// Format is checked first, the domain restriction only applies to
/// well-formed addresses. Only a bare `local@domain` is accepted, no
/// display name.
pub fn check(v: &str, allowed_domain: &str) -> Option<FieldError> {
    let options = Options::default().without_display_text();

    let Ok(address) = EmailAddress::parse_with_options(v, options) else {
        return Some(FieldError::EmailFormat);
    };

    let domain = address.domain();

    if !domain.contains('.') {
        Some(FieldError::EmailFormat)
    } else if !domain.eq_ignore_ascii_case(allowed_domain) {
        Some(FieldError::EmailDomain)
    } else {
        None
    }
}
