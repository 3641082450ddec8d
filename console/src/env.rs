use mailconfig_shared::ALLOWED_EMAIL_DOMAIN;

pub const ENV_ALLOWED_DOMAIN: &str = "MAILCONFIG_ALLOWED_DOMAIN";
pub const ENV_LOG: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "mailconfig_console=info,mailconfig_shared=info";

pub fn allowed_domain() -> String {
    domain_or_default(std::env::var(ENV_ALLOWED_DOMAIN).ok())
}

pub fn log_filter() -> String {
    std::env::var(ENV_LOG).unwrap_or_else(|_| String::from(DEFAULT_LOG_FILTER))
}

fn domain_or_default(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| String::from(ALLOWED_EMAIL_DOMAIN))
}
