use std::{env, panic};

use crate::{
    domain::admin_gate::{AdminGate, CodeDigest},
    infra::{config::AdminConfig, error::AppError},
};

pub const ADMIN_CODE_ENV: &str = "NOVASPHERE_ADMIN_CODE";

/// Code the prototype desktop shipped with, used when nothing is configured.
const BUILTIN_ADMIN_CODE: &str = "121524";

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 4] = ["password", "secret", "code", "token"];

/// Builds the admin gate from, in order: environment, config digest, built-in code.
pub fn resolve_admin_gate(config: &AdminConfig) -> Result<AdminGate, AppError> {
    if let Some(code) = env::var(ADMIN_CODE_ENV).ok().filter(|code| !code.is_empty()) {
        tracing::debug!(source = "env", "admin code resolved");
        return Ok(AdminGate::from_code(&code));
    }

    if let Some(digest) = config.code_sha256.as_deref() {
        tracing::debug!(source = "config", "admin code resolved");
        return Ok(AdminGate::from_digest(parse_digest(digest)?));
    }

    tracing::warn!("no admin code configured, falling back to the built-in code");
    Ok(AdminGate::from_code(BUILTIN_ADMIN_CODE))
}

pub fn parse_digest(text: &str) -> Result<CodeDigest, AppError> {
    let mut digest = [0u8; 32];
    hex::decode_to_slice(text.trim(), &mut digest).map_err(|error| {
        AppError::AdminSecretFormat {
            details: format!("expected 64 hex characters: {error}"),
        }
    })?;

    Ok(digest)
}

pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(|chunk| {
            let lowered = chunk.to_ascii_lowercase();
            let sensitive = SENSITIVE_MARKERS
                .iter()
                .any(|marker| lowered.contains(marker));
            let digits = chunk.chars().filter(char::is_ascii_digit).count();

            if sensitive || digits >= 4 {
                REDACTED
            } else {
                chunk
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps typed admin codes out of panic output.
pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        match panic_info.location() {
            Some(location) => eprintln!(
                "novasphere panic: {} at {}:{}",
                scrubbed,
                location.file(),
                location.line()
            ),
            None => eprintln!("novasphere panic: {}", scrubbed),
        }
    }));
}
