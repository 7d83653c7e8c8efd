//! Exit code utilities and mappings

use crate::error::GhUtilsError;

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        -1 => "terminated without exit code",
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "invalid argument to exit",
        130 => "script terminated by Control-C",
        131..=255 => "terminated by signal",
        _ => "error",
    }
}

/// Map a child's exit code onto a code this process can exit with.
///
/// Success stays `0`; anything a `u8` cannot carry (negative codes from
/// signal-killed children, or Windows codes above 255) becomes `1` so a
/// failure is never reported as success.
pub fn process_exit_code(exit_code: i32) -> u8 {
    match u8::try_from(exit_code) {
        Ok(code) => code,
        Err(_) => 1,
    }
}

/// Exit code for a failed run: the exit code of the wrapped command that
/// failed a check, or `1` for every other error
pub fn exit_code_for_error(error: &anyhow::Error) -> u8 {
    error
        .chain()
        .find_map(|cause| match cause.downcast_ref::<GhUtilsError>() {
            Some(GhUtilsError::ExternalCommand { code, .. }) => {
                Some(process_exit_code(*code).max(1))
            }
            _ => None,
        })
        .unwrap_or(1)
}
