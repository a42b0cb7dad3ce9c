/// Turns a display name into a safe Python identifier: lower-case, then every
/// character outside `[a-z0-9]` becomes `_`.
///
/// The mapping is deterministic but lossy: distinct display names can
/// sanitize to the same identifier ("My Agent!" and "my-agent" both become
/// `my_agent`) and no disambiguation is attempted. Idempotent: re-sanitizing
/// an already-sanitized identifier is a no-op. An empty or all-invalid input
/// yields a string of underscores, which is still a valid identifier.
pub fn sanitize_identifier(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
        .collect()
}
