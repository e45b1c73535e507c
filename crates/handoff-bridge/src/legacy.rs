//! Legacy string-encoded response rendering.
//!
//! Older callers branch on a `"Type: <code> Message: <message>"` string
//! instead of the structured response. The renderer exists purely for
//! compatibility with them; new callers should consume
//! [`MethodResponse`](crate::MethodResponse).

use handoff_core::OpenFileResult;

/// Render a result in the legacy wire format.
#[must_use]
pub fn render_legacy(result: &OpenFileResult) -> String {
    format!(
        "Type: {} Message: {}",
        result.status.legacy_code(),
        result.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_codes_and_messages() {
        assert_eq!(
            render_legacy(&OpenFileResult::missing_path()),
            "Type: -4 Message: the file path cannot be null"
        );
        assert_eq!(
            render_legacy(&OpenFileResult::not_found()),
            "Type: -2 Message: The file does not exist"
        );
        assert_eq!(
            render_legacy(&OpenFileResult::no_handler()),
            "Type: -1 Message: No application found to open the file."
        );
        assert_eq!(
            render_legacy(&OpenFileResult::opened()),
            "Type: 0 Message: done"
        );
    }

    #[test]
    fn denial_and_timeout_share_the_legacy_code() {
        assert!(render_legacy(&OpenFileResult::permission_denied()).starts_with("Type: -3 "));
        assert!(render_legacy(&OpenFileResult::permission_timeout()).starts_with("Type: -3 "));
    }
}
