// Archived report names embed the superseded report's timestamp. Which of the
// timestamp's characters are legal in a file name depends on the platform, so
// the rewrite strategy is picked once at startup instead of branching inline.
pub trait FilenameSanitizer: Send + Sync {
    /// Rewrites an extracted `DD.MM.YYYY HH:MM` timestamp into a
    /// filesystem-legal, sortable suffix.
    fn sanitize(&self, timestamp: &str) -> String;
}

// Colons are legal in POSIX file names, so only dots and the space change.
pub struct PosixSanitizer;

impl FilenameSanitizer for PosixSanitizer {
    fn sanitize(&self, timestamp: &str) -> String {
        timestamp.replace('.', "-").replace(' ', "T")
    }
}

// Windows rejects ":" in file names.
pub struct WindowsSanitizer;

impl FilenameSanitizer for WindowsSanitizer {
    fn sanitize(&self, timestamp: &str) -> String {
        timestamp
            .replace('.', "-")
            .replace(' ', "T")
            .replace(':', "-")
    }
}

pub fn platform_sanitizer() -> Box<dyn FilenameSanitizer> {
    if cfg!(windows) {
        Box::new(WindowsSanitizer)
    } else {
        Box::new(PosixSanitizer)
    }
}

/// Usernames become file name stems. Anything that could escape the report
/// directory or produce an illegal name fails the user's reconciliation
/// before a path is ever built.
pub fn is_safe_username(username: &str) -> bool {
    if username.is_empty() || username.starts_with('.') {
        return false;
    }

    username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_sanitizer_keeps_colon() {
        assert_eq!(
            PosixSanitizer.sanitize("05.03.2024 14:30"),
            "05-03-2024T14:30"
        );
    }

    #[test]
    fn test_windows_sanitizer_replaces_colon() {
        assert_eq!(
            WindowsSanitizer.sanitize("05.03.2024 14:30"),
            "05-03-2024T14-30"
        );
    }

    #[test]
    fn test_safe_usernames() {
        assert!(is_safe_username("alice"));
        assert!(is_safe_username("Bret"));
        assert!(is_safe_username("Samantha_69"));
        assert!(is_safe_username("Maxime-Nienow.2"));
    }

    #[test]
    fn test_unsafe_usernames() {
        assert!(!is_safe_username(""));
        assert!(!is_safe_username("../evil"));
        assert!(!is_safe_username("a/b"));
        assert!(!is_safe_username("a\\b"));
        assert!(!is_safe_username(".hidden"));
        assert!(!is_safe_username("name with space"));
        assert!(!is_safe_username("semi:colon"));
    }
}
