//! The fixed set of file extensions the browser treats as viewable text.
//!
//! Matching is case-sensitive and includes the leading dot, so `notes.TXT`
//! is not listed while `notes.txt` is.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Every recognized extension, dot included.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    // Plain text and configuration
    ".txt", ".md", ".markdown", ".conf", ".ini", ".cfg", ".properties",
    // Shell
    ".sh", ".bash", ".ksh", ".csh", ".zsh",
    // Programming languages
    ".c", ".h", ".cpp", ".hpp", ".cc", ".cxx", ".cs", ".java", ".py", ".rb", ".js", ".ts",
    ".php", ".pl", ".pm", ".go", ".rs", ".swift", ".lua", ".r", ".scala", ".groovy", ".kt",
    ".dart",
    // Web
    ".html", ".htm", ".css", ".scss", ".sass", ".less", ".json", ".xml", ".svg", ".jsx",
    ".tsx",
    // Data
    ".csv", ".yaml", ".yml", ".toml",
    // Documentation
    ".rst", ".adoc", ".tex", ".man",
    // Build files
    ".pro", ".cmake", ".make", ".mk", ".mak", ".gradle", ".pom",
    // Misc
    ".log", ".diff", ".patch", ".sql",
];

static EXTENSION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SUPPORTED_EXTENSIONS.iter().copied().collect());

/// Membership test for a dotted extension such as `".rs"`.
pub fn is_supported(extension: &str) -> bool {
    EXTENSION_SET.contains(extension)
}

/// Dotted extension of a file name, or an empty string if there is none.
///
/// Mirrors `Path::extension`: `.bashrc` has no extension, `archive.tar.gz`
/// has `.gz`.
pub fn dotted_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Whether a file with this name should appear in a listing.
pub fn is_supported_file_name(name: &str) -> bool {
    is_supported(&dotted_extension(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions_are_supported() {
        for ext in [".txt", ".md", ".py", ".json", ".rs", ".toml", ".sql"] {
            assert!(is_supported(ext), "{ext} should be supported");
        }
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        assert!(!is_supported(".exe"));
        assert!(!is_supported(".png"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(is_supported(".txt"));
        assert!(!is_supported(".TXT"));
        assert!(!is_supported(".Md"));
    }

    #[test]
    fn test_extension_requires_leading_dot() {
        assert!(!is_supported("txt"));
    }

    #[test]
    fn test_dotted_extension_variants() {
        assert_eq!(dotted_extension("main.rs"), ".rs");
        assert_eq!(dotted_extension("archive.tar.gz"), ".gz");
        assert_eq!(dotted_extension("Makefile"), "");
        assert_eq!(dotted_extension(".bashrc"), "");
    }

    #[test]
    fn test_file_name_check() {
        assert!(is_supported_file_name("notes.txt"));
        assert!(!is_supported_file_name("notes.TXT"));
        assert!(!is_supported_file_name("photo.jpg"));
        assert!(!is_supported_file_name("README"));
    }

    #[test]
    fn test_constant_has_no_duplicates() {
        assert_eq!(EXTENSION_SET.len(), SUPPORTED_EXTENSIONS.len());
    }
}
