//! Title slugification for post URLs.

use slug::slugify;

/// Normalize a title into its base slug: lowercased, non-alphanumeric runs
/// collapsed into a single `-`, leading and trailing separators trimmed.
///
/// Returns an empty string when nothing slug-worthy survives (for example an
/// all-punctuation title); callers must treat that as a validation failure.
pub fn slugify_title(title: &str) -> String {
    slugify(title)
}

/// Candidate slug for the given collision-retry attempt. Attempt 0 is the
/// bare base slug; attempt N appends `-N`.
pub fn numbered_candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_separates() {
        assert_eq!(slugify_title("Hello World Today"), "hello-world-today");
    }

    #[test]
    fn slugify_collapses_symbol_runs() {
        assert_eq!(slugify_title("  Rust --- & Tokio!  "), "rust-tokio");
    }

    #[test]
    fn slugify_all_punctuation_is_empty() {
        assert_eq!(slugify_title("!!! ??? ..."), "");
    }

    #[test]
    fn first_candidate_has_no_suffix() {
        assert_eq!(numbered_candidate("hello-world-today", 0), "hello-world-today");
        assert_eq!(numbered_candidate("hello-world-today", 1), "hello-world-today-1");
        assert_eq!(numbered_candidate("hello-world-today", 7), "hello-world-today-7");
    }
}
