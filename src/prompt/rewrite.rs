//! Parent-directory rewriting of prompt text.
//!
//! The agent runs inside `<folder>/cursor-<model>`, one level below the data
//! files, so phrases that describe "this folder" are redirected to `../`.
//!
//! Each rule is a literal substring replacement applied in order to a single
//! buffer. A prompt that lacks a pattern is left untouched by that rule, and no
//! replacement text contains its own pattern, so rewriting is idempotent.

/// Ordered `(pattern, replacement)` pairs.
pub const PARENT_DIR_REWRITES: &[(&str, &str)] = &[
    (
        "You are inside a folder that already contains:",
        "IMPORTANT: All data files are in the PARENT directory (one level up).\n\
         Use paths like ../data.json, ../logo.jpg, ../image1.jpg\n\n\
         The parent directory contains:",
    ),
    (
        "- data.json (public company data)",
        "- ../data.json (public company data)",
    ),
    ("- logo image", "- ../logo.* (logo image file)"),
    ("- post images", "- ../*.jpg (post images)"),
];

/// Apply [`PARENT_DIR_REWRITES`] to `prompt`.
pub fn rewrite_for_parent_dir(prompt: &str) -> String {
    PARENT_DIR_REWRITES
        .iter()
        .fold(prompt.to_string(), |text, &(pattern, replacement)| {
            if text.contains(pattern) {
                text.replace(pattern, replacement)
            } else {
                tracing::debug!(pattern, "prompt rewrite pattern not present");
                text
            }
        })
}
