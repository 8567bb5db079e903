// src/output/paths.rs
//! Pure functions for path calculations and filename generation.
//!
//! This module handles all path-related operations without
//! performing any I/O operations.

use crate::constants::MAX_FILENAME_LENGTH;
use std::path::{Path, PathBuf};

/// Sanitizes a string to be safe for use as a filename.
pub fn sanitize_filename(name: &str) -> String {
    let mut safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();

    safe_name = safe_name.trim().trim_matches('.').to_string();

    if safe_name.chars().count() > MAX_FILENAME_LENGTH {
        safe_name = safe_name.chars().take(MAX_FILENAME_LENGTH).collect();
    }

    if safe_name.is_empty() {
        safe_name = "unnamed".to_string();
    }

    safe_name
}

/// Output file for `input` inside `output_dir`, named after the input stem.
pub fn output_path_for(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", sanitize_filename(&stem), extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Ruy/Lopez"), "Ruy_Lopez");
        assert_eq!(sanitize_filename("Game:1*Final"), "Game_1_Final");
        assert_eq!(sanitize_filename("   spaces   "), "spaces");
        assert_eq!(sanitize_filename("...dots..."), "dots");
        assert_eq!(sanitize_filename(""), "unnamed");
    }

    #[test]
    fn long_names_are_truncated_on_char_boundaries() {
        let name = "é".repeat(150);
        assert_eq!(sanitize_filename(&name).chars().count(), MAX_FILENAME_LENGTH);
    }

    #[test]
    fn output_path_uses_input_stem() {
        let path = output_path_for(Path::new("games/najdorf.json"), Path::new("out"), "html");
        assert_eq!(path, Path::new("out/najdorf.html"));

        let path = output_path_for(Path::new(".."), Path::new("out"), "md");
        assert_eq!(path, Path::new("out/unnamed.md"));
    }
}
