// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Text placed after every code element inside a paragraph.
pub const DEFAULT_CODE_SEPARATOR: &str = " ";

/// Title given to a standalone page when the input has no usable name.
pub const DEFAULT_PAGE_TITLE: &str = "Chess document";

/// Name under which the page template is registered with the engine.
pub const PAGE_TEMPLATE_NAME: &str = "page";

/// Built-in standalone page. `body` is already escaped markup.
pub const DEFAULT_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
{{{body}}}
</body>
</html>
"#;

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Longest file stem produced for an output file.
pub const MAX_FILENAME_LENGTH: usize = 100;

/// Log file written to the system temp directory by the binary.
pub const LOG_FILE_NAME: &str = "chessdoc.log";
