//! Source templates for the generated Go project.
//!
//! One module per output file. Each exposes a `render_*` function taking a
//! typed parameter record; shared names (like a tab's accessor function) come
//! from [`crate::project::TabSpec`] so templates cannot disagree on them.

pub mod entry_point;
pub mod gitignore;
pub mod tab_module;

pub use entry_point::{render_entry_point, EntryPointParams};
pub use gitignore::render_gitignore;
pub use tab_module::{render_tab_module, TabModuleParams};

/// Escape text for use inside a Go interpreted string literal.
pub(crate) fn go_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(ch),
        }
    }
    out
}

/// Flatten text onto one line so it can sit in a `//` comment. Other
/// control characters are blanked too.
pub(crate) fn go_comment(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
