//! C++ sources consumed by the touch UI build.
//!
//! The layouts below are matched textually by the UI build scripts. The enum
//! body separates members with `;` and the message map has no separator
//! between initializers; keep both as they are until the consumers change.

use std::io::{self, Write};

use crate::registry::Registry;

pub fn dump_enum<W: Write>(registry: &Registry, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "// Generated error code enum")?;
    writeln!(sink, "enum class Errors {{")?;
    for entry in registry.entries() {
        writeln!(sink, "\t{} = {};", entry.name, entry.code.identifier())?;
    }
    writeln!(sink, "}};")
}

/// Entries without a message are left out.
pub fn dump_message_map<W: Write>(registry: &Registry, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "// Generated error code to message mapping")?;
    writeln!(sink, "static QMap<int, QString> error_messages{{")?;
    for code in registry.codes() {
        if let Some(message) = present(code.message()) {
            writeln!(sink, "\t{{{}, \"{}\"}}", code.identifier(), escape(message))?;
        }
    }
    writeln!(sink, "}};")
}

/// Entries without a message are left out.
pub fn dump_translation_stubs<W: Write>(registry: &Registry, sink: &mut W) -> io::Result<()> {
    writeln!(sink, "// Generated translation string definitions for all defined error messages")?;
    for code in registry.codes() {
        if let Some(message) = present(code.message()) {
            writeln!(sink, "tr(\"{}\");", escape(message))?;
        }
    }
    Ok(())
}

// An empty message is as good as none for the UI.
fn present(message: Option<&str>) -> Option<&str> {
    message.filter(|m| !m.is_empty())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
