pub mod cpp;
pub mod json;

use std::fmt;
use std::io;

use crate::registry::Registry;

/// Output representations a registry can be rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// JSON object keyed by lower-cased entry name.
    Json,
    /// C++ `enum class Errors` declaration.
    Enum,
    /// C++ `QMap<int, QString>` from identifier to message.
    Messages,
    /// `tr("...")` calls for the translation string extractor.
    Ts,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Json, Format::Enum, Format::Messages, Format::Ts];

    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Enum => "enum",
            Format::Messages => "messages",
            Format::Ts => "ts",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write `registry` to `sink` in the given format.
///
/// Output is written as it is produced; a failing sink leaves whatever was
/// already written in place.
pub fn dump<W: io::Write>(registry: &Registry, format: Format, sink: &mut W) -> io::Result<()> {
    tracing::debug!(registry = registry.name(), %format, entries = registry.len(), "dumping registry");
    match format {
        Format::Json => json::dump(registry, sink),
        Format::Enum => cpp::dump_enum(registry, sink),
        Format::Messages => cpp::dump_message_map(registry, sink),
        Format::Ts => cpp::dump_translation_stubs(registry, sink),
    }
}

/// Render into memory.
pub fn render(registry: &Registry, format: Format) -> io::Result<String> {
    let mut out = Vec::new();
    dump(registry, format, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
