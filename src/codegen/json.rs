use std::io;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::registry::Registry;

/// One space per nesting level; downstream diffs are taken against files
/// produced with this width.
const INDENT: &[u8] = b" ";

pub fn dump<W: io::Write>(registry: &Registry, sink: &mut W) -> io::Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(sink, PrettyFormatter::with_indent(INDENT));
    registry.serialize(&mut ser).map_err(io::Error::from)
}
