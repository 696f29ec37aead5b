//! Registry of printer firmware error/warning codes and the generators that
//! publish it to the UI (C++ sources), translators and support tooling (JSON).

pub mod code;
pub mod codegen;
pub mod registry;

pub use code::{Category, Code, RangeError};
pub use codegen::Format;
pub use registry::{DuplicateCodeError, Entry, Registry};
