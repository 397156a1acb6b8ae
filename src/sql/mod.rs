//! Parameterized partial-update construction: identifiers are static, values bind as parameters.

mod patch;
mod value;

pub use patch::Patch;
pub use value::SqlValue;
