// Version module: comparison, extraction and current-version resolution

pub mod compare;
pub mod extract;
pub mod source;

pub use compare::{is_newer, strip_prefix};
pub use source::{Precedence, current_version};
