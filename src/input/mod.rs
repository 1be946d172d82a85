//! Input for one-shot commands.

mod reader;

pub use reader::{InputError, InputReader};
