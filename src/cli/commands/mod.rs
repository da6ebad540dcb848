mod command_result;
pub mod localize;

pub use command_result::*;
