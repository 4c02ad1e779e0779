mod command;
mod error;
mod input;
mod result;
mod template;
mod types;

pub use command::*;
pub use error::*;
pub use input::*;
pub use result::*;
pub use template::*;
pub use types::*;
