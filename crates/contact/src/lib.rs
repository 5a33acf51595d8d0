mod command;
mod error;
mod notifier;
mod submission;

pub use command::*;
pub use error::*;
pub use notifier::*;
pub use submission::*;
