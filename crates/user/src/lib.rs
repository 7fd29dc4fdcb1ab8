mod command;
mod error;
mod query;
pub(crate) mod repository;

pub use command::{Command, LoginInput, RegisterInput, UpdateInput};
pub use error::{UserError, UserResult};
pub use repository::UserRow;
