mod dispatch;
mod types;

pub use dispatch::{DispatchContext, dispatch};
pub use types::{ActionId, Command, CommandOutcome};
