//! Command implementations

mod export;
mod init;
mod list;

pub use export::export;
pub use init::init;
pub use list::{list, load_definition};
