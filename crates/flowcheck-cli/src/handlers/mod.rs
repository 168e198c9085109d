//! Command handlers

pub mod init;
pub mod validate;

pub use init::handle_init;
pub use validate::handle_validate;
