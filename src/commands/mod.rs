//! Command implementations

mod config;
mod convert;
mod init;
mod publish;
mod run;

pub use config::show_config;
pub use convert::convert;
pub use init::init;
pub use publish::publish;
pub use run::run;
