pub mod branch;
pub mod log;
pub mod status;
pub mod version;

pub use branch::handle_branch;
pub use log::handle_log;
pub use status::handle_status;
pub use version::{VersionInfo, handle_version};
