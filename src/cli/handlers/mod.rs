mod analyze;
mod init;
mod serve;
mod transform;
mod utils;
mod validate;

pub use analyze::handle_analyze;
pub use init::handle_init;
pub use serve::handle_serve;
pub use transform::handle_transform;
pub use validate::handle_validate;

use crate::config::StorycraftConfig;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: StorycraftConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: StorycraftConfig, root: PathBuf) -> Self {
        Self { config, root }
    }
}
