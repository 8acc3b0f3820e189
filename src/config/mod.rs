mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{CheckConfig, Config, RulesConfig, ScannerConfig};
