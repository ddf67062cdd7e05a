mod loader;
mod types;

pub use loader::ConfigLoader;
// Config types back ConfigLoader's return value and LumenConfig's public fields
#[allow(unused_imports)]
pub use types::{
    ContentSection, DEFAULT_HOST, DEFAULT_PORT, LumenConfig, ServerSection, StorageSection,
};
