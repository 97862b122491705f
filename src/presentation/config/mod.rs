mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    FetchSettings, LoggingSettings, RenderingSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings,
};
