pub mod config;
pub mod encoder;
pub mod keys;
pub mod locale;
pub mod logging;
pub mod paths;
pub mod platform;
pub mod reconcile;
pub mod slots;
pub mod store;
pub mod transport;
pub mod weather;

pub const BRIDGE_NAME: &str = "settings-bridge";
pub const DEBUG_NAME: &str = "BRIDGE";

/// Version tag appended to the settings form URL so the form can hide
/// options the running watchface doesn't understand yet.
pub const CONFIG_VERSION: u32 = 11;
