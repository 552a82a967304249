//!
//! The machine-local configuration.
//!

///
/// The machine-local configuration.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LocalConfig {
    /// The name runs of this machine are recorded with.
    pub machine_name: String,
    /// The name of the experiment the commands operate on.
    #[serde(default)]
    pub active_experiment: Option<String>,
}

impl LocalConfig {
    /// The machine name used until the operator sets one.
    pub const DEFAULT_MACHINE_NAME: &'static str = "MyMachine";
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            machine_name: Self::DEFAULT_MACHINE_NAME.to_owned(),
            active_experiment: None,
        }
    }
}
