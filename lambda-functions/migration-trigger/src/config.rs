use bon::Builder;
use tracing::debug;

pub const CLUSTER_NAME_VAR: &str = "CLUSTER_NAME";
pub const TASK_DEFINITION_VAR: &str = "TASK_DEF";
pub const SUBNETS_VAR: &str = "SUBNETS";

/// Values injected by the deploying stack. Read once per invocation.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Default)]
#[builder(on(String, into))]
pub struct LauncherConfig {
    pub cluster_name: String,
    pub task_definition: String,
    /// Comma-separated subnet ids, exactly as configured.
    pub subnets: String,
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
    }

    /// Missing keys resolve to an empty string, same as an empty value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();

        Self {
            cluster_name: get(CLUSTER_NAME_VAR),
            task_definition: get(TASK_DEFINITION_VAR),
            subnets: get(SUBNETS_VAR),
        }
    }

    /// Splits the subnet list on ','. No trimming and no filtering, so
    /// "" yields `[""]` and a trailing comma yields a trailing empty id.
    pub fn subnet_ids(&self) -> Vec<String> {
        let ids: Vec<String> = self.subnets.split(',').map(str::to_owned).collect();

        if ids.iter().any(String::is_empty) {
            debug!(
                subnets = %self.subnets,
                "Subnet list contains empty entries, passing them through unchanged"
            );
        }

        ids
    }
}
