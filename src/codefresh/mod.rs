//! Codefresh platform API access.

use serde_json::Value;

/// REST client
pub mod client;

pub use client::{ApiError, PlatformClient};

/// Names of the runtimes in a runtime-environment listing, in listing order
pub fn runtime_names(runtimes: &Value) -> Vec<String> {
    runtimes
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|rt| rt.pointer("/metadata/name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Namespace a pipelines runtime schedules its builds into
pub fn runtime_namespace(runtime: &Value) -> Option<&str> {
    runtime
        .pointer("/runtimeScheduler/cluster/namespace")
        .and_then(Value::as_str)
        .filter(|ns| !ns.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_runtime_names() {
        let list = json!([
            {"metadata": {"name": "prod/cf-runner"}},
            {"metadata": {}},
            {"metadata": {"name": "dev/cf-runner"}}
        ]);
        assert_eq!(runtime_names(&list), vec!["prod/cf-runner", "dev/cf-runner"]);
        assert!(runtime_names(&json!({"error": "x"})).is_empty());
    }

    #[test]
    fn test_runtime_namespace() {
        let rt = json!({"runtimeScheduler": {"cluster": {"namespace": "cf-runner"}}});
        assert_eq!(runtime_namespace(&rt), Some("cf-runner"));
        assert_eq!(runtime_namespace(&json!({"runtimeScheduler": {}})), None);
        assert_eq!(
            runtime_namespace(&json!({"runtimeScheduler": {"cluster": {"namespace": ""}}})),
            None
        );
    }
}
