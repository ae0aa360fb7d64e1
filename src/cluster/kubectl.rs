use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::process::Command;

use crate::cluster::{ClusterQuery, QueryError};
use crate::constants::{DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_HELM, DEFAULT_KUBECTL, UNKNOWN_RESOURCE_MARKER};
use crate::models::CollectedResourceSet;

/// Runs `kubectl` and `helm` as subprocesses and captures their output.
///
/// Every invocation is bounded by `timeout`; a child that outlives it is killed.
#[derive(Debug, Clone)]
pub struct KubectlClient {
    kubectl: String,
    helm: String,
    timeout: Duration,
}

impl Default for KubectlClient {
    fn default() -> Self {
        Self::new(
            DEFAULT_KUBECTL,
            DEFAULT_HELM,
            Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS),
        )
    }
}

impl KubectlClient {
    pub fn new(kubectl: impl Into<String>, helm: impl Into<String>, timeout: Duration) -> Self {
        Self {
            kubectl: kubectl.into(),
            helm: helm.into(),
            timeout,
        }
    }

    /// Run `program` with `args` and return its stdout.
    async fn run(&self, program: &str, args: &[String]) -> Result<String, QueryError> {
        let command = format!("{} {}", program, args.join(" "));
        debug!("Running {}", command);

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?;

        // Dropping the future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| QueryError::Spawn {
                command: command.clone(),
                source,
            })?,
            Err(_) => {
                return Err(QueryError::Timeout {
                    command,
                    seconds: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            return Err(QueryError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn kubectl(&self, args: Vec<String>) -> Result<String, QueryError> {
        self.run(&self.kubectl, &args).await
    }
}

/// Arguments of `kubectl get` for a kind listing
pub fn list_args(kind: &str, namespace: &str, selector: &str, json: bool) -> Vec<String> {
    let mut args = vec![
        "get".to_string(),
        kind.to_lowercase(),
        "-n".to_string(),
        namespace.to_string(),
    ];
    if !selector.is_empty() {
        args.push("-l".to_string());
        args.push(selector.to_string());
    }
    if json {
        args.push("-o".to_string());
        args.push("json".to_string());
    }
    args
}

/// Split the space separated jsonpath output of `kubectl get namespaces`
pub fn parse_namespaces(output: &str) -> Vec<String> {
    output.split_whitespace().map(str::to_string).collect()
}

/// Map a failed listing to [`QueryError::UnknownKind`] when kubectl says so.
fn classify_list_error(kind: &str, err: QueryError) -> QueryError {
    match err {
        QueryError::CommandFailed { ref stderr, .. } if stderr.contains(UNKNOWN_RESOURCE_MARKER) => {
            QueryError::UnknownKind {
                kind: kind.to_lowercase(),
            }
        }
        other => other,
    }
}

fn parse_json(command: &str, output: &str) -> Result<Value, QueryError> {
    serde_json::from_str(output).map_err(|source| QueryError::Parse {
        command: command.to_string(),
        source,
    })
}

#[async_trait]
impl ClusterQuery for KubectlClient {
    async fn namespaces(&self) -> Result<Vec<String>, QueryError> {
        let output = self
            .kubectl(vec![
                "get".into(),
                "namespaces".into(),
                "-o".into(),
                "jsonpath={.items[*].metadata.name}".into(),
            ])
            .await?;
        Ok(parse_namespaces(&output))
    }

    async fn list(
        &self,
        kind: &str,
        namespace: &str,
        selector: &str,
    ) -> Result<CollectedResourceSet, QueryError> {
        let listing = self
            .kubectl(list_args(kind, namespace, selector, false))
            .await
            .map_err(|e| classify_list_error(kind, e))?;

        let json_args = list_args(kind, namespace, selector, true);
        let raw = self
            .kubectl(json_args.clone())
            .await
            .map_err(|e| classify_list_error(kind, e))?;
        let json = parse_json(&format!("{} {}", self.kubectl, json_args.join(" ")), &raw)?;

        Ok(CollectedResourceSet { listing, json })
    }

    async fn describe(&self, kind: &str, namespace: &str, name: &str) -> Result<String, QueryError> {
        self.kubectl(vec![
            "describe".into(),
            kind.to_lowercase(),
            "-n".into(),
            namespace.into(),
            name.into(),
        ])
        .await
    }

    async fn logs(&self, namespace: &str, pod: &str, container: &str) -> Result<String, QueryError> {
        self.kubectl(vec![
            "logs".into(),
            "-n".into(),
            namespace.into(),
            pod.into(),
            "-c".into(),
            container.into(),
            "--timestamps=true".into(),
        ])
        .await
    }

    async fn events(&self, namespace: &str) -> Result<String, QueryError> {
        self.kubectl(vec![
            "get".into(),
            "events".into(),
            "-n".into(),
            namespace.into(),
            "--sort-by=.metadata.creationTimestamp".into(),
        ])
        .await
    }

    async fn helm_releases(&self, namespace: &str) -> Result<Value, QueryError> {
        let args: Vec<String> = vec![
            "list".into(),
            "-n".into(),
            namespace.into(),
            "-o".into(),
            "json".into(),
        ];
        let output = self.run(&self.helm, &args).await?;
        parse_json(&format!("{} {}", self.helm, args.join(" ")), &output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_args_without_selector() {
        assert_eq!(
            list_args("Pods", "codefresh", "", false),
            vec!["get", "pods", "-n", "codefresh"]
        );
    }

    #[test]
    fn test_list_args_with_selector_and_json() {
        assert_eq!(
            list_args("PersistentVolumeClaims", "cf", "io.codefresh.accountName", true),
            vec![
                "get",
                "persistentvolumeclaims",
                "-n",
                "cf",
                "-l",
                "io.codefresh.accountName",
                "-o",
                "json"
            ]
        );
    }

    #[test]
    fn test_parse_namespaces() {
        assert_eq!(
            parse_namespaces("default kube-system codefresh\n"),
            vec!["default", "kube-system", "codefresh"]
        );
        assert!(parse_namespaces("").is_empty());
    }

    #[test]
    fn test_classify_unknown_kind() {
        let err = QueryError::CommandFailed {
            command: "kubectl get rollouts -n cf".into(),
            status: "exit status: 1".into(),
            stderr: "error: the server doesn't have a resource type \"rollouts\"".into(),
        };
        let classified = classify_list_error("Rollouts", err);
        assert!(classified.is_unknown_kind());
        assert_eq!(
            classified.to_string(),
            "the server doesn't have a resource type \"rollouts\""
        );
    }

    #[test]
    fn test_classify_keeps_other_failures() {
        let err = QueryError::CommandFailed {
            command: "kubectl get pods -n cf".into(),
            status: "exit status: 1".into(),
            stderr: "Unable to connect to the server".into(),
        };
        assert!(!classify_list_error("Pods", err).is_unknown_kind());
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let client = KubectlClient::new(
            "cf-support-test-no-such-kubectl",
            "cf-support-test-no-such-helm",
            Duration::from_secs(5),
        );

        let err = client.events("codefresh").await.unwrap_err();
        assert!(matches!(err, QueryError::Spawn { .. }));

        let err = client.helm_releases("codefresh").await.unwrap_err();
        assert!(matches!(err, QueryError::Spawn { .. }));
    }
}
