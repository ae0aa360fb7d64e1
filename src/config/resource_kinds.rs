use crate::constants::ACCOUNT_LABEL_SELECTOR;
use crate::models::{ResourceKind, RuntimeVariant};

/// Workload kinds gathered for every variant
pub const GENERAL_KINDS: &[ResourceKind] = &[
    ResourceKind::describe("Configmaps"),
    ResourceKind::describe("DaemonSets"),
    ResourceKind::describe("Deployments"),
    ResourceKind::describe("Jobs"),
    ResourceKind::describe("Nodes"),
    ResourceKind::pods("Pods"),
    ResourceKind::describe("ServiceAccounts"),
    ResourceKind::describe("Services"),
    ResourceKind::describe("StatefulSets"),
];

/// Kinds specific to the pipelines runtime and on-prem installs
pub const CLASSIC_ONPREM_KINDS: &[ResourceKind] = &[
    ResourceKind::describe("CronJobs"),
    ResourceKind::storage("PersistentVolumeClaims", ACCOUNT_LABEL_SELECTOR),
    ResourceKind::storage("PersistentVolumes", ACCOUNT_LABEL_SELECTOR),
    ResourceKind::describe("Storageclass"),
];

/// GitOps runtime custom resources
pub const GITOPS_KINDS: &[ResourceKind] = &[
    ResourceKind::describe("Products"),
    ResourceKind::describe("PromotionFlows"),
    ResourceKind::describe("PromotionPolicies"),
    ResourceKind::describe("PromotionTemplates"),
    ResourceKind::describe("RestrictedGitSources"),
];

/// Argo CD, Rollouts, Events and Workflows custom resources
pub const ARGO_KINDS: &[ResourceKind] = &[
    ResourceKind::describe("AnalysisRuns"),
    ResourceKind::describe("AnalysisTemplates"),
    ResourceKind::describe("Applications"),
    ResourceKind::describe("ApplicationSets"),
    ResourceKind::describe("AppProjects"),
    ResourceKind::describe("EventBus"),
    ResourceKind::describe("EventSources"),
    ResourceKind::describe("Experiments"),
    ResourceKind::describe("Rollouts"),
    ResourceKind::describe("Sensors"),
];

/// Ordered kinds to collect for a variant, general kinds first.
pub fn kinds_for(variant: RuntimeVariant) -> Vec<ResourceKind> {
    let specific: &[&[ResourceKind]] = match variant {
        RuntimeVariant::GitOps => &[GITOPS_KINDS, ARGO_KINDS],
        RuntimeVariant::Pipelines | RuntimeVariant::OnPrem => &[CLASSIC_ONPREM_KINDS],
    };

    GENERAL_KINDS
        .iter()
        .chain(specific.iter().flat_map(|kinds| kinds.iter()))
        .copied()
        .collect()
}
