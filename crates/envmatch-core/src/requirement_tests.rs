//! Tests for requirement matching

use crate::space::{supports_opt, IntRange, IntSpace, ListSpace, SetSpace, Supports};
use crate::{simple, EnvironmentRequirement, FeatureId, NodeDescription, NodeRequirement, PlatformId};

fn mid_core_node() -> NodeRequirement {
    NodeRequirement::new().with_core_count(IntRange::bounded(4, 8).unwrap())
}

fn node(core_count: i64) -> NodeDescription {
    NodeDescription::new().with_core_count(core_count)
}

#[test]
fn test_node_defaults() {
    let requirement = NodeRequirement::default();
    assert!(requirement.is_supported(&NodeDescription::new()));
    assert!(!requirement.is_supported(&NodeDescription::new().with_core_count(0)));
    assert!(!requirement.is_supported(&NodeDescription::new().with_memory_mb(256)));
    assert!(!requirement.is_supported(&NodeDescription::new().with_nic_count(0)));
    // GPU count is unconstrained by default.
    assert!(requirement.is_supported(&NodeDescription::new().with_gpu_count(8)));
}

#[test]
fn test_node_short_circuits_on_any_field() {
    let requirement = NodeRequirement::new()
        .with_core_count(IntRange::bounded(4, 8).unwrap())
        .with_memory_mb(IntRange::at_least(4096))
        .with_nic_count(IntSpace::Exact(2))
        .with_gpu_count(IntRange::at_least(1));

    let fit = NodeDescription::new()
        .with_core_count(6)
        .with_memory_mb(8192)
        .with_nic_count(2)
        .with_gpu_count(1);
    assert!(requirement.is_supported(&fit));

    assert!(!requirement.is_supported(&fit.clone().with_core_count(2)));
    assert!(!requirement.is_supported(&fit.clone().with_memory_mb(2048)));
    assert!(!requirement.is_supported(&fit.clone().with_nic_count(1)));
    assert!(!requirement.is_supported(&fit.clone().with_gpu_count(0)));
}

#[test]
fn test_node_features_allow_and_deny() {
    let wants_rdma =
        NodeRequirement::new().with_features(SetSpace::allow([FeatureId::rdma()]));
    let rdma_node = NodeDescription::new().with_features([FeatureId::rdma()]);
    let plain_node = NodeDescription::new();
    let extra_node =
        NodeDescription::new().with_features([FeatureId::rdma(), FeatureId::new("SRIOV")]);

    // Allow mode: every candidate feature must be permitted.
    assert!(wants_rdma.is_supported(&rdma_node));
    assert!(wants_rdma.is_supported(&plain_node));
    assert!(!wants_rdma.is_supported(&extra_node));

    let rejects_rdma =
        NodeRequirement::new().with_features(SetSpace::deny([FeatureId::rdma()]));
    assert!(!rejects_rdma.is_supported(&rdma_node));
    assert!(rejects_rdma.is_supported(&plain_node));

    // Absent feature space supports any feature set.
    assert!(NodeRequirement::new().is_supported(&extra_node));
}

#[test]
fn test_one_candidate_against_one_item_spaces() {
    let min_1 = ListSpace::new(IntRange::at_least(1), vec![mid_core_node()]);
    let max_1 = ListSpace::new(IntRange::at_most(1).unwrap(), vec![mid_core_node()]);
    let exact_1 = ListSpace::new(IntSpace::Exact(1), vec![mid_core_node()]);
    let exact_any_1: ListSpace<NodeRequirement> = ListSpace::counted(IntSpace::Exact(1));

    let one_in = vec![node(6)];
    // Exceeding a requirement is still supported.
    let one_more = vec![node(6).with_gpu_count(2)];
    let one_out = vec![node(10)];

    assert!(min_1.is_supported(&one_in));
    assert!(min_1.is_supported(&one_more));
    assert!(!min_1.is_supported(&one_out));

    assert!(max_1.is_supported(&one_in));
    assert!(max_1.is_supported(&one_more));
    assert!(!max_1.is_supported(&one_out));

    assert!(exact_1.is_supported(&one_in));
    assert!(exact_1.is_supported(&one_more));
    assert!(!exact_1.is_supported(&one_out));

    assert!(exact_any_1.is_supported(&one_in));
    assert!(exact_any_1.is_supported(&one_more));
    assert!(exact_any_1.is_supported(&one_out));
}

#[test]
fn test_two_candidates_against_one_item_spaces() {
    let min_1 = ListSpace::new(IntRange::at_least(1), vec![mid_core_node()]);
    let max_1 = ListSpace::new(IntRange::at_most(1).unwrap(), vec![mid_core_node()]);
    let exact_1 = ListSpace::new(IntSpace::Exact(1), vec![mid_core_node()]);
    let exact_any_1: ListSpace<NodeRequirement> = ListSpace::counted(IntSpace::Exact(1));

    let two_in = vec![node(6), node(6)];
    let two_out = vec![node(6), node(10)];

    // The single item broadcasts over both nodes.
    assert!(min_1.is_supported(&two_in));
    assert!(!min_1.is_supported(&two_out));

    // Cardinality rejects two nodes regardless of per-node fit.
    assert!(!max_1.is_supported(&two_in));
    assert!(!max_1.is_supported(&two_out));

    assert!(!exact_1.is_supported(&two_in));
    assert!(!exact_1.is_supported(&two_out));

    assert!(!exact_any_1.is_supported(&two_in));
    assert!(!exact_any_1.is_supported(&two_out));
}

#[test]
fn test_positional_node_matching() {
    let client_server = ListSpace::new(
        IntSpace::Unconstrained,
        vec![
            mid_core_node(),
            NodeRequirement::new().with_core_count(IntRange::at_least(16)),
        ],
    );

    assert!(client_server.is_supported(&[node(6), node(16)]));
    assert!(!client_server.is_supported(&[node(16), node(6)]));
    assert!(!client_server.is_supported(&[node(6)]));
    assert!(!client_server.is_supported(&[node(6), node(16), node(16)]));
}

#[test]
fn test_environment_default_wants_one_default_node() {
    let environment = EnvironmentRequirement::default();
    assert!(environment.is_supported([NodeDescription::new()].as_slice()));
    assert!(environment.is_supported([NodeDescription::new(), NodeDescription::new()].as_slice()));
    assert!(!environment.is_supported([].as_slice()));
    assert!(!environment.is_supported([NodeDescription::new().with_memory_mb(256)].as_slice()));
}

#[test]
fn test_supports_opt_treats_absent_space_as_supported() {
    let denied = SetSpace::deny(["aa", "bb"]);
    let allowed = SetSpace::allow(["aa", "bb"]);

    assert!(supports_opt(None::<&SetSpace<&str>>, &"aa"));
    assert!(supports_opt(Some(&allowed), &"aa"));
    assert!(!supports_opt(Some(&denied), &"aa"));
}

#[test]
fn test_simple_without_shape() {
    let any_one = simple(1, None, None);

    assert!(any_one.supports_environment(&[node(6)]));
    assert!(any_one.supports_environment(&[node(10)]));
    assert!(any_one.supports_environment(&[node(6), node(10)]));
    assert!(!any_one.supports_environment(&[]));
}

#[test]
fn test_simple_with_shape() {
    let shaped_one = simple(1, Some(mid_core_node()), None);

    assert!(shaped_one.supports_environment(&[node(6)]));
    assert!(shaped_one.supports_environment(&[node(6).with_gpu_count(2)]));
    assert!(!shaped_one.supports_environment(&[node(10)]));
    assert!(shaped_one.supports_environment(&[node(6), node(6)]));
    assert!(!shaped_one.supports_environment(&[node(6), node(10)]));
}

#[test]
fn test_simple_minimum_count() {
    let shaped_two = simple(2, Some(mid_core_node()), None);

    assert!(!shaped_two.supports_environment(&[node(6)]));
    assert!(shaped_two.supports_environment(&[node(6), node(6)]));
    assert!(shaped_two.supports_environment(&[node(6), node(6), node(6)]));
    assert!(!shaped_two.supports_environment(&[node(6), node(10)]));
}

#[test]
fn test_simple_platform_restriction() {
    let azure_only = simple(1, None, Some(SetSpace::allow([PlatformId::new("azure")])));

    assert!(azure_only.supports_platform(&PlatformId::new("azure")));
    assert!(!azure_only.supports_platform(&PlatformId::ready()));

    let unrestricted = simple(1, None, None);
    assert!(unrestricted.supports_platform(&PlatformId::ready()));
}

#[test]
fn test_requirement_default_supports_everything() {
    let requirement = crate::Requirement::default();
    assert!(requirement.supports_environment(&[]));
    assert!(requirement.supports_environment(&[node(1)]));
    assert!(requirement.supports_platform(&PlatformId::ready()));
}
