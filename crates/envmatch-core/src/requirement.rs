//! Requirement types - what a test case demands of its environment
//!
//! A requirement is a composite of capability spaces, built once at test
//! registration and evaluated against discovered candidates. Evaluation
//! delegates field by field to the space algebra and never fails.

use crate::schema::{FeatureId, NodeDescription, PlatformId};
use crate::space::{supports_opt, IntRange, IntSpace, ListSpace, SetSpace, Supports};

/// Constraints a single node must satisfy.
///
/// Every field is a capability space; unconstrained fields accept anything.
/// Defaults ask for a usable general-purpose machine: at least one core,
/// 512 MB of memory, and one NIC, with GPUs and features unconstrained.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::{IntRange, Supports};
/// use envmatch_core::{NodeDescription, NodeRequirement};
///
/// let shape = NodeRequirement::new()
///     .with_core_count(IntRange::bounded(4, 8).unwrap());
/// assert!(shape.is_supported(&NodeDescription::new().with_core_count(6)));
/// assert!(!shape.is_supported(&NodeDescription::new().with_core_count(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct NodeRequirement {
    /// Constraint on processor core count.
    pub core_count: IntSpace,
    /// Constraint on memory size in megabytes.
    pub memory_mb: IntSpace,
    /// Constraint on NIC count.
    pub nic_count: IntSpace,
    /// Constraint on GPU count.
    pub gpu_count: IntSpace,
    /// Constraint on the node's feature set.
    pub features: Option<SetSpace<FeatureId>>,
}

impl NodeRequirement {
    /// Creates a requirement with the default constraints.
    pub fn new() -> Self {
        NodeRequirement::default()
    }

    /// Sets the core-count constraint.
    pub fn with_core_count(mut self, space: impl Into<IntSpace>) -> Self {
        self.core_count = space.into();
        self
    }

    /// Sets the memory constraint in megabytes.
    pub fn with_memory_mb(mut self, space: impl Into<IntSpace>) -> Self {
        self.memory_mb = space.into();
        self
    }

    /// Sets the NIC-count constraint.
    pub fn with_nic_count(mut self, space: impl Into<IntSpace>) -> Self {
        self.nic_count = space.into();
        self
    }

    /// Sets the GPU-count constraint.
    pub fn with_gpu_count(mut self, space: impl Into<IntSpace>) -> Self {
        self.gpu_count = space.into();
        self
    }

    /// Sets the feature-set constraint.
    pub fn with_features(mut self, features: SetSpace<FeatureId>) -> Self {
        self.features = Some(features);
        self
    }
}

impl Default for NodeRequirement {
    fn default() -> Self {
        NodeRequirement {
            core_count: IntRange::at_least(1).into(),
            memory_mb: IntRange::at_least(512).into(),
            nic_count: IntRange::at_least(1).into(),
            gpu_count: IntSpace::Unconstrained,
            features: None,
        }
    }
}

impl Supports<NodeDescription> for NodeRequirement {
    fn is_supported(&self, candidate: &NodeDescription) -> bool {
        // Scalar checks first, feature-set membership last.
        self.core_count.is_supported(&candidate.core_count)
            && self.memory_mb.is_supported(&candidate.memory_mb)
            && self.nic_count.is_supported(&candidate.nic_count)
            && self.gpu_count.is_supported(&candidate.gpu_count)
            && supports_opt(self.features.as_ref(), candidate.features.as_slice())
    }
}

/// Constraints on a whole environment: how many nodes, and what shape.
///
/// The default asks for at least one node of the default shape.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EnvironmentRequirement {
    /// Constraint on the environment's node list.
    pub nodes: ListSpace<NodeRequirement>,
}

impl Default for EnvironmentRequirement {
    fn default() -> Self {
        EnvironmentRequirement {
            nodes: ListSpace::new(IntRange::at_least(1), vec![NodeRequirement::default()]),
        }
    }
}

impl Supports<[NodeDescription]> for EnvironmentRequirement {
    fn is_supported(&self, candidates: &[NodeDescription]) -> bool {
        self.nodes.is_supported(candidates)
    }
}

/// The top-level, test-case-facing requirement: an environment shape paired
/// with an allowed-platform constraint.
///
/// The orchestrator evaluates both parts and combines them; an absent part
/// supports every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Requirement {
    /// Constraint on the candidate environment, if any.
    pub environment: Option<EnvironmentRequirement>,
    /// Constraint on the platform type, if any.
    pub platform_type: Option<SetSpace<PlatformId>>,
}

impl Requirement {
    /// Returns true if the candidate node list satisfies the environment
    /// constraint, or if no environment constraint is set.
    pub fn supports_environment(&self, candidates: &[NodeDescription]) -> bool {
        supports_opt(self.environment.as_ref(), candidates)
    }

    /// Returns true if the platform satisfies the platform constraint, or
    /// if no platform constraint is set.
    pub fn supports_platform(&self, platform: &PlatformId) -> bool {
        supports_opt(self.platform_type.as_ref(), platform)
    }
}

/// Builds the common requirement: at least `min_node_count` nodes, every
/// node optionally matching one shape, optionally restricted to specific
/// platforms.
///
/// # Examples
///
/// ```
/// use envmatch_core::space::IntRange;
/// use envmatch_core::{simple, NodeDescription, NodeRequirement};
///
/// let requirement = simple(
///     2,
///     Some(NodeRequirement::new().with_core_count(IntRange::bounded(4, 8).unwrap())),
///     None,
/// );
/// let pool = vec![
///     NodeDescription::new().with_core_count(6),
///     NodeDescription::new().with_core_count(6),
/// ];
/// assert!(requirement.supports_environment(&pool));
/// assert!(!requirement.supports_environment(&pool[..1]));
/// ```
pub fn simple(
    min_node_count: i64,
    node: Option<NodeRequirement>,
    platform_type: Option<SetSpace<PlatformId>>,
) -> Requirement {
    let nodes = ListSpace {
        count_space: IntRange::at_least(min_node_count).into(),
        items: node.map(|node| vec![node]),
    };
    Requirement {
        environment: Some(EnvironmentRequirement { nodes }),
        platform_type,
    }
}
