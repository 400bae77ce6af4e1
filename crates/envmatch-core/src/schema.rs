//! Candidate-side data contract
//!
//! These types describe what the platform/discovery layer hands the
//! matcher: concrete, already-validated node descriptions. They carry no
//! constraint semantics of their own.

use std::fmt;

/// An opaque feature identifier, such as a hardware capability exposed by a
/// discovered node.
///
/// # Examples
///
/// ```
/// use envmatch_core::FeatureId;
///
/// let rdma = FeatureId::new("RDMA");
/// assert_eq!(rdma.as_str(), "RDMA");
/// assert_eq!(rdma, FeatureId::rdma());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FeatureId(String);

impl FeatureId {
    /// Creates a feature identifier.
    pub fn new(name: impl Into<String>) -> Self {
        FeatureId(name.into())
    }

    /// Remote Direct Memory Access support.
    pub fn rdma() -> Self {
        FeatureId::new("RDMA")
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FeatureId {
    fn from(name: &str) -> Self {
        FeatureId::new(name)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An opaque platform-type identifier, such as the provisioning backend an
/// environment was discovered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct PlatformId(String);

impl PlatformId {
    /// Creates a platform identifier.
    pub fn new(name: impl Into<String>) -> Self {
        PlatformId(name.into())
    }

    /// The pass-through platform for pre-existing environments.
    pub fn ready() -> Self {
        PlatformId::new("ready")
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlatformId {
    fn from(name: &str) -> Self {
        PlatformId::new(name)
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A concrete node produced by platform discovery.
///
/// All counts are non-negative and already validated upstream; this is the
/// candidate shape a [`NodeRequirement`](crate::NodeRequirement) is
/// evaluated against.
///
/// # Examples
///
/// ```
/// use envmatch_core::NodeDescription;
///
/// let node = NodeDescription::new().with_core_count(6).with_gpu_count(2);
/// assert_eq!(node.core_count, 6);
/// assert_eq!(node.memory_mb, 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct NodeDescription {
    /// Optional display name assigned by discovery.
    pub name: String,
    /// Number of processor cores.
    pub core_count: i64,
    /// Memory size in megabytes.
    pub memory_mb: i64,
    /// Number of network interfaces.
    pub nic_count: i64,
    /// Number of GPUs.
    pub gpu_count: i64,
    /// Features exposed by the node.
    pub features: Vec<FeatureId>,
}

impl NodeDescription {
    /// Creates a description with the default shape: one core, 2048 MB of
    /// memory, one NIC, no GPU, no features.
    pub fn new() -> Self {
        NodeDescription::default()
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the core count.
    pub fn with_core_count(mut self, core_count: i64) -> Self {
        self.core_count = core_count;
        self
    }

    /// Sets the memory size in megabytes.
    pub fn with_memory_mb(mut self, memory_mb: i64) -> Self {
        self.memory_mb = memory_mb;
        self
    }

    /// Sets the NIC count.
    pub fn with_nic_count(mut self, nic_count: i64) -> Self {
        self.nic_count = nic_count;
        self
    }

    /// Sets the GPU count.
    pub fn with_gpu_count(mut self, gpu_count: i64) -> Self {
        self.gpu_count = gpu_count;
        self
    }

    /// Sets the feature list.
    pub fn with_features<I>(mut self, features: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FeatureId>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for NodeDescription {
    fn default() -> Self {
        NodeDescription {
            name: String::new(),
            core_count: 1,
            memory_mb: 2048,
            nic_count: 1,
            gpu_count: 0,
            features: Vec::new(),
        }
    }
}
