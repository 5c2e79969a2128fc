//! Host manifests and name/version resolution.
//!
//! A host may carry up to three descriptors. Fields are resolved through
//! fixed fallback chains where the first descriptor holding a value wins.

use serde::{Deserialize, Serialize};

/// Name and version as declared by one manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }
}

/// All manifests the host exposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostManifests {
    /// Extended manifest client descriptor (preferred)
    #[serde(default)]
    pub extended_client: Option<Descriptor>,
    /// Primary manifest
    #[serde(default, alias = "manifest")]
    pub primary: Option<Descriptor>,
    /// Secondary config descriptor, consulted for the version only
    #[serde(default)]
    pub config: Option<Descriptor>,
}

type Accessor = fn(&HostManifests) -> Option<&String>;

fn extended_name(m: &HostManifests) -> Option<&String> {
    m.extended_client.as_ref()?.name.as_ref()
}

fn primary_name(m: &HostManifests) -> Option<&String> {
    m.primary.as_ref()?.name.as_ref()
}

fn extended_version(m: &HostManifests) -> Option<&String> {
    m.extended_client.as_ref()?.version.as_ref()
}

fn primary_version(m: &HostManifests) -> Option<&String> {
    m.primary.as_ref()?.version.as_ref()
}

fn config_version(m: &HostManifests) -> Option<&String> {
    m.config.as_ref()?.version.as_ref()
}

const NAME_CHAIN: &[Accessor] = &[extended_name, primary_name];

const VERSION_CHAIN: &[Accessor] = &[extended_version, primary_version, config_version];

fn first_match(manifests: &HostManifests, chain: &[Accessor]) -> Option<String> {
    chain.iter().find_map(|accessor| accessor(manifests)).cloned()
}

impl HostManifests {
    pub fn app_name(&self) -> Option<String> {
        first_match(self, NAME_CHAIN)
    }

    pub fn app_version(&self) -> Option<String> {
        first_match(self, VERSION_CHAIN)
    }
}
