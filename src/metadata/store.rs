// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The metadata store (C2): a read-only, process-lifetime index from region
//! id to its `PhoneMetadata` record and from country calling code to the
//! ordered list of regions that share it (main region first).
//!
//! Records are owned by a single arena (`Vec<PhoneMetadata>`) and addressed
//! by small integer handles everywhere else in the crate, per the "arena +
//! handles" guidance for cyclic/shared metadata references.

use std::collections::HashMap;

use thiserror::Error;

use super::types::{PhoneMetadata, PhoneMetadataCollection};
use crate::region_code::RegionCode;

#[derive(Debug, Error)]
pub enum MetadataLoadError {
    #[error("failed to decode metadata bundle: {0}")]
    Decode(#[from] bincode::Error),
}

/// A handle into the metadata arena. Stable for the lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(usize);

pub struct MetadataStore {
    arena: Vec<PhoneMetadata>,
    region_to_handle: HashMap<String, RegionHandle>,
    calling_code_to_regions: HashMap<i32, Vec<RegionHandle>>,
}

impl MetadataStore {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetadataLoadError> {
        let collection: PhoneMetadataCollection = bincode::deserialize(bytes)?;
        Ok(Self::from_collection(collection))
    }

    pub fn from_collection(collection: PhoneMetadataCollection) -> Self {
        let arena = collection.metadata;
        let mut region_to_handle = HashMap::with_capacity(arena.len());
        let mut calling_code_to_regions: HashMap<i32, Vec<RegionHandle>> = HashMap::new();

        for (idx, metadata) in arena.iter().enumerate() {
            let handle = RegionHandle(idx);
            region_to_handle.insert(metadata.id.clone(), handle);

            let regions = calling_code_to_regions
                .entry(metadata.country_code)
                .or_default();
            if metadata.main_country_for_code {
                regions.insert(0, handle);
            } else {
                regions.push(handle);
            }
        }

        Self {
            arena,
            region_to_handle,
            calling_code_to_regions,
        }
    }

    pub fn get_by_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        let region_code = region_code.to_ascii_uppercase();
        self.region_to_handle
            .get(region_code.as_str())
            .map(|h| &self.arena[h.0])
    }

    /// Regions sharing `calling_code`, main region first. Empty if unknown.
    pub fn regions_for_calling_code(&self, calling_code: i32) -> &[RegionHandle] {
        self.calling_code_to_regions
            .get(&calling_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn metadata_for_handle(&self, handle: RegionHandle) -> &PhoneMetadata {
        &self.arena[handle.0]
    }

    pub fn metadata_list_for_calling_code(&self, calling_code: i32) -> Vec<&PhoneMetadata> {
        self.regions_for_calling_code(calling_code)
            .iter()
            .map(|h| self.metadata_for_handle(*h))
            .collect()
    }

    /// The main region serving `calling_code`, e.g. "US" for 1. Returns "001"
    /// for non-geographical calling codes, "ZZ" if the calling code is
    /// entirely unknown.
    pub fn main_region_for_calling_code(&self, calling_code: i32) -> &str {
        self.regions_for_calling_code(calling_code)
            .first()
            .map(|h| self.metadata_for_handle(*h).id.as_str())
            .unwrap_or_else(|| RegionCode::get_unknown())
    }

    pub fn calling_code_for_region(&self, region_code: &str) -> Option<i32> {
        self.get_by_region(region_code).map(|m| m.country_code)
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        region_code != RegionCode::get_unknown() && self.get_by_region(region_code).is_some()
    }

    pub fn has_calling_code(&self, calling_code: i32) -> bool {
        self.calling_code_to_regions.contains_key(&calling_code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.arena
            .iter()
            .filter(|m| m.id != RegionCode::un001())
            .map(|m| m.id.as_str())
    }

    pub fn supported_global_network_calling_codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.arena
            .iter()
            .filter(|m| m.id == RegionCode::un001())
            .map(|m| m.country_code)
    }
}
