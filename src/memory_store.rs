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

use dashmap::DashMap;

use crate::{
    interfaces::KeyValueStore,
    phonearea::{
        errors::StoreError,
        helper_functions::{display_key, next_counter, parse_counter},
    },
};

/// Non-persistent [`KeyValueStore`] kept in a concurrent hash map.
///
/// Useful for tests and for embedders that load the area table at
/// start-up instead of keeping a store directory around.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: DashMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { map: DashMap::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: DashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        self.map
            .get(key)
            .map(|value| value.value().clone())
            .ok_or_else(|| StoreError::NotFound {
                key: display_key(key),
            })
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.map.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn incr(&self, key: &[u8]) -> Result<u64, StoreError> {
        // the entry guard holds the shard lock until the new value is written
        let mut entry = self.map.entry(key.to_vec()).or_insert_with(|| b"0".to_vec());
        let next = next_counter(key, parse_counter(key, entry.value())?)?;
        let mut buf = itoa::Buffer::new();
        *entry.value_mut() = buf.format(next).as_bytes().to_vec();
        Ok(next)
    }
}
