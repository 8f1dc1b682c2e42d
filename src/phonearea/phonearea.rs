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

use std::path::{Path, PathBuf};

use log::{info, trace};
use strum::IntoEnumIterator;

use super::{
    area::Area,
    enums::AreaField,
    errors::{LoadError, QueryError, StoreError},
    helper_constants::PHONE_PREFIX_LENGTH,
    helper_functions::{decode_id, field_key, prefix_key},
    loader::generate_db,
    validator::normalize_phone_number,
};
use crate::{interfaces::KeyValueStore, redb_store::RedbStore};

// Helper type for Result
pub type Result<T> = std::result::Result<T, QueryError>;

/// Handle over an area store, answering phone number lookups.
///
/// ```no_run
/// use phonearea::PhoneArea;
///
/// let areas = PhoneArea::open("./phonenum.txt", "./data")?;
/// let area = areas.query("+86 137 6192 1111")?;
/// println!("{} {}", area.province, area.city);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PhoneArea {
    source_path: PathBuf,
    store_path: PathBuf,
    /// `None` until [`PhoneArea::init`] succeeds.
    store: Option<Box<dyn KeyValueStore>>,
}

impl PhoneArea {
    /// Creates a handle that is not initialized yet. Queries fail with
    /// [`QueryError::NotInitialized`] until [`PhoneArea::init`] is called.
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(source_path: P, store_path: Q) -> Self {
        Self {
            source_path: source_path.into(),
            store_path: store_path.into(),
            store: None,
        }
    }

    /// Creates the handle and initializes it right away.
    pub fn open<P: Into<PathBuf>, Q: Into<PathBuf>>(
        source_path: P,
        store_path: Q,
    ) -> std::result::Result<Self, LoadError> {
        let mut instance = Self::new(source_path, store_path);
        instance.init()?;
        Ok(instance)
    }

    /// Wraps an already populated store. The handle has no source file and
    /// no store directory.
    pub fn with_store<S: KeyValueStore + 'static>(store: S) -> Self {
        Self {
            source_path: PathBuf::new(),
            store_path: PathBuf::new(),
            store: Some(Box::new(store)),
        }
    }

    /// Opens the store when its directory already exists, otherwise loads
    /// the source file into a new store.
    ///
    /// An existing store is trusted as is: it is neither checked nor
    /// reloaded.
    pub fn init(&mut self) -> std::result::Result<(), LoadError> {
        // release a previously opened database before opening it again
        self.store = None;
        let store = if self.is_store_present() {
            info!("Using existing area store {}", self.store_path.display());
            RedbStore::open(&self.store_path)?
        } else {
            generate_db(&self.source_path, &self.store_path)?
        };
        self.store = Some(Box::new(store));
        Ok(())
    }

    /// Whether the store directory exists on disk.
    pub fn is_store_present(&self) -> bool {
        !self.store_path.as_os_str().is_empty() && self.store_path.is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_some()
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn store(&self) -> Option<&dyn KeyValueStore> {
        self.store.as_deref()
    }

    /// Resolves a phone number to the area its prefix is registered in.
    ///
    /// The number is normalized first (see
    /// [`crate::normalize_phone_number`]); its first 7 digits select the
    /// record. No partial result is ever returned.
    pub fn query(&self, phone_number: &str) -> Result<Area> {
        let store = self.store.as_deref().ok_or(QueryError::NotInitialized)?;

        let number = normalize_phone_number(phone_number).ok_or_else(|| QueryError::InvalidFormat {
            input: phone_number.to_owned(),
        })?;
        // the validator only lets ASCII digits through
        let prefix = &number[..PHONE_PREFIX_LENGTH];
        trace!("Looking up prefix {} for {:?}", prefix, phone_number);

        let key = prefix_key(prefix);
        let id = match store.get(key.as_bytes()) {
            Ok(value) => decode_id(&key, &value)?,
            Err(StoreError::NotFound { .. }) => {
                return Err(QueryError::PrefixNotFound {
                    prefix: prefix.to_owned(),
                });
            }
            Err(err) => return Err(err.into()),
        };

        let mut area = Area {
            id,
            phone_prefix: prefix.to_owned(),
            ..Default::default()
        };
        for field in AreaField::iter() {
            let value = get_field(store, field, id)?;
            match field {
                AreaField::Province => area.province = value,
                AreaField::City => area.city = value,
                AreaField::Model => area.model = value,
                AreaField::PostCode => area.post_code = value,
                AreaField::AreaCode => area.area_code = value,
            }
        }
        Ok(area)
    }
}

fn get_field(store: &dyn KeyValueStore, field: AreaField, id: u64) -> Result<String> {
    let key = field_key(field, id);
    match store.get(key.as_bytes()) {
        Ok(value) => String::from_utf8(value).map_err(|_| StoreError::CorruptValue { key }.into()),
        Err(StoreError::NotFound { .. }) => Err(QueryError::FieldNotFound { field, id }),
        Err(err) => Err(err.into()),
    }
}
