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

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::{debug, info};
use redb::{Database, Durability, ReadableTable, TableDefinition, TableError};

use crate::{
    interfaces::KeyValueStore,
    phonearea::{
        errors::StoreError,
        helper_constants::{DEFAULT_NAMESPACE, STORE_FILE_NAME},
        helper_functions::{display_key, next_counter, parse_counter},
    },
};

type KvTable<'a> = TableDefinition<'a, &'static [u8], &'static [u8]>;

/// Persistent [`KeyValueStore`] backed by a [`redb`] database.
///
/// The store owns a whole directory, the database file lives inside it.
/// Each logical namespace is a separate table of the same database.
///
/// Writes are committed one by one with eventual durability; call
/// [`KeyValueStore::flush`] to make them durable.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
    dir: PathBuf,
    table_name: String,
}

impl RedbStore {
    /// Opens the store in `dir`, creating the directory and the database
    /// when missing, and selects namespace 0.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            debug!("Creating store directory {}", dir.display());
            fs::create_dir_all(dir).map_err(StoreError::CreateDir)?;
        }
        let db = Database::create(dir.join(STORE_FILE_NAME))?;
        info!("Opened area store at {}", dir.display());
        Ok(Self {
            db: Arc::new(db),
            dir: dir.to_path_buf(),
            table_name: Self::table_name(DEFAULT_NAMESPACE),
        })
    }

    /// Returns a handle on another namespace of the same database.
    pub fn select(&self, namespace: u8) -> Self {
        Self {
            db: Arc::clone(&self.db),
            dir: self.dir.clone(),
            table_name: Self::table_name(namespace),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn table_name(namespace: u8) -> String {
        let mut buf = itoa::Buffer::new();
        fast_cat::concat_str!("db_", buf.format(namespace))
    }

    fn table(&self) -> KvTable<'_> {
        TableDefinition::new(&self.table_name)
    }
}

impl KeyValueStore for RedbStore {
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError> {
        let not_found = || StoreError::NotFound {
            key: display_key(key),
        };
        let txn = self.db.begin_read()?;
        let table = match txn.open_table(self.table()) {
            Ok(table) => table,
            // nothing was ever written to this namespace
            Err(TableError::TableDoesNotExist(_)) => return Err(not_found()),
            Err(err) => return Err(err.into()),
        };
        let value = table.get(key)?.map(|guard| guard.value().to_vec());
        value.ok_or_else(not_found)
    }

    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        let mut txn = self.db.begin_write()?;
        txn.set_durability(Durability::Eventual);
        {
            let mut table = txn.open_table(self.table())?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn incr(&self, key: &[u8]) -> Result<u64, StoreError> {
        // redb allows a single write transaction at a time, which makes the
        // read-increment-write atomic
        let mut txn = self.db.begin_write()?;
        txn.set_durability(Durability::Eventual);
        let next = {
            let mut table = txn.open_table(self.table())?;
            let current = match table.get(key)? {
                Some(guard) => parse_counter(key, guard.value())?,
                None => 0,
            };
            let next = next_counter(key, current)?;
            let mut buf = itoa::Buffer::new();
            table.insert(key, buf.format(next).as_bytes())?;
            next
        };
        txn.commit()?;
        Ok(next)
    }

    fn flush(&self) -> Result<(), StoreError> {
        // an immediate commit persists every eventual commit before it
        let mut txn = self.db.begin_write()?;
        txn.set_durability(Durability::Immediate);
        txn.commit()?;
        Ok(())
    }
}
