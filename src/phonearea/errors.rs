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

use thiserror::Error;

use super::enums::AreaField;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not open store: {0}")]
    Open(#[from] redb::DatabaseError),
    #[error("Could not create store directory: {0}")]
    CreateDir(#[source] std::io::Error),
    #[error("Store backend failure: {0}")]
    Backend(#[from] redb::Error),
    #[error("Key not found: {key}")]
    NotFound { key: String },
    #[error("Value stored under {key} is corrupt")]
    CorruptValue { key: String },
}

/// Why a source line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("expected 6 comma separated fields, found {0}")]
    FieldCount(usize),
    #[error("expected province and city, found {0} names")]
    ProvinceCity(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed record at line {line_number} ({reason}): {line}")]
pub struct MalformedRecordError {
    /// 1-based, zero when the line was parsed outside of a load pass.
    pub line_number: usize,
    /// The line with quotes already stripped.
    pub line: String,
    pub reason: MalformedReason,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read source file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    MalformedRecord(#[from] MalformedRecordError),
    #[error("{0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Area store is not initialized")]
    NotInitialized,
    #[error("Not a mainland China mobile number: {input}")]
    InvalidFormat { input: String },
    #[error("No area known for prefix {prefix}")]
    PrefixNotFound { prefix: String },
    #[error("Field {field} missing for identifier {id}")]
    FieldNotFound { field: AreaField, id: u64 },
    #[error("{0}")]
    Store(#[from] StoreError),
}

// redb reports every stage with its own error type, all of them fold into
// `redb::Error`.
macro_rules! impl_from_redb {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for StoreError {
                fn from(value: $err) -> Self {
                    StoreError::Backend(value.into())
                }
            }
        )*
    };
}

impl_from_redb!(
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
);
