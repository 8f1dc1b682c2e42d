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

use std::borrow::Cow;

use super::{
    enums::AreaField,
    errors::{MalformedReason, MalformedRecordError, StoreError},
    helper_constants::{KEY_PREFIX, SOURCE_FIELD_COUNT, SOURCE_FIELD_SEPARATOR, SOURCE_QUOTE},
    helper_types::AreaRecord,
};
use crate::string_util::remove_char;

/// Removes the quotes around the source fields.
pub(super) fn strip_quotes(line: &str) -> Cow<'_, str> {
    remove_char(line, SOURCE_QUOTE)
}

/// Parses one source line of the form
/// `<index>,"<prefix>","<province> <city>","<model>","<area code>","<post code>"`.
///
/// Quotes are stripped before splitting on commas, so no field may itself
/// contain a comma. A province without a city (e.g. `"上海"`) is used as both.
pub fn parse_area_line(line: &str) -> Result<AreaRecord<'_>, MalformedRecordError> {
    let malformed = |reason| MalformedRecordError {
        line_number: 0,
        line: line.to_owned(),
        reason,
    };

    // no quote stripping here, the caller owns the stripped buffer
    let fields: Vec<&str> = line.split(SOURCE_FIELD_SEPARATOR).collect();
    if fields.len() != SOURCE_FIELD_COUNT {
        return Err(malformed(MalformedReason::FieldCount(fields.len())));
    }

    let names: Vec<&str> = fields[2].split_whitespace().collect();
    let (province, city) = match names.as_slice() {
        [single] => (*single, *single),
        [province, city] => (*province, *city),
        other => return Err(malformed(MalformedReason::ProvinceCity(other.len()))),
    };

    Ok(AreaRecord {
        prefix: fields[1],
        province,
        city,
        model: fields[3],
        area_code: fields[4],
        post_code: fields[5],
    })
}

pub(super) fn prefix_key(prefix: &str) -> String {
    fast_cat::concat_str!(KEY_PREFIX, prefix)
}

pub(super) fn field_key(field: AreaField, id: u64) -> String {
    let mut buf = itoa::Buffer::new();
    let id_str = buf.format(id);
    fast_cat::concat_str!(field.key_prefix(), id_str)
}

/// Identifiers are stored as 8 bytes little-endian.
pub(super) fn encode_id(id: u64) -> [u8; 8] {
    id.to_le_bytes()
}

pub(super) fn decode_id(key: &str, value: &[u8]) -> Result<u64, StoreError> {
    let bytes: [u8; 8] = value.try_into().map_err(|_| StoreError::CorruptValue {
        key: key.to_owned(),
    })?;
    Ok(u64::from_le_bytes(bytes))
}

/// Reads a counter kept as decimal text.
pub(crate) fn parse_counter(key: &[u8], value: &[u8]) -> Result<u64, StoreError> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| StoreError::CorruptValue {
            key: display_key(key),
        })
}

/// Value following `current`, a counter at `u64::MAX` is reported corrupt.
pub(crate) fn next_counter(key: &[u8], current: u64) -> Result<u64, StoreError> {
    current.checked_add(1).ok_or_else(|| StoreError::CorruptValue {
        key: display_key(key),
    })
}

pub(crate) fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}
