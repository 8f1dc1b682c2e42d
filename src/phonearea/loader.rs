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
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{error, info, trace, warn};

use super::{
    enums::AreaField,
    errors::{LoadError, MalformedRecordError},
    helper_constants::KEY_PREFIX_INCR,
    helper_functions::{encode_id, field_key, parse_area_line, prefix_key, strip_quotes},
};
use crate::{interfaces::KeyValueStore, redb_store::RedbStore};

/// Opens (creating when missing) the store in `store_dir` and loads every
/// line of the source file at `source_path` into it.
///
/// Running this twice on the same store is not idempotent: every prefix is
/// assigned a fresh identifier and the earlier records are left orphaned.
pub fn generate_db<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    store_dir: Q,
) -> Result<RedbStore, LoadError> {
    let source = File::open(source_path.as_ref())?;
    let store = RedbStore::open(store_dir)?;
    info!("Loading area table from {}", source_path.as_ref().display());
    load_records(BufReader::new(source), &store)?;
    Ok(store)
}

/// Loads every line of `reader` into `store` and returns the number of
/// records written.
///
/// The first malformed line aborts the load. Records written for the lines
/// before it stay in the store, nothing from that line on is written.
pub fn load_records<R: BufRead>(reader: R, store: &dyn KeyValueStore) -> Result<u64, LoadError> {
    let result = load_lines(reader, store);
    // make whatever was written durable, even when the load aborted
    let flushed = store.flush();
    let loaded = match (result, flushed) {
        (Ok(loaded), flushed) => {
            flushed?;
            loaded
        }
        (Err(err), flushed) => {
            if let Err(flush_err) = flushed {
                error!("Could not flush area store after failed load: {}", flush_err);
            }
            return Err(err);
        }
    };
    info!("Loaded {} area records", loaded);
    Ok(loaded)
}

fn load_lines<R: BufRead>(reader: R, store: &dyn KeyValueStore) -> Result<u64, LoadError> {
    let mut loaded = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        save_line(line.strip_suffix('\r').unwrap_or(&line), store).map_err(|err| {
            if let LoadError::MalformedRecord(ref record_err) = err {
                warn!("Aborting load at line {}: {}", line_number, record_err.reason);
            }
            with_line_number(err, line_number)
        })?;
        loaded += 1;
    }
    Ok(loaded)
}

fn save_line(line: &str, store: &dyn KeyValueStore) -> Result<(), LoadError> {
    let line = strip_quotes(line);
    trace!("{}", line);
    let record = parse_area_line(&line)?;

    let id = store.incr(KEY_PREFIX_INCR.as_bytes())?;
    store.set(prefix_key(record.prefix).as_bytes(), &encode_id(id))?;
    for (field, value) in [
        (AreaField::Province, record.province),
        (AreaField::City, record.city),
        (AreaField::Model, record.model),
        (AreaField::AreaCode, record.area_code),
        (AreaField::PostCode, record.post_code),
    ] {
        store.set(field_key(field, id).as_bytes(), value.as_bytes())?;
    }
    Ok(())
}

fn with_line_number(err: LoadError, line_number: usize) -> LoadError {
    match err {
        LoadError::MalformedRecord(record_err) => MalformedRecordError {
            line_number,
            ..record_err
        }
        .into(),
        other => other,
    }
}
