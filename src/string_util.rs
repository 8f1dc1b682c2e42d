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

/// Removes every occurrence of `ch` from the string.
///
/// Returns the borrowed input when there is nothing to remove, so the
/// common case does not allocate.
pub fn remove_char(s: &str, ch: char) -> Cow<'_, str> {
    if s.contains(ch) {
        Cow::Owned(s.chars().filter(|c| *c != ch).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Strips one of the given prefixes from `s`, but only when what is left
/// is exactly `rest_len` bytes long.
pub fn strip_any_prefix_to_len<'a>(s: &'a str, prefixes: &[&str], rest_len: usize) -> Option<&'a str> {
    let prefix_len = s.len().checked_sub(rest_len)?;
    if !s.is_char_boundary(prefix_len) {
        return None;
    }
    let (prefix, rest) = s.split_at(prefix_len);
    if prefixes.contains(&prefix) {
        Some(rest)
    } else {
        None
    }
}
