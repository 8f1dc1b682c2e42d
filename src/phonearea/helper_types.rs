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

/// One source line split into the values the loader persists.
///
/// Borrows from the line it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaRecord<'a> {
    /// First 7 digits of the numbers this record covers.
    pub prefix: &'a str,
    pub province: &'a str,
    pub city: &'a str,
    pub model: &'a str,
    pub area_code: &'a str,
    pub post_code: &'a str,
}
