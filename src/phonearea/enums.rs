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

use std::fmt;

use strum::EnumIter;

use super::helper_constants::{KEY_AREA_CODE, KEY_CITY, KEY_MODEL, KEY_POST_CODE, KEY_PROVINCE};

/// The per-identifier fields persisted for every loaded prefix.
///
/// Variants are declared in the order a query reads them back, so
/// iterating with [`strum::IntoEnumIterator`] yields that order.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaField {
    /// Province or autonomous region, e.g. `广西`.
    Province,
    /// City inside the province, e.g. `南宁市`. Equal to the province for
    /// municipalities listed with a single name.
    City,
    /// Carrier and network standard, e.g. `中国电信 CDMA`.
    Model,
    /// Postal code, kept as text.
    PostCode,
    /// Telephone area code, kept as text so leading zeros survive.
    AreaCode,
}

impl AreaField {
    /// Key prefix under which this field is stored, the identifier follows it.
    pub fn key_prefix(self) -> &'static str {
        match self {
            AreaField::Province => KEY_PROVINCE,
            AreaField::City => KEY_CITY,
            AreaField::Model => KEY_MODEL,
            AreaField::PostCode => KEY_POST_CODE,
            AreaField::AreaCode => KEY_AREA_CODE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AreaField::Province => "province",
            AreaField::City => "city",
            AreaField::Model => "model",
            AreaField::PostCode => "post code",
            AreaField::AreaCode => "area code",
        }
    }
}

impl fmt::Display for AreaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
