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

/// Registration data of a mobile number prefix, rebuilt on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Area {
    /// Identifier the prefix was assigned when the store was loaded.
    pub id: u64,
    /// The 7 digit prefix the lookup used.
    pub phone_prefix: String,
    pub province: String,
    pub city: String,
    /// Carrier and network standard, e.g. `中国电信 CDMA`.
    pub model: String,
    pub post_code: String,
    pub area_code: String,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} | 制式: {} | 邮编: {} | 区号: {}",
            self.phone_prefix, self.province, self.city, self.model, self.post_code, self.area_code
        )
    }
}
