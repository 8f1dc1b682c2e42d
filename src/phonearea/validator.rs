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

use std::sync::LazyLock;

use log::trace;
use regex::{Regex, RegexBuilder};

use super::helper_constants::{COUNTRY_CODE_PREFIXES, MOBILE_NUMBER_PATTERN, PHONE_NUMBER_LENGTH};
use crate::string_util::{remove_char, strip_any_prefix_to_len};

static MOBILE_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only, `\d` would otherwise accept any Unicode decimal.
    RegexBuilder::new(MOBILE_NUMBER_PATTERN)
        .unicode(false)
        .build()
        .unwrap_or_else(|err| panic!("invalid mobile number pattern: {}", err))
});

/// Checks that `raw` is a mainland China mobile number and returns its
/// canonical 11 digit form.
///
/// Spaces are ignored anywhere in the input. A leading `86`, `086` or `+86`
/// country code is accepted and stripped; any other leading characters make
/// the number invalid.
///
/// ```
/// use phonearea::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("+86 137 6192 1111").as_deref(), Some("13761921111"));
/// assert_eq!(normalize_phone_number("19712345678"), None);
/// ```
pub fn normalize_phone_number(raw: &str) -> Option<String> {
    let number = remove_char(raw, ' ');

    if number.len() < PHONE_NUMBER_LENGTH {
        trace!("Too short to be a mobile number: {:?}", raw);
        return None;
    }

    let national = if number.len() == PHONE_NUMBER_LENGTH {
        number.as_ref()
    } else {
        strip_any_prefix_to_len(&number, &COUNTRY_CODE_PREFIXES, PHONE_NUMBER_LENGTH)?
    };

    if MOBILE_NUMBER_REGEX.is_match(national) {
        Some(national.to_owned())
    } else {
        trace!("Not in a recognized mobile range: {:?}", raw);
        None
    }
}
