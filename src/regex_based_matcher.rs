// Copyright (C) 2009 The Libphonenumber Authors
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

use log::error;

use crate::{
    interfaces::MatcherApi,
    metadata::CategoryDesc,
    regex_cache::{InvalidRegexError, RegexCache, RegexFullMatch},
};

pub(crate) struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(32),
        }
    }

    fn match_number(
        &self,
        number: &str,
        number_pattern: &str,
        allow_prefix_match: bool,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;

        if allow_prefix_match {
            Ok(regexp.find(number).is_some_and(|m| m.start() == 0))
        } else {
            Ok(regexp.full_match(number))
        }
    }
}

impl MatcherApi for RegexBasedMatcher {
    fn match_national_number(
        &self,
        number: &str,
        desc: &CategoryDesc,
        allow_prefix_match: bool,
    ) -> bool {
        let number_pattern = desc.national_number_pattern();
        // We don't want to consider it a prefix match when matching non-empty input
        // against an empty pattern.
        if number_pattern.is_empty() {
            return false;
        }
        if let Ok(res) = self.match_number(number, number_pattern, allow_prefix_match) {
            res
        } else {
            error!("Invalid regex! {}", number_pattern);
            false
        }
    }
}
