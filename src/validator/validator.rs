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

use std::{
    collections::{BTreeSet, HashSet},
    sync::Arc,
};

use log::trace;
use strum::IntoEnumIterator;

use crate::{
    interfaces::MatcherApi,
    metadata::{CategoryDesc, METADATA_REGISTRY, MetadataRegistry, RegionMetadata},
    regex_based_matcher::RegexBasedMatcher,
    validator::{
        enums::NumberCategory, errors::UnknownRegionError,
        helper_constants::MAX_LENGTH_FOR_NSN, helper_functions::desc_has_data,
    },
};

/// Validates national number digit strings against the length and
/// structural-pattern constraints of one region's numbering plan, and
/// judges whether a still-incomplete digit string could extend into a
/// valid number.
///
/// A validator is bound to its region at construction and holds no mutable
/// state beyond the compiled-pattern cache inside its matcher, so one
/// instance can be shared between threads and reused across calls.
pub struct Validator {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// The region this instance was bound to, normalized to uppercase.
    region_code: String,

    /// Length and pattern tables for the bound region.
    metadata: Arc<RegionMetadata>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("region_code", &self.region_code)
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl Validator {
    /// Binds a validator to `region_code`, resolved case-insensitively
    /// against the compiled-in metadata registry.
    pub fn for_region(region_code: &str) -> Result<Self, UnknownRegionError> {
        Self::for_region_in(region_code, &METADATA_REGISTRY)
    }

    /// Binds a validator to `region_code`, resolved case-insensitively
    /// against a caller-supplied registry.
    pub fn for_region_in(
        region_code: &str,
        registry: &MetadataRegistry,
    ) -> Result<Self, UnknownRegionError> {
        let normalized = region_code.to_ascii_uppercase();
        let Some(metadata) = registry.metadata_for_region(&normalized) else {
            return Err(UnknownRegionError(normalized));
        };
        Ok(Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            region_code: normalized,
            metadata,
        })
    }

    /// The region code this instance was bound to.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    /// Returns the categories the bound region defines any data for.
    ///
    /// `General` describes every number of the region rather than a service
    /// type, so it is never reported here.
    pub fn supported_categories(&self) -> HashSet<NumberCategory> {
        NumberCategory::iter()
            .filter(|category| !matches!(category, NumberCategory::General))
            .filter(|category| desc_has_data(self.metadata.desc(*category)))
            .collect()
    }

    /// Returns the distinct valid total digit counts for the given
    /// category, or the union over every category when no filter is given.
    ///
    /// The set is empty when the region defines no lengths for the
    /// category; that is an answer, not an error.
    pub fn valid_lengths(&self, category: Option<NumberCategory>) -> BTreeSet<usize> {
        match category {
            Some(category) => self
                .metadata
                .desc(category)
                .possible_lengths()
                .iter()
                .copied()
                .collect(),
            None => NumberCategory::iter()
                .flat_map(|category| self.metadata.desc(category).possible_lengths())
                .copied()
                .collect(),
        }
    }

    /// The shortest valid length for the category, or `None` when the
    /// length set is empty. `None` means "no constraint known", not
    /// "invalid".
    pub fn min_length(&self, category: Option<NumberCategory>) -> Option<usize> {
        self.valid_lengths(category).first().copied()
    }

    /// The longest valid length for the category, or `None` when the
    /// length set is empty.
    pub fn max_length(&self, category: Option<NumberCategory>) -> Option<usize> {
        self.valid_lengths(category).last().copied()
    }

    /// Returns whether the digit count of `national` is one of the valid
    /// lengths for the category.
    pub fn validate_length(&self, national: &str, category: Option<NumberCategory>) -> bool {
        self.valid_lengths(category).contains(&national.len())
    }

    /// Validates `national` against the structural pattern of the category,
    /// or against the general pattern when no category is given.
    ///
    /// Input shorter than the category minimum is treated as still being
    /// typed: a pattern describing a complete number rejects every such
    /// prefix, including prefixes of perfectly valid numbers, so the prefix
    /// is instead checked for whether some digit extension of it reaches a
    /// valid number. At or above the minimum the whole string must satisfy
    /// the pattern. A category with no pattern defined never validates.
    pub fn validate_pattern(&self, national: &str, category: Option<NumberCategory>) -> bool {
        if let Some(min_length) = self.min_length(category) {
            if national.len() < min_length {
                trace!(
                    "Number '{national}' is shorter than the minimum of {min_length} digits, \
                     checking whether it is a plausible prefix"
                );
                return self.validate_as_prefix(national, category);
            }
        }
        let desc = self
            .metadata
            .desc(category.unwrap_or(NumberCategory::General));
        self.matcher_api.match_national_number(national, desc, false)
    }

    /// Brute-force plausibility search for a prefix: pad `partial` with
    /// every repeated digit up to the longest valid length and accept as
    /// soon as one padded candidate satisfies a candidate pattern.
    ///
    /// Bounded by ten regex tests per candidate pattern.
    fn validate_as_prefix(&self, partial: &str, category: Option<NumberCategory>) -> bool {
        let candidate_descs: Vec<&CategoryDesc> = match category {
            Some(category) => vec![self.metadata.desc(category)],
            // Typed input is overwhelmingly mobile or fixed-line; the other
            // categories are not consulted when no filter is given.
            None => vec![
                self.metadata.desc(NumberCategory::Mobile),
                self.metadata.desc(NumberCategory::FixedLine),
            ],
        };
        let max_length = self.max_length(category).unwrap_or(MAX_LENGTH_FOR_NSN);
        // The caller only dispatches here below the minimum length, but a
        // table whose maximum undercuts the prefix length must not panic.
        let fill_len = max_length.saturating_sub(partial.len());

        for desc in candidate_descs {
            if desc.national_number_pattern().is_empty() {
                continue;
            }
            for digit in '0'..='9' {
                let fill = digit.to_string().repeat(fill_len);
                let candidate = fast_cat::concat_str!(partial, &fill);
                if self.matcher_api.match_national_number(&candidate, desc, false) {
                    trace!("Prefix '{partial}' extends to possible number '{candidate}'");
                    return true;
                }
            }
        }
        false
    }
}
