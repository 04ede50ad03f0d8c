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

use crate::validator::NumberCategory;

/// Length and structural-pattern data for one number category in one region.
///
/// Both halves may be absent: an empty length list means the region defines
/// no valid lengths for the category, and an empty pattern string means no
/// structural pattern exists for it. Absence is data, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDesc {
    /// Ordered list of valid total digit counts for the category.
    possible_lengths: Vec<usize>,

    /// Unanchored regular expression matching a complete national number of
    /// the category.
    national_number_pattern: String,
}

impl CategoryDesc {
    pub fn new(possible_lengths: &[usize], national_number_pattern: &str) -> Self {
        Self {
            possible_lengths: possible_lengths.to_vec(),
            national_number_pattern: national_number_pattern.to_owned(),
        }
    }

    /// Marks a category the region defines no numbers for at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn possible_lengths(&self) -> &[usize] {
        &self.possible_lengths
    }

    pub fn national_number_pattern(&self) -> &str {
        &self.national_number_pattern
    }
}

/// Immutable numbering-plan data for a single region: one description per
/// number category, keyed by the CLDR two-letter region code in `id`.
///
/// Loaded once per region and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct RegionMetadata {
    pub id: String,
    pub general: CategoryDesc,
    pub fixed_line: CategoryDesc,
    pub mobile: CategoryDesc,
    pub toll_free: CategoryDesc,
    pub premium_rate: CategoryDesc,
    pub shared_cost: CategoryDesc,
    pub voip: CategoryDesc,
    pub personal_number: CategoryDesc,
    pub pager: CategoryDesc,
    pub uan: CategoryDesc,
    pub voicemail: CategoryDesc,
}

impl RegionMetadata {
    /// Returns the description inside the metadata of the appropriate
    /// category.
    pub fn desc(&self, category: NumberCategory) -> &CategoryDesc {
        match category {
            NumberCategory::General => &self.general,
            NumberCategory::FixedLine => &self.fixed_line,
            NumberCategory::Mobile => &self.mobile,
            NumberCategory::TollFree => &self.toll_free,
            NumberCategory::PremiumRate => &self.premium_rate,
            NumberCategory::SharedCost => &self.shared_cost,
            NumberCategory::VoIP => &self.voip,
            NumberCategory::PersonalNumber => &self.personal_number,
            NumberCategory::Pager => &self.pager,
            NumberCategory::UAN => &self.uan,
            NumberCategory::VoiceMail => &self.voicemail,
        }
    }
}
