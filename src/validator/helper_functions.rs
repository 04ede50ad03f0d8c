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

use crate::metadata::CategoryDesc;

/// Returns `true` if the region defines any valid lengths for a particular
/// category description.
pub(super) fn desc_has_possible_lengths(desc: &CategoryDesc) -> bool {
    !desc.possible_lengths().is_empty()
}

/// Returns `true` if there is any data set for a particular category
/// description, i.e. numbers of the category exist in the region at all.
pub(super) fn desc_has_data(desc: &CategoryDesc) -> bool {
    desc_has_possible_lengths(desc) || !desc.national_number_pattern().is_empty()
}
