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

//! Compiled-in metadata snapshot.
//!
//! Simplified numbering plans for the regions the crate ships with. Each
//! pattern matches a complete national number; length lists are the valid
//! total digit counts per category. The snapshot is the default metadata
//! collaborator; callers with their own tables build a `MetadataRegistry`
//! instead.

use super::{CategoryDesc, MetadataRegistry, RegionMetadata};

pub(super) fn compiled_registry() -> MetadataRegistry {
    let mut registry = MetadataRegistry::new();
    registry.insert(us());
    registry.insert(gb());
    registry.insert(de());
    registry.insert(india());
    registry.insert(br());
    registry
}

fn us() -> RegionMetadata {
    RegionMetadata {
        id: "US".to_owned(),
        general: CategoryDesc::new(&[10], r"[13-689]\d{9}|2[0-35-9]\d{8}"),
        // Fixed-line and mobile numbers are indistinguishable in the NANPA
        // plan, so both carry the general pattern.
        fixed_line: CategoryDesc::new(&[10], r"[13-689]\d{9}|2[0-35-9]\d{8}"),
        mobile: CategoryDesc::new(&[10], r"[13-689]\d{9}|2[0-35-9]\d{8}"),
        toll_free: CategoryDesc::new(&[10], r"8(?:00|66|77|88)\d{7}"),
        premium_rate: CategoryDesc::new(&[10], r"900\d{7}"),
        ..Default::default()
    }
}

fn gb() -> RegionMetadata {
    RegionMetadata {
        id: "GB".to_owned(),
        general: CategoryDesc::new(&[10], r"[1-9]\d{9}"),
        fixed_line: CategoryDesc::new(&[10], r"[1-6]\d{9}"),
        mobile: CategoryDesc::new(&[10], r"7[1-57-9]\d{8}"),
        toll_free: CategoryDesc::new(&[10], r"80\d{8}"),
        premium_rate: CategoryDesc::new(&[10], r"9[018]\d{8}"),
        shared_cost: CategoryDesc::new(&[10], r"8(?:4[2-5]|70)\d{7}"),
        voip: CategoryDesc::new(&[10], r"56\d{8}"),
        personal_number: CategoryDesc::new(&[10], r"70\d{8}"),
        pager: CategoryDesc::new(&[10], r"76\d{8}"),
        uan: CategoryDesc::new(&[10], r"55\d{8}"),
        ..Default::default()
    }
}

fn de() -> RegionMetadata {
    RegionMetadata {
        id: "DE".to_owned(),
        general: CategoryDesc::new(&[4, 5, 6, 7, 8, 9, 10, 11], r"[1-9]\d{3,10}"),
        fixed_line: CategoryDesc::new(&[4, 5, 6, 7, 8, 9, 10, 11], r"[2-9]\d{3,10}"),
        mobile: CategoryDesc::new(&[10, 11], r"1(?:5\d{9}|[67]\d{8})"),
        toll_free: CategoryDesc::new(&[10], r"800\d{7}"),
        premium_rate: CategoryDesc::new(&[10], r"900\d{7}"),
        uan: CategoryDesc::new(&[7], r"18\d{5}"),
        ..Default::default()
    }
}

fn india() -> RegionMetadata {
    RegionMetadata {
        id: "IN".to_owned(),
        general: CategoryDesc::new(&[10], r"[2-9]\d{9}"),
        fixed_line: CategoryDesc::new(&[10], r"[2-5]\d{9}"),
        mobile: CategoryDesc::new(&[10], r"[6-9]\d{9}"),
        ..Default::default()
    }
}

fn br() -> RegionMetadata {
    RegionMetadata {
        id: "BR".to_owned(),
        general: CategoryDesc::new(&[10], r"[1-9]\d{9}"),
        fixed_line: CategoryDesc::new(&[10], r"[1-9]\d{3}[2-5]\d{5}"),
        // No mobile data in this snapshot; lookups must report the absence
        // rather than fall back to the general description.
        mobile: CategoryDesc::none(),
        ..Default::default()
    }
}
