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

use thiserror::Error;

/// The supplied region code did not resolve to any known metadata entry.
///
/// Raised only at construction. Missing per-category data in a known region
/// is not an error; it surfaces as empty sets and `None` extrema through
/// the normal return path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No metadata for region code \"{0}\"")]
pub struct UnknownRegionError(pub String);
