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

use strum::EnumIter;

/// Categorizes national numbers based on their primary use.
///
/// Each region's metadata carries one description per category. Passing
/// `None` where a category filter is accepted falls back to the `General`
/// description for pattern matching and to the union over every category
/// for length resolution.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberCategory {
    /// **The region-wide description.**
    /// Every complete national number of the region is expected to satisfy
    /// it, whatever its service type. This is the description consulted
    /// when no category filter is given.
    General,
    /// **Fixed-line numbers.**
    /// Traditional landline telephone numbers tied to a specific geographic location.
    FixedLine,
    /// **Mobile numbers.**
    /// Numbers assigned to wireless devices like mobile phones.
    Mobile,
    /// **Toll-free numbers.**
    /// Calls to these numbers are free for the caller, with the cost being paid
    /// by the recipient. Examples include "800" or "888" numbers in the US.
    TollFree,
    /// **Premium-rate numbers.**
    /// Numbers that charge a higher rate than normal calls, often used for
    /// services like horoscopes or tech support.
    PremiumRate,
    /// **Shared-cost numbers.**
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// **Voice over IP (VoIP) numbers.**
    /// Numbers used for services that transmit voice calls over the internet.
    VoIP,
    /// **Personal numbers.**
    /// A number associated with a person rather than a location or device,
    /// routed to whatever destination the owner configured.
    PersonalNumber,
    /// **Pagers.**
    /// Numbers used for sending messages to paging devices.
    Pager,
    /// **Universal Access Numbers (UAN).**
    /// A single number a company uses to route calls to different offices or
    /// departments.
    UAN,
    /// **Voicemail access numbers.**
    /// Numbers used to directly access a voicemail service.
    VoiceMail,
}
