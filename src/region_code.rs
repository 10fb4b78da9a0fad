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

//! Named constants for ISO-3166-1 alpha-2 region codes, plus the two special
//! codes this library uses: "001" for non-geographical entities and "ZZ" for
//! "unknown region".
#[allow(unused)]
pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    /// Non-geographical entity, e.g. satellite and shared-cost services.
    pub fn un001() -> &'static str {
        "001"
    }

    pub fn us() -> &'static str {
        "US"
    }
    pub fn ca() -> &'static str {
        "CA"
    }
    pub fn gb() -> &'static str {
        "GB"
    }
    pub fn de() -> &'static str {
        "DE"
    }
    pub fn fr() -> &'static str {
        "FR"
    }
    pub fn ar() -> &'static str {
        "AR"
    }
    pub fn mx() -> &'static str {
        "MX"
    }
    pub fn cn() -> &'static str {
        "CN"
    }
    pub fn br() -> &'static str {
        "BR"
    }
    pub fn it() -> &'static str {
        "IT"
    }
    pub fn jp() -> &'static str {
        "JP"
    }
    pub fn au() -> &'static str {
        "AU"
    }
}
