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

//! Parsing configuration, analogous to the optional arguments accepted by
//! `parse`/`parse_and_keep_raw_input`, but collected into a single record so
//! callers don't have to remember argument order.

/// Options controlling how [`crate::PhoneNumberUtil::parse_with_options`]
/// interprets a number string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingOptions {
    /// Region to assume when the input has no leading `+` or RFC3966
    /// `phone-context`. `"ZZ"` means no default region; such input must be
    /// fully international or parsing fails.
    pub default_region: String,
    /// Whether to retain `raw_input` and `country_code_source` on the
    /// resulting `PhoneNumber`, as `parse_and_keep_raw_input` does.
    pub keep_raw_input: bool,
}

impl Default for ParsingOptions {
    fn default() -> Self {
        Self {
            default_region: "ZZ".to_string(),
            keep_raw_input: false,
        }
    }
}

impl ParsingOptions {
    pub fn new(default_region: impl Into<String>) -> Self {
        Self {
            default_region: default_region.into(),
            ..Default::default()
        }
    }

    pub fn keep_raw_input(mut self, keep: bool) -> Self {
        self.keep_raw_input = keep;
        self
    }
}
