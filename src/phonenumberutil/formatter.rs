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

//! The formatter (C7): renders a [`PhoneNumber`] back to text in one of the
//! four styles (spec.md §4.7). Format-rule selection matches a format's
//! `leading_digits_pattern` (if any) and full `pattern` against the national
//! number; `$1..$9` groups from the matched pattern feed the `format`
//! template, with `$NP`/`$FG` expanded by the national prefix formatting
//! rule for NATIONAL style only.

use std::borrow::Cow;

use crate::metadata::{MetadataStore, NumberFormat, PhoneMetadata};
use crate::phone_number::PhoneNumber;

use super::enums::PhoneNumberFormat;
use super::helper_constants::{NANPA_COUNTRY_CODE, PLUS_SIGN};
use super::helper_functions::prefix_number_with_country_calling_code;

fn pick_format<'a>(formats: &'a [NumberFormat], national_number: &str, cache: &crate::regexp_cache::RegexCache) -> Option<&'a NumberFormat> {
    formats.iter().find(|fmt| {
        let leading_ok = fmt.leading_digits_pattern.last().map_or(true, |pat| {
            cache
                .get_regex(&format!("^(?:{})", pat))
                .map(|re| re.is_match(national_number))
                .unwrap_or(false)
        });
        if !leading_ok {
            return false;
        }
        cache
            .get_regex(&fmt.pattern)
            .map(|re| re.is_match(national_number))
            .unwrap_or(false)
    })
}

fn apply_format(
    fmt: &NumberFormat,
    national_number: &str,
    cache: &crate::regexp_cache::RegexCache,
    national_prefix: Option<&str>,
    with_national_prefix_rule: bool,
) -> String {
    let Ok(re) = cache.get_regex(&fmt.pattern) else {
        return national_number.to_string();
    };
    let mut template = fmt.format.clone();
    if with_national_prefix_rule {
        if let Some(rule) = &fmt.national_prefix_formatting_rule {
            let expanded = rule.replace("$NP", national_prefix.unwrap_or("")).replace("$FG", "$1");
            template = template.replacen("$1", &expanded, 1);
        }
    }
    re.replace(national_number, template.as_str()).into_owned()
}

pub(super) fn format<'a>(
    phone_number: &'a PhoneNumber,
    style: PhoneNumberFormat,
    store: &MetadataStore,
    cache: &crate::regexp_cache::RegexCache,
) -> Cow<'a, str> {
    let region = store.main_region_for_calling_code(phone_number.country_code);
    let Some(metadata) = store.get_by_region(region) else {
        return Cow::Borrowed(phone_number.national_number());
    };

    let national_number = national_significant_number(phone_number);
    let formatted_national = format_national_number(&national_number, metadata, style, cache);

    let mut result = formatted_national;
    prefix_number_with_country_calling_code(phone_number.country_code, style, &mut result);

    if let Some(ext) = phone_number.extension.as_deref().filter(|e| !e.is_empty()) {
        match style {
            PhoneNumberFormat::RFC3966 => {
                result.push_str(";ext=");
                result.push_str(ext);
            }
            _ => {
                result.push_str(" ext. ");
                result.push_str(ext);
            }
        }
    }

    Cow::Owned(result)
}

fn national_significant_number(phone_number: &PhoneNumber) -> String {
    if phone_number.italian_leading_zero {
        let zeros: String = std::iter::repeat('0')
            .take(phone_number.number_of_leading_zeros.max(1) as usize)
            .collect();
        format!("{}{}", zeros, phone_number.national_number())
    } else {
        phone_number.national_number().to_string()
    }
}

/// Formats `phone_number` the way someone dialling it from `region_calling_from`
/// would need to, per spec.md §6. Three cases, in order: same region as the
/// number itself formats as a plain national number; same NANPA country
/// calling code formats as international but without the leading `+` (NANPA
/// countries dial `1` directly); anywhere else dials out via the calling
/// region's international prefix, substituting its
/// `preferred_international_prefix` when the metadata has one, or falling
/// back to `+` when the prefix itself is a pattern rather than a literal
/// dial string.
pub(super) fn format_out_of_country_calling_from(
    phone_number: &PhoneNumber,
    region_calling_from: &str,
    store: &MetadataStore,
    cache: &crate::regexp_cache::RegexCache,
) -> String {
    let region_for_number = store.main_region_for_calling_code(phone_number.country_code);
    let Some(calling_from_metadata) = store.get_by_region(region_calling_from) else {
        return format(phone_number, PhoneNumberFormat::International, store, cache).into_owned();
    };

    if region_calling_from == region_for_number {
        return format(phone_number, PhoneNumberFormat::National, store, cache).into_owned();
    }

    let national_number = national_significant_number(phone_number);
    let Some(number_metadata) = store.get_by_region(region_for_number) else {
        return format(phone_number, PhoneNumberFormat::International, store, cache).into_owned();
    };

    let mut buf = itoa::Buffer::new();
    let country_code_str = buf.format(phone_number.country_code);

    if calling_from_metadata.country_code == NANPA_COUNTRY_CODE && phone_number.country_code == NANPA_COUNTRY_CODE {
        let formatted_national = format_national_number(&national_number, number_metadata, PhoneNumberFormat::National, cache);
        return fast_cat::concat_str!(country_code_str, " ", &formatted_national);
    }

    let formatted_national = format_national_number(&national_number, number_metadata, PhoneNumberFormat::International, cache);
    let international_prefix = calling_from_metadata
        .preferred_international_prefix
        .as_deref()
        .unwrap_or(&calling_from_metadata.international_prefix);

    let dial_prefix = if international_prefix.chars().all(|c| c.is_ascii_digit()) {
        international_prefix.to_string()
    } else {
        PLUS_SIGN.to_string()
    };

    fast_cat::concat_str!(&dial_prefix, " ", country_code_str, " ", &formatted_national)
}

fn format_national_number(
    national_number: &str,
    metadata: &PhoneMetadata,
    style: PhoneNumberFormat,
    cache: &crate::regexp_cache::RegexCache,
) -> String {
    if national_number.is_empty() {
        return String::new();
    }

    let formats = match style {
        PhoneNumberFormat::E164 => &[][..],
        PhoneNumberFormat::International | PhoneNumberFormat::RFC3966
            if !metadata.intl_number_format.is_empty() =>
        {
            &metadata.intl_number_format[..]
        }
        _ => &metadata.number_format[..],
    };

    let Some(fmt) = pick_format(formats, national_number, cache) else {
        return national_number.to_string();
    };

    let apply_np_rule = matches!(style, PhoneNumberFormat::National);
    let mut formatted = apply_format(fmt, national_number, cache, metadata.national_prefix.as_deref(), apply_np_rule);

    if style == PhoneNumberFormat::RFC3966 {
        formatted = formatted.replace(' ', "-");
    }
    formatted
}
