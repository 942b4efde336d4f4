/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::ZmBoolean;

/// A request to spell check a piece of text.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CheckSpelling.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CheckSpellingResponse)]
pub struct CheckSpellingRequest {
    /// The dictionary to use, defaulting to the user's locale.
    #[serde(rename = "@dictionary")]
    pub dictionary: Option<String>,

    /// Comma-separated list of words to ignore.
    #[serde(rename = "@ignore")]
    pub ignore: Option<String>,

    /// The text to check. Surrounding whitespace is dropped when read, and
    /// an empty text reads back as `None`.
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

/// A response to a [`CheckSpellingRequest`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckSpellingResponse {
    /// Whether the spell checking service is available.
    #[serde(rename = "@available")]
    pub available: ZmBoolean,

    #[serde(rename = "misspelled", default)]
    pub misspelled: Vec<Misspelling>,
}

impl CheckSpellingResponse {
    pub fn is_available(&self) -> bool {
        self.available.is_true()
    }
}

/// A misspelled word and the suggested replacements.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Misspelling {
    #[serde(rename = "@word")]
    pub word: String,

    /// Comma-separated list of suggestions, best first.
    #[serde(rename = "@suggestions")]
    pub suggestions: Option<String>,
}

impl Misspelling {
    pub fn suggestions(&self) -> impl Iterator<Item = &str> {
        self.suggestions
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|suggestion| !suggestion.is_empty())
    }
}
