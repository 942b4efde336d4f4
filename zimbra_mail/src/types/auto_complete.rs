/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{AutoCompleteMatch, TriState, ZmBoolean};

/// Which global address list entries an autocomplete should consider.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum GalSearchType {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "resource")]
    Resource,
    #[serde(rename = "group")]
    Group,
}

/// A request for addresses matching a partially typed name.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/AutoComplete.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(AutoCompleteResponse)]
pub struct AutoCompleteRequest {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@t")]
    pub gal_search_type: Option<GalSearchType>,

    /// Report whether groups can be expanded. Defaults to `false`.
    #[serde(rename = "@needExp")]
    pub need_can_expand: Option<ZmBoolean>,

    /// Comma-separated list of contact folder IDs to search.
    #[serde(rename = "@folders")]
    pub folder_list: Option<String>,

    #[serde(rename = "@includeGal")]
    pub include_gal: Option<ZmBoolean>,
}

impl AutoCompleteRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gal_search_type: None,
            need_can_expand: None,
            folder_list: None,
            include_gal: None,
        }
    }

    pub fn need_can_expand(&self) -> bool {
        self.need_can_expand.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AutoCompleteResponse {
    /// Whether the client may cache the matches and filter them locally as
    /// the user types more characters.
    #[serde(rename = "@canBeCached")]
    pub can_be_cached: Option<ZmBoolean>,

    #[serde(rename = "match", default)]
    pub matches: Vec<AutoCompleteMatch>,
}
