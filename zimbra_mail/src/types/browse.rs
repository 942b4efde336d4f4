/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

/// A request to list the distinct domains, attachment types or objects found
/// in the mailbox.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(BrowseResponse)]
pub struct BrowseRequest {
    #[serde(rename = "@browseBy")]
    pub browse_by: BrowseBy,

    /// A regular expression the returned values must match.
    #[serde(rename = "@regex")]
    pub regex: Option<String>,

    #[serde(rename = "@maxToReturn")]
    pub max: Option<i32>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum BrowseBy {
    #[serde(rename = "domains")]
    Domains,
    #[serde(rename = "attachments")]
    Attachments,
    #[serde(rename = "objects")]
    Objects,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BrowseResponse {
    #[serde(rename = "bd", default)]
    pub data: Vec<BrowseData>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BrowseData {
    /// For domains, where the domain appears: `f` in From, `t` in To, `c` in
    /// Cc, concatenated.
    #[serde(rename = "@h")]
    pub browse_domain_header: Option<String>,

    /// The number of items the value appears in.
    #[serde(rename = "@freq")]
    pub frequency: i32,

    #[serde(rename = "$text")]
    pub data: String,
}
