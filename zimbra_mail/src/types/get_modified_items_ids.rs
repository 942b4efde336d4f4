/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request for the IDs of items in a folder which were modified or
/// deleted since a given change number.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetModifiedItemsIDsResponse)]
pub struct GetModifiedItemsIDsRequest {
    #[serde(rename = "@l")]
    pub folder: String,

    /// The change number to compare against.
    #[serde(rename = "@ms")]
    pub modified_sequence: i32,
}

impl GetModifiedItemsIDsRequest {
    pub fn new(folder: impl Into<String>, modified_sequence: i32) -> Self {
        Self {
            folder: folder.into(),
            modified_sequence,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetModifiedItemsIDsResponse {
    #[serde(rename = "mids", default)]
    pub modified_ids: Vec<i32>,

    #[serde(rename = "dids", default)]
    pub deleted_ids: Vec<i32>,
}
