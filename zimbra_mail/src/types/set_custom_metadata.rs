/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::MailCustomMetadata;

/// A request to set a section of the custom metadata of an item.
///
/// A section with no entries removes the section from the item.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SetCustomMetadataResponse)]
pub struct SetCustomMetadataRequest {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "meta")]
    pub metadata: Option<MailCustomMetadata>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SetCustomMetadataResponse {
    #[serde(rename = "@id")]
    pub id: String,
}
