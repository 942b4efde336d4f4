/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::MessageInfo;

/// A request to remove attachments from a message.
///
/// The server stores the stripped message as a new revision and returns it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(RemoveAttachmentsResponse)]
pub struct RemoveAttachmentsRequest {
    #[serde(rename = "m")]
    pub message: MsgPartIds,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MsgPartIds {
    #[serde(rename = "@id")]
    pub id: String,

    /// Comma-separated list of the parts to remove.
    #[serde(rename = "@part")]
    pub parts: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RemoveAttachmentsResponse {
    #[serde(rename = "m")]
    pub message: MessageInfo,
}
