/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{AddMsgSpec, MessageInfo, TriState, ZmBoolean};

/// A request to add a message to a folder, as if it had been delivered.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/AddMsg.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(AddMsgResponse)]
pub struct AddMsgRequest {
    /// Run the user's outgoing filters on the message. Defaults to `false`.
    #[serde(rename = "@filterSent")]
    pub filter_sent: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: AddMsgSpec,
}

impl AddMsgRequest {
    pub fn new(message: AddMsgSpec) -> Self {
        Self {
            filter_sent: None,
            message,
        }
    }

    /// Whether outgoing filters should run on the message.
    pub fn filter_sent(&self) -> bool {
        self.filter_sent.resolve(false)
    }
}

/// A response to an [`AddMsgRequest`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddMsgResponse {
    /// The added message.
    #[serde(rename = "m")]
    pub message: MessageInfo,
}
