/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{MessageInfo, MsgSpec};

/// A request to retrieve a message.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetMsg.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetMsgResponse)]
pub struct GetMsgRequest {
    #[serde(rename = "m")]
    pub message: MsgSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetMsgResponse {
    #[serde(rename = "m")]
    pub message: Option<MessageInfo>,
}
