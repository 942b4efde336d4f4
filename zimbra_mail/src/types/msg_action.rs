/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{ActionResult, ActionSelector};

/// A request to apply an action to messages: moving, flagging, tagging,
/// marking as read and so on.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/MsgAction.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(MsgActionResponse)]
pub struct MsgActionRequest {
    #[serde(rename = "action")]
    pub action: ActionSelector,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MsgActionResponse {
    #[serde(rename = "action")]
    pub action: ActionResult,
}
