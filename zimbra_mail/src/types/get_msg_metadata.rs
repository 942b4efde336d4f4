/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{IdsAttr, MessageInfo};

/// A request for the summary metadata of messages, without their content.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetMsgMetadataResponse)]
pub struct GetMsgMetadataRequest {
    #[serde(rename = "m")]
    pub ids: IdsAttr,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetMsgMetadataResponse {
    #[serde(rename = "$value", default)]
    pub items: Vec<MessageSummaryItem>,
}

/// The metadata of a message or chat.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum MessageSummaryItem {
    #[serde(rename = "m")]
    Message(MessageInfo),

    #[serde(rename = "chat")]
    Chat(MessageInfo),
}
