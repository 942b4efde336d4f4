/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, DtTimeInfo, Msg, TriState, ZmBoolean};

/// How an attendee answers an invitation.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ReplyVerb {
    #[serde(rename = "ACCEPT")]
    Accept,
    #[serde(rename = "DECLINE")]
    Decline,
    #[serde(rename = "TENTATIVE")]
    Tentative,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "DELEGATED")]
    Delegated,
}

/// A request to reply to an invitation.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/SendInviteReply.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SendInviteReplyResponse)]
pub struct SendInviteReplyRequest {
    /// The ID of the invite message.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@compNum")]
    pub component_num: i32,

    #[serde(rename = "@verb")]
    pub verb: ReplyVerb,

    /// Send the reply to the organizer. Defaults to `true`.
    #[serde(rename = "@updateOrganizer")]
    pub update_organizer: Option<ZmBoolean>,

    #[serde(rename = "@idnt")]
    pub identity_id: Option<String>,

    /// The instance being replied to, for replies to a single instance.
    #[serde(rename = "exceptId")]
    pub exception_id: Option<DtTimeInfo>,

    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,

    /// A custom reply message.
    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

impl SendInviteReplyRequest {
    pub fn new(id: impl Into<String>, component_num: i32, verb: ReplyVerb) -> Self {
        Self {
            id: id.into(),
            component_num,
            verb,
            update_organizer: None,
            identity_id: None,
            exception_id: None,
            timezone: None,
            message: None,
        }
    }

    pub fn update_organizer(&self) -> bool {
        self.update_organizer.resolve(true)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendInviteReplyResponse {
    #[serde(rename = "@calItemId")]
    pub calendar_item_id: Option<String>,

    /// Deprecated: the same value as `calendar_item_id`.
    #[serde(rename = "@apptId")]
    pub appointment_id: Option<String>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<String>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,
}
