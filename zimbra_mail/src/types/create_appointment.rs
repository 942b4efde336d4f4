/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalEcho, Msg, TriState, ZmBoolean};

/// A request to create an appointment and send its invitations.
///
/// The appointment is described by the invite carried in `message`; the
/// message's addresses receive the invitation.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CreateAppointment.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateAppointmentResponse)]
pub struct CreateAppointmentRequest {
    /// Return the created invite in the response. Defaults to `false`.
    #[serde(rename = "@echo")]
    pub echo: Option<ZmBoolean>,

    /// The maximum length of inlined content in the echoed message.
    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    /// Return HTML content in the echoed message.
    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    /// Neuter external images in the echoed message. Defaults to `true`.
    #[serde(rename = "@neuter")]
    pub neuter: Option<ZmBoolean>,

    /// Send the invitations even when some addresses are invalid.
    #[serde(rename = "@forcesend")]
    pub force_send: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

impl CreateAppointmentRequest {
    pub fn new(message: Msg) -> Self {
        Self {
            message: Some(message),
            ..Default::default()
        }
    }

    pub fn echo(&self) -> bool {
        self.echo.resolve(false)
    }

    pub fn neuter(&self) -> bool {
        self.neuter.resolve(true)
    }
}

/// A response to a [`CreateAppointmentRequest`].
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateAppointmentResponse {
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

    #[serde(rename = "echo")]
    pub echo: Option<CalEcho>,
}
