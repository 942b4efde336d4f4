/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalEcho, Msg, TriState, ZmBoolean};

/// A request to modify an invite of an existing appointment.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/ModifyAppointment.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ModifyAppointmentResponse)]
pub struct ModifyAppointmentRequest {
    /// The ID of the invite to modify.
    #[serde(rename = "@id")]
    pub id: String,

    /// The component number of the invite.
    #[serde(rename = "@comp")]
    pub component_num: String,

    /// The modified sequence the change is based on. The request fails if
    /// the appointment has changed since.
    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@echo")]
    pub echo: Option<ZmBoolean>,

    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@neuter")]
    pub neuter: Option<ZmBoolean>,

    #[serde(rename = "@forcesend")]
    pub force_send: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

impl ModifyAppointmentRequest {
    pub fn new(id: impl Into<String>, component_num: impl Into<String>, message: Msg) -> Self {
        Self {
            id: id.into(),
            component_num: component_num.into(),
            modified_sequence: None,
            revision: None,
            echo: None,
            max_inlined_length: None,
            want_html: None,
            neuter: None,
            force_send: None,
            message: Some(message),
        }
    }

    pub fn echo(&self) -> bool {
        self.echo.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifyAppointmentResponse {
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
