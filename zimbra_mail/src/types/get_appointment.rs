/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalendarItemInfo, TriState, ZmBoolean};

/// A request for an appointment, by ID or by iCalendar UID.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetAppointment.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetAppointmentResponse)]
pub struct GetAppointmentRequest {
    /// Return the modified date and sequence. Defaults to `false`.
    #[serde(rename = "@sync")]
    pub sync: Option<ZmBoolean>,

    /// Include the MIME content of invites. Defaults to `false`.
    #[serde(rename = "@includeContent")]
    pub include_content: Option<ZmBoolean>,

    /// Include the invites themselves. Defaults to `true`.
    #[serde(rename = "@includeInvites")]
    pub include_invites: Option<ZmBoolean>,

    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,
}

impl GetAppointmentRequest {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn include_content(&self) -> bool {
        self.include_content.resolve(false)
    }

    pub fn include_invites(&self) -> bool {
        self.include_invites.resolve(true)
    }
}

/// A response to a [`GetAppointmentRequest`]. Only an `appt` element is
/// read; any other child, including `task`, is skipped.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetAppointmentResponse {
    #[serde(rename = "appt")]
    pub appointment: Option<CalendarItemInfo>,
}
