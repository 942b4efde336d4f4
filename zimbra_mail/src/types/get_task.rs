/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalendarItemInfo, ZmBoolean};

/// A request for a task, by ID or by iCalendar UID.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetTask.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetTaskResponse)]
pub struct GetTaskRequest {
    #[serde(rename = "@sync")]
    pub sync: Option<ZmBoolean>,

    #[serde(rename = "@includeContent")]
    pub include_content: Option<ZmBoolean>,

    #[serde(rename = "@includeInvites")]
    pub include_invites: Option<ZmBoolean>,

    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,
}

/// A response to a [`GetTaskRequest`]. Only a `task` element is read; any
/// other child, including `appt`, is skipped.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetTaskResponse {
    #[serde(rename = "task")]
    pub task: Option<CalendarItemInfo>,
}
