/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, InstanceRecurIdInfo, Msg};

/// A request to cancel a task, or a single instance of a recurring task,
/// and notify its attendees.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CancelTask.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CancelTaskResponse)]
pub struct CancelTaskRequest {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@comp")]
    pub component_num: String,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "inst")]
    pub instance: Option<InstanceRecurIdInfo>,

    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,

    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CancelTaskResponse {}
