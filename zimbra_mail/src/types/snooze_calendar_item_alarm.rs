/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::UpdatedAlarmItem;

/// A request to postpone the current alarms of appointments and tasks.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SnoozeCalendarItemAlarmResponse)]
pub struct SnoozeCalendarItemAlarmRequest {
    #[serde(rename = "$value", default)]
    pub alarms: Vec<SnoozeAlarm>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum SnoozeAlarm {
    #[serde(rename = "appt")]
    Appointment(SnoozeAlarmSpec),

    #[serde(rename = "task")]
    Task(SnoozeAlarmSpec),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SnoozeAlarmSpec {
    #[serde(rename = "@id")]
    pub id: String,

    /// When the alarm should go off again, in milliseconds since the epoch.
    #[serde(rename = "@until")]
    pub snooze_until: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SnoozeCalendarItemAlarmResponse {
    #[serde(rename = "$value", default)]
    pub items: Vec<UpdatedAlarmItem>,
}
