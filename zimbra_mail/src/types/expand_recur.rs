/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, ExpandedRecurrence, ZmBoolean};

/// A request to expand a recurrence definition into instances within a
/// time range, without storing anything.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ExpandRecurResponse)]
pub struct ExpandRecurRequest {
    #[serde(rename = "@s")]
    pub start: i64,

    #[serde(rename = "@e")]
    pub end: i64,

    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    /// The series and its exceptions and cancellations.
    #[serde(rename = "$value", default)]
    pub components: Vec<ExpandedRecurrence>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExpandRecurResponse {
    #[serde(rename = "inst", default)]
    pub instances: Vec<ExpandedRecurrenceInstance>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExpandedRecurrenceInstance {
    /// The start of the instance, in milliseconds since the epoch.
    #[serde(rename = "@s")]
    pub start_time: Option<i64>,

    /// The duration of the instance, in milliseconds.
    #[serde(rename = "@dur")]
    pub duration: Option<i64>,

    #[serde(rename = "@allDay")]
    pub is_all_day: Option<ZmBoolean>,

    /// The offset from UTC of the instance's timezone, for all-day instances.
    #[serde(rename = "@tzo")]
    pub tz_offset: Option<i32>,

    /// The recurrence ID of the instance, in UTC.
    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,
}
