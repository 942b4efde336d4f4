/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{
    CalTZInfo, ExpandedRecurrence, FreeBusyStatus, FreeBusyUserSpec, TriState, ZmBoolean,
};

/// A request to find instances of a recurrence which conflict with the
/// existing schedules of a set of users.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CheckRecurConflicts.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CheckRecurConflictsResponse)]
pub struct CheckRecurConflictsRequest {
    /// The start of the range to check, in milliseconds since the epoch.
    #[serde(rename = "@s")]
    pub start: Option<i64>,

    #[serde(rename = "@e")]
    pub end: Option<i64>,

    /// Report every instance checked, not only conflicting ones. Defaults to
    /// `false`.
    #[serde(rename = "@all")]
    pub all_instances: Option<ZmBoolean>,

    /// The UID of the appointment being edited, whose own instances are not
    /// conflicts.
    #[serde(rename = "@excludeUid")]
    pub exclude_uid: Option<String>,

    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    #[serde(rename = "$value", default)]
    pub components: Vec<ExpandedRecurrence>,

    #[serde(rename = "usr", default)]
    pub users: Vec<FreeBusyUserSpec>,
}

impl CheckRecurConflictsRequest {
    pub fn all_instances(&self) -> bool {
        self.all_instances.resolve(false)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckRecurConflictsResponse {
    #[serde(rename = "inst", default)]
    pub instances: Vec<ConflictingInstance>,
}

/// An instance of the checked recurrence and the users it conflicts for.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConflictingInstance {
    #[serde(rename = "@s")]
    pub start_time: Option<i64>,

    #[serde(rename = "@tzo")]
    pub tz_offset: Option<i64>,

    #[serde(rename = "@ex")]
    pub is_exception: Option<ZmBoolean>,

    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,

    #[serde(rename = "@dur")]
    pub duration: Option<i64>,

    #[serde(rename = "@allDay")]
    pub is_all_day: Option<ZmBoolean>,

    #[serde(rename = "usr", default)]
    pub users: Vec<FreeBusyUserStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FreeBusyUserStatus {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@fb")]
    pub free_busy_status: FreeBusyStatus,
}
