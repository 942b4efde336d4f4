/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::CalendarItemSummary;

/// A request for summaries of the appointments in a time range, expanded
/// into their instances.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetApptSummaries.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetApptSummariesResponse)]
pub struct GetApptSummariesRequest {
    /// The start of the range, in milliseconds since the epoch.
    #[serde(rename = "@s")]
    pub start: i64,

    /// The end of the range, in milliseconds since the epoch.
    #[serde(rename = "@e")]
    pub end: i64,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetApptSummariesResponse {
    #[serde(rename = "$value", default)]
    pub items: Vec<CalendarItemSummary>,
}
