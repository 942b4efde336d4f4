/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::ContentSpec;

/// A request to import appointments from iCalendar data.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ImportAppointmentsResponse)]
pub struct ImportAppointmentsRequest {
    /// The content type of the data, e.g. `text/calendar`.
    #[serde(rename = "@ct")]
    pub content_type: String,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    #[serde(rename = "content")]
    pub content: ContentSpec,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImportAppointmentsResponse {
    /// Comma-separated list of the created item IDs.
    #[serde(rename = "@ids")]
    pub ids: String,

    #[serde(rename = "@n")]
    pub count: i32,
}
