/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, Id};

/// A request for the dates in a range which have at least one appointment,
/// used to render a month view.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetMiniCalResponse)]
pub struct GetMiniCalRequest {
    #[serde(rename = "@s")]
    pub start: i64,

    #[serde(rename = "@e")]
    pub end: i64,

    /// The calendar folders to consider.
    #[serde(rename = "folder", default)]
    pub folders: Vec<Id>,

    /// The timezone in which dates are computed.
    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetMiniCalResponse {
    /// Busy dates, as `yyyyMMdd`.
    #[serde(rename = "date", default)]
    pub busy_dates: Vec<String>,

    /// Folders which could not be read.
    #[serde(rename = "error", default)]
    pub errors: Vec<MiniCalError>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MiniCalError {
    /// The ID of the folder.
    #[serde(rename = "@id")]
    pub id: String,

    /// The service error code, e.g. `mail.NO_SUCH_FOLDER`.
    #[serde(rename = "@code")]
    pub code: String,

    #[serde(rename = "$text")]
    pub message: Option<String>,
}
