/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request to process an iCalendar `REPLY` received out of band, updating
/// the attendee statuses of the organizer's appointment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ICalReplyResponse)]
pub struct ICalReplyRequest {
    #[serde(rename = "ical")]
    pub ical: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ICalReplyResponse {}
