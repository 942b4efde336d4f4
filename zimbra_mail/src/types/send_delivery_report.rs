/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request to send a read receipt for a message.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SendDeliveryReportResponse)]
pub struct SendDeliveryReportRequest {
    #[serde(rename = "@mid")]
    pub message_id: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendDeliveryReportResponse {}
