/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetLastItemIdInMailboxResponse)]
pub struct GetLastItemIdInMailboxRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetLastItemIdInMailboxResponse {
    /// The highest item ID allocated in the mailbox.
    #[serde(rename = "id")]
    pub id: i32,
}
