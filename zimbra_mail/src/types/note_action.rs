/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{ActionResult, NoteActionSelector};

/// A request to perform an action, such as editing or repositioning, on
/// notes.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/NoteAction.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(NoteActionResponse)]
pub struct NoteActionRequest {
    #[serde(rename = "action")]
    pub action: NoteActionSelector,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteActionResponse {
    #[serde(rename = "action")]
    pub action: ActionResult,
}
