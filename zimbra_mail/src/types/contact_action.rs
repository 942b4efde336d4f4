/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{ActionResult, ContactActionSelector};

/// A request to perform an action, such as moving or tagging, on
/// contacts.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/ContactAction.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ContactActionResponse)]
pub struct ContactActionRequest {
    #[serde(rename = "action")]
    pub action: ContactActionSelector,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactActionResponse {
    #[serde(rename = "action")]
    pub action: ActionResult,
}
