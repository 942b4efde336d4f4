/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::AccountAce;

/// A request to grant account-level rights, such as sending on behalf of
/// the user.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GrantPermission.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GrantPermissionResponse)]
pub struct GrantPermissionRequest {
    #[serde(rename = "ace", default)]
    pub aces: Vec<AccountAce>,
}

/// A response to a [`GrantPermissionRequest`], listing the entries which
/// were actually added.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GrantPermissionResponse {
    #[serde(rename = "ace", default)]
    pub aces: Vec<AccountAce>,
}
