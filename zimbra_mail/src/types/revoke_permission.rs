/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::AccountAce;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(RevokePermissionResponse)]
pub struct RevokePermissionRequest {
    #[serde(rename = "ace", default)]
    pub aces: Vec<AccountAce>,
}

/// A response to a [`RevokePermissionRequest`], listing the entries which
/// were actually removed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RevokePermissionResponse {
    #[serde(rename = "ace", default)]
    pub aces: Vec<AccountAce>,
}
