/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{AccountAce, Right};

/// A request for the account-level rights the user has granted. Without
/// `rights`, every granted right is returned.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetPermissionResponse)]
pub struct GetPermissionRequest {
    #[serde(rename = "ace", default)]
    pub rights: Vec<Right>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetPermissionResponse {
    #[serde(rename = "ace", default)]
    pub aces: Vec<AccountAce>,
}
