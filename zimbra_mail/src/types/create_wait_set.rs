/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{WaitSetAccounts, WaitSetError, ZmBoolean};

/// A request to create a wait-set watching one or more accounts for
/// changes.
///
/// `default_types` is a comma-separated list of interest types (`f`, `m`,
/// `c`, `a`, `all`...) applied to accounts added without their own.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateWaitSetResponse)]
pub struct CreateWaitSetRequest {
    #[serde(rename = "@defTypes")]
    pub default_types: String,

    #[serde(rename = "@allAccounts")]
    pub all_accounts: Option<ZmBoolean>,

    #[serde(rename = "add")]
    pub add: Option<WaitSetAccounts>,
}

impl CreateWaitSetRequest {
    pub fn new(default_types: impl Into<String>) -> Self {
        Self {
            default_types: default_types.into(),
            all_accounts: None,
            add: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateWaitSetResponse {
    #[serde(rename = "@waitSet")]
    pub wait_set_id: String,

    #[serde(rename = "@defTypes")]
    pub default_types: String,

    /// The sequence number to pass to the first wait.
    #[serde(rename = "@seq")]
    pub sequence: i32,

    /// Accounts which could not be added.
    #[serde(rename = "error", default)]
    pub errors: Vec<WaitSetError>,
}
