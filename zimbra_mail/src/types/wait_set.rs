/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{TriState, WaitSetAccounts, WaitSetError, WaitSetRemovals, ZmBoolean};

/// A request to wait for changes in the accounts of a wait-set, and to
/// change which accounts it watches.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/WaitSet.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(WaitSetResponse)]
pub struct WaitSetRequest {
    #[serde(rename = "@waitSet")]
    pub wait_set_id: String,

    /// The last sequence number received, used to acknowledge it.
    #[serde(rename = "@seq")]
    pub sequence: String,

    /// Whether to hold the request open until something changes.
    #[serde(rename = "@block")]
    pub block: Option<ZmBoolean>,

    #[serde(rename = "@defTypes")]
    pub default_types: Option<String>,

    /// How long to block, in seconds.
    #[serde(rename = "@timeout")]
    pub timeout: Option<i64>,

    /// Whether to expand `all` into the individual interest types in the
    /// response.
    #[serde(rename = "@expand")]
    pub expand: Option<ZmBoolean>,

    #[serde(rename = "add")]
    pub add: Option<WaitSetAccounts>,

    #[serde(rename = "update")]
    pub update: Option<WaitSetAccounts>,

    #[serde(rename = "remove")]
    pub remove: Option<WaitSetRemovals>,
}

impl WaitSetRequest {
    pub fn new(wait_set_id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            wait_set_id: wait_set_id.into(),
            sequence: sequence.into(),
            block: None,
            default_types: None,
            timeout: None,
            expand: None,
            add: None,
            update: None,
            remove: None,
        }
    }

    pub fn block(&self) -> bool {
        self.block.resolve(false)
    }

    pub fn expand(&self) -> bool {
        self.expand.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitSetResponse {
    #[serde(rename = "@waitSet")]
    pub wait_set_id: String,

    /// Set when the wait was cancelled by another request on the same
    /// wait-set.
    #[serde(rename = "@canceled")]
    pub canceled: Option<ZmBoolean>,

    #[serde(rename = "@seq")]
    pub sequence: Option<String>,

    /// Accounts with changes.
    #[serde(rename = "a", default)]
    pub signalled_accounts: Vec<SignalledAccount>,

    #[serde(rename = "error", default)]
    pub errors: Vec<WaitSetError>,
}

impl WaitSetResponse {
    pub fn canceled(&self) -> bool {
        self.canceled.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SignalledAccount {
    #[serde(rename = "@id")]
    pub id: String,

    /// The change ID the account has reached.
    #[serde(rename = "@changeid")]
    pub change_id: Option<String>,
}
