/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{TriState, ZmBoolean};

/// A request which does nothing, used to keep a session alive or, with
/// `wait`, to block until the session receives notifications.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/NoOp.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(NoOpResponse)]
pub struct NoOpRequest {
    /// Block until there are notifications for the session. Defaults to
    /// `false`.
    #[serde(rename = "@wait")]
    pub wait: Option<ZmBoolean>,

    /// Also wake up on notifications for delegated sessions.
    #[serde(rename = "@delegate")]
    pub include_delegates: Option<ZmBoolean>,

    /// Cancel any other blocked `NoOpRequest` for the same account.
    #[serde(rename = "@limitToOneBlocked")]
    pub enforce_limit: Option<ZmBoolean>,

    /// The maximum time to block, in milliseconds.
    #[serde(rename = "@timeout")]
    pub timeout: Option<i64>,
}

impl NoOpRequest {
    pub fn wait(&self) -> bool {
        self.wait.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoOpResponse {
    /// Set when the server refused to block, e.g. because too many requests
    /// are already blocked.
    #[serde(rename = "@waitDisallowed")]
    pub wait_disallowed: Option<ZmBoolean>,
}
