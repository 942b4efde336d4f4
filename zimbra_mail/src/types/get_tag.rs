/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::TagInfo;

/// A request for every tag in the mailbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetTagResponse)]
pub struct GetTagRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetTagResponse {
    #[serde(rename = "tag", default)]
    pub tags: Vec<TagInfo>,
}
