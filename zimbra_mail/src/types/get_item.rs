/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{ItemSpec, MailItem};

/// A request to retrieve an item of any type.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetItemResponse)]
pub struct GetItemRequest {
    #[serde(rename = "item")]
    pub item: ItemSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetItemResponse {
    #[serde(rename = "$value")]
    pub item: Option<MailItem>,
}
