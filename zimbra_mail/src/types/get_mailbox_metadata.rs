/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{MailCustomMetadata, SectionAttr};

/// A request for a section of the metadata attached to the mailbox itself.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetMailboxMetadataResponse)]
pub struct GetMailboxMetadataRequest {
    #[serde(rename = "meta")]
    pub metadata: SectionAttr,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetMailboxMetadataResponse {
    #[serde(rename = "meta")]
    pub metadata: Option<MailCustomMetadata>,
}
