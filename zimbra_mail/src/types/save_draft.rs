/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{MessageInfo, Msg, ZmBoolean};

/// A request to save a message as a draft, creating it or replacing the
/// draft with the same ID.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SaveDraftResponse)]
pub struct SaveDraftRequest {
    #[serde(rename = "@wantImapUid")]
    pub want_imap_uid: Option<ZmBoolean>,

    #[serde(rename = "@wantModSeq")]
    pub want_mod_seq: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: Msg,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SaveDraftResponse {
    #[serde(rename = "m")]
    pub message: MessageInfo,
}
