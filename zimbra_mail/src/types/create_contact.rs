/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{ContactInfo, ContactSpec, TriState, ZmBoolean};

/// A request to create a contact or contact group.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CreateContact.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateContactResponse)]
pub struct CreateContactRequest {
    /// Return the full contact in the response. Defaults to `true`.
    #[serde(rename = "@verbose")]
    pub verbose: Option<ZmBoolean>,

    #[serde(rename = "@wantImapUid")]
    pub want_imap_uid: Option<ZmBoolean>,

    #[serde(rename = "@wantModSeq")]
    pub want_mod_seq: Option<ZmBoolean>,

    #[serde(rename = "cn")]
    pub contact: ContactSpec,
}

impl CreateContactRequest {
    pub fn new(contact: ContactSpec) -> Self {
        Self {
            verbose: None,
            want_imap_uid: None,
            want_mod_seq: None,
            contact,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose.resolve(true)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateContactResponse {
    #[serde(rename = "cn")]
    pub contact: Option<ContactInfo>,
}
