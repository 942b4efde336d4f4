/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{ContactInfo, ModifyContactSpec, TriState, ZmBoolean};

/// A request to modify the attributes or group members of a contact.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ModifyContactResponse)]
pub struct ModifyContactRequest {
    /// Replace every attribute of the contact with those supplied, rather
    /// than merging. Defaults to `false`.
    #[serde(rename = "@replace")]
    pub replace: Option<ZmBoolean>,

    /// Defaults to `true`.
    #[serde(rename = "@verbose")]
    pub verbose: Option<ZmBoolean>,

    #[serde(rename = "cn")]
    pub contact: ModifyContactSpec,
}

impl ModifyContactRequest {
    pub fn replace(&self) -> bool {
        self.replace.resolve(false)
    }

    pub fn verbose(&self) -> bool {
        self.verbose.resolve(true)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifyContactResponse {
    #[serde(rename = "cn")]
    pub contact: Option<ContactInfo>,
}
