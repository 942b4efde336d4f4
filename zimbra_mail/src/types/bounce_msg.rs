/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::EmailAddrInfo;

/// A request to resend a message to new recipients without altering it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(BounceMsgResponse)]
pub struct BounceMsgRequest {
    #[serde(rename = "m")]
    pub message: BounceMsgSpec,
}

/// The message to bounce and the addresses to bounce it to.
///
/// Addresses of type `t`, `c` and `b` are recipients; `f` and `s` override
/// the `Resent-From` and `Resent-Sender` headers.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BounceMsgSpec {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "e", default)]
    pub addresses: Vec<EmailAddrInfo>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BounceMsgResponse {}
