/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{IdsAttr, MailItem, TriState, ZmBoolean};

/// A request for the changes made to a mailbox since a previous sync.
///
/// Without a token, the response describes the whole folder hierarchy
/// (and, with `typed`, the items in it) as an initial sync.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/Sync.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SyncResponse)]
pub struct SyncRequest {
    /// The token returned by the previous sync.
    #[serde(rename = "@token")]
    pub token: Option<String>,

    /// Calendar items ending before this time, in milliseconds, are left
    /// out of an initial sync.
    #[serde(rename = "@calCutoff")]
    pub calendar_cutoff: Option<i64>,

    /// Messages received before this time, in seconds, are left out of an
    /// initial sync.
    #[serde(rename = "@msgCutoff")]
    pub message_cutoff: Option<i64>,

    /// Restricts an initial sync to the subtree rooted at this folder.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    /// Whether deleted IDs are grouped by item type.
    #[serde(rename = "@typed")]
    pub typed_deletes: Option<ZmBoolean>,

    #[serde(rename = "@deleteLimit")]
    pub delete_limit: Option<i32>,

    #[serde(rename = "@changeLimit")]
    pub change_limit: Option<i32>,
}

impl SyncRequest {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    pub fn typed_deletes(&self) -> bool {
        self.typed_deletes.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SyncResponse {
    /// The time of the last change, in seconds.
    #[serde(rename = "@md")]
    pub changed_date: i64,

    /// The token to pass to the next sync.
    #[serde(rename = "@token")]
    pub token: Option<String>,

    /// The size of the mailbox, in bytes.
    #[serde(rename = "@s")]
    pub size: Option<i64>,

    /// Whether the change or delete limit cut the response short.
    #[serde(rename = "@more")]
    pub more: Option<ZmBoolean>,

    #[serde(rename = "deleted")]
    pub deleted: Option<DeletedItems>,

    #[serde(rename = "$value", default)]
    pub items: Vec<MailItem>,
}

impl SyncResponse {
    pub fn more(&self) -> bool {
        self.more.resolve(false)
    }
}

/// Items deleted since the previous sync.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DeletedItems {
    /// Every deleted ID, regardless of type.
    #[serde(rename = "@ids")]
    pub ids: String,

    /// The same IDs grouped by type, present for typed syncs.
    #[serde(rename = "$value", default)]
    pub by_type: Vec<DeletedIds>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum DeletedIds {
    #[serde(rename = "folder")]
    Folder(IdsAttr),

    #[serde(rename = "search")]
    SearchFolder(IdsAttr),

    #[serde(rename = "link")]
    Mountpoint(IdsAttr),

    #[serde(rename = "tag")]
    Tag(IdsAttr),

    #[serde(rename = "c")]
    Conversation(IdsAttr),

    #[serde(rename = "chat")]
    Chat(IdsAttr),

    #[serde(rename = "m")]
    Message(IdsAttr),

    #[serde(rename = "cn")]
    Contact(IdsAttr),

    #[serde(rename = "appt")]
    Appointment(IdsAttr),

    #[serde(rename = "task")]
    Task(IdsAttr),

    #[serde(rename = "notes")]
    Note(IdsAttr),

    #[serde(rename = "w")]
    WikiItem(IdsAttr),

    #[serde(rename = "doc")]
    Document(IdsAttr),
}
