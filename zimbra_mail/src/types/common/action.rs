/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{GranteeType, NewContactAttr, ZmBoolean};

/// An operation applied to messages, conversations, contacts, notes or
/// generic items by an action request.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ItemActionOp {
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "!read")]
    Unread,
    #[serde(rename = "flag")]
    Flag,
    #[serde(rename = "!flag")]
    Unflag,
    #[serde(rename = "tag")]
    Tag,
    #[serde(rename = "!tag")]
    Untag,
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "copy")]
    Copy,
    #[serde(rename = "trash")]
    Trash,
    #[serde(rename = "spam")]
    Spam,
    #[serde(rename = "!spam")]
    NotSpam,
    #[serde(rename = "rename")]
    Rename,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "lock")]
    Lock,
    #[serde(rename = "unlock")]
    Unlock,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "!priority")]
    NoPriority,
    #[serde(rename = "mute")]
    Mute,
    #[serde(rename = "!mute")]
    Unmute,
    #[serde(rename = "recover")]
    Recover,
    #[serde(rename = "dumpsterdelete")]
    DumpsterDelete,
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "pos")]
    Reposition,
}

/// Selects the items an action request applies to and the operation to
/// perform on them.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionSelector {
    /// Comma-separated list of item IDs to act on.
    #[serde(rename = "@id")]
    pub ids: Option<String>,

    #[serde(rename = "@op")]
    pub op: ItemActionOp,

    /// Restricts the action to items in the given folder types, e.g. `-tj`
    /// to skip trash and junk.
    #[serde(rename = "@tcon")]
    pub target_constraint: Option<String>,

    /// Deprecated: use `tag_names` instead. The ID of the tag for `tag` and
    /// `!tag` operations.
    #[serde(rename = "@tag")]
    pub tag: Option<i32>,

    /// The destination folder for `move` and `copy` operations.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    /// For `update` operations on items whose IDs do not exist yet, create
    /// them.
    #[serde(rename = "@nei")]
    pub non_existent_ids: Option<ZmBoolean>,

    /// Return the IDs of newly created items.
    #[serde(rename = "@nci")]
    pub newly_created_ids: Option<ZmBoolean>,
}

impl ActionSelector {
    pub fn new(ids: impl Into<String>, op: ItemActionOp) -> Self {
        Self {
            ids: Some(ids.into()),
            op,
            target_constraint: None,
            tag: None,
            folder: None,
            rgb: None,
            color: None,
            name: None,
            flags: None,
            tags: None,
            tag_names: None,
            non_existent_ids: None,
            newly_created_ids: None,
        }
    }
}

/// The outcome of an action request.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionResult {
    /// Comma-separated list of the IDs which were acted upon.
    #[serde(rename = "@id")]
    pub ids: String,

    #[serde(rename = "@op")]
    pub op: String,

    #[serde(rename = "@nei")]
    pub non_existent_ids: Option<String>,

    #[serde(rename = "@nci")]
    pub newly_created_ids: Option<String>,
}

/// An operation applied to folders.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum FolderActionOp {
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "rename")]
    Rename,
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "trash")]
    Trash,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "grant")]
    Grant,
    #[serde(rename = "!grant")]
    RevokeGrant,
    #[serde(rename = "revokeorphangrants")]
    RevokeOrphanGrants,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "import")]
    Import,
    #[serde(rename = "sync")]
    Sync,
    #[serde(rename = "fb")]
    FreeBusy,
    #[serde(rename = "check")]
    Check,
    #[serde(rename = "!check")]
    Uncheck,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "syncon")]
    SyncOn,
    #[serde(rename = "syncoff")]
    SyncOff,
    #[serde(rename = "webofflinesyncdays")]
    WebOfflineSyncDays,
}

/// A grant of rights on a folder, as supplied to a `grant` folder action.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ActionGrantSelector {
    /// The rights granted, e.g. `rwidx`.
    #[serde(rename = "@perm")]
    pub rights: String,

    #[serde(rename = "@gt")]
    pub grantee_type: GranteeType,

    #[serde(rename = "@zid")]
    pub zimbra_id: Option<String>,

    /// The name or email address of the grantee.
    #[serde(rename = "@d")]
    pub display_name: Option<String>,

    #[serde(rename = "@args")]
    pub args: Option<String>,

    /// The password for guest grantees.
    #[serde(rename = "@pw")]
    pub password: Option<String>,

    /// The access key for key grantees.
    #[serde(rename = "@key")]
    pub access_key: Option<String>,

    /// Time of expiry of the grant, in milliseconds since the epoch.
    #[serde(rename = "@expiry")]
    pub expiry: Option<i64>,
}

/// Selects a folder and the operation to apply to it.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FolderActionSelector {
    #[serde(rename = "@id")]
    pub ids: String,

    #[serde(rename = "@op")]
    pub op: FolderActionOp,

    /// For `delete`, `empty` and `trash`, whether to also act on subfolders.
    #[serde(rename = "@recursive")]
    pub recursive: Option<ZmBoolean>,

    /// The target URL for `url` and `import` operations.
    #[serde(rename = "@url")]
    pub url: Option<String>,

    /// For `fb`, whether to exclude the folder from free/busy computation.
    #[serde(rename = "@excludeFreeBusy")]
    pub exclude_free_busy: Option<ZmBoolean>,

    /// The grantee ID for `!grant`.
    #[serde(rename = "@zid")]
    pub zimbra_id: Option<String>,

    #[serde(rename = "@gt")]
    pub grantee_type: Option<GranteeType>,

    #[serde(rename = "@view")]
    pub view: Option<String>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@numDays")]
    pub num_days: Option<i32>,

    /// The grant to add for a `grant` operation.
    #[serde(rename = "grant")]
    pub grant: Option<ActionGrantSelector>,
}

impl FolderActionSelector {
    pub fn new(ids: impl Into<String>, op: FolderActionOp) -> Self {
        Self {
            ids: ids.into(),
            op,
            recursive: None,
            url: None,
            exclude_free_busy: None,
            zimbra_id: None,
            grantee_type: None,
            view: None,
            folder: None,
            name: None,
            color: None,
            rgb: None,
            flags: None,
            num_days: None,
            grant: None,
        }
    }
}

/// The outcome of a folder action request.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FolderActionResult {
    #[serde(rename = "@id")]
    pub ids: String,

    #[serde(rename = "@op")]
    pub op: String,

    #[serde(rename = "@nei")]
    pub non_existent_ids: Option<String>,

    #[serde(rename = "@nci")]
    pub newly_created_ids: Option<String>,

    /// The grantee ID for `grant` operations.
    #[serde(rename = "@zid")]
    pub zimbra_id: Option<String>,

    #[serde(rename = "@d")]
    pub display_name: Option<String>,

    #[serde(rename = "@key")]
    pub access_key: Option<String>,
}

/// An operation applied to tags.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum TagActionOp {
    #[serde(rename = "read")]
    Read,
    #[serde(rename = "rename")]
    Rename,
    #[serde(rename = "color")]
    Color,
    #[serde(rename = "delete")]
    Delete,
    #[serde(rename = "update")]
    Update,
    #[serde(rename = "retentionpolicy")]
    RetentionPolicy,
}

/// Selects tags by ID or by name and the operation to apply to them.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagActionSelector {
    #[serde(rename = "@id")]
    pub ids: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@op")]
    pub op: TagActionOp,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,
}

/// Selects contacts and the operation to apply to them.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactActionSelector {
    #[serde(rename = "@id")]
    pub ids: String,

    #[serde(rename = "@op")]
    pub op: ItemActionOp,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    /// Attributes to set for `update` operations.
    #[serde(rename = "a", default)]
    pub attrs: Vec<NewContactAttr>,
}

/// Selects a note and the operation to apply to it.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteActionSelector {
    #[serde(rename = "@id")]
    pub ids: String,

    #[serde(rename = "@op")]
    pub op: ItemActionOp,

    /// The new content of the note for `edit` operations.
    #[serde(rename = "@content")]
    pub content: Option<String>,

    /// The new position of the note for `pos` operations, as `x,y[,w,h]`.
    #[serde(rename = "@pos")]
    pub position: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,
}
