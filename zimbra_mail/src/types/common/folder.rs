/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{MailCustomMetadata, ZmBoolean};

/// The default type of item stored in a folder.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum FolderView {
    #[serde(rename = "search folder")]
    SearchFolder,
    #[serde(rename = "tag")]
    Tag,
    #[serde(rename = "conversation")]
    Conversation,
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "contact")]
    Contact,
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "appointment")]
    Appointment,
    #[serde(rename = "virtual conversation")]
    VirtualConversation,
    #[serde(rename = "remote folder")]
    RemoteFolder,
    #[serde(rename = "wiki")]
    Wiki,
    #[serde(rename = "task")]
    Task,
    #[serde(rename = "chat")]
    Chat,
    #[serde(rename = "unknown")]
    Unknown,
}

/// The kind of principal a grant applies to.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum GranteeType {
    #[serde(rename = "usr")]
    User,
    #[serde(rename = "grp")]
    Group,
    #[serde(rename = "egp")]
    ExternalGroup,
    #[serde(rename = "all")]
    AllAuthenticated,
    #[serde(rename = "dom")]
    Domain,
    #[serde(rename = "cos")]
    ClassOfService,
    #[serde(rename = "pub")]
    Public,
    #[serde(rename = "key")]
    AccessKey,
    #[serde(rename = "guest")]
    Guest,
}

/// A permission granted on a folder.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Grant {
    /// The granted rights, as a string of letters: `r`ead, `w`rite,
    /// `i`nsert, `d`elete, `a`dminister, `x` action, `p`rivate, `f`reebusy.
    #[serde(rename = "@perm")]
    pub rights: String,

    #[serde(rename = "@gt")]
    pub grantee_type: GranteeType,

    /// The ID of the grantee.
    #[serde(rename = "@zid")]
    pub grantee_id: String,

    /// Expiry of the grant, in milliseconds since the epoch.
    #[serde(rename = "@expiry")]
    pub expiry: Option<i64>,

    /// The name or email address of the grantee.
    #[serde(rename = "@d")]
    pub grantee_name: Option<String>,

    /// Password, for guest grantees.
    #[serde(rename = "@pw")]
    pub guest_password: Option<String>,

    /// Access key, for key grantees.
    #[serde(rename = "@key")]
    pub access_key: Option<String>,
}

/// The access control list of a folder.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Acl {
    /// The time of the last access by an internal user, in milliseconds since
    /// the epoch.
    #[serde(rename = "@internalGrantExpiry")]
    pub internal_grant_expiry: Option<i64>,

    #[serde(rename = "@guestGrantExpiry")]
    pub guest_grant_expiry: Option<i64>,

    #[serde(rename = "grant", default)]
    pub grants: Vec<Grant>,
}

/// A folder in the mailbox hierarchy.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Folder {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    /// The absolute path of the folder.
    #[serde(rename = "@absFolderPath")]
    pub path: Option<String>,

    /// The ID of the parent folder.
    #[serde(rename = "@l")]
    pub parent_id: Option<String>,

    #[serde(rename = "@luuid")]
    pub parent_uuid: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    /// The number of unread items.
    #[serde(rename = "@u")]
    pub unread_count: Option<i32>,

    /// The number of unread items, including those in subfolders.
    #[serde(rename = "@i4u")]
    pub imap_unread_count: Option<i32>,

    #[serde(rename = "@view")]
    pub view: Option<FolderView>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    /// The number of items.
    #[serde(rename = "@n")]
    pub item_count: Option<i32>,

    #[serde(rename = "@i4n")]
    pub imap_item_count: Option<i32>,

    /// The total size of the items, in bytes.
    #[serde(rename = "@s")]
    pub total_size: Option<i64>,

    #[serde(rename = "@i4ms")]
    pub imap_modified_sequence: Option<i32>,

    #[serde(rename = "@i4next")]
    pub imap_uid_next: Option<i32>,

    /// The URL of a remote data source synced into the folder.
    #[serde(rename = "@url")]
    pub url: Option<String>,

    /// The rights the authenticated user holds on a shared folder.
    #[serde(rename = "@perm")]
    pub perm: Option<String>,

    #[serde(rename = "@recursive")]
    pub recursive: Option<ZmBoolean>,

    #[serde(rename = "@rest")]
    pub rest_url: Option<String>,

    #[serde(rename = "@deletable")]
    pub deletable: Option<ZmBoolean>,

    #[serde(rename = "@webOfflineSyncDays")]
    pub web_offline_sync_days: Option<i32>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "acl")]
    pub acl: Option<Acl>,

    /// Subfolders, mountpoints and search folders contained in the folder.
    #[serde(rename = "$value", default)]
    pub subfolders: Vec<FolderNode>,
}

/// A link to a folder in another mailbox.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Mountpoint {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@absFolderPath")]
    pub path: Option<String>,

    #[serde(rename = "@l")]
    pub parent_id: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@u")]
    pub unread_count: Option<i32>,

    #[serde(rename = "@view")]
    pub view: Option<FolderView>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@n")]
    pub item_count: Option<i32>,

    #[serde(rename = "@s")]
    pub total_size: Option<i64>,

    #[serde(rename = "@perm")]
    pub perm: Option<String>,

    /// The ID of the owner of the linked folder.
    #[serde(rename = "@zid")]
    pub owner_id: Option<String>,

    /// The ID of the linked folder in the owner's mailbox.
    #[serde(rename = "@rid")]
    pub remote_folder_id: Option<i32>,

    #[serde(rename = "@ruuid")]
    pub remote_uuid: Option<String>,

    /// The email address of the owner of the linked folder.
    #[serde(rename = "@owner")]
    pub owner_email: Option<String>,

    #[serde(rename = "@reminder")]
    pub reminder_enabled: Option<ZmBoolean>,

    /// The name of the linked folder in the owner's mailbox.
    #[serde(rename = "@oname")]
    pub remote_folder_name: Option<String>,

    #[serde(rename = "@broken")]
    pub broken: Option<ZmBoolean>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "$value", default)]
    pub subfolders: Vec<FolderNode>,
}

/// A folder whose contents are the results of a saved query.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchFolder {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@absFolderPath")]
    pub path: Option<String>,

    #[serde(rename = "@l")]
    pub parent_id: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@query")]
    pub query: Option<String>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,

    /// Comma-separated item types to search.
    #[serde(rename = "@types")]
    pub search_types: Option<String>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "$value", default)]
    pub subfolders: Vec<FolderNode>,
}

/// A node of the folder hierarchy.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum FolderNode {
    #[serde(rename = "folder")]
    Folder(Folder),

    #[serde(rename = "link")]
    Mountpoint(Mountpoint),

    #[serde(rename = "search")]
    SearchFolder(SearchFolder),
}

impl FolderNode {
    pub fn id(&self) -> Option<&str> {
        match self {
            FolderNode::Folder(folder) => folder.id.as_deref(),
            FolderNode::Mountpoint(link) => link.id.as_deref(),
            FolderNode::SearchFolder(search) => search.id.as_deref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            FolderNode::Folder(folder) => folder.name.as_deref(),
            FolderNode::Mountpoint(link) => link.name.as_deref(),
            FolderNode::SearchFolder(search) => search.name.as_deref(),
        }
    }

    pub fn subfolders(&self) -> &[FolderNode] {
        match self {
            FolderNode::Folder(folder) => &folder.subfolders,
            FolderNode::Mountpoint(link) => &link.subfolders,
            FolderNode::SearchFolder(search) => &search.subfolders,
        }
    }
}

/// The folder to create with `CreateFolderRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewFolderSpec {
    /// The name of the folder. If it contains `/`, it is interpreted as a path
    /// and intermediate folders are created.
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@view")]
    pub default_view: Option<FolderView>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    /// The URL of a remote data source to sync into the folder.
    #[serde(rename = "@url")]
    pub url: Option<String>,

    /// The ID of the parent folder.
    #[serde(rename = "@l")]
    pub parent_folder_id: Option<String>,

    /// Return the existing folder instead of failing if one exists with the
    /// same name.
    #[serde(rename = "@fie")]
    pub fetch_if_exists: Option<ZmBoolean>,

    #[serde(rename = "@sync")]
    pub sync_to_url: Option<ZmBoolean>,

    #[serde(rename = "acl")]
    pub acl: Option<Acl>,
}

impl NewFolderSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_view: None,
            flags: None,
            color: None,
            rgb: None,
            url: None,
            parent_folder_id: None,
            fetch_if_exists: None,
            sync_to_url: None,
            acl: None,
        }
    }
}

/// The mountpoint to create with `CreateMountpointRequest`.
///
/// The linked folder is identified either by owner ID or email address and by
/// remote folder ID, UUID or path.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewMountpointSpec {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@view")]
    pub default_view: Option<FolderView>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@url")]
    pub url: Option<String>,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    #[serde(rename = "@fie")]
    pub fetch_if_exists: Option<ZmBoolean>,

    #[serde(rename = "@reminder")]
    pub reminder_enabled: Option<ZmBoolean>,

    #[serde(rename = "@zid")]
    pub owner_id: Option<String>,

    #[serde(rename = "@owner")]
    pub owner_name: Option<String>,

    #[serde(rename = "@rid")]
    pub remote_id: Option<i32>,

    #[serde(rename = "@ruuid")]
    pub remote_uuid: Option<String>,

    #[serde(rename = "@path")]
    pub path: Option<String>,
}

impl NewMountpointSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_view: None,
            flags: None,
            color: None,
            rgb: None,
            url: None,
            folder_id: None,
            fetch_if_exists: None,
            reminder_enabled: None,
            owner_id: None,
            owner_name: None,
            remote_id: None,
            remote_uuid: None,
            path: None,
        }
    }
}

/// The search folder to create with `CreateSearchFolderRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewSearchFolderSpec {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@query")]
    pub query: String,

    #[serde(rename = "@types")]
    pub search_types: Option<String>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@l")]
    pub parent_folder_id: Option<String>,
}

impl NewSearchFolderSpec {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
            search_types: None,
            sort_by: None,
            flags: None,
            color: None,
            rgb: None,
            parent_folder_id: None,
        }
    }
}

/// The new query of an existing search folder.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifySearchFolderSpec {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@query")]
    pub query: String,

    #[serde(rename = "@types")]
    pub search_types: Option<String>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,
}

/// The root of the hierarchy to return with `GetFolderRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetFolderSpec {
    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    #[serde(rename = "@path")]
    pub path: Option<String>,
}

/// A tag.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    /// The number of unread items with the tag.
    #[serde(rename = "@u")]
    pub unread: Option<i32>,

    /// The number of items with the tag.
    #[serde(rename = "@n")]
    pub count: Option<i32>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,
}

/// The tag to create with `CreateTagRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagSpec {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,
}
