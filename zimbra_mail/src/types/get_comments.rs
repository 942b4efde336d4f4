/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::MailCustomMetadata;

/// A request for the comments on an item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetCommentsResponse)]
pub struct GetCommentsRequest {
    #[serde(rename = "comment")]
    pub comment: ParentId,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ParentId {
    #[serde(rename = "@parentId")]
    pub parent_id: String,
}

/// A response to a [`GetCommentsRequest`].
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetCommentsResponse {
    /// The authors of the returned comments.
    #[serde(rename = "user", default)]
    pub users: Vec<IdEmailName>,

    #[serde(rename = "comment", default)]
    pub comments: Vec<CommentInfo>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IdEmailName {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@email")]
    pub email: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CommentInfo {
    #[serde(rename = "@parentId")]
    pub parent_id: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    /// The email address of the author.
    #[serde(rename = "@email")]
    pub creator_email: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "$text")]
    pub text: Option<String>,
}
