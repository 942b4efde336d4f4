/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

/// A request to add a comment to an item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(AddCommentResponse)]
pub struct AddCommentRequest {
    #[serde(rename = "comment")]
    pub comment: AddedComment,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddedComment {
    /// The ID of the item being commented on.
    #[serde(rename = "@parentId")]
    pub parent_id: String,

    #[serde(rename = "@text")]
    pub text: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddCommentResponse {
    /// The ID of the new comment.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,
}
