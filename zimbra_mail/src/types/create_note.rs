/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::NoteInfo;

/// A request to create a sticky note.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateNoteResponse)]
pub struct CreateNoteRequest {
    #[serde(rename = "note")]
    pub note: NewNoteSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewNoteSpec {
    #[serde(rename = "@l")]
    pub folder: String,

    #[serde(rename = "@content")]
    pub content: String,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    /// The bounds of the note, as `x,y[,w,h]`.
    #[serde(rename = "@pos")]
    pub bounds: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateNoteResponse {
    #[serde(rename = "note")]
    pub note: Option<NoteInfo>,
}
