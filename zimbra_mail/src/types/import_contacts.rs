/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::ContentSpec;

/// A request to import contacts from CSV or vCard data.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ImportContactsResponse)]
pub struct ImportContactsRequest {
    #[serde(rename = "@ct")]
    pub content_type: String,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    #[serde(rename = "@csvfmt")]
    pub csv_format: Option<String>,

    #[serde(rename = "@csvlocale")]
    pub csv_locale: Option<String>,

    #[serde(rename = "content")]
    pub content: ContentSpec,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImportContactsResponse {
    #[serde(rename = "cn")]
    pub imported: ImportedIds,
}

/// The contacts created by an import.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ImportedIds {
    /// Comma-separated list of the created contact IDs.
    #[serde(rename = "@ids")]
    pub ids: String,

    #[serde(rename = "@n")]
    pub count: i32,
}
