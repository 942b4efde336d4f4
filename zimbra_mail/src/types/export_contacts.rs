/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

/// A request to export contacts as CSV or vCard.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ExportContactsResponse)]
pub struct ExportContactsRequest {
    /// The export format, e.g. `csv` or `vcf`.
    #[serde(rename = "@ct")]
    pub content_type: String,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    /// The CSV dialect, e.g. `outlook-2003-csv`.
    #[serde(rename = "@csvfmt")]
    pub csv_format: Option<String>,

    #[serde(rename = "@csvlocale")]
    pub csv_locale: Option<String>,

    #[serde(rename = "@csvsep")]
    pub csv_delimiter: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExportContactsResponse {
    /// The exported data.
    #[serde(rename = "content")]
    pub content: String,
}
