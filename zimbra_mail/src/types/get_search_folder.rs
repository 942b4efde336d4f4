/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::SearchFolder;

/// A request for every search folder in the mailbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetSearchFolderResponse)]
pub struct GetSearchFolderRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetSearchFolderResponse {
    #[serde(rename = "search", default)]
    pub search_folders: Vec<SearchFolder>,
}
