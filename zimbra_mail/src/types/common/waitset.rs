/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::Id;

/// Accounts to add to a wait-set, or whose interests to update.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitSetAccounts {
    #[serde(rename = "a", default)]
    pub accounts: Vec<WaitSetAccount>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitSetAccount {
    /// The account ID.
    #[serde(rename = "@id")]
    pub id: String,

    /// The account name, which the server accepts in place of the ID.
    #[serde(rename = "@name")]
    pub name: Option<String>,

    /// The sync token the account was last seen at. Changes made since
    /// are signalled immediately.
    #[serde(rename = "@token")]
    pub token: Option<String>,

    /// Interest types overriding the wait-set default.
    #[serde(rename = "@types")]
    pub types: Option<String>,

    /// Folder IDs to restrict the interest to.
    #[serde(rename = "@folderInterests")]
    pub folder_interests: Option<String>,
}

impl WaitSetAccount {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            token: None,
            types: None,
            folder_interests: None,
        }
    }
}

/// Accounts to stop watching.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitSetRemovals {
    #[serde(rename = "a", default)]
    pub accounts: Vec<Id>,
}

/// An account the server could not watch.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WaitSetError {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@type")]
    pub error_type: String,
}
