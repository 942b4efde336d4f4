/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{TriState, ZmBoolean};

/// The kind of grantee of an account-level right.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AceGranteeType {
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
    #[serde(rename = "edom")]
    ExternalDomain,
    #[serde(rename = "gst")]
    Guest,
    #[serde(rename = "key")]
    AccessKey,
    #[serde(rename = "pub")]
    Public,
    #[serde(rename = "email")]
    Email,
}

/// An access control entry granting, or denying, a right on the mailbox
/// owner's account.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccountAce {
    /// The ID of the grantee.
    #[serde(rename = "@zid")]
    pub grantee_id: Option<String>,

    #[serde(rename = "@gt")]
    pub grantee_type: AceGranteeType,

    /// The name of the right, e.g. `sendAs` or `invite`.
    #[serde(rename = "@right")]
    pub right: String,

    /// The name or email address of the grantee.
    #[serde(rename = "@d")]
    pub display_name: Option<String>,

    #[serde(rename = "@key")]
    pub access_key: Option<String>,

    #[serde(rename = "@pw")]
    pub password: Option<String>,

    /// Whether this entry denies the right rather than granting it. Defaults
    /// to `false`.
    #[serde(rename = "@deny")]
    pub deny: Option<ZmBoolean>,

    /// Check that the grantee type matches the grantee. Defaults to `false`.
    #[serde(rename = "@chkgt")]
    pub check_grantee_type: Option<ZmBoolean>,
}

impl AccountAce {
    pub fn new(grantee_type: AceGranteeType, right: impl Into<String>) -> Self {
        Self {
            grantee_id: None,
            grantee_type,
            right: right.into(),
            display_name: None,
            access_key: None,
            password: None,
            deny: None,
            check_grantee_type: None,
        }
    }

    pub fn deny(&self) -> bool {
        self.deny.resolve(false)
    }
}

/// The name of a right.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Right {
    #[serde(rename = "@right")]
    pub right: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_deserialize_fails, assert_round_trip};

    #[test]
    fn deny_defaults_to_false() {
        let mut ace = AccountAce::new(AceGranteeType::User, "sendAs");
        assert!(!ace.deny());

        ace.deny = Some(ZmBoolean::TRUE);
        assert!(ace.deny());
        assert_round_trip(&ace, "ace");
    }

    #[test]
    fn folder_grantee_spelling_is_rejected() {
        assert_deserialize_fails::<AccountAce>(r#"<ace gt="guest" right="invite"/>"#);
    }
}
