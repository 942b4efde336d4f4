/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::MailCustomMetadata;

/// A request to set a section of the metadata attached to the mailbox.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SetMailboxMetadataResponse)]
pub struct SetMailboxMetadataRequest {
    #[serde(rename = "meta")]
    pub metadata: MailCustomMetadata,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SetMailboxMetadataResponse {}

#[cfg(test)]
mod test {
    use crate::{
        set_mailbox_metadata::SetMailboxMetadataRequest,
        test_utils::{assert_deserialize_fails, assert_serialized_content},
        KeyValuePair, MailCustomMetadata,
    };

    #[test]
    fn test_serialize_set_mailbox_metadata() {
        let request = SetMailboxMetadataRequest {
            metadata: MailCustomMetadata {
                section: "zwc:prefs".to_string(),
                entries: vec![KeyValuePair::new("theme", "dark")],
            },
        };

        assert_serialized_content(
            &request,
            "SetMailboxMetadataRequest",
            r#"<SetMailboxMetadataRequest><meta section="zwc:prefs"><a n="theme">dark</a></meta></SetMailboxMetadataRequest>"#,
        );
    }

    #[test]
    fn test_metadata_is_required() {
        assert_deserialize_fails::<SetMailboxMetadataRequest>(r#"<SetMailboxMetadataRequest/>"#);
    }
}
