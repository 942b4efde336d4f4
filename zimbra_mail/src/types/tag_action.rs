/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{ActionResult, TagActionSelector};

/// A request to apply an action to tags, selected by ID or by name.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(TagActionResponse)]
pub struct TagActionRequest {
    #[serde(rename = "action")]
    pub action: TagActionSelector,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TagActionResponse {
    #[serde(rename = "action")]
    pub action: ActionResult,
}

#[cfg(test)]
mod test {
    use crate::{
        tag_action::{TagActionRequest, TagActionResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        ActionResult, TagActionOp, TagActionSelector,
    };

    #[test]
    fn test_serialize_rename_tag() {
        let request = TagActionRequest {
            action: TagActionSelector {
                ids: None,
                tag_names: Some("Work".to_string()),
                op: TagActionOp::Rename,
                name: Some("Office".to_string()),
                color: None,
                rgb: None,
            },
        };

        assert_serialized_content(
            &request,
            "TagActionRequest",
            r#"<TagActionRequest><action tn="Work" op="rename" name="Office"/></TagActionRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_tag_action_response() {
        assert_deserialized_content(
            r#"<TagActionResponse xmlns="urn:zimbraMail"><action id="64" op="rename"/></TagActionResponse>"#,
            TagActionResponse {
                action: ActionResult {
                    ids: "64".to_string(),
                    op: "rename".to_string(),
                    non_existent_ids: None,
                    newly_created_ids: None,
                },
            },
        );
    }
}
