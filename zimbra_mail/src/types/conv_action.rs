/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{ActionResult, ActionSelector};

/// A request to apply an action to every message of conversations.
///
/// The `target_constraint` of the selector restricts which messages of the
/// conversations are affected.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ConvActionResponse)]
pub struct ConvActionRequest {
    #[serde(rename = "action")]
    pub action: ActionSelector,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConvActionResponse {
    #[serde(rename = "action")]
    pub action: ActionResult,
}

#[cfg(test)]
mod test {
    use crate::{
        conv_action::{ConvActionRequest, ConvActionResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        ActionResult, ActionSelector, ItemActionOp,
    };

    #[test]
    fn test_serialize_conv_action() {
        let mut action = ActionSelector::new("-257", ItemActionOp::Trash);
        action.target_constraint = Some("-tj".to_string());

        assert_serialized_content(
            &ConvActionRequest { action },
            "ConvActionRequest",
            r#"<ConvActionRequest><action id="-257" op="trash" tcon="-tj"/></ConvActionRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_conv_action_response() {
        assert_deserialized_content(
            r#"<ConvActionResponse xmlns="urn:zimbraMail"><action id="-257" op="trash"/></ConvActionResponse>"#,
            ConvActionResponse {
                action: ActionResult {
                    ids: "-257".to_string(),
                    op: "trash".to_string(),
                    non_existent_ids: None,
                    newly_created_ids: None,
                },
            },
        );
    }
}
