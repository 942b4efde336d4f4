/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{TagInfo, TagSpec};

/// A request to create a tag.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CreateTag.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateTagResponse)]
pub struct CreateTagRequest {
    #[serde(rename = "tag")]
    pub tag: TagSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateTagResponse {
    #[serde(rename = "tag")]
    pub tag: Option<TagInfo>,
}

#[cfg(test)]
mod test {
    use crate::{
        create_tag::{CreateTagRequest, CreateTagResponse},
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        TagInfo, TagSpec,
    };

    #[test]
    fn test_serialize_create_tag() {
        let request = CreateTagRequest {
            tag: TagSpec {
                name: "Urgent".to_string(),
                rgb: Some("#FF0000".to_string()),
                color: None,
            },
        };

        assert_serialized_content(
            &request,
            "CreateTagRequest",
            r##"<CreateTagRequest><tag name="Urgent" rgb="#FF0000"/></CreateTagRequest>"##,
        );
        assert_round_trip(&request, "CreateTagRequest");
    }

    #[test]
    fn test_deserialize_create_tag_response() {
        assert_deserialized_content(
            r##"<CreateTagResponse xmlns="urn:zimbraMail"><tag id="64" name="Urgent" rgb="#FF0000"/></CreateTagResponse>"##,
            CreateTagResponse {
                tag: Some(TagInfo {
                    id: "64".to_string(),
                    name: Some("Urgent".to_string()),
                    rgb: Some("#FF0000".to_string()),
                    ..Default::default()
                }),
            },
        );
    }
}
