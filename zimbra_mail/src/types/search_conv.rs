/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{search::SortBy, ConversationInfo, MessageInfo, TriState, ZmBoolean};

/// A request to search within a single conversation.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SearchConvResponse)]
pub struct SearchConvRequest {
    /// The ID of the conversation.
    #[serde(rename = "@cid")]
    pub conversation_id: String,

    /// Return the matching messages nested in a `c` element.
    #[serde(rename = "@nest")]
    pub nest_messages: Option<ZmBoolean>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<SortBy>,

    #[serde(rename = "@fetch")]
    pub fetch: Option<String>,

    #[serde(rename = "@read")]
    pub mark_read: Option<ZmBoolean>,

    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@needExp")]
    pub need_can_expand: Option<ZmBoolean>,

    #[serde(rename = "@neuter")]
    pub neuter_images: Option<ZmBoolean>,

    #[serde(rename = "@recip")]
    pub want_recipients: Option<String>,

    #[serde(rename = "@limit")]
    pub limit: Option<i32>,

    #[serde(rename = "@offset")]
    pub offset: Option<i32>,

    #[serde(rename = "query")]
    pub query: Option<String>,
}

impl SearchConvRequest {
    pub fn new(conversation_id: impl Into<String>) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            nest_messages: None,
            sort_by: None,
            fetch: None,
            mark_read: None,
            max_inlined_length: None,
            want_html: None,
            need_can_expand: None,
            neuter_images: None,
            want_recipients: None,
            limit: None,
            offset: None,
            query: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchConvResponse {
    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,

    #[serde(rename = "@offset")]
    pub offset: Option<i32>,

    #[serde(rename = "@more")]
    pub more: Option<ZmBoolean>,

    /// The conversation, when nesting was requested.
    #[serde(rename = "c")]
    pub conversation: Option<ConversationInfo>,

    #[serde(rename = "m", default)]
    pub messages: Vec<MessageInfo>,
}

impl SearchConvResponse {
    pub fn has_more(&self) -> bool {
        self.more.resolve(false)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        search::SortBy,
        search_conv::{SearchConvRequest, SearchConvResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_serialized_content,
        },
        MessageInfo, ZmBoolean,
    };

    #[test]
    fn test_serialize_search_conv() {
        let mut request = SearchConvRequest::new("-257");
        request.sort_by = Some(SortBy::DateAsc);
        request.fetch = Some("all".to_string());
        request.query = Some("is:anywhere".to_string());

        assert_serialized_content(
            &request,
            "SearchConvRequest",
            r#"<SearchConvRequest cid="-257" sortBy="dateAsc" fetch="all"><query>is:anywhere</query></SearchConvRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_search_conv_response() {
        let content = r#"<SearchConvResponse xmlns="urn:zimbraMail" sortBy="dateAsc" offset="0" more="0"><m id="257"/><m id="261"/></SearchConvResponse>"#;

        let expected = SearchConvResponse {
            sort_by: Some("dateAsc".to_string()),
            offset: Some(0),
            more: Some(ZmBoolean::FALSE),
            conversation: None,
            messages: vec![
                MessageInfo {
                    id: Some("257".to_string()),
                    ..Default::default()
                },
                MessageInfo {
                    id: Some("261".to_string()),
                    ..Default::default()
                },
            ],
        };

        assert_deserialized_content(content, expected.clone());
        assert!(!expected.has_more());
    }

    #[test]
    fn test_conversation_id_is_required() {
        assert_deserialize_fails::<SearchConvRequest>(r#"<SearchConvRequest/>"#);
    }
}
