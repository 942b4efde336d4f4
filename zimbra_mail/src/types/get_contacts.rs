/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{AttributeName, ContactInfo, Id, TriState, ZmBoolean};

/// A request for contacts, either by ID or every contact in a folder.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetContacts.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetContactsResponse)]
pub struct GetContactsRequest {
    /// Return modified dates and sequences. Defaults to `false`.
    #[serde(rename = "@sync")]
    pub sync: Option<ZmBoolean>,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,

    /// Resolve the members of contact groups. Defaults to `false`.
    #[serde(rename = "@derefGroupMember")]
    pub deref_group_member: Option<ZmBoolean>,

    #[serde(rename = "@returnHiddenAttrs")]
    pub include_hidden_attrs: Option<ZmBoolean>,

    /// The maximum number of members to return for each group.
    #[serde(rename = "@maxMembers")]
    pub max_members: Option<i64>,

    /// Restricts the returned attributes.
    #[serde(rename = "a", default)]
    pub attributes: Vec<AttributeName>,

    /// Restricts the returned attributes of group members.
    #[serde(rename = "ma", default)]
    pub member_attributes: Vec<AttributeName>,

    #[serde(rename = "cn", default)]
    pub contacts: Vec<Id>,
}

impl GetContactsRequest {
    pub fn deref_group_member(&self) -> bool {
        self.deref_group_member.resolve(false)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetContactsResponse {
    #[serde(rename = "cn", default)]
    pub contacts: Vec<ContactInfo>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_contacts::{GetContactsRequest, GetContactsResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        AttributeName, ContactAttr, ContactGroupMember, ContactInfo, Id, ZmBoolean,
    };

    #[test]
    fn test_serialize_get_contacts() {
        let request = GetContactsRequest {
            deref_group_member: Some(ZmBoolean::TRUE),
            attributes: vec![AttributeName {
                name: "email".to_string(),
            }],
            contacts: vec![Id::new("401"), Id::new("520")],
            ..Default::default()
        };

        assert_serialized_content(
            &request,
            "GetContactsRequest",
            r#"<GetContactsRequest derefGroupMember="1"><a n="email"/><cn id="401"/><cn id="520"/></GetContactsRequest>"#,
        );
        assert!(request.deref_group_member());
        assert!(!GetContactsRequest::default().deref_group_member());
    }

    #[test]
    fn test_deserialize_dereferenced_group() {
        let content = r#"<GetContactsResponse xmlns="urn:zimbraMail">
            <cn id="520" l="7" fileAsStr="Project team">
                <a n="type">group</a>
                <m type="C" value="401"><cn id="401" l="7"><a n="email">grace@example.com</a></cn></m>
            </cn>
        </GetContactsResponse>"#;

        let email = ContactAttr {
            name: "email".to_string(),
            part: None,
            content_type: None,
            size: None,
            content_filename: None,
            value: Some("grace@example.com".to_string()),
        };

        let expected = GetContactsResponse {
            contacts: vec![ContactInfo {
                id: "520".to_string(),
                folder: Some("7".to_string()),
                file_as: Some("Project team".to_string()),
                attrs: vec![ContactAttr {
                    name: "type".to_string(),
                    value: Some("group".to_string()),
                    ..email.clone()
                }],
                contact_group_members: vec![ContactGroupMember {
                    member_type: "C".to_string(),
                    value: "401".to_string(),
                    contact: Some(Box::new(ContactInfo {
                        id: "401".to_string(),
                        folder: Some("7".to_string()),
                        attrs: vec![email],
                        ..Default::default()
                    })),
                }],
                ..Default::default()
            }],
        };

        assert_deserialized_content(content, expected);
    }
}
