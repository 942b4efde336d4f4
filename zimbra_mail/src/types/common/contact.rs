/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{MailCustomMetadata, ZmBoolean};

/// How an attribute or group member of an existing contact is modified.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ModifyOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Remove,
    /// Reset all members of a group.
    #[serde(rename = "reset")]
    Reset,
}

/// A contact attribute supplied by the client.
///
/// The value is either inline or refers to an uploaded file (`aid`) or to a
/// part of an existing contact or message (`id` and `part`).
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewContactAttr {
    #[serde(rename = "@n")]
    pub name: String,

    #[serde(rename = "@aid")]
    pub attachment_id: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<i32>,

    #[serde(rename = "@part")]
    pub part: Option<String>,

    #[serde(rename = "@op")]
    pub operation: Option<ModifyOp>,

    #[serde(rename = "$text")]
    pub value: Option<String>,
}

impl NewContactAttr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attachment_id: None,
            id: None,
            part: None,
            operation: None,
            value: Some(value.into()),
        }
    }
}

/// A member of a contact group supplied by the client.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NewContactGroupMember {
    /// `C` for a contact ID, `G` for a GAL entry, `I` for an inline address.
    #[serde(rename = "@type")]
    pub member_type: String,

    #[serde(rename = "@value")]
    pub value: String,

    #[serde(rename = "@op")]
    pub operation: Option<ModifyOp>,
}

/// The contact to create with `CreateContactRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactSpec {
    /// The ID of an existing contact, ignored on creation.
    #[serde(rename = "@id")]
    pub id: Option<i32>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    /// A vCard to create the contact from, instead of attributes.
    #[serde(rename = "vcard")]
    pub vcard: Option<String>,

    #[serde(rename = "a", default)]
    pub attrs: Vec<NewContactAttr>,

    #[serde(rename = "m", default)]
    pub contact_group_members: Vec<NewContactGroupMember>,
}

/// The changes to an existing contact for `ModifyContactRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifyContactSpec {
    #[serde(rename = "@id")]
    pub id: i32,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "a", default)]
    pub attrs: Vec<NewContactAttr>,

    #[serde(rename = "m", default)]
    pub contact_group_members: Vec<NewContactGroupMember>,
}

impl ModifyContactSpec {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            tag_names: None,
            attrs: Vec::new(),
            contact_group_members: Vec::new(),
        }
    }
}

/// A contact attribute returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactAttr {
    #[serde(rename = "@n")]
    pub name: String,

    /// The MIME part number, for attributes stored as attachments.
    #[serde(rename = "@part")]
    pub part: Option<String>,

    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    #[serde(rename = "@s")]
    pub size: Option<i32>,

    #[serde(rename = "@filename")]
    pub content_filename: Option<String>,

    #[serde(rename = "$text")]
    pub value: Option<String>,
}

/// A member of a contact group returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactGroupMember {
    #[serde(rename = "@type")]
    pub member_type: String,

    #[serde(rename = "@value")]
    pub value: String,

    /// The member contact, when group members are dereferenced.
    #[serde(rename = "cn")]
    pub contact: Option<Box<ContactInfo>>,
}

/// A contact returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@sf")]
    pub sort_field: Option<String>,

    /// Whether the contact may be expanded as a group.
    #[serde(rename = "@exp")]
    pub can_expand: Option<ZmBoolean>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence_id: Option<i32>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@rev")]
    pub revision_id: Option<i32>,

    #[serde(rename = "@fileAsStr")]
    pub file_as: Option<String>,

    #[serde(rename = "@email")]
    pub email: Option<String>,

    #[serde(rename = "@email2")]
    pub email2: Option<String>,

    #[serde(rename = "@email3")]
    pub email3: Option<String>,

    #[serde(rename = "@type")]
    pub contact_type: Option<String>,

    /// Whether the user owns the distribution list this contact represents.
    #[serde(rename = "@isOwner")]
    pub is_owner: Option<ZmBoolean>,

    #[serde(rename = "@isMember")]
    pub is_member: Option<ZmBoolean>,

    #[serde(rename = "@imapUid")]
    pub imap_uid: Option<i32>,

    #[serde(rename = "@modSeq")]
    pub mod_seq: Option<i32>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "a", default)]
    pub attrs: Vec<ContactAttr>,

    #[serde(rename = "m", default)]
    pub contact_group_members: Vec<ContactGroupMember>,
}

impl ContactInfo {
    /// Looks up the value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.value.as_deref())
    }
}

/// The source of an auto-complete match.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AutoCompleteMatchType {
    #[serde(rename = "gal")]
    Gal,
    #[serde(rename = "contact")]
    Contact,
    #[serde(rename = "rankingTable")]
    RankingTable,
}

/// A match returned by `AutoCompleteRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AutoCompleteMatch {
    /// The full address, including any display name.
    #[serde(rename = "@email")]
    pub email: Option<String>,

    #[serde(rename = "@type")]
    pub match_type: Option<AutoCompleteMatchType>,

    #[serde(rename = "@ranking")]
    pub ranking: Option<i32>,

    #[serde(rename = "@isGroup")]
    pub is_group: Option<ZmBoolean>,

    #[serde(rename = "@exp")]
    pub can_expand: Option<ZmBoolean>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@display")]
    pub display_name: Option<String>,

    #[serde(rename = "@first")]
    pub first_name: Option<String>,

    #[serde(rename = "@middle")]
    pub middle_name: Option<String>,

    #[serde(rename = "@last")]
    pub last_name: Option<String>,

    #[serde(rename = "@full")]
    pub full_name: Option<String>,

    #[serde(rename = "@nick")]
    pub nickname: Option<String>,

    #[serde(rename = "@company")]
    pub company: Option<String>,

    #[serde(rename = "@fileas")]
    pub file_as: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_deserialized_content, assert_serialized_content};

    #[test]
    fn serialize_contact_spec() {
        let spec = ContactSpec {
            folder: Some("7".to_string()),
            attrs: vec![
                NewContactAttr::new("firstName", "Frank"),
                NewContactAttr::new("email", "frank@example.com"),
                NewContactAttr {
                    name: "image".to_string(),
                    attachment_id: Some("upload-1".to_string()),
                    id: None,
                    part: None,
                    operation: None,
                    value: None,
                },
            ],
            ..Default::default()
        };

        let expected = r#"<cn l="7"><a n="firstName">Frank</a><a n="email">frank@example.com</a><a n="image" aid="upload-1"/></cn>"#;

        assert_serialized_content(&spec, "cn", expected);
    }

    #[test]
    fn deserialize_contact_group() {
        let xml = r#"<cn id="520" l="7" fileAsStr="Project team">
            <a n="type">group</a>
            <a n="nickname">Project team</a>
            <m type="C" value="401"><cn id="401"><a n="email">grace@example.com</a></cn></m>
            <m type="I" value="heidi@example.com"/>
        </cn>"#;

        let expected = ContactInfo {
            id: "520".to_string(),
            folder: Some("7".to_string()),
            file_as: Some("Project team".to_string()),
            attrs: vec![
                ContactAttr {
                    name: "type".to_string(),
                    part: None,
                    content_type: None,
                    size: None,
                    content_filename: None,
                    value: Some("group".to_string()),
                },
                ContactAttr {
                    name: "nickname".to_string(),
                    part: None,
                    content_type: None,
                    size: None,
                    content_filename: None,
                    value: Some("Project team".to_string()),
                },
            ],
            contact_group_members: vec![
                ContactGroupMember {
                    member_type: "C".to_string(),
                    value: "401".to_string(),
                    contact: Some(Box::new(ContactInfo {
                        id: "401".to_string(),
                        attrs: vec![ContactAttr {
                            name: "email".to_string(),
                            part: None,
                            content_type: None,
                            size: None,
                            content_filename: None,
                            value: Some("grace@example.com".to_string()),
                        }],
                        ..Default::default()
                    })),
                },
                ContactGroupMember {
                    member_type: "I".to_string(),
                    value: "heidi@example.com".to_string(),
                    contact: None,
                },
            ],
            ..Default::default()
        };

        assert_deserialized_content(xml, expected.clone());
        assert_eq!(expected.attr("nickname"), Some("Project team"));
    }
}
