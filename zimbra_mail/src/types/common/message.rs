/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{AttributeName, CalTZInfo, InvitationInfo, InviteInfo, KeyValuePair, MailCustomMetadata, ZmBoolean};

/// The role of an address in a message.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AddressType {
    #[serde(rename = "f")]
    From,
    #[serde(rename = "t")]
    To,
    #[serde(rename = "c")]
    Cc,
    #[serde(rename = "b")]
    Bcc,
    #[serde(rename = "r")]
    ReplyTo,
    #[serde(rename = "s")]
    Sender,
    #[serde(rename = "n")]
    ReadReceipt,
    #[serde(rename = "rf")]
    ResentFrom,
}

/// An address in a message returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmailInfo {
    #[serde(rename = "@a")]
    pub address: String,

    /// The display name.
    #[serde(rename = "@d")]
    pub display: Option<String>,

    /// The personal name part of the address.
    #[serde(rename = "@p")]
    pub personal: Option<String>,

    #[serde(rename = "@t")]
    pub address_type: Option<AddressType>,

    #[serde(rename = "@isGroup")]
    pub is_group: Option<ZmBoolean>,

    /// Whether the group may be expanded by the current user.
    #[serde(rename = "@exp")]
    pub can_expand: Option<ZmBoolean>,
}

/// An address supplied by the client in a message.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmailAddrInfo {
    #[serde(rename = "@a")]
    pub address: String,

    #[serde(rename = "@t")]
    pub address_type: Option<AddressType>,

    #[serde(rename = "@p")]
    pub personal: Option<String>,

    /// Whether to add this address to the user's contacts.
    #[serde(rename = "@add")]
    pub add_to_contacts: Option<ZmBoolean>,
}

impl EmailAddrInfo {
    pub fn new(address: impl Into<String>, address_type: AddressType) -> Self {
        Self {
            address: address.into(),
            address_type: Some(address_type),
            personal: None,
            add_to_contacts: None,
        }
    }
}

/// A raw header set on an outgoing message.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Header {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}

/// The message to add to a folder with `AddMsgRequest`.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AddMsgSpec {
    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    /// The destination folder, by ID or by path.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    /// Skip calendar processing of any invite in the message.
    #[serde(rename = "@noICal")]
    pub no_ical: Option<ZmBoolean>,

    /// The received date, in milliseconds since the epoch.
    #[serde(rename = "@d")]
    pub date_received: Option<i64>,

    /// The ID of an uploaded message to add instead of inline content.
    #[serde(rename = "@aid")]
    pub attachment_id: Option<String>,

    /// The full RFC 822 content of the message.
    #[serde(rename = "content")]
    pub content: Option<String>,
}

/// Selects a message to retrieve and how it should be returned.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MsgSpec {
    #[serde(rename = "@id")]
    pub id: String,

    /// Restrict the response to the given MIME part.
    #[serde(rename = "@part")]
    pub part: Option<String>,

    /// Return the raw RFC 822 content instead of a parsed structure.
    #[serde(rename = "@raw")]
    pub raw: Option<ZmBoolean>,

    /// Mark the message as read.
    #[serde(rename = "@read")]
    pub mark_read: Option<ZmBoolean>,

    /// Truncate inlined body content to this many bytes.
    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@useContentUrl")]
    pub use_content_url: Option<ZmBoolean>,

    /// Prefer the HTML alternative when inlining the body.
    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    /// Neuter image references in HTML bodies.
    #[serde(rename = "@neuter")]
    pub neuter: Option<ZmBoolean>,

    /// The recurrence ID of an instance, for invite messages.
    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,

    #[serde(rename = "@needExp")]
    pub need_can_expand: Option<ZmBoolean>,

    /// Additional headers to return.
    #[serde(rename = "header", default)]
    pub headers: Vec<AttributeName>,
}

impl MsgSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            part: None,
            raw: None,
            mark_read: None,
            max_inlined_length: None,
            use_content_url: None,
            want_html: None,
            neuter: None,
            recurrence_id_z: None,
            need_can_expand: None,
            headers: Vec::new(),
        }
    }
}

/// A MIME part of a message being composed.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MimePartInfo {
    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    /// The content ID, for inline parts.
    #[serde(rename = "@ci")]
    pub content_id: Option<String>,

    #[serde(rename = "content")]
    pub content: Option<String>,

    #[serde(rename = "mp", default)]
    pub parts: Vec<MimePartInfo>,

    #[serde(rename = "attach")]
    pub attachments: Option<AttachmentsInfo>,
}

/// Attachments of a message being composed.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AttachmentsInfo {
    /// Comma-separated IDs of uploaded attachments.
    #[serde(rename = "@aid")]
    pub attachment_ids: Option<String>,

    #[serde(rename = "$value", default)]
    pub attachments: Vec<AttachSpec>,
}

/// A reference to existing content to attach to a message.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AttachSpec {
    /// A part of an existing message.
    #[serde(rename = "mp")]
    MimePart(MimePartAttachSpec),

    /// An existing message, attached as `message/rfc822`.
    #[serde(rename = "m")]
    Message(MsgAttachSpec),

    /// An existing contact, attached as a vCard.
    #[serde(rename = "cn")]
    Contact(ContactAttachSpec),

    /// An existing document.
    #[serde(rename = "doc")]
    Document(DocAttachSpec),
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MimePartAttachSpec {
    #[serde(rename = "@mid")]
    pub message_id: String,

    #[serde(rename = "@part")]
    pub part: String,

    /// Do not fail if the part no longer exists.
    #[serde(rename = "@optional")]
    pub optional: Option<ZmBoolean>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MsgAttachSpec {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@optional")]
    pub optional: Option<ZmBoolean>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactAttachSpec {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@optional")]
    pub optional: Option<ZmBoolean>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocAttachSpec {
    #[serde(rename = "@path")]
    pub path: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@ver")]
    pub version: Option<i32>,

    #[serde(rename = "@optional")]
    pub optional: Option<ZmBoolean>,
}

/// The type of reply a composed message represents.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ReplyType {
    #[serde(rename = "r")]
    Reply,
    #[serde(rename = "w")]
    Forward,
}

/// A message composed by the client, to be sent or saved.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Msg {
    /// The ID of an existing draft, when saving over it.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// The ID of an uploaded message to send instead of composed content.
    #[serde(rename = "@aid")]
    pub attachment_id: Option<String>,

    /// The ID of the message being replied to or forwarded.
    #[serde(rename = "@origid")]
    pub original_id: Option<String>,

    #[serde(rename = "@rt")]
    pub reply_type: Option<ReplyType>,

    /// The ID of the identity to send as.
    #[serde(rename = "@idnt")]
    pub identity_id: Option<String>,

    /// The folder to save a draft in.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Time at which to send a draft automatically, in milliseconds since the
    /// epoch.
    #[serde(rename = "@autoSendTime")]
    pub auto_send_time: Option<i64>,

    #[serde(rename = "header", default)]
    pub headers: Vec<Header>,

    #[serde(rename = "e", default)]
    pub addresses: Vec<EmailAddrInfo>,

    #[serde(rename = "su")]
    pub subject: Option<String>,

    /// The Message-ID being replied to.
    #[serde(rename = "irt")]
    pub in_reply_to: Option<String>,

    /// Raw RFC 822 content, instead of `mime_part`.
    #[serde(rename = "content")]
    pub content: Option<String>,

    #[serde(rename = "mp")]
    pub mime_part: Option<MimePartInfo>,

    #[serde(rename = "attach")]
    pub attachments: Option<AttachmentsInfo>,

    /// An invite, for calendar requests.
    #[serde(rename = "inv")]
    pub invite: Option<InvitationInfo>,

    /// Timezones referenced by the invite.
    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    /// An iCalendar fragment to send alongside the message.
    #[serde(rename = "fr")]
    pub fragment: Option<String>,
}

/// A MIME part of a message returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct PartInfo {
    #[serde(rename = "@part")]
    pub part: String,

    #[serde(rename = "@ct")]
    pub content_type: String,

    #[serde(rename = "@s")]
    pub size: Option<i64>,

    /// The content disposition, `inline` or `attachment`.
    #[serde(rename = "@cd")]
    pub content_disposition: Option<String>,

    #[serde(rename = "@filename")]
    pub filename: Option<String>,

    #[serde(rename = "@ci")]
    pub content_id: Option<String>,

    #[serde(rename = "@cl")]
    pub content_location: Option<String>,

    /// Whether this part is the body of the message.
    #[serde(rename = "@body")]
    pub body: Option<ZmBoolean>,

    /// Whether inlined content was truncated.
    #[serde(rename = "@truncated")]
    pub truncated: Option<ZmBoolean>,

    #[serde(rename = "content")]
    pub content: Option<String>,

    #[serde(rename = "mp", default)]
    pub parts: Vec<PartInfo>,
}

/// A message returned by the server.
///
/// Depending on the request, only a subset of the fields is populated: search
/// and sync responses carry summary data, while `GetMsgResponse` carries the
/// full structure.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageInfo {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@imapUid")]
    pub imap_uid: Option<i32>,

    /// The ID of the conversation the message belongs to.
    #[serde(rename = "@cid")]
    pub conversation_id: Option<String>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@s")]
    pub size: Option<i64>,

    /// The date of the message, in milliseconds since the epoch.
    #[serde(rename = "@d")]
    pub date: Option<i64>,

    /// The sent date header, in milliseconds since the epoch.
    #[serde(rename = "@sd")]
    pub sent_date: Option<i64>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    /// The modified date of the metadata, in seconds since the epoch.
    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    /// The change sequence of the last metadata change.
    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    /// The sort field value, for search hits.
    #[serde(rename = "@sf")]
    pub sort_field: Option<String>,

    #[serde(rename = "@forAcct")]
    pub draft_account_id: Option<String>,

    #[serde(rename = "@autoSendTime")]
    pub auto_send_time: Option<i64>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    /// A fragment of the body.
    #[serde(rename = "fr")]
    pub fragment: Option<String>,

    #[serde(rename = "e", default)]
    pub emails: Vec<EmailInfo>,

    #[serde(rename = "su")]
    pub subject: Option<String>,

    /// The Message-ID header.
    #[serde(rename = "mid")]
    pub message_id_header: Option<String>,

    /// The In-Reply-To header.
    #[serde(rename = "irt")]
    pub in_reply_to: Option<String>,

    #[serde(rename = "inv")]
    pub invite: Option<InviteInfo>,

    #[serde(rename = "header", default)]
    pub headers: Vec<KeyValuePair>,

    #[serde(rename = "mp", default)]
    pub parts: Vec<PartInfo>,
}

/// Selects a conversation to retrieve.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConversationSpec {
    #[serde(rename = "@id")]
    pub id: String,

    /// Which messages to inline: `1`/`first`, `u`/`unread`, `!`/`u1`, `all`
    /// or a specific message ID.
    #[serde(rename = "@fetch")]
    pub inline_rule: Option<String>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@needExp")]
    pub need_can_expand: Option<ZmBoolean>,

    #[serde(rename = "header", default)]
    pub headers: Vec<AttributeName>,
}

impl ConversationSpec {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inline_rule: None,
            want_html: None,
            max_inlined_length: None,
            need_can_expand: None,
            headers: Vec::new(),
        }
    }
}

/// A conversation returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ConversationInfo {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// The number of messages in the conversation.
    #[serde(rename = "@n")]
    pub num: Option<i32>,

    /// The number of unread messages in the conversation.
    #[serde(rename = "@u")]
    pub num_unread: Option<i32>,

    /// The total number of messages, including those in trash and junk.
    #[serde(rename = "@total")]
    pub total_size: Option<i32>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    /// Whether some participants were left out of `emails`.
    #[serde(rename = "@elided")]
    pub elided: Option<ZmBoolean>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@sf")]
    pub sort_field: Option<String>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "su")]
    pub subject: Option<String>,

    #[serde(rename = "fr")]
    pub fragment: Option<String>,

    #[serde(rename = "e", default)]
    pub emails: Vec<EmailInfo>,

    #[serde(rename = "m", default)]
    pub messages: Vec<MessageInfo>,
}

/// A document returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocumentInfo {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@ver")]
    pub version: Option<i32>,

    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    #[serde(rename = "@s")]
    pub size: Option<i64>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    /// The name of the creator of the document.
    #[serde(rename = "@cr")]
    pub creator: Option<String>,

    /// The name of the last editor of the document.
    #[serde(rename = "@leb")]
    pub last_edited_by: Option<String>,

    #[serde(rename = "@desc")]
    pub description: Option<String>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,

    #[serde(rename = "fr")]
    pub fragment: Option<String>,
}

/// A note returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NoteInfo {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    /// The bounds of the note, as `x,y[,w,h]`.
    #[serde(rename = "@pos")]
    pub bounds: Option<String>,

    #[serde(rename = "@color")]
    pub color: Option<u8>,

    #[serde(rename = "@rgb")]
    pub rgb: Option<String>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "content")]
    pub content: Option<String>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
        assert_serialized_content,
    };

    #[test]
    fn serialize_composed_message() {
        let msg = Msg {
            addresses: vec![
                EmailAddrInfo::new("alice@example.com", AddressType::To),
                EmailAddrInfo::new("bob@example.com", AddressType::Cc),
            ],
            subject: Some("Quarterly numbers".to_string()),
            mime_part: Some(MimePartInfo {
                content_type: Some("text/plain".to_string()),
                content: Some("See attached.".to_string()),
                attachments: None,
                ..Default::default()
            }),
            attachments: Some(AttachmentsInfo {
                attachment_ids: None,
                attachments: vec![
                    AttachSpec::MimePart(MimePartAttachSpec {
                        message_id: "301".to_string(),
                        part: "2".to_string(),
                        optional: None,
                    }),
                    AttachSpec::Contact(ContactAttachSpec {
                        id: "412".to_string(),
                        optional: Some(ZmBoolean::TRUE),
                    }),
                ],
            }),
            ..Default::default()
        };

        let expected = r#"<m><e a="alice@example.com" t="t"/><e a="bob@example.com" t="c"/><su>Quarterly numbers</su><mp ct="text/plain"><content>See attached.</content></mp><attach><mp mid="301" part="2"/><cn id="412" optional="1"/></attach></m>"#;

        assert_serialized_content(&msg, "m", expected);
        assert_round_trip(&msg, "m");
    }

    #[test]
    fn deserialize_attachments_by_tag() {
        let xml = r#"<attach aid="u1,u2"><m id="88"/><doc path="/Briefcase/plan.txt" ver="3"/><mp mid="10" part="1.2"/></attach>"#;

        let expected = AttachmentsInfo {
            attachment_ids: Some("u1,u2".to_string()),
            attachments: vec![
                AttachSpec::Message(MsgAttachSpec {
                    id: "88".to_string(),
                    optional: None,
                }),
                AttachSpec::Document(DocAttachSpec {
                    path: Some("/Briefcase/plan.txt".to_string()),
                    id: None,
                    version: Some(3),
                    optional: None,
                }),
                AttachSpec::MimePart(MimePartAttachSpec {
                    message_id: "10".to_string(),
                    part: "1.2".to_string(),
                    optional: None,
                }),
            ],
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn undeclared_attachment_tag_is_rejected() {
        assert_deserialize_fails::<AttachmentsInfo>(r#"<attach><link id="1"/></attach>"#);
    }

    #[test]
    fn deserialize_message_info() {
        let xml = r#"<m id="257" cid="-257" l="2" f="ua" s="1024" d="1700000000000" rev="12">
            <e a="carol@example.com" d="Carol" p="Carol Smith" t="f"/>
            <e a="dave@example.com" t="t"/>
            <su>Lunch?</su>
            <fr>Are you free</fr>
            <mp part="TEXT" ct="text/plain" s="15" body="1"><content>Are you free?</content></mp>
        </m>"#;

        let expected = MessageInfo {
            id: Some("257".to_string()),
            conversation_id: Some("-257".to_string()),
            folder: Some("2".to_string()),
            flags: Some("ua".to_string()),
            size: Some(1024),
            date: Some(1_700_000_000_000),
            revision: Some(12),
            emails: vec![
                EmailInfo {
                    address: "carol@example.com".to_string(),
                    display: Some("Carol".to_string()),
                    personal: Some("Carol Smith".to_string()),
                    address_type: Some(AddressType::From),
                    is_group: None,
                    can_expand: None,
                },
                EmailInfo {
                    address: "dave@example.com".to_string(),
                    display: None,
                    personal: None,
                    address_type: Some(AddressType::To),
                    is_group: None,
                    can_expand: None,
                },
            ],
            subject: Some("Lunch?".to_string()),
            fragment: Some("Are you free".to_string()),
            parts: vec![PartInfo {
                part: "TEXT".to_string(),
                content_type: "text/plain".to_string(),
                size: Some(15),
                content_disposition: None,
                filename: None,
                content_id: None,
                content_location: None,
                body: Some(ZmBoolean::TRUE),
                truncated: None,
                content: Some("Are you free?".to_string()),
                parts: vec![],
            }],
            ..Default::default()
        };

        assert_deserialized_content(xml, expected);
    }
}
