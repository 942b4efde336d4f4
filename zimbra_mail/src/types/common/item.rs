/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{
    CalendarItemInfo, ContactInfo, ConversationInfo, DocumentInfo, Folder, MessageInfo, NoteInfo,
    TagInfo,
};

/// An item of any type stored in a mailbox.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum MailItem {
    #[serde(rename = "folder")]
    Folder(Folder),

    #[serde(rename = "tag")]
    Tag(TagInfo),

    #[serde(rename = "note")]
    Note(NoteInfo),

    #[serde(rename = "cn")]
    Contact(ContactInfo),

    #[serde(rename = "appt")]
    Appointment(CalendarItemInfo),

    #[serde(rename = "task")]
    Task(CalendarItemInfo),

    #[serde(rename = "c")]
    Conversation(ConversationInfo),

    #[serde(rename = "doc")]
    Document(DocumentInfo),

    #[serde(rename = "m")]
    Message(MessageInfo),

    #[serde(rename = "chat")]
    Chat(MessageInfo),
}

impl MailItem {
    pub fn id(&self) -> Option<&str> {
        match self {
            MailItem::Folder(folder) => folder.id.as_deref(),
            MailItem::Tag(tag) => Some(&tag.id),
            MailItem::Note(note) => note.id.as_deref(),
            MailItem::Contact(contact) => Some(&contact.id),
            MailItem::Appointment(item) | MailItem::Task(item) => item.id.as_deref(),
            MailItem::Conversation(conv) => conv.id.as_deref(),
            MailItem::Document(doc) => doc.id.as_deref(),
            MailItem::Message(msg) | MailItem::Chat(msg) => msg.id.as_deref(),
        }
    }
}

/// Selects an item by ID, by folder and name, or by path.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ItemSpec {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// The folder to look the item up in, by ID.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    /// The name of the item within `folder`.
    #[serde(rename = "@name")]
    pub name: Option<String>,

    /// The absolute path of the item.
    #[serde(rename = "@path")]
    pub path: Option<String>,
}

impl ItemSpec {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn by_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_deserialize_fails;

    #[derive(Debug, Deserialize)]
    struct Items {
        #[serde(rename = "$value", default)]
        items: Vec<MailItem>,
    }

    #[test]
    fn item_tags_map_to_variants() {
        let xml = r#"<items><folder id="2" name="Inbox"/><tag id="64" name="Work"/><note id="5"/><cn id="6"/><appt id="7"/><task id="8"/><c id="-9"/><doc id="10"/><m id="11"/><chat id="12"/></items>"#;

        let Items { items } = quick_xml::de::from_str(xml).expect("items should deserialize");

        let ids: Vec<_> = items.iter().filter_map(MailItem::id).collect();
        assert_eq!(ids, ["2", "64", "5", "6", "7", "8", "-9", "10", "11", "12"]);
        assert!(matches!(items[0], MailItem::Folder(_)));
        assert!(matches!(items[4], MailItem::Appointment(_)));
        assert!(matches!(items[5], MailItem::Task(_)));
        assert!(matches!(items[9], MailItem::Chat(_)));
    }

    #[test]
    fn undeclared_item_tag_is_rejected() {
        assert_deserialize_fails::<Items>(r#"<items><wiki id="1"/></items>"#);
    }
}
