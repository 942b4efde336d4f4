/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{Id, ZmBoolean};

/// A request to create a document or a new revision of one.
///
/// The content comes from exactly one of an upload, a message part, an
/// existing document revision, or the inline `content` attribute.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/SaveDocument.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SaveDocumentResponse)]
pub struct SaveDocumentRequest {
    #[serde(rename = "doc")]
    pub document: DocumentSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocumentSpec {
    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    #[serde(rename = "@desc")]
    pub description: Option<String>,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,

    /// The ID of the document to revise.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// The revision the new one is based on, for conflict detection.
    #[serde(rename = "@ver")]
    pub version: Option<i32>,

    /// Inline content.
    #[serde(rename = "@content")]
    pub content: Option<String>,

    #[serde(rename = "@descEnabled")]
    pub description_enabled: Option<ZmBoolean>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "upload")]
    pub upload: Option<Id>,

    #[serde(rename = "m")]
    pub message_part: Option<MessagePartSpec>,

    #[serde(rename = "doc")]
    pub doc_revision: Option<IdVersion>,
}

/// A part of an existing message.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessagePartSpec {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@part")]
    pub part: String,
}

/// An item ID together with a revision number.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IdVersion {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@ver")]
    pub version: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SaveDocumentResponse {
    #[serde(rename = "doc")]
    pub document: IdVersion,
}

#[cfg(test)]
mod test {
    use crate::{
        save_document::{
            DocumentSpec, IdVersion, MessagePartSpec, SaveDocumentRequest, SaveDocumentResponse,
        },
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        Id,
    };

    #[test]
    fn test_serialize_new_document_from_upload() {
        let request = SaveDocumentRequest {
            document: DocumentSpec {
                name: Some("plan.txt".to_string()),
                content_type: Some("text/plain".to_string()),
                folder_id: Some("16".to_string()),
                upload: Some(Id::new("upload-5")),
                ..Default::default()
            },
        };

        assert_serialized_content(
            &request,
            "SaveDocumentRequest",
            r#"<SaveDocumentRequest><doc name="plan.txt" ct="text/plain" l="16"><upload id="upload-5"/></doc></SaveDocumentRequest>"#,
        );
        assert_round_trip(&request, "SaveDocumentRequest");
    }

    #[test]
    fn test_serialize_revision_from_message_part() {
        let request = SaveDocumentRequest {
            document: DocumentSpec {
                id: Some("1200".to_string()),
                version: Some(3),
                message_part: Some(MessagePartSpec {
                    id: "257".to_string(),
                    part: "2".to_string(),
                }),
                ..Default::default()
            },
        };

        assert_serialized_content(
            &request,
            "SaveDocumentRequest",
            r#"<SaveDocumentRequest><doc id="1200" ver="3"><m id="257" part="2"/></doc></SaveDocumentRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_save_document_response() {
        assert_deserialized_content(
            r#"<SaveDocumentResponse xmlns="urn:zimbraMail"><doc id="1200" ver="4"/></SaveDocumentResponse>"#,
            SaveDocumentResponse {
                document: IdVersion {
                    id: "1200".to_string(),
                    version: 4,
                },
            },
        );

        assert_deserialize_fails::<SaveDocumentResponse>(
            r#"<SaveDocumentResponse xmlns="urn:zimbraMail"><doc id="1200"/></SaveDocumentResponse>"#,
        );
    }
}
