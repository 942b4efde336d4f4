/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{Folder, NewFolderSpec};

/// A request to create a folder.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CreateFolder.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateFolderResponse)]
pub struct CreateFolderRequest {
    #[serde(rename = "folder")]
    pub folder: NewFolderSpec,
}

/// A response to a [`CreateFolderRequest`].
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateFolderResponse {
    /// The created folder, or the existing one when `fie` was set and a
    /// folder of that name was already present.
    #[serde(rename = "folder")]
    pub folder: Option<Folder>,
}

#[cfg(test)]
mod test {
    use crate::{
        create_folder::{CreateFolderRequest, CreateFolderResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        Folder, FolderView, NewFolderSpec, ZmBoolean,
    };

    #[test]
    fn test_serialize_create_folder() {
        let mut folder = NewFolderSpec::new("Receipts");
        folder.default_view = Some(FolderView::Message);
        folder.parent_folder_id = Some("2".to_string());
        folder.fetch_if_exists = Some(ZmBoolean::TRUE);

        let request = CreateFolderRequest { folder };

        assert_serialized_content(
            &request,
            "CreateFolderRequest",
            r#"<CreateFolderRequest><folder name="Receipts" view="message" l="2" fie="1"/></CreateFolderRequest>"#,
        );
        assert_round_trip(&request, "CreateFolderRequest");
    }

    #[test]
    fn test_deserialize_create_folder_response() {
        assert_deserialized_content(
            r#"<CreateFolderResponse xmlns="urn:zimbraMail"><folder id="257" uuid="5e8c4d1a" name="Receipts" l="2" view="message" n="0" s="0"/></CreateFolderResponse>"#,
            CreateFolderResponse {
                folder: Some(Folder {
                    id: Some("257".to_string()),
                    uuid: Some("5e8c4d1a".to_string()),
                    name: Some("Receipts".to_string()),
                    parent_id: Some("2".to_string()),
                    view: Some(FolderView::Message),
                    item_count: Some(0),
                    total_size: Some(0),
                    ..Default::default()
                }),
            },
        );
    }

    #[test]
    fn test_folder_name_is_required() {
        assert_deserialize_fails::<CreateFolderRequest>(
            r#"<CreateFolderRequest><folder l="2"/></CreateFolderRequest>"#,
        );
    }
}
