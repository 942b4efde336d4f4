/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{FolderNode, FolderView, GetFolderSpec, TriState, ZmBoolean};

/// A request for a folder hierarchy.
///
/// Without a `folder` element, the hierarchy is rooted at the mailbox's
/// root folder.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetFolder.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetFolderResponse)]
pub struct GetFolderRequest {
    /// Include folders the user cannot read but which have readable
    /// descendants. Defaults to `false`.
    #[serde(rename = "@visible")]
    pub is_visible: Option<ZmBoolean>,

    /// Include the display names of grantees in folder ACLs. Defaults to
    /// `false`.
    #[serde(rename = "@needGranteeName")]
    pub need_grantee_name: Option<ZmBoolean>,

    /// Only return folders of this view, and their ancestors.
    #[serde(rename = "@view")]
    pub view: Option<FolderView>,

    /// The depth of subfolders to return; negative for no limit.
    #[serde(rename = "@depth")]
    pub depth: Option<i32>,

    /// Traverse mountpoints and include the remote folders.
    #[serde(rename = "@tr")]
    pub traverse_mountpoints: Option<ZmBoolean>,

    /// Return broken mountpoints instead of failing the request.
    #[serde(rename = "@allowErrors")]
    pub allow_errors: Option<ZmBoolean>,

    #[serde(rename = "folder")]
    pub folder: Option<GetFolderSpec>,
}

impl GetFolderRequest {
    pub fn visible(&self) -> bool {
        self.is_visible.resolve(false)
    }

    pub fn traverse_mountpoints(&self) -> bool {
        self.traverse_mountpoints.resolve(false)
    }
}

/// A response to a [`GetFolderRequest`].
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetFolderResponse {
    /// The root of the requested hierarchy.
    #[serde(rename = "$value")]
    pub folder: Option<FolderNode>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_folder::{GetFolderRequest, GetFolderResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_serialized_content,
        },
        Folder, FolderNode, FolderView, GetFolderSpec, Mountpoint, ZmBoolean,
    };

    #[test]
    fn test_serialize_get_folder() {
        assert_serialized_content(
            &GetFolderRequest::default(),
            "GetFolderRequest",
            r#"<GetFolderRequest/>"#,
        );

        let request = GetFolderRequest {
            view: Some(FolderView::Appointment),
            depth: Some(1),
            traverse_mountpoints: Some(ZmBoolean::TRUE),
            folder: Some(GetFolderSpec {
                path: Some("/Calendar".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_serialized_content(
            &request,
            "GetFolderRequest",
            r#"<GetFolderRequest view="appointment" depth="1" tr="1"><folder path="/Calendar"/></GetFolderRequest>"#,
        );
    }

    #[test]
    fn test_flags_default_to_false() {
        let request = GetFolderRequest::default();
        assert!(!request.visible());
        assert!(!request.traverse_mountpoints());
    }

    #[test]
    fn test_deserialize_get_folder_response() {
        let content = r#"<GetFolderResponse xmlns="urn:zimbraMail">
            <folder id="1" name="USER_ROOT" view="conversation">
                <folder id="10" name="Calendar" l="1" view="appointment"/>
                <link id="300" name="Team Calendar" l="1" view="appointment" broken="1"/>
            </folder>
        </GetFolderResponse>"#;

        let expected = GetFolderResponse {
            folder: Some(FolderNode::Folder(Folder {
                id: Some("1".to_string()),
                name: Some("USER_ROOT".to_string()),
                view: Some(FolderView::Conversation),
                subfolders: vec![
                    FolderNode::Folder(Folder {
                        id: Some("10".to_string()),
                        name: Some("Calendar".to_string()),
                        parent_id: Some("1".to_string()),
                        view: Some(FolderView::Appointment),
                        ..Default::default()
                    }),
                    FolderNode::Mountpoint(Mountpoint {
                        id: Some("300".to_string()),
                        name: Some("Team Calendar".to_string()),
                        parent_id: Some("1".to_string()),
                        view: Some(FolderView::Appointment),
                        broken: Some(ZmBoolean::TRUE),
                        ..Default::default()
                    }),
                ],
                ..Default::default()
            })),
        };

        assert_deserialized_content(content, expected);
    }

    #[test]
    fn test_undeclared_folder_kind_is_rejected() {
        assert_deserialize_fails::<GetFolderResponse>(
            r#"<GetFolderResponse xmlns="urn:zimbraMail"><mailbox id="1"/></GetFolderResponse>"#,
        );
    }
}
