/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{NewSearchFolderSpec, SearchFolder};

/// A request to create a search folder, a folder whose contents are the
/// results of a saved query.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateSearchFolderResponse)]
pub struct CreateSearchFolderRequest {
    #[serde(rename = "search")]
    pub search: NewSearchFolderSpec,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateSearchFolderResponse {
    #[serde(rename = "search")]
    pub search: SearchFolder,
}

#[cfg(test)]
mod test {
    use crate::{
        create_search_folder::{CreateSearchFolderRequest, CreateSearchFolderResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_serialized_content,
        },
        NewSearchFolderSpec, SearchFolder,
    };

    #[test]
    fn test_serialize_create_search_folder() {
        let mut search = NewSearchFolderSpec::new("Unread invoices", "is:unread subject:invoice");
        search.search_types = Some("message".to_string());
        search.parent_folder_id = Some("1".to_string());

        assert_serialized_content(
            &CreateSearchFolderRequest { search },
            "CreateSearchFolderRequest",
            r#"<CreateSearchFolderRequest><search name="Unread invoices" query="is:unread subject:invoice" types="message" l="1"/></CreateSearchFolderRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_create_search_folder_response() {
        assert_deserialized_content(
            r#"<CreateSearchFolderResponse xmlns="urn:zimbraMail"><search id="302" name="Unread invoices" l="1" query="is:unread subject:invoice" types="message"/></CreateSearchFolderResponse>"#,
            CreateSearchFolderResponse {
                search: SearchFolder {
                    id: Some("302".to_string()),
                    name: Some("Unread invoices".to_string()),
                    parent_id: Some("1".to_string()),
                    query: Some("is:unread subject:invoice".to_string()),
                    search_types: Some("message".to_string()),
                    ..Default::default()
                },
            },
        );
    }

    #[test]
    fn test_query_is_required() {
        assert_deserialize_fails::<CreateSearchFolderRequest>(
            r#"<CreateSearchFolderRequest><search name="Nothing"/></CreateSearchFolderRequest>"#,
        );
    }
}
