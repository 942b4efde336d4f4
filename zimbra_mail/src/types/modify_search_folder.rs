/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::ModifySearchFolderSpec;

/// A request to change the query of an existing search folder.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ModifySearchFolderResponse)]
pub struct ModifySearchFolderRequest {
    #[serde(rename = "search")]
    pub search: ModifySearchFolderSpec,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifySearchFolderResponse {}

#[cfg(test)]
mod test {
    use crate::{
        modify_search_folder::{ModifySearchFolderRequest, ModifySearchFolderResponse},
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        ModifySearchFolderSpec,
    };

    #[test]
    fn test_serialize_modify_search_folder() {
        let request = ModifySearchFolderRequest {
            search: ModifySearchFolderSpec {
                id: "301".to_string(),
                query: "is:flagged in:inbox".to_string(),
                search_types: Some("conversation".to_string()),
                sort_by: None,
            },
        };

        assert_serialized_content(
            &request,
            "ModifySearchFolderRequest",
            r#"<ModifySearchFolderRequest><search id="301" query="is:flagged in:inbox" types="conversation"/></ModifySearchFolderRequest>"#,
        );
        assert_round_trip(&request, "ModifySearchFolderRequest");
        assert_deserialized_content(
            r#"<ModifySearchFolderResponse xmlns="urn:zimbraMail"/>"#,
            ModifySearchFolderResponse {},
        );
    }
}
