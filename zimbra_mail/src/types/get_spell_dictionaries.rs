/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request for the spell checking dictionaries available on the server.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetSpellDictionariesResponse)]
pub struct GetSpellDictionariesRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetSpellDictionariesResponse {
    #[serde(rename = "dictionary", default)]
    pub dictionaries: Vec<String>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_spell_dictionaries::{GetSpellDictionariesRequest, GetSpellDictionariesResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
    };

    #[test]
    fn test_serialize_get_spell_dictionaries() {
        assert_serialized_content(
            &GetSpellDictionariesRequest {},
            "GetSpellDictionariesRequest",
            r#"<GetSpellDictionariesRequest/>"#,
        );
    }

    #[test]
    fn test_deserialize_get_spell_dictionaries_response() {
        assert_deserialized_content(
            r#"<GetSpellDictionariesResponse xmlns="urn:zimbraMail"><dictionary>en_US</dictionary><dictionary>fr</dictionary></GetSpellDictionariesResponse>"#,
            GetSpellDictionariesResponse {
                dictionaries: vec!["en_US".to_string(), "fr".to_string()],
            },
        );
    }
}
