/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{FreeBusyUserInfo, FreeBusyUserSpec};

/// A request for the free/busy schedules of a set of users.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/GetFreeBusy.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetFreeBusyResponse)]
pub struct GetFreeBusyRequest {
    #[serde(rename = "@s")]
    pub start: i64,

    #[serde(rename = "@e")]
    pub end: i64,

    /// Deprecated: use `users` instead. Comma-separated account IDs.
    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    /// Deprecated: use `users` instead. Comma-separated account IDs.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// Deprecated: use `users` instead. Comma-separated email addresses.
    #[serde(rename = "@name")]
    pub name: Option<String>,

    /// The UID of an appointment whose own time should show as free.
    #[serde(rename = "@excludeUid")]
    pub exclude_uid: Option<String>,

    #[serde(rename = "usr", default)]
    pub users: Vec<FreeBusyUserSpec>,
}

impl GetFreeBusyRequest {
    pub fn new(start: i64, end: i64, users: Vec<FreeBusyUserSpec>) -> Self {
        Self {
            start,
            end,
            uid: None,
            id: None,
            name: None,
            exclude_uid: None,
            users,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetFreeBusyResponse {
    #[serde(rename = "usr", default)]
    pub users: Vec<FreeBusyUserInfo>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_free_busy::{GetFreeBusyRequest, GetFreeBusyResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        FreeBusySlot, FreeBusySlotInfo, FreeBusyUserInfo, FreeBusyUserSpec,
    };

    #[test]
    fn test_serialize_get_free_busy() {
        let request = GetFreeBusyRequest::new(
            1_792_000_000_000,
            1_792_086_400_000,
            vec![
                FreeBusyUserSpec::by_name("noah@example.com"),
                FreeBusyUserSpec::by_name("lead@example.com"),
            ],
        );

        assert_serialized_content(
            &request,
            "GetFreeBusyRequest",
            r#"<GetFreeBusyRequest s="1792000000000" e="1792086400000"><usr name="noah@example.com"/><usr name="lead@example.com"/></GetFreeBusyRequest>"#,
        );
        assert_round_trip(&request, "GetFreeBusyRequest");
    }

    #[test]
    fn test_serialize_deprecated_name_list() {
        let mut request = GetFreeBusyRequest::new(1_792_000_000_000, 1_792_086_400_000, vec![]);
        request.name = Some("noah@example.com,lead@example.com".to_string());

        assert_serialized_content(
            &request,
            "GetFreeBusyRequest",
            r#"<GetFreeBusyRequest s="1792000000000" e="1792086400000" name="noah@example.com,lead@example.com"/>"#,
        );
    }

    #[test]
    fn test_deserialize_get_free_busy_response() {
        let content = r#"<GetFreeBusyResponse xmlns="urn:zimbraMail">
            <usr id="noah@example.com">
                <f s="1792000000000" e="1792054800000"/>
                <b s="1792054800000" e="1792058400000"/>
                <f s="1792058400000" e="1792086400000"/>
            </usr>
        </GetFreeBusyResponse>"#;

        let expected = GetFreeBusyResponse {
            users: vec![FreeBusyUserInfo {
                id: "noah@example.com".to_string(),
                slots: vec![
                    FreeBusySlot::Free(FreeBusySlotInfo::new(1_792_000_000_000, 1_792_054_800_000)),
                    FreeBusySlot::Busy(FreeBusySlotInfo::new(1_792_054_800_000, 1_792_058_400_000)),
                    FreeBusySlot::Free(FreeBusySlotInfo::new(1_792_058_400_000, 1_792_086_400_000)),
                ],
            }],
        };

        assert_deserialized_content(content, expected);
    }

    #[test]
    fn test_unknown_slot_kind_is_rejected() {
        assert_deserialize_fails::<GetFreeBusyResponse>(
            r#"<GetFreeBusyResponse xmlns="urn:zimbraMail"><usr id="x"><z s="1" e="2"/></usr></GetFreeBusyResponse>"#,
        );
    }
}
