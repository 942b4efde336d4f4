/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::FreeBusyUserInfo;

/// A request for the working hours of users, expressed as free/busy slots
/// where working time is free and the rest is unavailable.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetWorkingHoursResponse)]
pub struct GetWorkingHoursRequest {
    #[serde(rename = "@s")]
    pub start: i64,

    #[serde(rename = "@e")]
    pub end: i64,

    /// Comma-separated account IDs.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// Comma-separated email addresses.
    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetWorkingHoursResponse {
    #[serde(rename = "usr", default)]
    pub users: Vec<FreeBusyUserInfo>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_working_hours::{GetWorkingHoursRequest, GetWorkingHoursResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        FreeBusySlot, FreeBusySlotInfo, FreeBusyUserInfo,
    };

    #[test]
    fn test_get_working_hours() {
        assert_serialized_content(
            &GetWorkingHoursRequest {
                start: 1_792_000_000_000,
                end: 1_792_086_400_000,
                id: None,
                name: Some("noah@example.com".to_string()),
            },
            "GetWorkingHoursRequest",
            r#"<GetWorkingHoursRequest s="1792000000000" e="1792086400000" name="noah@example.com"/>"#,
        );

        assert_deserialized_content(
            r#"<GetWorkingHoursResponse xmlns="urn:zimbraMail"><usr id="noah@example.com"><u s="1792000000000" e="1792051200000"/><f s="1792051200000" e="1792080000000"/></usr></GetWorkingHoursResponse>"#,
            GetWorkingHoursResponse {
                users: vec![FreeBusyUserInfo {
                    id: "noah@example.com".to_string(),
                    slots: vec![
                        FreeBusySlot::Unavailable(FreeBusySlotInfo::new(
                            1_792_000_000_000,
                            1_792_051_200_000,
                        )),
                        FreeBusySlot::Free(FreeBusySlotInfo::new(
                            1_792_051_200_000,
                            1_792_080_000_000,
                        )),
                    ],
                }],
            },
        );
    }
}
