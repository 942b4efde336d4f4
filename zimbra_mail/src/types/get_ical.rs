/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

/// A request for calendar data in iCalendar format, either a single invite
/// or every item in a time range.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetICalResponse)]
pub struct GetICalRequest {
    /// The ID of an invite.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@s")]
    pub start: Option<i64>,

    #[serde(rename = "@e")]
    pub end: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetICalResponse {
    #[serde(rename = "ical")]
    pub content: ICalContent,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ICalContent {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "$text", default)]
    pub ical: String,
}

#[cfg(test)]
mod test {
    use crate::{
        get_ical::{GetICalRequest, GetICalResponse, ICalContent},
        test_utils::{assert_deserialized_content, assert_serialized_content},
    };

    #[test]
    fn test_get_ical() {
        assert_serialized_content(
            &GetICalRequest {
                id: Some("600-599".to_string()),
                ..Default::default()
            },
            "GetICalRequest",
            r#"<GetICalRequest id="600-599"/>"#,
        );

        assert_deserialized_content(
            r#"<GetICalResponse xmlns="urn:zimbraMail"><ical id="600-599">BEGIN:VCALENDAR
VERSION:2.0
END:VCALENDAR</ical></GetICalResponse>"#,
            GetICalResponse {
                content: ICalContent {
                    id: Some("600-599".to_string()),
                    ical: "BEGIN:VCALENDAR\nVERSION:2.0\nEND:VCALENDAR".to_string(),
                },
            },
        );
    }
}
