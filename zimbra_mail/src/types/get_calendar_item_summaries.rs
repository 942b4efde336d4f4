/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::CalendarItemSummary;

/// A request for summaries of both appointments and tasks in a time range.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetCalendarItemSummariesResponse)]
pub struct GetCalendarItemSummariesRequest {
    #[serde(rename = "@s")]
    pub start: i64,

    #[serde(rename = "@e")]
    pub end: i64,

    #[serde(rename = "@l")]
    pub folder_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetCalendarItemSummariesResponse {
    #[serde(rename = "$value", default)]
    pub items: Vec<CalendarItemSummary>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_calendar_item_summaries::GetCalendarItemSummariesResponse,
        test_utils::{assert_deserialize_fails, assert_deserialized_content},
        AppointmentSummary, CalendarItemSummary,
    };

    #[test]
    fn test_deserialize_mixed_summaries() {
        let content = r#"<GetCalendarItemSummariesResponse xmlns="urn:zimbraMail"><appt id="600" name="Planning"/><task id="610" name="File expenses" percentComplete="40"/></GetCalendarItemSummariesResponse>"#;

        let response = GetCalendarItemSummariesResponse {
            items: vec![
                CalendarItemSummary::Appointment(AppointmentSummary {
                    id: Some("600".to_string()),
                    name: Some("Planning".to_string()),
                    ..Default::default()
                }),
                CalendarItemSummary::Task(AppointmentSummary {
                    id: Some("610".to_string()),
                    name: Some("File expenses".to_string()),
                    percent_complete: Some("40".to_string()),
                    ..Default::default()
                }),
            ],
        };

        assert_deserialized_content(content, response.clone());

        let names: Vec<_> = response
            .items
            .iter()
            .filter_map(|item| item.summary().name.as_deref())
            .collect();
        assert_eq!(names, vec!["Planning", "File expenses"]);
    }

    #[test]
    fn test_undeclared_summary_is_rejected() {
        assert_deserialize_fails::<GetCalendarItemSummariesResponse>(
            r#"<GetCalendarItemSummariesResponse xmlns="urn:zimbraMail"><journal id="1"/></GetCalendarItemSummariesResponse>"#,
        );
    }
}
