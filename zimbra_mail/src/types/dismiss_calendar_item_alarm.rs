/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::UpdatedAlarmItem;

/// A request to dismiss the current alarms of appointments and tasks.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(DismissCalendarItemAlarmResponse)]
pub struct DismissCalendarItemAlarmRequest {
    #[serde(rename = "$value", default)]
    pub alarms: Vec<DismissAlarm>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum DismissAlarm {
    #[serde(rename = "appt")]
    Appointment(DismissAlarmSpec),

    #[serde(rename = "task")]
    Task(DismissAlarmSpec),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DismissAlarmSpec {
    /// The ID of the calendar item.
    #[serde(rename = "@id")]
    pub id: String,

    /// Time of dismissal, in milliseconds since the epoch.
    #[serde(rename = "@dismissedAt")]
    pub dismissed_at: i64,
}

/// A response to a [`DismissCalendarItemAlarmRequest`], carrying the next
/// alarm of each item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DismissCalendarItemAlarmResponse {
    #[serde(rename = "$value", default)]
    pub items: Vec<UpdatedAlarmItem>,
}

#[cfg(test)]
mod test {
    use crate::{
        dismiss_calendar_item_alarm::{
            DismissAlarm, DismissAlarmSpec, DismissCalendarItemAlarmRequest,
            DismissCalendarItemAlarmResponse,
        },
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        AlarmDataInfo, UpdatedAlarmInfo, UpdatedAlarmItem,
    };

    #[test]
    fn test_serialize_dismiss_alarms() {
        let request = DismissCalendarItemAlarmRequest {
            alarms: vec![
                DismissAlarm::Appointment(DismissAlarmSpec {
                    id: "600".to_string(),
                    dismissed_at: 1_792_054_000_000,
                }),
                DismissAlarm::Task(DismissAlarmSpec {
                    id: "610".to_string(),
                    dismissed_at: 1_792_054_000_000,
                }),
            ],
        };

        assert_serialized_content(
            &request,
            "DismissCalendarItemAlarmRequest",
            r#"<DismissCalendarItemAlarmRequest><appt id="600" dismissedAt="1792054000000"/><task id="610" dismissedAt="1792054000000"/></DismissCalendarItemAlarmRequest>"#,
        );
        assert_round_trip(&request, "DismissCalendarItemAlarmRequest");
    }

    #[test]
    fn test_deserialize_dismiss_response() {
        assert_deserialized_content(
            r#"<DismissCalendarItemAlarmResponse xmlns="urn:zimbraMail"><appt calItemId="600" apptId="600"><alarmData nextAlarm="1792658400000" alarmInstStart="1792659000000" invId="599" compNum="0"/></appt></DismissCalendarItemAlarmResponse>"#,
            DismissCalendarItemAlarmResponse {
                items: vec![UpdatedAlarmItem::Appointment(UpdatedAlarmInfo {
                    calendar_item_id: "600".to_string(),
                    appointment_id: Some("600".to_string()),
                    alarm_data: Some(AlarmDataInfo {
                        next_alarm: Some(1_792_658_400_000),
                        alarm_instance_start: Some(1_792_659_000_000),
                        invite_id: Some(599),
                        component_num: Some(0),
                        ..Default::default()
                    }),
                })],
            },
        );
    }

    #[test]
    fn test_dismissal_time_is_required() {
        assert_deserialize_fails::<DismissCalendarItemAlarmRequest>(
            r#"<DismissCalendarItemAlarmRequest><appt id="600"/></DismissCalendarItemAlarmRequest>"#,
        );
    }
}
