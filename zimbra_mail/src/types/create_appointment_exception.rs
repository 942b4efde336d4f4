/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalEcho, Msg, ZmBoolean};

/// A request to change a single instance of a recurring appointment.
///
/// The invite in `message` must carry an `exceptId` naming the instance.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateAppointmentExceptionResponse)]
pub struct CreateAppointmentExceptionRequest {
    /// The ID of the series' default invite.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@comp")]
    pub component_num: String,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@echo")]
    pub echo: Option<ZmBoolean>,

    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@neuter")]
    pub neuter: Option<ZmBoolean>,

    #[serde(rename = "@forcesend")]
    pub force_send: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateAppointmentExceptionResponse {
    #[serde(rename = "@calItemId")]
    pub calendar_item_id: Option<String>,

    /// Deprecated: the same value as `calendar_item_id`.
    #[serde(rename = "@apptId")]
    pub appointment_id: Option<String>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<String>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "echo")]
    pub echo: Option<CalEcho>,
}

#[cfg(test)]
mod test {
    use crate::{
        create_appointment_exception::{
            CreateAppointmentExceptionRequest, CreateAppointmentExceptionResponse,
        },
        test_utils::{assert_deserialized_content, assert_serialized_content},
        DtTimeInfo, InstanceRecurIdInfo, InvitationInfo, InviteComponent, Msg,
    };

    #[test]
    fn test_serialize_create_appointment_exception() {
        let request = CreateAppointmentExceptionRequest {
            id: "600-599".to_string(),
            component_num: "0".to_string(),
            modified_sequence: None,
            revision: None,
            echo: None,
            max_inlined_length: None,
            want_html: None,
            neuter: None,
            force_send: None,
            message: Some(Msg {
                invite: Some(InvitationInfo::with_component(InviteComponent {
                    exception_id: Some(InstanceRecurIdInfo {
                        range: None,
                        date_time: Some("20261027T090000".to_string()),
                        timezone: Some("Europe/Berlin".to_string()),
                    }),
                    start: Some(DtTimeInfo::with_timezone(
                        "20261027T140000",
                        "Europe/Berlin",
                    )),
                    ..Default::default()
                })),
                ..Default::default()
            }),
        };

        assert_serialized_content(
            &request,
            "CreateAppointmentExceptionRequest",
            r#"<CreateAppointmentExceptionRequest id="600-599" comp="0"><m><inv><comp><exceptId d="20261027T090000" tz="Europe/Berlin"/><s d="20261027T140000" tz="Europe/Berlin"/></comp></inv></m></CreateAppointmentExceptionRequest>"#,
        );
    }

    #[test]
    fn test_deserialize_create_appointment_exception_response() {
        assert_deserialized_content(
            r#"<CreateAppointmentExceptionResponse xmlns="urn:zimbraMail" calItemId="600" apptId="600" invId="600-620"/>"#,
            CreateAppointmentExceptionResponse {
                calendar_item_id: Some("600".to_string()),
                appointment_id: Some("600".to_string()),
                invite_id: Some("600-620".to_string()),
                ..Default::default()
            },
        );
    }
}
