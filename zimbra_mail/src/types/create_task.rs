/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalEcho, Msg, TriState, ZmBoolean};

/// A request to create a task.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateTaskResponse)]
pub struct CreateTaskRequest {
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

impl CreateTaskRequest {
    pub fn new(message: Msg) -> Self {
        Self {
            message: Some(message),
            ..Default::default()
        }
    }

    pub fn echo(&self) -> bool {
        self.echo.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateTaskResponse {
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
        create_task::{CreateTaskRequest, CreateTaskResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        DtTimeInfo, InvitationInfo, InviteComponent, InviteStatus, Msg,
    };

    #[test]
    fn test_serialize_create_task() {
        let request = CreateTaskRequest::new(Msg {
            folder: Some("15".to_string()),
            subject: Some("File expenses".to_string()),
            invite: Some(InvitationInfo::with_component(InviteComponent {
                name: Some("File expenses".to_string()),
                priority: Some("1".to_string()),
                percent_complete: Some("0".to_string()),
                status: Some(InviteStatus::NeedsAction),
                start: Some(DtTimeInfo::new("20261020")),
                ..Default::default()
            })),
            ..Default::default()
        });

        let expected = r#"<CreateTaskRequest><m l="15"><su>File expenses</su><inv><comp priority="1" name="File expenses" percentComplete="0" status="NEED"><s d="20261020"/></comp></inv></m></CreateTaskRequest>"#;

        assert_serialized_content(&request, "CreateTaskRequest", expected);
        assert!(!request.echo());
    }

    #[test]
    fn test_deserialize_create_task_response() {
        assert_deserialized_content(
            r#"<CreateTaskResponse xmlns="urn:zimbraMail" calItemId="610" apptId="610" invId="610-609"/>"#,
            CreateTaskResponse {
                calendar_item_id: Some("610".to_string()),
                appointment_id: Some("610".to_string()),
                invite_id: Some("610-609".to_string()),
                ..Default::default()
            },
        );
    }
}
