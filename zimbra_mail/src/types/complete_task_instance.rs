/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, DtTimeInfo};

/// A request to mark one instance of a recurring task as completed.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CompleteTaskInstanceResponse)]
pub struct CompleteTaskInstanceRequest {
    #[serde(rename = "@id")]
    pub id: String,

    /// The start of the instance being completed.
    #[serde(rename = "exceptId")]
    pub exception_id: DtTimeInfo,

    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CompleteTaskInstanceResponse {}

#[cfg(test)]
mod test {
    use crate::{
        complete_task_instance::{CompleteTaskInstanceRequest, CompleteTaskInstanceResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        CalTZInfo, DtTimeInfo,
    };

    #[test]
    fn test_serialize_complete_task_instance() {
        let request = CompleteTaskInstanceRequest {
            id: "610-609".to_string(),
            exception_id: DtTimeInfo::with_timezone("20261027T090000", "Custom/Office"),
            timezone: Some(CalTZInfo {
                id: "Custom/Office".to_string(),
                standard_offset: 60,
                daylight_offset: 60,
                standard_name: None,
                daylight_name: None,
                standard: None,
                daylight: None,
            }),
        };

        assert_serialized_content(
            &request,
            "CompleteTaskInstanceRequest",
            r#"<CompleteTaskInstanceRequest id="610-609"><exceptId d="20261027T090000" tz="Custom/Office"/><tz id="Custom/Office" stdoff="60" dayoff="60"/></CompleteTaskInstanceRequest>"#,
        );
        assert_round_trip(&request, "CompleteTaskInstanceRequest");
        assert_deserialized_content(
            r#"<CompleteTaskInstanceResponse xmlns="urn:zimbraMail"/>"#,
            CompleteTaskInstanceResponse {},
        );
    }

    #[test]
    fn test_instance_is_required() {
        assert_deserialize_fails::<CompleteTaskInstanceRequest>(
            r#"<CompleteTaskInstanceRequest id="610-609"/>"#,
        );
    }
}
