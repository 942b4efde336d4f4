/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, InstanceRecurIdInfo, Msg};

/// A request to cancel an appointment, or a single instance of a recurring
/// one, and notify its attendees.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/CancelAppointment.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CancelAppointmentResponse)]
pub struct CancelAppointmentRequest {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@comp")]
    pub component_num: String,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    /// The instance to cancel. Without it, the whole series is cancelled.
    #[serde(rename = "inst")]
    pub instance: Option<InstanceRecurIdInfo>,

    /// The definition of the timezone referenced by `instance`.
    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,

    /// The cancellation notice sent to attendees.
    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

impl CancelAppointmentRequest {
    pub fn new(id: impl Into<String>, component_num: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_num: component_num.into(),
            modified_sequence: None,
            revision: None,
            instance: None,
            timezone: None,
            message: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CancelAppointmentResponse {}

#[cfg(test)]
mod test {
    use crate::{
        cancel_appointment::{CancelAppointmentRequest, CancelAppointmentResponse},
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        AddressType, EmailAddrInfo, InstanceRecurIdInfo, Msg,
    };

    #[test]
    fn test_serialize_cancel_series() {
        let mut request = CancelAppointmentRequest::new("600-599", "0");
        request.message = Some(Msg {
            addresses: vec![EmailAddrInfo::new("noah@example.com", AddressType::To)],
            subject: Some("Cancelled: Planning".to_string()),
            ..Default::default()
        });

        assert_serialized_content(
            &request,
            "CancelAppointmentRequest",
            r#"<CancelAppointmentRequest id="600-599" comp="0"><m><e a="noah@example.com" t="t"/><su>Cancelled: Planning</su></m></CancelAppointmentRequest>"#,
        );
    }

    #[test]
    fn test_serialize_cancel_instance() {
        let mut request = CancelAppointmentRequest::new("600-599", "0");
        request.instance = Some(InstanceRecurIdInfo {
            range: None,
            date_time: Some("20261027T090000".to_string()),
            timezone: Some("Europe/Berlin".to_string()),
        });

        assert_serialized_content(
            &request,
            "CancelAppointmentRequest",
            r#"<CancelAppointmentRequest id="600-599" comp="0"><inst d="20261027T090000" tz="Europe/Berlin"/></CancelAppointmentRequest>"#,
        );
        assert_round_trip(&request, "CancelAppointmentRequest");
    }

    #[test]
    fn test_deserialize_cancel_appointment_response() {
        assert_deserialized_content(
            r#"<CancelAppointmentResponse xmlns="urn:zimbraMail"/>"#,
            CancelAppointmentResponse {},
        );
    }
}
