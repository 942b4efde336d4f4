/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, DtTimeInfo, Msg};

/// A request to forward an appointment, or one of its instances, to other
/// users.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ForwardAppointmentResponse)]
pub struct ForwardAppointmentRequest {
    /// The ID of the appointment.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "exceptId")]
    pub exception_id: Option<DtTimeInfo>,

    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,

    /// The forwarding message, carrying the new recipients.
    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ForwardAppointmentResponse {}

#[cfg(test)]
mod test {
    use crate::{
        forward_appointment::{ForwardAppointmentRequest, ForwardAppointmentResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
        AddressType, EmailAddrInfo, Msg,
    };

    #[test]
    fn test_forward_appointment() {
        let request = ForwardAppointmentRequest {
            id: Some("600".to_string()),
            message: Some(Msg {
                addresses: vec![EmailAddrInfo::new("guest@example.com", AddressType::To)],
                subject: Some("Fwd: Planning".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_serialized_content(
            &request,
            "ForwardAppointmentRequest",
            r#"<ForwardAppointmentRequest id="600"><m><e a="guest@example.com" t="t"/><su>Fwd: Planning</su></m></ForwardAppointmentRequest>"#,
        );
        assert_deserialized_content(
            r#"<ForwardAppointmentResponse xmlns="urn:zimbraMail"/>"#,
            ForwardAppointmentResponse {},
        );
    }
}
