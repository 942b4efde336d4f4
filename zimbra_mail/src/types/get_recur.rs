/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

use crate::{CalTZInfo, RecurrenceComponent};

/// A request for the recurrence definition of a calendar item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetRecurResponse)]
pub struct GetRecurRequest {
    /// The ID of the calendar item.
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetRecurResponse {
    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    /// The series followed by its exceptions and cancellations.
    #[serde(rename = "$value", default)]
    pub components: Vec<RecurrenceComponent>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_recur::{GetRecurRequest, GetRecurResponse},
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_serialized_content,
        },
        InstanceRecurIdInfo, InviteComponent, RecurrenceComponent,
    };

    #[test]
    fn test_get_recur() {
        assert_serialized_content(
            &GetRecurRequest {
                id: "600".to_string(),
            },
            "GetRecurRequest",
            r#"<GetRecurRequest id="600"/>"#,
        );

        let content = r#"<GetRecurResponse xmlns="urn:zimbraMail">
            <comp name="Planning"/>
            <cancel><exceptId d="20261027T090000Z"/></cancel>
        </GetRecurResponse>"#;

        let expected = GetRecurResponse {
            timezones: vec![],
            components: vec![
                RecurrenceComponent::Component(InviteComponent {
                    name: Some("Planning".to_string()),
                    ..Default::default()
                }),
                RecurrenceComponent::Cancellation(InviteComponent {
                    exception_id: Some(InstanceRecurIdInfo {
                        range: None,
                        date_time: Some("20261027T090000Z".to_string()),
                        timezone: None,
                    }),
                    ..Default::default()
                }),
            ],
        };

        assert_deserialized_content(content, expected);
    }

    #[test]
    fn test_undeclared_component_is_rejected() {
        assert_deserialize_fails::<GetRecurResponse>(
            r#"<GetRecurResponse xmlns="urn:zimbraMail"><alarm action="DISPLAY"/></GetRecurResponse>"#,
        );
    }
}
