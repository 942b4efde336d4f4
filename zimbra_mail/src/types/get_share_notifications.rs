/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::FolderView;

/// A request for the share notifications received by the user which have
/// not been acted on.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(GetShareNotificationsResponse)]
pub struct GetShareNotificationsRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetShareNotificationsResponse {
    #[serde(rename = "share", default)]
    pub shares: Vec<ShareNotificationInfo>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ShareNotificationInfo {
    /// `new` for unread notifications, `seen` otherwise.
    #[serde(rename = "@status")]
    pub status: String,

    /// The ID of the notification message.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@d")]
    pub date: i64,

    #[serde(rename = "grantor")]
    pub grantor: Grantor,

    #[serde(rename = "link")]
    pub link: LinkInfo,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Grantor {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@email")]
    pub email: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,
}

/// The shared folder, as seen from the grantor's mailbox.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct LinkInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@uuid")]
    pub uuid: Option<String>,

    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@view")]
    pub default_view: Option<FolderView>,

    /// The rights granted, e.g. `r` or `rwidx`.
    #[serde(rename = "@perm")]
    pub rights: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::{
        get_share_notifications::{
            GetShareNotificationsResponse, Grantor, LinkInfo, ShareNotificationInfo,
        },
        test_utils::{assert_deserialize_fails, assert_deserialized_content},
        FolderView,
    };

    #[test]
    fn test_deserialize_get_share_notifications_response() {
        let content = r#"<GetShareNotificationsResponse xmlns="urn:zimbraMail">
            <share status="new" id="900" d="1792000000000">
                <grantor id="a1b2" email="lead@example.com" name="Team Lead"/>
                <link id="10" name="Calendar" view="appointment" perm="r"/>
            </share>
        </GetShareNotificationsResponse>"#;

        let expected = GetShareNotificationsResponse {
            shares: vec![ShareNotificationInfo {
                status: "new".to_string(),
                id: "900".to_string(),
                date: 1_792_000_000_000,
                grantor: Grantor {
                    id: Some("a1b2".to_string()),
                    email: Some("lead@example.com".to_string()),
                    name: Some("Team Lead".to_string()),
                },
                link: LinkInfo {
                    id: "10".to_string(),
                    uuid: None,
                    name: "Calendar".to_string(),
                    default_view: Some(FolderView::Appointment),
                    rights: Some("r".to_string()),
                },
            }],
        };

        assert_deserialized_content(content, expected);
    }

    #[test]
    fn test_link_is_required() {
        assert_deserialize_fails::<GetShareNotificationsResponse>(
            r#"<GetShareNotificationsResponse xmlns="urn:zimbraMail"><share status="new" id="900" d="1"><grantor id="a1b2"/></share></GetShareNotificationsResponse>"#,
        );
    }
}
