/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{EmailAddrInfo, Id};

/// What happened to the share being notified about.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ShareAction {
    #[serde(rename = "edit")]
    Edit,
    #[serde(rename = "revoke")]
    Revoke,
    #[serde(rename = "expire")]
    Expire,
}

/// A request to email grantees about a folder share.
///
/// Without `action`, the notification announces a new share.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SendShareNotificationResponse)]
pub struct SendShareNotificationRequest {
    #[serde(rename = "@action")]
    pub action: Option<ShareAction>,

    /// The shared folder.
    #[serde(rename = "item")]
    pub item: Id,

    /// The grantees to notify.
    #[serde(rename = "e", default)]
    pub addresses: Vec<EmailAddrInfo>,

    /// A personal note included in the notification.
    #[serde(rename = "notes")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendShareNotificationResponse {}

#[cfg(test)]
mod test {
    use crate::{
        send_share_notification::{
            SendShareNotificationRequest, SendShareNotificationResponse, ShareAction,
        },
        test_utils::{
            assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
            assert_serialized_content,
        },
        AddressType, EmailAddrInfo, Id,
    };

    #[test]
    fn test_serialize_send_share_notification() {
        let request = SendShareNotificationRequest {
            action: None,
            item: Id::new("10"),
            addresses: vec![EmailAddrInfo::new("colleague@example.com", AddressType::To)],
            notes: Some("My calendar for next week".to_string()),
        };

        assert_serialized_content(
            &request,
            "SendShareNotificationRequest",
            r#"<SendShareNotificationRequest><item id="10"/><e a="colleague@example.com" t="t"/><notes>My calendar for next week</notes></SendShareNotificationRequest>"#,
        );
        assert_round_trip(&request, "SendShareNotificationRequest");
    }

    #[test]
    fn test_serialize_revoke_notification() {
        let request = SendShareNotificationRequest {
            action: Some(ShareAction::Revoke),
            item: Id::new("10"),
            addresses: vec![EmailAddrInfo::new("colleague@example.com", AddressType::To)],
            notes: None,
        };

        assert_serialized_content(
            &request,
            "SendShareNotificationRequest",
            r#"<SendShareNotificationRequest action="revoke"><item id="10"/><e a="colleague@example.com" t="t"/></SendShareNotificationRequest>"#,
        );
        assert_deserialized_content(
            r#"<SendShareNotificationResponse xmlns="urn:zimbraMail"/>"#,
            SendShareNotificationResponse {},
        );
    }

    #[test]
    fn test_item_is_required() {
        assert_deserialize_fails::<SendShareNotificationRequest>(
            r#"<SendShareNotificationRequest><notes>hi</notes></SendShareNotificationRequest>"#,
        );
    }
}
