/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{MessageInfo, Msg, TriState, ZmBoolean};

/// A request to send a message.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/SendMsg.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SendMsgResponse)]
pub struct SendMsgRequest {
    /// Rewrite the organizer of a forwarded invite as sent-by the user.
    #[serde(rename = "@needCalendarSentByFixup")]
    pub need_calendar_sent_by_fixup: Option<ZmBoolean>,

    #[serde(rename = "@isCalendarForward")]
    pub is_calendar_forward: Option<ZmBoolean>,

    /// Do not save a copy in the Sent folder. Defaults to `false`.
    #[serde(rename = "@noSave")]
    pub no_save_to_sent: Option<ZmBoolean>,

    /// Return the saved copy of the message in the response.
    #[serde(rename = "@fetchSavedMsg")]
    pub fetch_saved_msg: Option<ZmBoolean>,

    /// A client-generated ID making resends of the same request idempotent.
    #[serde(rename = "@suid")]
    pub send_uid: Option<String>,

    #[serde(rename = "m")]
    pub message: Msg,
}

impl SendMsgRequest {
    pub fn new(message: Msg) -> Self {
        Self {
            need_calendar_sent_by_fixup: None,
            is_calendar_forward: None,
            no_save_to_sent: None,
            fetch_saved_msg: None,
            send_uid: None,
            message,
        }
    }

    pub fn saves_to_sent(&self) -> bool {
        !self.no_save_to_sent.resolve(false)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendMsgResponse {
    /// The saved copy of the message, or just its ID.
    #[serde(rename = "m")]
    pub message: Option<MessageInfo>,
}

#[cfg(test)]
mod test {
    use crate::{
        send_msg::{SendMsgRequest, SendMsgResponse},
        test_utils::{assert_deserialized_content, assert_round_trip, assert_serialized_content},
        AddressType, AttachSpec, AttachmentsInfo, EmailAddrInfo, MessageInfo, MimePartInfo,
        Msg, MsgAttachSpec, ReplyType, ZmBoolean,
    };

    #[test]
    fn test_serialize_forward() {
        let mut request = SendMsgRequest::new(Msg {
            original_id: Some("257".to_string()),
            reply_type: Some(ReplyType::Forward),
            addresses: vec![EmailAddrInfo::new("noah@example.com", AddressType::To)],
            subject: Some("Fwd: Release notes".to_string()),
            mime_part: Some(MimePartInfo {
                content_type: Some("text/plain".to_string()),
                content: Some("FYI".to_string()),
                ..Default::default()
            }),
            attachments: Some(AttachmentsInfo {
                attachment_ids: None,
                attachments: vec![AttachSpec::Message(MsgAttachSpec {
                    id: "257".to_string(),
                    optional: None,
                })],
            }),
            ..Default::default()
        });
        request.send_uid = Some("c0ffee".to_string());

        let expected = r#"<SendMsgRequest suid="c0ffee"><m origid="257" rt="w"><e a="noah@example.com" t="t"/><su>Fwd: Release notes</su><mp ct="text/plain"><content>FYI</content></mp><attach><m id="257"/></attach></m></SendMsgRequest>"#;

        assert_serialized_content(&request, "SendMsgRequest", expected);
        assert_round_trip(&request, "SendMsgRequest");
        assert!(request.saves_to_sent());
    }

    #[test]
    fn test_no_save_flag() {
        let mut request = SendMsgRequest::new(Msg::default());
        request.no_save_to_sent = Some(ZmBoolean::TRUE);

        assert_serialized_content(
            &request,
            "SendMsgRequest",
            r#"<SendMsgRequest noSave="1"><m/></SendMsgRequest>"#,
        );
        assert!(!request.saves_to_sent());
    }

    #[test]
    fn test_deserialize_send_msg_response() {
        assert_deserialized_content(
            r#"<SendMsgResponse xmlns="urn:zimbraMail"><m id="902"/></SendMsgResponse>"#,
            SendMsgResponse {
                message: Some(MessageInfo {
                    id: Some("902".to_string()),
                    ..Default::default()
                }),
            },
        );
    }
}
