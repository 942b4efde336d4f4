/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use quick_xml::{
    events::{BytesDecl, BytesEnd, BytesStart, Event},
    Writer,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{Error, Operation, OperationResponse, SOAP_NS_URI, ZIMBRA_NS_URI};

mod de;
use self::de::{DeserializeEnvelope, EnvelopeContent};

/// The request context carried in the `soap:Header` of a request, or returned
/// by the server in the header of a response.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct HeaderContext {
    #[serde(rename = "authToken")]
    pub auth_token: Option<String>,

    #[serde(rename = "session")]
    pub session: Option<SessionInfo>,

    /// The account to act on, when different from the authenticated account.
    #[serde(rename = "account")]
    pub account: Option<AccountSelector>,

    #[serde(rename = "userAgent")]
    pub user_agent: Option<UserAgentInfo>,

    /// The change token the client last saw, for conflict detection.
    #[serde(rename = "change")]
    pub change: Option<ChangeInfo>,

    /// The last notification sequence number the client received.
    #[serde(rename = "notify")]
    pub notify: Option<NotifyInfo>,
}

impl HeaderContext {
    pub fn with_auth_token(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: Some(auth_token.into()),
            ..Default::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SessionInfo {
    #[serde(rename = "@id")]
    pub id: Option<String>,
}

/// How an account is identified in an [`AccountSelector`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AccountBy {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "adminName")]
    AdminName,
    #[serde(rename = "foreignPrincipal")]
    ForeignPrincipal,
    #[serde(rename = "krb5Principal")]
    Krb5Principal,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AccountSelector {
    #[serde(rename = "@by")]
    pub by: AccountBy,

    #[serde(rename = "$text")]
    pub key: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserAgentInfo {
    #[serde(rename = "@name")]
    pub name: String,

    #[serde(rename = "@version")]
    pub version: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChangeInfo {
    #[serde(rename = "@token")]
    pub token: String,

    /// `mod` to compare against the item's modification sequence, `new` to
    /// compare against the highest change ID in the mailbox.
    #[serde(rename = "@type")]
    pub change_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NotifyInfo {
    #[serde(rename = "@seq")]
    pub sequence: i32,
}

/// A SOAP 1.2 envelope containing the body of a Zimbra operation or response.
///
/// See <https://www.w3.org/TR/soap12-part1/#soapenvelope>
#[derive(Clone, Debug)]
pub struct Envelope<B> {
    pub context: Option<HeaderContext>,
    pub body: B,
}

impl<B> Envelope<B>
where
    B: Operation,
{
    /// Serializes the SOAP envelope as a complete XML document.
    pub fn as_xml_document(&self) -> Result<Vec<u8>, Error> {
        const SOAP_ENVELOPE: &str = "soap:Envelope";
        const SOAP_HEADER: &str = "soap:Header";
        const SOAP_BODY: &str = "soap:Body";

        let mut writer = {
            let inner: Vec<u8> = Default::default();
            Writer::new(inner)
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        // We manually write these elements in order to control the name and
        // namespace we write the body with.
        writer.write_event(Event::Start(
            BytesStart::new(SOAP_ENVELOPE).with_attributes([("xmlns:soap", SOAP_NS_URI)]),
        ))?;

        if let Some(context) = &self.context {
            writer.write_event(Event::Start(
                BytesStart::new(SOAP_HEADER).with_attributes([("xmlns", ZIMBRA_NS_URI)]),
            ))?;
            writer.write_serializable("context", context)?;
            writer.write_event(Event::End(BytesEnd::new(SOAP_HEADER)))?;
        }

        writer.write_event(Event::Start(
            BytesStart::new(SOAP_BODY).with_attributes([("xmlns", B::NAMESPACE)]),
        ))?;

        // Write the operation itself.
        writer.write_serializable(B::NAME, &self.body)?;

        writer.write_event(Event::End(BytesEnd::new(SOAP_BODY)))?;
        writer.write_event(Event::End(BytesEnd::new(SOAP_ENVELOPE)))?;

        log::debug!("wrote SOAP envelope for {}", B::NAME);

        Ok(writer.into_inner())
    }
}

impl<B> Envelope<B>
where
    B: OperationResponse,
{
    /// Populates an [`Envelope`] from raw XML.
    pub fn from_xml_document(document: &[u8]) -> Result<Self, Error> {
        let de = &mut quick_xml::de::Deserializer::from_reader(document);

        // `serde_path_to_error` ensures that we get sufficient information to
        // debug errors in deserialization. serde's default errors only provide
        // the immediate error with no context; this gives us a description of
        // the context within the structure.
        let envelope: DeserializeEnvelope<B> = serde_path_to_error::deserialize(de)?;

        match envelope.body {
            EnvelopeContent::Body(body) => {
                log::debug!("read SOAP envelope for {}", B::NAME);

                Ok(Envelope {
                    context: envelope.header.and_then(|header| header.context),
                    body,
                })
            }
            EnvelopeContent::Fault(fault) => {
                log::warn!(
                    "server returned a fault while expecting {}: {}",
                    B::NAME,
                    fault.error_code().unwrap_or(&fault.code.value)
                );

                Err(Error::RequestFault(fault))
            }
        }
    }
}

/// A structured representation of a SOAP 1.2 fault, indicating an error in a
/// request.
///
/// See <https://www.w3.org/TR/soap12-part1/#soapfault>
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Fault {
    /// The SOAP fault code, `soap:Sender` when the request itself was at
    /// fault and `soap:Receiver` otherwise.
    #[serde(rename = "Code")]
    pub code: FaultCode,

    /// A human-readable description of the error.
    #[serde(rename = "Reason")]
    pub reason: FaultReason,

    /// Zimbra-specific information about the error.
    #[serde(rename = "Detail")]
    pub detail: Option<FaultDetail>,
}

impl Fault {
    /// The Zimbra error code, such as `mail.NO_SUCH_MSG`, if the server
    /// provided one.
    pub fn error_code(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.error.as_ref())
            .map(|error| error.code.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FaultCode {
    #[serde(rename = "Value")]
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FaultReason {
    #[serde(rename = "Text")]
    pub text: FaultText,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FaultText {
    #[serde(rename = "$text", default)]
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FaultDetail {
    #[serde(rename = "Error")]
    pub error: Option<ServiceError>,
}

/// The error reported by the service in the detail of a fault.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceError {
    #[serde(rename = "Code")]
    pub code: String,

    /// A server-side identifier for the request, useful when reading server
    /// logs.
    #[serde(rename = "Trace")]
    pub trace: Option<String>,

    /// Arguments of the error, such as the ID of a missing item.
    #[serde(rename = "a", default)]
    pub args: Vec<ServiceErrorArg>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServiceErrorArg {
    #[serde(rename = "@n")]
    pub name: String,

    /// The type of the argument, such as `IID` for an item ID.
    #[serde(rename = "@t")]
    pub arg_type: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}
