/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::marker::PhantomData;

use serde::{
    de::{IgnoredAny, Visitor},
    Deserialize, Deserializer,
};

use crate::OperationResponse;

use super::{Fault, HeaderContext};

/// A helper for deserialization of SOAP envelopes.
///
/// This struct is declared separately from the more general [`Envelope`] type
/// so that the latter can be used with types that are write-only.
///
/// [`Envelope`]: super::Envelope
#[derive(Deserialize)]
pub(super) struct DeserializeEnvelope<T>
where
    T: OperationResponse,
{
    #[serde(rename = "Header")]
    pub header: Option<DeserializeHeader>,

    #[serde(rename = "Body", deserialize_with = "deserialize_body")]
    pub body: EnvelopeContent<T>,
}

#[derive(Deserialize)]
pub(super) struct DeserializeHeader {
    pub context: Option<HeaderContext>,
}

/// The contents of a SOAP body: either the expected response or a fault.
pub(super) enum EnvelopeContent<T> {
    Body(T),
    Fault(Box<Fault>),
}

fn deserialize_body<'de, D, T>(body: D) -> Result<EnvelopeContent<T>, D::Error>
where
    D: Deserializer<'de>,
    T: OperationResponse,
{
    body.deserialize_map(BodyVisitor::<T>(PhantomData))
}

/// A visitor for custom name-based deserialization of operation responses.
struct BodyVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for BodyVisitor<T>
where
    T: OperationResponse,
{
    type Value = EnvelopeContent<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("Zimbra operation response body")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let expected = T::NAME;

        let content = loop {
            let Some(name) = map.next_key::<String>()? else {
                return Err(serde::de::Error::invalid_type(
                    serde::de::Unexpected::Map,
                    &self,
                ));
            };

            // Attributes of `soap:Body` are presented as keys too.
            if name.starts_with('@') {
                map.next_value::<IgnoredAny>()?;
                continue;
            }

            if name == "Fault" {
                break EnvelopeContent::Fault(Box::new(map.next_value()?));
            }

            // We expect the body of the response to contain a single element
            // with the name of the expected operation response.
            if name != expected {
                return Err(serde::de::Error::custom(format_args!(
                    "unknown element `{}`, expected {}",
                    name, expected
                )));
            }

            break EnvelopeContent::Body(map.next_value()?);
        };

        // To satisfy quick-xml's serde impl, we need to consume the final
        // `None` key value in order to successfully complete.
        match map.next_key::<String>()? {
            Some(name) => {
                // The response body contained more than one element, which
                // violates our expectations.
                Err(serde::de::Error::custom(format_args!(
                    "unexpected element `{}`",
                    name
                )))
            }
            None => Ok(content),
        }
    }
}
