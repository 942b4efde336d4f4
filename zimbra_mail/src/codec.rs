/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Standalone (de)serialization of catalog messages outside of a SOAP envelope.

use quick_xml::{events::Event, Reader};
use serde::{de::DeserializeOwned, Serialize};

use crate::{types::sealed::EnvelopeBodyContents, Error};

/// Serializes a message as an XML element named after its wire name.
///
/// No namespace declaration is written; when sent to a server, messages are
/// wrapped in a [`crate::soap::Envelope`] which declares it.
pub fn to_xml<T>(message: &T) -> Result<String, Error>
where
    T: Serialize + EnvelopeBodyContents,
{
    Ok(quick_xml::se::to_string_with_root(T::NAME, message)?)
}

/// Deserializes a message from an XML document whose root element is the
/// message's wire name.
pub fn from_xml<T>(document: &str) -> Result<T, Error>
where
    T: DeserializeOwned + EnvelopeBodyContents,
{
    let found = root_element_name(document)?;
    log::trace!("read root element `{found}`, expecting `{}`", T::NAME);
    if found != T::NAME {
        return Err(Error::UnexpectedRootElement {
            expected: T::NAME,
            found,
        });
    }

    let mut de = quick_xml::de::Deserializer::from_str(document);

    // `serde_path_to_error` reports where in the structure a failure occurred
    // instead of only the innermost error.
    Ok(serde_path_to_error::deserialize(&mut de)?)
}

/// Returns the local name of the first element in the document.
fn root_element_name(document: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(document);

    loop {
        match reader.read_event()? {
            Event::Start(start) | Event::Empty(start) => {
                let name = start.local_name();
                return Ok(String::from_utf8_lossy(name.as_ref()).into_owned());
            }
            Event::Eof => return Err(Error::MissingRootElement),
            _ => continue,
        }
    }
}
