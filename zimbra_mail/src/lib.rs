/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Request and response types for the `urn:zimbraMail` SOAP protocol.
//!
//! Every message is a plain value type whose Rust name is also its wire name.
//! Requests implement [`Operation`] and name the [`OperationResponse`] they
//! expect; both can be written and read on their own through [`to_xml`] and
//! [`from_xml`], or wrapped in a SOAP [`soap::Envelope`].

use thiserror::Error;

mod codec;
mod types;

pub use codec::{from_xml, to_xml};
pub use types::*;

#[cfg(test)]
pub(crate) mod test_utils;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to serialize structure as XML")]
    Serialize(#[from] quick_xml::SeError),

    #[error("failed to deserialize structure from XML")]
    Deserialize(#[from] serde_path_to_error::Error<quick_xml::DeError>),

    #[error("error manipulating XML data")]
    Xml(#[from] quick_xml::Error),

    #[error("error writing XML data")]
    Io(#[from] std::io::Error),

    #[error("expected root element `{expected}`, found `{found}`")]
    UnexpectedRootElement {
        expected: &'static str,
        found: String,
    },

    #[error("the document has no root element")]
    MissingRootElement,

    #[error("the server returned a fault: {}", .0.reason.text.value)]
    RequestFault(Box<soap::Fault>),
}
