/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::types::sealed::EnvelopeBodyContents;

/// A request which can be sent to a Zimbra mail service.
///
/// Every operation is paired with exactly one [`OperationResponse`] type, and
/// both can be written to and read from XML, so the same types serve clients
/// building requests and tools inspecting recorded traffic.
pub trait Operation:
    Clone + Debug + Serialize + DeserializeOwned + EnvelopeBodyContents
{
    /// The structure returned by the server in response to this operation.
    type Response: OperationResponse;
}

/// A response to a Zimbra mail [`Operation`].
pub trait OperationResponse:
    Clone + Debug + Serialize + DeserializeOwned + EnvelopeBodyContents
{
}

/// Returns the wire name of the root element of a message type.
pub fn wire_name<T: EnvelopeBodyContents>() -> &'static str {
    T::NAME
}
