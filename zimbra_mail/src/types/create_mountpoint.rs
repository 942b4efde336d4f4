/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{Mountpoint, NewMountpointSpec};

/// A request to create a mountpoint referring to a folder shared by another
/// user.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CreateMountpointResponse)]
pub struct CreateMountpointRequest {
    #[serde(rename = "link")]
    pub link: NewMountpointSpec,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CreateMountpointResponse {
    #[serde(rename = "link")]
    pub link: Option<Mountpoint>,
}
