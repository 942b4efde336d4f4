/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::ZmBoolean;

/// A request to check whether the authenticated user holds rights on a
/// target account, calendar resource or distribution list.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(CheckPermissionResponse)]
pub struct CheckPermissionRequest {
    #[serde(rename = "target")]
    pub target: Option<TargetSpec>,

    /// The names of the rights to check.
    #[serde(rename = "right", default)]
    pub rights: Vec<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum TargetType {
    #[serde(rename = "account")]
    Account,
    #[serde(rename = "calresource")]
    CalendarResource,
    #[serde(rename = "dl")]
    DistributionList,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum TargetBy {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TargetSpec {
    #[serde(rename = "@type")]
    pub target_type: TargetType,

    #[serde(rename = "@by")]
    pub by: TargetBy,

    #[serde(rename = "$text")]
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CheckPermissionResponse {
    /// Whether every checked right is held.
    #[serde(rename = "@allow")]
    pub allow: ZmBoolean,

    #[serde(rename = "right", default)]
    pub rights: Vec<RightPermission>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RightPermission {
    #[serde(rename = "@allow")]
    pub allow: ZmBoolean,

    #[serde(rename = "$text")]
    pub right: String,
}
