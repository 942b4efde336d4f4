/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{CalEcho, Msg, ZmBoolean};

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ModifyTaskResponse)]
pub struct ModifyTaskRequest {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@comp")]
    pub component_num: String,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@echo")]
    pub echo: Option<ZmBoolean>,

    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@neuter")]
    pub neuter: Option<ZmBoolean>,

    #[serde(rename = "@forcesend")]
    pub force_send: Option<ZmBoolean>,

    #[serde(rename = "m")]
    pub message: Option<Msg>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ModifyTaskResponse {
    #[serde(rename = "@calItemId")]
    pub calendar_item_id: Option<String>,

    /// Deprecated: the same value as `calendar_item_id`.
    #[serde(rename = "@apptId")]
    pub appointment_id: Option<String>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<String>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "echo")]
    pub echo: Option<CalEcho>,
}
