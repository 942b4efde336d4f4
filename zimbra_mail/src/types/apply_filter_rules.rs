/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{IdsAttr, NamedElement};

/// A request to apply filter rules to existing messages, selected either by ID
/// or by query.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(ApplyFilterRulesResponse)]
pub struct ApplyFilterRulesRequest {
    #[serde(rename = "filterRules")]
    pub filter_rules: NamedFilterRules,

    /// The messages to filter.
    #[serde(rename = "m")]
    pub messages: Option<IdsAttr>,

    /// A query selecting the messages to filter, used when `messages` is
    /// absent.
    #[serde(rename = "query")]
    pub query: Option<String>,
}

/// The names of the filter rules to apply.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NamedFilterRules {
    #[serde(rename = "filterRule", default)]
    pub rules: Vec<NamedElement>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApplyFilterRulesResponse {
    /// The messages affected by the rules.
    #[serde(rename = "m")]
    pub messages: Option<IdsAttr>,
}
