/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request to permanently delete every item in the dumpster.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(EmptyDumpsterResponse)]
pub struct EmptyDumpsterRequest {}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmptyDumpsterResponse {}
