/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use zimbra_mail_macros::operation_response;

/// A request to destroy a wait-set, cancelling any wait blocked on it.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/DestroyWaitSet.html>
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(DestroyWaitSetResponse)]
pub struct DestroyWaitSetRequest {
    #[serde(rename = "@waitSet")]
    pub wait_set_id: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DestroyWaitSetResponse {
    #[serde(rename = "@waitSet")]
    pub wait_set_id: String,
}

#[cfg(test)]
mod test {
    use crate::{
        destroy_wait_set::{DestroyWaitSetRequest, DestroyWaitSetResponse},
        test_utils::{assert_deserialized_content, assert_serialized_content},
    };

    #[test]
    fn test_destroy_wait_set() {
        assert_serialized_content(
            &DestroyWaitSetRequest {
                wait_set_id: "WaitSet7".to_string(),
            },
            "DestroyWaitSetRequest",
            r#"<DestroyWaitSetRequest waitSet="WaitSet7"/>"#,
        );
        assert_deserialized_content(
            r#"<DestroyWaitSetResponse xmlns="urn:zimbraMail" waitSet="WaitSet7"/>"#,
            DestroyWaitSetResponse {
                wait_set_id: "WaitSet7".to_string(),
            },
        );
    }
}
