/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt::Debug;

use quick_xml::de::Deserializer;
use serde::{de::DeserializeOwned, Serialize};

/// Assert the expected result of XML serialization.
pub fn assert_serialized_content<T: Serialize>(
    data: &T,
    root_tag_name: &str,
    expected_xml_content: &str,
) {
    let actual_xml_content = quick_xml::se::to_string_with_root(root_tag_name, data).unwrap();

    assert_eq!(actual_xml_content, expected_xml_content);
}

/// Assert the expected result of XML deserialization.
pub fn assert_deserialized_content<T>(content: &str, expected: T)
where
    T: DeserializeOwned + PartialEq + Debug,
{
    let mut deserializer = Deserializer::from_str(content);
    let deserialized_data: T = serde_path_to_error::deserialize(&mut deserializer).unwrap();
    assert_eq!(deserialized_data, expected);
}

/// Assert that serializing then deserializing a value reproduces it.
pub fn assert_round_trip<T>(data: &T, root_tag_name: &str)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let xml = quick_xml::se::to_string_with_root(root_tag_name, data).unwrap();

    let mut deserializer = Deserializer::from_str(&xml);
    let deserialized_data: T = serde_path_to_error::deserialize(&mut deserializer)
        .unwrap_or_else(|err| panic!("failed to read back `{xml}`: {err}"));
    assert_eq!(&deserialized_data, data, "round trip through `{xml}`");
}

/// Assert that deserialization of the given content fails.
pub fn assert_deserialize_fails<T>(content: &str)
where
    T: DeserializeOwned + Debug,
{
    let mut deserializer = Deserializer::from_str(content);
    let result: Result<T, _> = serde_path_to_error::deserialize(&mut deserializer);
    assert!(result.is_err(), "expected failure, got {result:?}");
}
