/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::fmt;

use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};
use serde_with::skip_serializing_none;

pub mod action;
pub use self::action::*;
pub mod calendar;
pub use self::calendar::*;
pub mod contact;
pub use self::contact::*;
pub mod folder;
pub use self::folder::*;
pub mod item;
pub use self::item::*;
pub mod message;
pub use self::message::*;
pub mod permission;
pub use self::permission::*;
pub mod waitset;
pub use self::waitset::*;

pub const MAIL_NS_URI: &str = "urn:zimbraMail";
pub const ZIMBRA_NS_URI: &str = "urn:zimbra";
pub(crate) const SOAP_NS_URI: &str = "http://www.w3.org/2003/05/soap-envelope";

/// A boolean as written by the Zimbra protocol.
///
/// Values are written as `1` or `0`. When reading, `true` and `false` are
/// accepted as well.
///
/// Optional flags are represented as `Option<ZmBoolean>` so that an absent
/// flag can be told apart from an explicit `0`; see [`TriState`] for resolving
/// the default of an absent flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZmBoolean(pub bool);

impl ZmBoolean {
    pub const TRUE: ZmBoolean = ZmBoolean(true);
    pub const FALSE: ZmBoolean = ZmBoolean(false);

    pub fn is_true(self) -> bool {
        self.0
    }
}

impl From<bool> for ZmBoolean {
    fn from(value: bool) -> Self {
        ZmBoolean(value)
    }
}

impl From<ZmBoolean> for bool {
    fn from(value: ZmBoolean) -> Self {
        value.0
    }
}

impl Serialize for ZmBoolean {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if self.0 { "1" } else { "0" })
    }
}

impl<'de> Deserialize<'de> for ZmBoolean {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ZmBooleanVisitor)
    }
}

struct ZmBooleanVisitor;

impl Visitor<'_> for ZmBooleanVisitor {
    type Value = ZmBoolean;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("one of `1`, `0`, `true` or `false`")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(ZmBoolean(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match v.trim() {
            "1" | "true" | "TRUE" => Ok(ZmBoolean(true)),
            "0" | "false" | "FALSE" => Ok(ZmBoolean(false)),
            other => Err(E::invalid_value(serde::de::Unexpected::Str(other), &self)),
        }
    }
}

/// Resolution of optional protocol flags against their documented default.
pub trait TriState {
    /// Returns the flag's value if present, or `default` if it was absent.
    fn resolve(&self, default: bool) -> bool;
}

impl TriState for Option<ZmBoolean> {
    fn resolve(&self, default: bool) -> bool {
        self.map_or(default, bool::from)
    }
}

/// An element identifying a single item by ID.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Id {
    #[serde(rename = "@id")]
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An element identifying items by a comma-separated list of IDs.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IdsAttr {
    #[serde(rename = "@ids")]
    pub ids: String,
}

impl IdsAttr {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids
            .into_iter()
            .map(|id| id.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        Self { ids }
    }

    /// Iterates over the individual IDs.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.split(',').filter(|id| !id.is_empty())
    }
}

/// A named value, written as `<a n="name">value</a>`.
///
/// Whitespace around the value is written as is but dropped when read,
/// unless the document escapes it (`&#32;`) or wraps the value in CDATA.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct KeyValuePair {
    #[serde(rename = "@n")]
    pub key: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A section of custom metadata attached to an item or a mailbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MailCustomMetadata {
    #[serde(rename = "@section")]
    pub section: String,

    #[serde(rename = "a", default)]
    pub entries: Vec<KeyValuePair>,
}

/// A reference to a custom metadata section by name.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SectionAttr {
    #[serde(rename = "@section")]
    pub section: String,
}

/// The name of an attribute or header to include in a response.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AttributeName {
    #[serde(rename = "@n")]
    pub name: String,
}

/// An element carrying only a `name` attribute.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NamedElement {
    #[serde(rename = "@name")]
    pub name: String,
}

/// Content supplied either inline or by reference to an upload.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContentSpec {
    /// The ID of a previously uploaded attachment holding the content.
    #[serde(rename = "@aid")]
    pub attachment_id: Option<String>,

    /// The ID of a message part holding the content, as `msgId.partName`.
    #[serde(rename = "@mid")]
    pub message_id: Option<String>,

    #[serde(rename = "@part")]
    pub part: Option<String>,

    /// Inline content. Surrounding whitespace is dropped when read.
    #[serde(rename = "$text")]
    pub value: Option<String>,
}
