/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use zimbra_mail_macros::operation_response;

use crate::{
    AppointmentSummary, AttributeName, CalTZInfo, ContactInfo, ConversationInfo, DocumentInfo,
    MessageInfo, NoteInfo, TriState, ZmBoolean,
};

/// A request to search the mailbox.
///
/// See <https://files.zimbra.com/docs/soap_api/9.0.0/api-reference/zimbraMail/Search.html>
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[operation_response(SearchResponse)]
pub struct SearchRequest {
    /// Include items tagged as deleted in IMAP. Defaults to `false`.
    #[serde(rename = "@includeTagDeleted")]
    pub include_tag_deleted: Option<ZmBoolean>,

    /// Include items tagged as muted. Defaults to `false`.
    #[serde(rename = "@includeTagMuted")]
    pub include_tag_muted: Option<ZmBoolean>,

    /// Comma-separated list of task statuses to return, e.g. `need,inprogress`.
    #[serde(rename = "@allowableTaskStatus")]
    pub allowable_task_status: Option<String>,

    /// The start of the range in which to expand recurring calendar items, in
    /// milliseconds since the epoch.
    #[serde(rename = "@calExpandInstStart")]
    pub cal_expand_inst_start: Option<i64>,

    #[serde(rename = "@calExpandInstEnd")]
    pub cal_expand_inst_end: Option<i64>,

    /// Search the dumpster instead of live items.
    #[serde(rename = "@inDumpster")]
    pub in_dumpster: Option<ZmBoolean>,

    /// Comma-separated list of item types to return: `conversation`,
    /// `message`, `contact`, `appointment`, `task`, `wiki`, `document`.
    #[serde(rename = "@types")]
    pub search_types: Option<String>,

    /// Deprecated: use `search_types` instead.
    #[serde(rename = "@groupBy")]
    pub group_by: Option<String>,

    /// Skip uncommitted index items for a faster, possibly stale, result.
    #[serde(rename = "@quick")]
    pub quick: Option<ZmBoolean>,

    #[serde(rename = "@sortBy")]
    pub sort_by: Option<SortBy>,

    /// Which hits to expand: `1`/`first`, `all`, `u`/`unread`, `!`, `hits` or
    /// a specific message ID.
    #[serde(rename = "@fetch")]
    pub fetch: Option<String>,

    /// Mark expanded messages as read.
    #[serde(rename = "@read")]
    pub mark_read: Option<ZmBoolean>,

    /// Truncate inlined body content to this many bytes.
    #[serde(rename = "@max")]
    pub max_inlined_length: Option<i32>,

    #[serde(rename = "@html")]
    pub want_html: Option<ZmBoolean>,

    #[serde(rename = "@needExp")]
    pub need_can_expand: Option<ZmBoolean>,

    #[serde(rename = "@neuter")]
    pub neuter_images: Option<ZmBoolean>,

    /// Which addresses to return for each hit: `0` senders, `1` recipients,
    /// `2` both.
    #[serde(rename = "@recip")]
    pub want_recipients: Option<String>,

    /// Prefetch the content of hits into the server cache.
    #[serde(rename = "@prefetch")]
    pub prefetch: Option<ZmBoolean>,

    #[serde(rename = "@resultMode")]
    pub result_mode: Option<ResultMode>,

    /// Return every message of conversation hits, not only those matching.
    #[serde(rename = "@fullConversation")]
    pub full_conversation: Option<ZmBoolean>,

    /// The default field for unqualified query terms.
    #[serde(rename = "@field")]
    pub field: Option<String>,

    /// The maximum number of hits to return.
    #[serde(rename = "@limit")]
    pub limit: Option<i32>,

    /// The zero-based index of the first hit to return.
    #[serde(rename = "@offset")]
    pub offset: Option<i32>,

    #[serde(rename = "query")]
    pub query: Option<String>,

    /// Headers to return for message hits.
    #[serde(rename = "header", default)]
    pub headers: Vec<AttributeName>,

    /// The timezone to interpret dates in the query with.
    #[serde(rename = "tz")]
    pub timezone: Option<CalTZInfo>,

    /// The locale to interpret the query with, e.g. `en_US`.
    #[serde(rename = "locale")]
    pub locale: Option<String>,

    #[serde(rename = "cursor")]
    pub cursor: Option<CursorInfo>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn include_tag_deleted(&self) -> bool {
        self.include_tag_deleted.resolve(false)
    }

    pub fn include_tag_muted(&self) -> bool {
        self.include_tag_muted.resolve(false)
    }

    pub fn in_dumpster(&self) -> bool {
        self.in_dumpster.resolve(false)
    }
}

/// The order of search results.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum SortBy {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "dateAsc")]
    DateAsc,
    #[serde(rename = "dateDesc")]
    DateDesc,
    #[serde(rename = "subjAsc")]
    SubjectAsc,
    #[serde(rename = "subjDesc")]
    SubjectDesc,
    #[serde(rename = "nameAsc")]
    NameAsc,
    #[serde(rename = "nameDesc")]
    NameDesc,
    #[serde(rename = "rcptAsc")]
    RecipientAsc,
    #[serde(rename = "rcptDesc")]
    RecipientDesc,
    #[serde(rename = "attachAsc")]
    AttachmentAsc,
    #[serde(rename = "attachDesc")]
    AttachmentDesc,
    #[serde(rename = "flagAsc")]
    FlagAsc,
    #[serde(rename = "flagDesc")]
    FlagDesc,
    #[serde(rename = "priorityAsc")]
    PriorityAsc,
    #[serde(rename = "priorityDesc")]
    PriorityDesc,
    #[serde(rename = "sizeAsc")]
    SizeAsc,
    #[serde(rename = "sizeDesc")]
    SizeDesc,
    #[serde(rename = "taskDueAsc")]
    TaskDueAsc,
    #[serde(rename = "taskDueDesc")]
    TaskDueDesc,
    #[serde(rename = "taskStatusAsc")]
    TaskStatusAsc,
    #[serde(rename = "taskStatusDesc")]
    TaskStatusDesc,
    #[serde(rename = "taskPercCompletedAsc")]
    TaskPercentCompletedAsc,
    #[serde(rename = "taskPercCompletedDesc")]
    TaskPercentCompletedDesc,
    #[serde(rename = "readAsc")]
    ReadAsc,
    #[serde(rename = "readDesc")]
    ReadDesc,
    #[serde(rename = "idAsc")]
    IdAsc,
    #[serde(rename = "idDesc")]
    IdDesc,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ResultMode {
    /// Return full hits.
    #[serde(rename = "NORMAL")]
    Normal,

    /// Return only the IDs of hits.
    #[serde(rename = "IDS")]
    Ids,
}

/// A position in a previous result set to continue from.
///
/// Cursors keep paging stable when items are added or removed between
/// requests.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CursorInfo {
    /// The ID of the last hit of the previous page.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    /// The sort field value of the last hit of the previous page.
    #[serde(rename = "@sortVal")]
    pub sort_value: Option<String>,

    #[serde(rename = "@endSortVal")]
    pub end_sort_value: Option<String>,

    /// Whether to compute the offset of the cursor in the result set.
    #[serde(rename = "@includeOffset")]
    pub include_offset: Option<ZmBoolean>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SearchResponse {
    #[serde(rename = "@sortBy")]
    pub sort_by: Option<String>,

    #[serde(rename = "@offset")]
    pub offset: Option<i32>,

    /// Whether more hits follow this page.
    #[serde(rename = "@more")]
    pub more: Option<ZmBoolean>,

    /// The total number of hits, when known.
    #[serde(rename = "@total")]
    pub total: Option<i64>,

    #[serde(rename = "$value", default)]
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    pub fn has_more(&self) -> bool {
        self.more.resolve(false)
    }
}

/// A search result.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum SearchHit {
    #[serde(rename = "c")]
    Conversation(ConversationInfo),

    /// A hit returned in `IDS` result mode.
    #[serde(rename = "hit")]
    Id(SimpleSearchHit),

    #[serde(rename = "m")]
    Message(MessageInfo),

    #[serde(rename = "cn")]
    Contact(ContactInfo),

    #[serde(rename = "note")]
    Note(NoteInfo),

    #[serde(rename = "doc")]
    Document(DocumentInfo),

    #[serde(rename = "appt")]
    Appointment(AppointmentSummary),

    #[serde(rename = "task")]
    Task(AppointmentSummary),

    #[serde(rename = "chat")]
    Chat(MessageInfo),
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SimpleSearchHit {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "@sf")]
    pub sort_field: Option<String>,
}
