/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::{MailCustomMetadata, MessageInfo, PartInfo, ZmBoolean};

/// A timezone definition.
///
/// A timezone without daylight saving time carries no onset rules.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalTZInfo {
    #[serde(rename = "@id")]
    pub id: String,

    /// The standard time offset from UTC, in minutes.
    #[serde(rename = "@stdoff")]
    pub standard_offset: i32,

    /// The daylight saving time offset from UTC, in minutes.
    #[serde(rename = "@dayoff")]
    pub daylight_offset: i32,

    #[serde(rename = "@stdname")]
    pub standard_name: Option<String>,

    #[serde(rename = "@dayname")]
    pub daylight_name: Option<String>,

    /// When standard time starts.
    #[serde(rename = "standard")]
    pub standard: Option<TzOnsetInfo>,

    /// When daylight saving time starts.
    #[serde(rename = "daylight")]
    pub daylight: Option<TzOnsetInfo>,
}

/// A transition between standard and daylight saving time.
///
/// The transition happens either on a weekday of a given week of the month
/// (`week` and `weekday`), or on a fixed day of the month.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct TzOnsetInfo {
    /// The week of the month, `1` to `4`, or `-1` for the last week.
    #[serde(rename = "@week")]
    pub week: Option<i32>,

    /// The day of the week, `1` (Sunday) to `7` (Saturday).
    #[serde(rename = "@wkday")]
    pub weekday: Option<i32>,

    #[serde(rename = "@mon")]
    pub month: i32,

    #[serde(rename = "@mday")]
    pub day_of_month: Option<i32>,

    #[serde(rename = "@hour")]
    pub hour: i32,

    #[serde(rename = "@min")]
    pub minute: i32,

    #[serde(rename = "@sec")]
    pub second: i32,
}

/// A date or date-time.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DtTimeInfo {
    /// The date, as `YYYYMMDD` or `YYYYMMDD'T'HHMMSS[Z]`.
    #[serde(rename = "@d")]
    pub date_time: Option<String>,

    /// The ID of the timezone of the date-time.
    #[serde(rename = "@tz")]
    pub timezone: Option<String>,

    /// The date-time in milliseconds since the epoch.
    #[serde(rename = "@u")]
    pub utc_time: Option<i64>,
}

impl DtTimeInfo {
    pub fn new(date_time: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            timezone: None,
            utc_time: None,
        }
    }

    pub fn with_timezone(date_time: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            date_time: Some(date_time.into()),
            timezone: Some(timezone.into()),
            utc_time: None,
        }
    }
}

/// A duration, as the components of an iCalendar duration.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DurationInfo {
    /// Whether the duration is negative.
    #[serde(rename = "@neg")]
    pub negative: Option<ZmBoolean>,

    #[serde(rename = "@w")]
    pub weeks: Option<i32>,

    #[serde(rename = "@d")]
    pub days: Option<i32>,

    #[serde(rename = "@h")]
    pub hours: Option<i32>,

    #[serde(rename = "@m")]
    pub minutes: Option<i32>,

    #[serde(rename = "@s")]
    pub seconds: Option<i32>,

    /// For alarm triggers, whether the duration is relative to the start
    /// (`START`) or the end (`END`) of the event.
    #[serde(rename = "@related")]
    pub related: Option<String>,

    /// For alarm repeats, the number of repetitions.
    #[serde(rename = "@count")]
    pub repeat_count: Option<i32>,
}

/// Identifies an instance of a recurring calendar item.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InstanceRecurIdInfo {
    /// `THISANDFUTURE` or `THISANDPRIOR`, to address a range of instances.
    #[serde(rename = "@range")]
    pub range: Option<String>,

    #[serde(rename = "@d")]
    pub date_time: Option<String>,

    #[serde(rename = "@tz")]
    pub timezone: Option<String>,
}

/// The organizer of a calendar item.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalOrganizer {
    #[serde(rename = "@a")]
    pub address: Option<String>,

    #[serde(rename = "@url")]
    pub url: Option<String>,

    #[serde(rename = "@d")]
    pub display_name: Option<String>,

    #[serde(rename = "@sentBy")]
    pub sent_by: Option<String>,

    #[serde(rename = "@dir")]
    pub dir: Option<String>,

    #[serde(rename = "@lang")]
    pub language: Option<String>,
}

/// The participation status of an attendee.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ParticipationStatus {
    #[serde(rename = "NE")]
    NeedsAction,
    #[serde(rename = "AC")]
    Accepted,
    #[serde(rename = "TE")]
    Tentative,
    #[serde(rename = "DE")]
    Declined,
    #[serde(rename = "DG")]
    Delegated,
    #[serde(rename = "CO")]
    Completed,
    #[serde(rename = "IN")]
    InProcess,
    #[serde(rename = "WE")]
    WaitingForExternalAction,
    #[serde(rename = "DF")]
    Deferred,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AttendeeRole {
    #[serde(rename = "CHA")]
    Chair,
    #[serde(rename = "REQ")]
    Required,
    #[serde(rename = "OPT")]
    Optional,
    #[serde(rename = "NON")]
    NonParticipant,
}

/// The calendar user type of an attendee.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CalendarUserType {
    #[serde(rename = "IND")]
    Individual,
    #[serde(rename = "GRO")]
    Group,
    #[serde(rename = "RES")]
    Resource,
    #[serde(rename = "ROO")]
    Room,
    #[serde(rename = "UNK")]
    Unknown,
}

/// An attendee of a calendar item.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarAttendee {
    #[serde(rename = "@a")]
    pub address: Option<String>,

    #[serde(rename = "@url")]
    pub url: Option<String>,

    #[serde(rename = "@d")]
    pub display_name: Option<String>,

    #[serde(rename = "@sentBy")]
    pub sent_by: Option<String>,

    #[serde(rename = "@dir")]
    pub dir: Option<String>,

    #[serde(rename = "@lang")]
    pub language: Option<String>,

    #[serde(rename = "@cutype")]
    pub calendar_user_type: Option<CalendarUserType>,

    #[serde(rename = "@role")]
    pub role: Option<AttendeeRole>,

    #[serde(rename = "@ptst")]
    pub participation_status: Option<ParticipationStatus>,

    /// Whether a reply is requested from the attendee.
    #[serde(rename = "@rsvp")]
    pub rsvp: Option<ZmBoolean>,

    #[serde(rename = "@member")]
    pub member: Option<String>,

    #[serde(rename = "@delegatedTo")]
    pub delegated_to: Option<String>,

    #[serde(rename = "@delegatedFrom")]
    pub delegated_from: Option<String>,
}

impl CalendarAttendee {
    pub fn new(address: impl Into<String>, role: AttendeeRole) -> Self {
        Self {
            address: Some(address.into()),
            role: Some(role),
            ..Default::default()
        }
    }
}

/// How a calendar item shows on free/busy.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum FreeBusyStatus {
    #[serde(rename = "F")]
    Free,
    #[serde(rename = "B")]
    Busy,
    #[serde(rename = "T")]
    Tentative,
    #[serde(rename = "O")]
    OutOfOffice,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Transparency {
    #[serde(rename = "O")]
    Opaque,
    #[serde(rename = "T")]
    Transparent,
}

/// The status of an invite component.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum InviteStatus {
    #[serde(rename = "TENT")]
    Tentative,
    #[serde(rename = "CONF")]
    Confirmed,
    #[serde(rename = "CANC")]
    Cancelled,
    #[serde(rename = "NEED")]
    NeedsAction,
    #[serde(rename = "COMP")]
    Completed,
    #[serde(rename = "INPR")]
    InProgress,
    #[serde(rename = "WAITING")]
    Waiting,
    #[serde(rename = "DEFERRED")]
    Deferred,
}

/// The access classification of an invite component.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum InviteClass {
    #[serde(rename = "PUB")]
    Public,
    #[serde(rename = "PRI")]
    Private,
    #[serde(rename = "CON")]
    Confidential,
}

/// The frequency of a recurrence rule.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Frequency {
    #[serde(rename = "SEC")]
    Secondly,
    #[serde(rename = "MIN")]
    Minutely,
    #[serde(rename = "HOU")]
    Hourly,
    #[serde(rename = "DAI")]
    Daily,
    #[serde(rename = "WEE")]
    Weekly,
    #[serde(rename = "MON")]
    Monthly,
    #[serde(rename = "YEA")]
    Yearly,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum WeekDay {
    #[serde(rename = "SU")]
    Sunday,
    #[serde(rename = "MO")]
    Monday,
    #[serde(rename = "TU")]
    Tuesday,
    #[serde(rename = "WE")]
    Wednesday,
    #[serde(rename = "TH")]
    Thursday,
    #[serde(rename = "FR")]
    Friday,
    #[serde(rename = "SA")]
    Saturday,
}

/// The recurrence of a calendar item, as a set of rules combined in order.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RecurrenceInfo {
    #[serde(rename = "$value", default)]
    pub rules: Vec<RecurrenceRule>,
}

/// A rule of a recurrence.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Instances added to the recurrence.
    #[serde(rename = "add")]
    Add(RecurrenceInfo),

    /// Instances excluded from the recurrence.
    #[serde(rename = "exclude")]
    Exclude(RecurrenceInfo),

    #[serde(rename = "rule")]
    Simple(SimpleRepeatingRule),

    /// An explicit list of dates.
    #[serde(rename = "dates")]
    Dates(SingleDates),
}

/// An iCalendar `RRULE`.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SimpleRepeatingRule {
    #[serde(rename = "@freq")]
    pub frequency: Frequency,

    #[serde(rename = "until")]
    pub until: Option<DateAttr>,

    #[serde(rename = "count")]
    pub count: Option<NumAttr>,

    #[serde(rename = "interval")]
    pub interval: Option<IntervalRule>,

    #[serde(rename = "bysecond")]
    pub by_second: Option<BySecondRule>,

    #[serde(rename = "byminute")]
    pub by_minute: Option<ByMinuteRule>,

    #[serde(rename = "byhour")]
    pub by_hour: Option<ByHourRule>,

    #[serde(rename = "byday")]
    pub by_day: Option<ByDayRule>,

    #[serde(rename = "bymonthday")]
    pub by_month_day: Option<ByMonthDayRule>,

    #[serde(rename = "byyearday")]
    pub by_year_day: Option<ByYearDayRule>,

    #[serde(rename = "byweekno")]
    pub by_week_no: Option<ByWeekNoRule>,

    #[serde(rename = "bymonth")]
    pub by_month: Option<ByMonthRule>,

    #[serde(rename = "bysetpos")]
    pub by_set_pos: Option<BySetPosRule>,

    /// The first day of the week.
    #[serde(rename = "wkst")]
    pub week_start: Option<WkstRule>,
}

impl SimpleRepeatingRule {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            until: None,
            count: None,
            interval: None,
            by_second: None,
            by_minute: None,
            by_hour: None,
            by_day: None,
            by_month_day: None,
            by_year_day: None,
            by_week_no: None,
            by_month: None,
            by_set_pos: None,
            week_start: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DateAttr {
    #[serde(rename = "@d")]
    pub date: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct NumAttr {
    #[serde(rename = "@num")]
    pub num: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct IntervalRule {
    #[serde(rename = "@ival")]
    pub interval: i32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BySecondRule {
    #[serde(rename = "@seclist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByMinuteRule {
    #[serde(rename = "@minlist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByHourRule {
    #[serde(rename = "@hrlist")]
    pub list: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByDayRule {
    #[serde(rename = "wkday", default)]
    pub days: Vec<WeekDayOfMonth>,
}

/// A weekday, optionally restricted to its nth occurrence in the period.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WeekDayOfMonth {
    #[serde(rename = "@day")]
    pub day: WeekDay,

    /// `1` to `5` from the start of the period, `-1` to `-5` from its end.
    #[serde(rename = "@ordwk")]
    pub ordinal_week: Option<i32>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByMonthDayRule {
    #[serde(rename = "@modaylist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByYearDayRule {
    #[serde(rename = "@yrdaylist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByWeekNoRule {
    #[serde(rename = "@wklist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ByMonthRule {
    #[serde(rename = "@molist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BySetPosRule {
    #[serde(rename = "@poslist")]
    pub list: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct WkstRule {
    #[serde(rename = "@day")]
    pub day: WeekDay,
}

/// An explicit list of instance dates in a timezone.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SingleDates {
    #[serde(rename = "@tz")]
    pub timezone: Option<String>,

    #[serde(rename = "dtval", default)]
    pub date_values: Vec<DtVal>,
}

/// The start and either the end or the duration of an instance.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DtVal {
    #[serde(rename = "s")]
    pub start: Option<DtTimeInfo>,

    #[serde(rename = "e")]
    pub end: Option<DtTimeInfo>,

    #[serde(rename = "dur")]
    pub duration: Option<DurationInfo>,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum AlarmAction {
    #[serde(rename = "DISPLAY")]
    Display,
    #[serde(rename = "AUDIO")]
    Audio,
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "PROCEDURE")]
    Procedure,
    #[serde(rename = "X_YAHOO_CALENDAR_ACTION_IM")]
    YahooInstantMessage,
    #[serde(rename = "X_YAHOO_CALENDAR_ACTION_MOBILE")]
    YahooMobile,
}

/// When an alarm fires, either relative to the item or at a fixed time.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlarmTriggerInfo {
    #[serde(rename = "rel")]
    pub relative: Option<DurationInfo>,

    #[serde(rename = "abs")]
    pub absolute: Option<DateAttr>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarAttach {
    #[serde(rename = "@uri")]
    pub uri: Option<String>,

    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    /// Base64-encoded binary content.
    #[serde(rename = "$text")]
    pub binary: Option<String>,
}

/// An alarm of a calendar item.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlarmInfo {
    #[serde(rename = "@action")]
    pub action: AlarmAction,

    #[serde(rename = "trigger")]
    pub trigger: Option<AlarmTriggerInfo>,

    #[serde(rename = "repeat")]
    pub repeat: Option<DurationInfo>,

    #[serde(rename = "desc")]
    pub description: Option<String>,

    #[serde(rename = "attach")]
    pub attach: Option<CalendarAttach>,

    #[serde(rename = "summary")]
    pub summary: Option<String>,

    /// Recipients of an `EMAIL` alarm.
    #[serde(rename = "at", default)]
    pub attendees: Vec<CalendarAttendee>,
}

impl AlarmInfo {
    /// Builds a display alarm firing the given number of minutes before the
    /// start of the item.
    pub fn display_before_start(minutes: i32) -> Self {
        Self {
            action: AlarmAction::Display,
            trigger: Some(AlarmTriggerInfo {
                relative: Some(DurationInfo {
                    negative: Some(ZmBoolean::TRUE),
                    minutes: Some(minutes),
                    related: Some("START".to_string()),
                    ..Default::default()
                }),
                absolute: None,
            }),
            repeat: None,
            description: None,
            attach: None,
            summary: None,
            attendees: Vec::new(),
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeoInfo {
    #[serde(rename = "@lat")]
    pub latitude: String,

    #[serde(rename = "@lon")]
    pub longitude: String,
}

/// A component of an invite: a single event or task, or an exception of a
/// recurring one.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InviteComponent {
    /// The iTIP method: `REQUEST`, `REPLY`, `CANCEL`, `PUBLISH` and so on.
    #[serde(rename = "@method")]
    pub method: Option<String>,

    /// The index of the component in the invite.
    #[serde(rename = "@compNum")]
    pub component_num: Option<i32>,

    #[serde(rename = "@rsvp")]
    pub rsvp: Option<ZmBoolean>,

    /// `0` to `9`, `0` meaning undefined.
    #[serde(rename = "@priority")]
    pub priority: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@loc")]
    pub location: Option<String>,

    #[serde(rename = "@percentComplete")]
    pub percent_complete: Option<String>,

    /// When a task was completed, as a UTC date-time.
    #[serde(rename = "@completed")]
    pub completed: Option<String>,

    #[serde(rename = "@noBlob")]
    pub no_blob: Option<ZmBoolean>,

    /// The free/busy status the organizer intends for attendees.
    #[serde(rename = "@fba")]
    pub free_busy_actual: Option<FreeBusyStatus>,

    #[serde(rename = "@fb")]
    pub free_busy: Option<FreeBusyStatus>,

    #[serde(rename = "@transp")]
    pub transparency: Option<Transparency>,

    #[serde(rename = "@isOrg")]
    pub is_organizer: Option<ZmBoolean>,

    #[serde(rename = "@x_uid")]
    pub x_uid: Option<String>,

    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@seq")]
    pub sequence: Option<i32>,

    /// The DTSTAMP, in milliseconds since the epoch.
    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@calItemId")]
    pub calendar_item_id: Option<String>,

    /// Deprecated: use `calendar_item_id` instead. Servers still send it
    /// alongside `calItemId` for appointments.
    #[serde(rename = "@apptId")]
    pub appointment_id: Option<String>,

    /// The folder of the calendar item.
    #[serde(rename = "@ciFolder")]
    pub calendar_item_folder: Option<String>,

    #[serde(rename = "@status")]
    pub status: Option<InviteStatus>,

    #[serde(rename = "@class")]
    pub class: Option<InviteClass>,

    #[serde(rename = "@url")]
    pub url: Option<String>,

    /// Whether the component is an exception of a recurring item.
    #[serde(rename = "@ex")]
    pub is_exception: Option<ZmBoolean>,

    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,

    #[serde(rename = "@allDay")]
    pub is_all_day: Option<ZmBoolean>,

    #[serde(rename = "@draft")]
    pub is_draft: Option<ZmBoolean>,

    #[serde(rename = "@neverSent")]
    pub never_sent: Option<ZmBoolean>,

    /// Comma-separated list of the changes made by an update: `time`, `loc`,
    /// `subject` and so on.
    #[serde(rename = "@changes")]
    pub changes: Option<String>,

    #[serde(rename = "category", default)]
    pub categories: Vec<String>,

    #[serde(rename = "comment", default)]
    pub comments: Vec<String>,

    #[serde(rename = "contact", default)]
    pub contacts: Vec<String>,

    #[serde(rename = "geo")]
    pub geo: Option<GeoInfo>,

    #[serde(rename = "at", default)]
    pub attendees: Vec<CalendarAttendee>,

    #[serde(rename = "alarm", default)]
    pub alarms: Vec<AlarmInfo>,

    #[serde(rename = "fr")]
    pub fragment: Option<String>,

    #[serde(rename = "desc")]
    pub description: Option<String>,

    #[serde(rename = "descHtml")]
    pub html_description: Option<String>,

    #[serde(rename = "or")]
    pub organizer: Option<CalOrganizer>,

    #[serde(rename = "recur")]
    pub recurrence: Option<RecurrenceInfo>,

    /// The instance this component overrides, for exceptions.
    #[serde(rename = "exceptId")]
    pub exception_id: Option<InstanceRecurIdInfo>,

    #[serde(rename = "s")]
    pub start: Option<DtTimeInfo>,

    #[serde(rename = "e")]
    pub end: Option<DtTimeInfo>,

    #[serde(rename = "dur")]
    pub duration: Option<DurationInfo>,
}

/// An invite supplied by the client when creating or modifying a calendar
/// item.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InvitationInfo {
    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@ct")]
    pub content_type: Option<String>,

    #[serde(rename = "@ci")]
    pub content_id: Option<String>,

    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    #[serde(rename = "comp", default)]
    pub components: Vec<InviteComponent>,
}

impl InvitationInfo {
    pub fn with_component(component: InviteComponent) -> Self {
        Self {
            components: vec![component],
            ..Default::default()
        }
    }
}

/// The kind of calendar item an invite describes.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CalendarItemType {
    #[serde(rename = "appt")]
    Appointment,
    #[serde(rename = "task")]
    Task,
}

/// An invite carried by a message returned by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct InviteInfo {
    #[serde(rename = "@type")]
    pub calendar_item_type: CalendarItemType,

    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    #[serde(rename = "comp", default)]
    pub components: Vec<InviteComponent>,

    #[serde(rename = "replies")]
    pub replies: Option<CalendarReplies>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarReplies {
    #[serde(rename = "reply", default)]
    pub replies: Vec<CalendarReply>,
}

/// A reply received from an attendee.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarReply {
    #[serde(rename = "@seq")]
    pub sequence: i32,

    /// The date of the reply, in milliseconds since the epoch.
    #[serde(rename = "@d")]
    pub date: i64,

    /// The address of the attendee who replied.
    #[serde(rename = "@at")]
    pub attendee: String,

    #[serde(rename = "@sentBy")]
    pub sent_by: Option<String>,

    #[serde(rename = "@ptst")]
    pub participation_status: Option<ParticipationStatus>,

    #[serde(rename = "@rangeType")]
    pub recurrence_range_type: Option<i32>,

    #[serde(rename = "@recurId")]
    pub recurrence_id: Option<String>,

    #[serde(rename = "@tz")]
    pub timezone: Option<String>,

    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,
}

/// An invite of a calendar item, as stored in the calendar.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarItemInvite {
    #[serde(rename = "@id")]
    pub id: Option<i32>,

    #[serde(rename = "@seq")]
    pub sequence: Option<i32>,

    #[serde(rename = "@compNum")]
    pub component_num: Option<i32>,

    #[serde(rename = "@recurId")]
    pub recurrence_id: Option<String>,

    #[serde(rename = "@type")]
    pub calendar_item_type: Option<CalendarItemType>,

    #[serde(rename = "tz", default)]
    pub timezones: Vec<CalTZInfo>,

    #[serde(rename = "comp")]
    pub component: Option<InviteComponent>,

    #[serde(rename = "replies")]
    pub replies: Option<CalendarReplies>,

    /// The MIME structure of the invite message, when content is requested.
    #[serde(rename = "mp", default)]
    pub parts: Vec<PartInfo>,
}

/// An appointment or task, with all its invites.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalendarItemInfo {
    #[serde(rename = "@f")]
    pub flags: Option<String>,

    /// Deprecated: use `tag_names` instead.
    #[serde(rename = "@t")]
    pub tags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    #[serde(rename = "@s")]
    pub size: Option<i64>,

    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    /// The time of the next alarm, in milliseconds since the epoch.
    #[serde(rename = "@nextAlarm")]
    pub next_alarm: Option<i64>,

    /// Whether the item has no invite from the organizer.
    #[serde(rename = "@orphan")]
    pub orphan: Option<ZmBoolean>,

    #[serde(rename = "inv", default)]
    pub invites: Vec<CalendarItemInvite>,

    #[serde(rename = "replies")]
    pub replies: Option<CalendarReplies>,

    #[serde(rename = "meta", default)]
    pub metadatas: Vec<MailCustomMetadata>,
}

/// An instance of a calendar item in a summary.
///
/// Fields that are absent take the value of the enclosing
/// [`AppointmentSummary`].
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InstanceData {
    /// The start time, in milliseconds since the epoch.
    #[serde(rename = "@s")]
    pub start_time: Option<i64>,

    /// The timezone offset of the start time, in milliseconds, for all-day
    /// instances.
    #[serde(rename = "@tzo")]
    pub tz_offset: Option<i64>,

    #[serde(rename = "@ex")]
    pub is_exception: Option<ZmBoolean>,

    #[serde(rename = "@ridZ")]
    pub recurrence_id_z: Option<String>,

    /// The duration, in milliseconds.
    #[serde(rename = "@dur")]
    pub duration: Option<i64>,

    #[serde(rename = "@ptst")]
    pub participation_status: Option<ParticipationStatus>,

    #[serde(rename = "@fba")]
    pub free_busy_actual: Option<FreeBusyStatus>,

    #[serde(rename = "@allDay")]
    pub is_all_day: Option<ZmBoolean>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@loc")]
    pub location: Option<String>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<String>,

    #[serde(rename = "@compNum")]
    pub component_num: Option<i32>,

    #[serde(rename = "@status")]
    pub status: Option<InviteStatus>,
}

/// The next alarm of a calendar item.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AlarmDataInfo {
    /// The time of the next alarm, in milliseconds since the epoch.
    #[serde(rename = "@nextAlarm")]
    pub next_alarm: Option<i64>,

    /// The start time of the instance the alarm is for.
    #[serde(rename = "@alarmInstStart")]
    pub alarm_instance_start: Option<i64>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<i32>,

    #[serde(rename = "@compNum")]
    pub component_num: Option<i32>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@loc")]
    pub location: Option<String>,

    #[serde(rename = "alarm")]
    pub alarm: Option<AlarmInfo>,
}

/// A summary of an appointment or task and its instances within a time range.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AppointmentSummary {
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@uid")]
    pub uid: Option<String>,

    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,

    #[serde(rename = "@loc")]
    pub location: Option<String>,

    #[serde(rename = "@fb")]
    pub free_busy: Option<FreeBusyStatus>,

    #[serde(rename = "@fba")]
    pub free_busy_actual: Option<FreeBusyStatus>,

    #[serde(rename = "@transp")]
    pub transparency: Option<Transparency>,

    #[serde(rename = "@status")]
    pub status: Option<InviteStatus>,

    #[serde(rename = "@class")]
    pub class: Option<InviteClass>,

    #[serde(rename = "@allDay")]
    pub is_all_day: Option<ZmBoolean>,

    #[serde(rename = "@ptst")]
    pub participation_status: Option<ParticipationStatus>,

    #[serde(rename = "@isOrg")]
    pub is_organizer: Option<ZmBoolean>,

    /// The default duration of instances, in milliseconds.
    #[serde(rename = "@dur")]
    pub duration: Option<i64>,

    #[serde(rename = "@priority")]
    pub priority: Option<String>,

    #[serde(rename = "@percentComplete")]
    pub percent_complete: Option<String>,

    #[serde(rename = "@recur")]
    pub is_recurring: Option<ZmBoolean>,

    /// Whether the item has exceptions.
    #[serde(rename = "@hasEx")]
    pub has_exceptions: Option<ZmBoolean>,

    /// Whether the item has attendees other than the organizer.
    #[serde(rename = "@otherAtt")]
    pub has_other_attendees: Option<ZmBoolean>,

    #[serde(rename = "@alarm")]
    pub has_alarm: Option<ZmBoolean>,

    #[serde(rename = "@draft")]
    pub is_draft: Option<ZmBoolean>,

    #[serde(rename = "@neverSent")]
    pub never_sent: Option<ZmBoolean>,

    #[serde(rename = "@f")]
    pub flags: Option<String>,

    #[serde(rename = "@tn")]
    pub tag_names: Option<String>,

    #[serde(rename = "@invId")]
    pub invite_id: Option<String>,

    #[serde(rename = "@compNum")]
    pub component_num: Option<i32>,

    #[serde(rename = "@md")]
    pub changed_date: Option<i64>,

    #[serde(rename = "@ms")]
    pub modified_sequence: Option<i32>,

    #[serde(rename = "@rev")]
    pub revision: Option<i32>,

    /// The date of the item, in milliseconds since the epoch.
    #[serde(rename = "@d")]
    pub date: Option<i64>,

    #[serde(rename = "fr")]
    pub fragment: Option<String>,

    #[serde(rename = "alarmData")]
    pub alarm_data: Option<AlarmDataInfo>,

    #[serde(rename = "inst", default)]
    pub instances: Vec<InstanceData>,
}

/// An entry of a calendar summary.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CalendarItemSummary {
    #[serde(rename = "appt")]
    Appointment(AppointmentSummary),

    #[serde(rename = "task")]
    Task(AppointmentSummary),
}

impl CalendarItemSummary {
    pub fn summary(&self) -> &AppointmentSummary {
        match self {
            CalendarItemSummary::Appointment(summary) | CalendarItemSummary::Task(summary) => {
                summary
            }
        }
    }
}

/// The timing of a recurrence component to expand.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ExpandedRecurrenceComponent {
    #[serde(rename = "exceptId")]
    pub exception_id: Option<InstanceRecurIdInfo>,

    #[serde(rename = "s")]
    pub start: Option<DtTimeInfo>,

    #[serde(rename = "e")]
    pub end: Option<DtTimeInfo>,

    #[serde(rename = "dur")]
    pub duration: Option<DurationInfo>,

    #[serde(rename = "recur")]
    pub recurrence: Option<RecurrenceInfo>,
}

/// A component of a recurrence to expand into instances.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum ExpandedRecurrence {
    /// The series.
    #[serde(rename = "comp")]
    Component(ExpandedRecurrenceComponent),

    /// An instance moved or modified.
    #[serde(rename = "except")]
    Exception(ExpandedRecurrenceComponent),

    /// An instance removed from the series.
    #[serde(rename = "cancel")]
    Cancellation(ExpandedRecurrenceComponent),
}

/// A component of the recurrence of a calendar item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum RecurrenceComponent {
    #[serde(rename = "comp")]
    Component(InviteComponent),

    #[serde(rename = "except")]
    Exception(InviteComponent),

    #[serde(rename = "cancel")]
    Cancellation(InviteComponent),
}

/// A slot of free/busy time.
#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FreeBusySlotInfo {
    /// The start of the slot, in milliseconds since the epoch.
    #[serde(rename = "@s")]
    pub start: i64,

    /// The end of the slot, in milliseconds since the epoch.
    #[serde(rename = "@e")]
    pub end: i64,

    /// The ID of the calendar item occupying the slot, when visible.
    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@subject")]
    pub subject: Option<String>,

    #[serde(rename = "@location")]
    pub location: Option<String>,

    #[serde(rename = "@isMeeting")]
    pub is_meeting: Option<ZmBoolean>,

    #[serde(rename = "@isRecurring")]
    pub is_recurring: Option<ZmBoolean>,

    #[serde(rename = "@isException")]
    pub is_exception: Option<ZmBoolean>,

    #[serde(rename = "@isReminderSet")]
    pub is_reminder_set: Option<ZmBoolean>,

    #[serde(rename = "@isPrivate")]
    pub is_private: Option<ZmBoolean>,

    #[serde(rename = "@hasPermission")]
    pub has_permission: Option<ZmBoolean>,
}

impl FreeBusySlotInfo {
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            id: None,
            subject: None,
            location: None,
            is_meeting: None,
            is_recurring: None,
            is_exception: None,
            is_reminder_set: None,
            is_private: None,
            has_permission: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum FreeBusySlot {
    #[serde(rename = "f")]
    Free(FreeBusySlotInfo),

    #[serde(rename = "b")]
    Busy(FreeBusySlotInfo),

    #[serde(rename = "t")]
    Tentative(FreeBusySlotInfo),

    #[serde(rename = "u")]
    Unavailable(FreeBusySlotInfo),

    /// No data is available for the slot.
    #[serde(rename = "n")]
    NoData(FreeBusySlotInfo),
}

impl FreeBusySlot {
    pub fn info(&self) -> &FreeBusySlotInfo {
        match self {
            FreeBusySlot::Free(info)
            | FreeBusySlot::Busy(info)
            | FreeBusySlot::Tentative(info)
            | FreeBusySlot::Unavailable(info)
            | FreeBusySlot::NoData(info) => info,
        }
    }
}

/// The free/busy slots of one account.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct FreeBusyUserInfo {
    /// The account the slots belong to, as requested.
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(rename = "$value", default)]
    pub slots: Vec<FreeBusySlot>,
}

/// The calendar item an alarm update applies to.
/// Identifies a user whose free/busy information is requested, by account
/// ID or email address.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct FreeBusyUserSpec {
    /// Restricts the calculation to a single calendar folder.
    #[serde(rename = "@l")]
    pub folder: Option<String>,

    #[serde(rename = "@id")]
    pub id: Option<String>,

    #[serde(rename = "@name")]
    pub name: Option<String>,
}

impl FreeBusyUserSpec {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct UpdatedAlarmInfo {
    #[serde(rename = "@calItemId")]
    pub calendar_item_id: String,

    /// Deprecated: use `calendar_item_id` instead.
    #[serde(rename = "@apptId")]
    pub appointment_id: Option<String>,

    /// The next alarm after the update, if any.
    #[serde(rename = "alarmData")]
    pub alarm_data: Option<AlarmDataInfo>,
}

/// The result of dismissing or snoozing the alarm of a calendar item.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum UpdatedAlarmItem {
    #[serde(rename = "appt")]
    Appointment(UpdatedAlarmInfo),

    #[serde(rename = "task")]
    Task(UpdatedAlarmInfo),
}

/// The message echoed back by calendar create and modify requests.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct CalEcho {
    #[serde(rename = "m")]
    pub message: MessageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        assert_deserialize_fails, assert_deserialized_content, assert_round_trip,
        assert_serialized_content,
    };

    #[test]
    fn serialize_weekly_recurrence() {
        let mut rule = SimpleRepeatingRule::new(Frequency::Weekly);
        rule.interval = Some(IntervalRule { interval: 2 });
        rule.by_day = Some(ByDayRule {
            days: vec![
                WeekDayOfMonth {
                    day: WeekDay::Monday,
                    ordinal_week: None,
                },
                WeekDayOfMonth {
                    day: WeekDay::Thursday,
                    ordinal_week: None,
                },
            ],
        });
        rule.count = Some(NumAttr { num: 10 });

        let recurrence = RecurrenceInfo {
            rules: vec![
                RecurrenceRule::Add(RecurrenceInfo {
                    rules: vec![RecurrenceRule::Simple(rule)],
                }),
                RecurrenceRule::Exclude(RecurrenceInfo {
                    rules: vec![RecurrenceRule::Dates(SingleDates {
                        timezone: Some("Europe/Berlin".to_string()),
                        date_values: vec![DtVal {
                            start: Some(DtTimeInfo::new("20240311T090000")),
                            end: None,
                            duration: None,
                        }],
                    })],
                }),
            ],
        };

        let expected = r#"<recur><add><rule freq="WEE"><count num="10"/><interval ival="2"/><byday><wkday day="MO"/><wkday day="TH"/></byday></rule></add><exclude><dates tz="Europe/Berlin"><dtval><s d="20240311T090000"/></dtval></dates></exclude></recur>"#;

        assert_serialized_content(&recurrence, "recur", expected);
        assert_round_trip(&recurrence, "recur");
    }

    #[test]
    fn undeclared_recurrence_rule_is_rejected() {
        assert_deserialize_fails::<RecurrenceInfo>(r#"<recur><repeat freq="DAI"/></recur>"#);
    }

    #[test]
    fn deserialize_free_busy_slots() {
        let xml = r#"<usr id="ivan@example.com"><f s="1700000000000" e="1700003600000"/><b s="1700003600000" e="1700007200000" subject="Standup"/><n s="1700007200000" e="1700010800000"/></usr>"#;

        let mut busy = FreeBusySlotInfo::new(1_700_003_600_000, 1_700_007_200_000);
        busy.subject = Some("Standup".to_string());

        let expected = FreeBusyUserInfo {
            id: "ivan@example.com".to_string(),
            slots: vec![
                FreeBusySlot::Free(FreeBusySlotInfo::new(1_700_000_000_000, 1_700_003_600_000)),
                FreeBusySlot::Busy(busy),
                FreeBusySlot::NoData(FreeBusySlotInfo::new(1_700_007_200_000, 1_700_010_800_000)),
            ],
        };

        assert_deserialized_content(xml, expected);
    }

    #[test]
    fn slot_requires_bounds() {
        assert_deserialize_fails::<FreeBusyUserInfo>(r#"<usr id="x"><b s="1700000000000"/></usr>"#);
    }

    #[test]
    fn invite_component_keeps_deprecated_appointment_id() {
        let xml = r#"<comp method="REQUEST" compNum="0" name="Design review" calItemId="600" apptId="600" status="CONF" fb="B" allDay="0"><at a="judy@example.com" role="REQ" ptst="NE" rsvp="1"/><or a="kim@example.com" d="Kim"/><s d="20240315T140000" tz="Europe/Berlin"/><e d="20240315T150000" tz="Europe/Berlin"/></comp>"#;

        let expected = InviteComponent {
            method: Some("REQUEST".to_string()),
            component_num: Some(0),
            name: Some("Design review".to_string()),
            calendar_item_id: Some("600".to_string()),
            appointment_id: Some("600".to_string()),
            status: Some(InviteStatus::Confirmed),
            free_busy: Some(FreeBusyStatus::Busy),
            is_all_day: Some(ZmBoolean::FALSE),
            attendees: vec![CalendarAttendee {
                participation_status: Some(ParticipationStatus::NeedsAction),
                rsvp: Some(ZmBoolean::TRUE),
                ..CalendarAttendee::new("judy@example.com", AttendeeRole::Required)
            }],
            organizer: Some(CalOrganizer {
                address: Some("kim@example.com".to_string()),
                display_name: Some("Kim".to_string()),
                ..Default::default()
            }),
            start: Some(DtTimeInfo::with_timezone("20240315T140000", "Europe/Berlin")),
            end: Some(DtTimeInfo::with_timezone("20240315T150000", "Europe/Berlin")),
            ..Default::default()
        };

        assert_deserialized_content(xml, expected.clone());
        assert_round_trip(&expected, "comp");
    }

    #[test]
    fn calendar_item_summary_variants() {
        let xml = r#"<appt id="700" name="Gym" dur="3600000"><inst s="1700000000000"/><inst s="1700604800000" ex="1" dur="1800000"/></appt>"#;

        let summary: CalendarItemSummary =
            quick_xml::de::from_str(&format!("<x>{xml}</x>"))
                .map(|wrapper: SummaryWrapper| wrapper.item)
                .expect("summary should deserialize");

        let CalendarItemSummary::Appointment(appt) = &summary else {
            panic!("expected an appointment summary, got {summary:?}");
        };
        assert_eq!(appt.instances.len(), 2);
        assert_eq!(appt.instances[1].is_exception, Some(ZmBoolean::TRUE));
        assert_eq!(summary.summary().duration, Some(3_600_000));
    }

    #[derive(Deserialize)]
    struct SummaryWrapper {
        #[serde(rename = "$value")]
        item: CalendarItemSummary,
    }
}
