/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

mod common;
mod operations;

pub use common::*;
pub use operations::*;
pub mod soap;

// Messages.
pub mod add_msg;
pub mod apply_filter_rules;
pub mod bounce_msg;
pub mod browse;
pub mod check_spelling;
pub mod get_msg;
pub mod get_msg_metadata;
pub mod get_spell_dictionaries;
pub mod msg_action;
pub mod remove_attachments;
pub mod save_draft;
pub mod send_delivery_report;
pub mod send_msg;

// Conversations and search.
pub mod conv_action;
pub mod get_conv;
pub mod search;
pub mod search_conv;

// Generic items and mailbox state.
pub mod empty_dumpster;
pub mod get_custom_metadata;
pub mod get_item;
pub mod get_mailbox_metadata;
pub mod item_action;
pub mod no_op;
pub mod set_custom_metadata;
pub mod set_mailbox_metadata;

// Folders and tags.
pub mod create_folder;
pub mod create_mountpoint;
pub mod create_search_folder;
pub mod create_tag;
pub mod folder_action;
pub mod get_folder;
pub mod get_search_folder;
pub mod get_tag;
pub mod modify_search_folder;
pub mod tag_action;

// Contacts.
pub mod auto_complete;
pub mod contact_action;
pub mod create_contact;
pub mod export_contacts;
pub mod get_contacts;
pub mod import_contacts;
pub mod modify_contact;

// Notes, documents and comments.
pub mod add_comment;
pub mod create_note;
pub mod get_comments;
pub mod get_note;
pub mod note_action;
pub mod save_document;

// Calendar.
pub mod cancel_appointment;
pub mod cancel_task;
pub mod check_recur_conflicts;
pub mod complete_task_instance;
pub mod create_appointment;
pub mod create_appointment_exception;
pub mod create_task;
pub mod dismiss_calendar_item_alarm;
pub mod expand_recur;
pub mod forward_appointment;
pub mod get_appointment;
pub mod get_appt_summaries;
pub mod get_calendar_item_summaries;
pub mod get_free_busy;
pub mod get_ical;
pub mod get_mini_cal;
pub mod get_recur;
pub mod get_task;
pub mod get_working_hours;
pub mod ical_reply;
pub mod import_appointments;
pub mod modify_appointment;
pub mod modify_task;
pub mod send_invite_reply;
pub mod snooze_calendar_item_alarm;

// Sharing and permissions.
pub mod check_permission;
pub mod get_permission;
pub mod get_share_notifications;
pub mod grant_permission;
pub mod revoke_permission;
pub mod send_share_notification;

// Sync.
pub mod get_last_item_id_in_mailbox;
pub mod get_modified_items_ids;
pub mod sync;

// Wait sets.
pub mod create_wait_set;
pub mod destroy_wait_set;
pub mod wait_set;

pub(crate) mod sealed {
    /// A trait for structures which may appear in the body of a SOAP envelope.
    pub trait EnvelopeBodyContents {
        /// The wire name of the root element of this message.
        const NAME: &'static str;

        /// The XML namespace the root element belongs to.
        const NAMESPACE: &'static str;
    }
}
