//! Facebook Messenger rendering for the booking bot: wire schema types,
//! postback payload events, and the builders that turn domain objects and
//! availability pages into sendable messages.

pub mod availability;
pub mod events;
pub mod menus;
pub mod receipt;
pub mod schema;

pub use availability::{
    asset_list_attachment, date_quick_replies, duration_quick_replies, time_quick_replies,
    RenderError,
};
pub use events::{decode_event, encode_event, BookingEvent, EventParams, PayloadError, PayloadEvent};
pub use menus::{
    category_list_attachment, main_menu_attachment, quick_menu_replies, service_list_attachment,
    store_hours_fine_print_text, store_hours_text, store_info_text,
};
pub use receipt::{booking_state_quick_replies, confirmation_quick_replies, receipt_attachment};
pub use schema::{
    Attachment, AttachmentMessage, AttachmentType, Button, Element, QuickReply,
    QuickReplyContentType, QuickReplyMessage, ReceiptAddress, ReceiptAdjustment, ReceiptItem,
    ReceiptPayload, ReceiptSummary, TemplatePayload, TextMessage,
};
