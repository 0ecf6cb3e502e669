//! Messenger wire shapes. Every opaque string the external schema expects is
//! modeled as a closed enum that serializes to that string form, so the set
//! of emittable payloads is checked at compile time.

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentType {
    File,
    Audio,
    Image,
    Video,
    Receipt,
    Template,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    WebUrl { title: String, url: String },
    Postback { title: String, payload: String },
    PhoneNumber { title: String, payload: String },
    ElementShare,
}

impl Button {
    pub fn postback(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Postback { title: title.into(), payload: payload.into() }
    }

    pub fn web_url(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::WebUrl { title: title.into(), url: url.into() }
    }

    pub fn phone_number(title: impl Into<String>, number: impl Into<String>) -> Self {
        Self::PhoneNumber { title: title.into(), payload: number.into() }
    }
}

/// One card of a generic template.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Element {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum TemplatePayload {
    Generic { elements: Vec<Element> },
    Button { text: String, buttons: Vec<Button> },
    Receipt(ReceiptPayload),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptPayload {
    pub recipient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    pub order_number: String,
    pub currency: String,
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ReceiptItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ReceiptAddress>,
    pub summary: ReceiptSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<ReceiptAdjustment>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptAddress {
    pub street_1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    pub total_cost: Decimal,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceiptAdjustment {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyContentType {
    Text,
    Location,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickReply {
    pub content_type: QuickReplyContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl QuickReply {
    pub fn text(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            content_type: QuickReplyContentType::Text,
            title: Some(title.into()),
            payload: Some(payload.into()),
            image_url: None,
        }
    }
}

/// Outbound attachment envelope: `requireFeedback` tells the conversation
/// runtime whether to await a user response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttachmentMessage {
    #[serde(rename = "requireFeedback")]
    pub require_feedback: bool,
    pub content: AttachmentContent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttachmentContent {
    pub attachment: Attachment,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub kind: AttachmentType,
    pub payload: TemplatePayload,
}

impl AttachmentMessage {
    pub fn template(payload: TemplatePayload) -> Self {
        Self {
            require_feedback: true,
            content: AttachmentContent {
                attachment: Attachment { kind: AttachmentType::Template, payload },
            },
        }
    }

    /// Generic list card, the shape most browse surfaces use.
    pub fn generic(elements: Vec<Element>) -> Self {
        Self::template(TemplatePayload::Generic { elements })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickReplyMessage {
    #[serde(rename = "requireFeedback")]
    pub require_feedback: bool,
    pub content: QuickReplyContent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuickReplyContent {
    pub text: String,
    pub quick_replies: Vec<QuickReply>,
}

impl QuickReplyMessage {
    pub fn new(text: impl Into<String>, quick_replies: Vec<QuickReply>) -> Self {
        Self {
            require_feedback: true,
            content: QuickReplyContent { text: text.into(), quick_replies },
        }
    }
}

/// Plain text response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextMessage {
    #[serde(rename = "requireFeedback")]
    pub require_feedback: bool,
    pub content: TextContent,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextContent {
    pub text: String,
}

impl TextMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { require_feedback: false, content: TextContent { text: text.into() } }
    }
}
