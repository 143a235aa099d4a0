use serde::{Deserialize, Serialize};

/// Name under which hosts register this lexer.
pub const LEXER_NAME: &str = "mbox";

/// Per-character style codes emitted by the lexer.
///
/// Discriminants are stable and are what a host stores in its style buffer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Style {
    #[default]
    Ordinary = 0,
    Blank = 1,
    MessageFrom = 2,
    MessageFromValue = 3,
    CustomHeader = 4,
    CustomHeaderValue = 5,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Ordinary,
        Style::Blank,
        Style::MessageFrom,
        Style::MessageFromValue,
        Style::CustomHeader,
        Style::CustomHeaderValue,
    ];

    /// Numeric code stored by the host.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decodes a host style code. Unknown codes read as `Ordinary`.
    pub fn from_code(code: u8) -> Style {
        Style::ALL
            .get(usize::from(code))
            .copied()
            .unwrap_or(Style::Ordinary)
    }

    /// Machine name, identical to the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Style::Ordinary => "ordinary",
            Style::Blank => "blank",
            Style::MessageFrom => "message_from",
            Style::MessageFromValue => "message_from_value",
            Style::CustomHeader => "custom_header",
            Style::CustomHeaderValue => "custom_header_value",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Style::Ordinary => "Message body and any text outside a valid header block",
            Style::Blank => "Empty line separating header blocks from bodies",
            Style::MessageFrom => "The `From ` keyword of a message boundary line",
            Style::MessageFromValue => "Sender and date of a message boundary line",
            Style::CustomHeader => "Header field name up to and including `: `",
            Style::CustomHeaderValue => "Header field value, including continuation lines",
        }
    }
}
