// File: ./src/help.rs
//! Event key syntax reference, generated from the supported recurrence kinds.

use crate::model::KindTag;
use strum::IntoEnumIterator;

#[derive(Clone, Debug)]
pub struct HelpItem {
    pub keys: String,
    pub desc: String,
    pub example: String,
}

#[derive(Clone, Debug)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<HelpItem>,
}

pub fn get_syntax_help() -> Vec<HelpSection> {
    let kinds = KindTag::iter()
        .map(|tag| HelpItem {
            keys: tag.syntax().to_string(),
            desc: tag.label().to_string(),
            example: tag.example().to_string(),
        })
        .collect();

    vec![
        HelpSection {
            title: "Event keys".to_string(),
            items: kinds,
        },
        HelpSection {
            title: "Modifiers".to_string(),
            items: vec![
                HelpItem {
                    keys: "KEY/N".to_string(),
                    desc: "Only every Nth occurrence counts".to_string(),
                    example: "DAILY/3:20240101".to_string(),
                },
                HelpItem {
                    keys: "KEY:START[:END]".to_string(),
                    desc: "Limit to a date range (open end when END is omitted)".to_string(),
                    example: "MON:20240101:20241231".to_string(),
                },
                HelpItem {
                    keys: "!YYYY!".to_string(),
                    desc: "In event text, replaced by the years elapsed since YYYY".to_string(),
                    example: "Alice turns !1990!".to_string(),
                },
            ],
        },
    ]
}

/// Plain-text rendering of [`get_syntax_help`].
pub fn syntax_help_text() -> String {
    let mut out = String::new();
    for section in get_syntax_help() {
        out.push_str(&section.title);
        out.push_str(":\n");
        for item in section.items {
            out.push_str(&format!(
                "    {:<32} {} (e.g. {})\n",
                item.keys, item.desc, item.example
            ));
        }
    }
    out
}
