// File: ./src/model/template.rs
// Age markers: "!YYYY!" in event text becomes the number of years since YYYY.
use chrono::{Datelike, NaiveDate};

const MARKER_LEN: usize = 6;

pub fn expand_ages(text: &str, today: NaiveDate) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('!') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match age_marker(tail) {
            Some(year) => {
                out.push_str(&(today.year() - year).to_string());
                rest = &tail[MARKER_LEN..];
            }
            None => {
                out.push('!');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Year of the marker at the start of `s`, which begins with '!'.
fn age_marker(s: &str) -> Option<i32> {
    let b = s.as_bytes();
    if b.len() < MARKER_LEN || b[MARKER_LEN - 1] != b'!' {
        return None;
    }
    if !b[1..MARKER_LEN - 1].iter().all(u8::is_ascii_digit) {
        return None;
    }
    s[1..MARKER_LEN - 1].parse().ok()
}
