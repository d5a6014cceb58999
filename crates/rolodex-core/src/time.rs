use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%b %-d, %Y").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%b %-d, %Y %-I:%M %p")
        .to_string()
}
