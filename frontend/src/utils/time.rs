use chrono::{DateTime, Datelike, Local, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn current_year() -> i32 {
    Local::now().year()
}
