use chrono::Utc;

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

pub fn now_u64() -> u64 {
    now_i64() as u64
}
