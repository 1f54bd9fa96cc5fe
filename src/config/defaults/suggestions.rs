pub fn enabled() -> bool {
    true
}

pub fn limit() -> usize {
    3
}
