use chrono::Utc;

/// Get current Unix timestamp in milliseconds (UTC)
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_millis_is_monotonic_enough() {
        // テスト項目: epoch_millis が妥当な現在時刻を返す
        // when (操作):
        let first = epoch_millis();
        let second = epoch_millis();

        // then (期待する結果):
        assert!(first > 1_600_000_000_000); // after 2020-09-13
        assert!(second >= first);
    }
}
