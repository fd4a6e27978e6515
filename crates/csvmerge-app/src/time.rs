// Rust guideline compliant 2026-10-19

//! Run timestamps and the output file names derived from them.

use chrono::{Local, NaiveDateTime};

/// Format of the run stamp embedded in output file names.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Returns the current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Formats a run stamp such as `20240131_235959`.
pub fn run_stamp(at: NaiveDateTime) -> String {
    at.format(STAMP_FORMAT).to_string()
}

/// Returns the merged output file name for a stamp.
pub fn output_file_name(stamp: &str) -> String {
    format!("output_{stamp}.csv")
}

/// Returns the unmatched-rows file name for a stamp.
pub fn unmatched_file_name(stamp: &str) -> String {
    format!("unmatched_{stamp}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_file_names_from_stamp() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 31)
            .unwrap()
            .and_hms_opt(23, 5, 9)
            .unwrap();
        let stamp = run_stamp(at);
        assert_eq!(stamp, "20240131_230509");
        assert_eq!(output_file_name(&stamp), "output_20240131_230509.csv");
        assert_eq!(unmatched_file_name(&stamp), "unmatched_20240131_230509.csv");
    }
}
