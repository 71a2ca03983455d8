//! Radar frame naming on the publisher's 5-minute grid.
//!
//! The upstream service publishes one radar frame every five minutes, named
//! `yyyyMMddHHmm.gif` in local (publisher) time. The frame for the exact
//! current minute is not available yet, so resolution steps back one minute
//! before quantizing down to the grid.

use chrono::{Duration, NaiveDateTime, Timelike};

/// Resolves the remote filename of the newest radar frame expected to
/// exist at `now`.
///
/// Pure and deterministic: the same timestamp always yields the same
/// filename. Subtracting the one-minute lag can roll the hour (and with it
/// the date) backwards; chrono's date arithmetic carries that through the
/// formatted prefix.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 1)
///     .unwrap()
///     .and_hms_opt(9, 7, 30)
///     .unwrap();
/// assert_eq!(ameshview::frames::radar_filename(t), "202403010905.gif");
/// ```
pub fn radar_filename(now: NaiveDateTime) -> String {
    let lagged = now - Duration::minutes(1);
    let quantized = (lagged.minute() / 5) * 5;
    format!("{}{:02}.gif", lagged.format("%Y%m%d%H"), quantized)
}
