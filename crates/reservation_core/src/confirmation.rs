use std::fmt;

use chrono::{DateTime, Utc};
use shared::domain::ReservationDraft;

use crate::workflow::Confirmation;

/// "1 Guest" when the raw party size reads as one, "N Guests" otherwise.
pub fn guest_count_label(raw_party_size: &str) -> String {
    let noun = match leading_integer(raw_party_size) {
        Some(1) => "Guest",
        _ => "Guests",
    };
    format!("{raw_party_size} {noun}")
}

/// Integer prefix of `raw` after leading whitespace and an optional sign;
/// anything after the digits is ignored, so "1.0" and "1 guest" both read as 1.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let value = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Read-only projection of a confirmed reservation.
#[derive(Debug, Clone, Copy)]
pub struct ConfirmationView<'a> {
    confirmation: &'a Confirmation,
}

impl<'a> ConfirmationView<'a> {
    pub fn new(confirmation: &'a Confirmation) -> Self {
        Self { confirmation }
    }

    pub fn snapshot(&self) -> &'a ReservationDraft {
        &self.confirmation.snapshot
    }

    pub fn date(&self) -> &'a str {
        &self.confirmation.snapshot.date
    }

    pub fn time(&self) -> &'a str {
        &self.confirmation.snapshot.time
    }

    pub fn party_size_label(&self) -> String {
        guest_count_label(&self.confirmation.snapshot.party_size)
    }

    pub fn full_name(&self) -> String {
        let snapshot = &self.confirmation.snapshot;
        format!("{} {}", snapshot.first_name, snapshot.last_name)
    }

    pub fn reference(&self) -> String {
        self.confirmation.receipt.short_code()
    }

    pub fn confirmed_at(&self) -> DateTime<Utc> {
        self.confirmation.receipt.confirmed_at
    }
}

impl fmt::Display for ConfirmationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reservation Details")?;
        writeln!(f, "Date: {}", self.date())?;
        writeln!(f, "Time: {}", self.time())?;
        writeln!(f, "Party Size: {}", self.party_size_label())?;
        writeln!(f, "Name: {}", self.full_name())?;
        write!(f, "Reference: {}", self.reference())
    }
}
