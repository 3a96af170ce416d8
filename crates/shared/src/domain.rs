use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one independently validated input of a reservation draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Date,
    Time,
    PartySize,
    SpecialRequests,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Date,
        Field::Time,
        Field::PartySize,
        Field::SpecialRequests,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Time => "time",
            Field::PartySize => "partySize",
            Field::SpecialRequests => "specialRequests",
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress reservation data. Values are kept exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub date: String,
    pub time: String,
    pub party_size: String,
    pub special_requests: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl ReservationDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::PartySize => &self.party_size,
            Field::SpecialRequests => &self.special_requests,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::PartySize => &mut self.party_size,
            Field::SpecialRequests => &mut self.special_requests,
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        };
        *slot = value;
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}

/// Half-hour dinner seating, 5:00 PM through 9:30 PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const ALL: [TimeSlot; 10] = [
        TimeSlot(0),
        TimeSlot(1),
        TimeSlot(2),
        TimeSlot(3),
        TimeSlot(4),
        TimeSlot(5),
        TimeSlot(6),
        TimeSlot(7),
        TimeSlot(8),
        TimeSlot(9),
    ];

    const LABELS: [&'static str; 10] = [
        "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM",
        "9:00 PM", "9:30 PM",
    ];

    pub fn label(self) -> &'static str {
        Self::LABELS[usize::from(self.0)]
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of guests. `8` stands for "8 or more".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartySize(u8);

impl PartySize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<u8>().ok().and_then(Self::new)
    }

    /// Label shown in the party size picker.
    pub fn option_label(self) -> String {
        match self.0 {
            1 => "1 Guest".to_string(),
            Self::MAX => format!("{}+ Guests", Self::MAX),
            n => format!("{n} Guests"),
        }
    }

    pub fn options() -> Vec<PartySizeOption> {
        (Self::MIN..=Self::MAX)
            .map(|value| {
                let size = Self(value);
                PartySizeOption {
                    value: value.to_string(),
                    label: size.option_label(),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartySizeOption {
    pub value: String,
    pub label: String,
}
