//! Villa availability calendar.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    CALENDAR_AVAILABLE, CALENDAR_BLOCKED, CALENDAR_PENDING, CALENDAR_RESERVED, EVENT_CHECKIN,
    EVENT_CHECKOUT, EVENT_SPECIAL_OFFER,
};
use crate::error::DomainError;

/// Availability of a villa on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum CalendarStatus {
    Available,
    Pending,
    Reserved,
    Blocked,
}

impl CalendarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarStatus::Available => CALENDAR_AVAILABLE,
            CalendarStatus::Pending => CALENDAR_PENDING,
            CalendarStatus::Reserved => CALENDAR_RESERVED,
            CalendarStatus::Blocked => CALENDAR_BLOCKED,
        }
    }

    /// Statuses that keep a date from being booked
    pub fn unavailable() -> [CalendarStatus; 3] {
        [
            CalendarStatus::Pending,
            CalendarStatus::Reserved,
            CalendarStatus::Blocked,
        ]
    }
}

impl FromStr for CalendarStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CALENDAR_AVAILABLE => Ok(CalendarStatus::Available),
            CALENDAR_PENDING => Ok(CalendarStatus::Pending),
            CALENDAR_RESERVED => Ok(CalendarStatus::Reserved),
            CALENDAR_BLOCKED => Ok(CalendarStatus::Blocked),
            other => Err(DomainError::unknown_variant("calendar status", other)),
        }
    }
}

impl fmt::Display for CalendarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker for notable dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarEventType {
    Checkin,
    Checkout,
    SpecialOffer,
}

impl CalendarEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarEventType::Checkin => EVENT_CHECKIN,
            CalendarEventType::Checkout => EVENT_CHECKOUT,
            CalendarEventType::SpecialOffer => EVENT_SPECIAL_OFFER,
        }
    }
}

impl FromStr for CalendarEventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            EVENT_CHECKIN => Ok(CalendarEventType::Checkin),
            EVENT_CHECKOUT => Ok(CalendarEventType::Checkout),
            EVENT_SPECIAL_OFFER => Ok(CalendarEventType::SpecialOffer),
            other => Err(DomainError::unknown_variant("calendar event type", other)),
        }
    }
}

/// One calendar cell: a villa on a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalendarEvent {
    pub id: Uuid,
    pub villa_id: Uuid,
    pub date: NaiveDate,
    pub status: CalendarStatus,
    pub price: Option<f64>,
    pub note: Option<String>,
    pub event_type: Option<CalendarEventType>,
    pub reservation_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn is_bookable(&self) -> bool {
        self.status == CalendarStatus::Available
    }
}
