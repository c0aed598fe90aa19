//! Wedding events shown on the invitation page.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::Serialize;

/// Map coordinates in WGS84.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// One scheduled event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeddingEvent {
    title: String,
    starts_at: DateTime<FixedOffset>,
    ends_at: DateTime<FixedOffset>,
    location: String,
    coordinates: Coordinates,
    map_link: String,
}

impl WeddingEvent {
    /// Event title, such as "Wedding Ceremony".
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Local start time.
    pub fn starts_at(&self) -> DateTime<FixedOffset> {
        self.starts_at
    }

    /// Local end time.
    pub fn ends_at(&self) -> DateTime<FixedOffset> {
        self.ends_at
    }

    /// Venue name.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Venue coordinates.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Directions link for the venue.
    pub fn map_link(&self) -> &str {
        self.map_link.as_str()
    }
}

/// Ordered list of wedding events.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeddingSchedule {
    events: Vec<WeddingEvent>,
}

impl WeddingSchedule {
    /// Build a schedule, ordering events by start time.
    pub fn new(mut events: Vec<WeddingEvent>) -> Self {
        events.sort_by_key(WeddingEvent::starts_at);
        Self { events }
    }

    /// Events in start order.
    pub fn events(&self) -> &[WeddingEvent] {
        &self.events
    }

    /// The first event, which the countdown targets.
    pub fn first(&self) -> Option<&WeddingEvent> {
        self.events.first()
    }
}

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn ist(date: NaiveDate, hour: u32, minute: u32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(IST_OFFSET_SECS)?;
    let local = date.and_hms_opt(hour, minute, 0)?;
    offset.from_local_datetime(&local).single()
}

struct EventSeed {
    title: &'static str,
    date: (i32, u32, u32),
    starts: (u32, u32),
    ends: (u32, u32),
    location: &'static str,
    coordinates: Coordinates,
    map_link: &'static str,
}

const EVENTS: [EventSeed; 2] = [
    EventSeed {
        title: "Wedding Ceremony",
        date: (2025, 6, 8),
        starts: (7, 0),
        ends: (8, 30),
        location: "Vairawar Valagam, Vairavanpatti",
        coordinates: Coordinates {
            lat: 10.128_196_9,
            lng: 78.658_580_6,
        },
        map_link: "https://www.google.com/maps/search/?api=1&query=10.1281969,78.6585806",
    },
    EventSeed {
        title: "Wedding Reception",
        date: (2025, 6, 14),
        starts: (18, 30),
        ends: (21, 0),
        location: "KNT Mahal A/C, Neyveli",
        coordinates: Coordinates {
            lat: 11.631_901_2,
            lng: 79.550_031_1,
        },
        map_link: "https://www.google.com/maps/search/?api=1&query=11.6319012,79.5500311",
    },
];

impl Default for WeddingSchedule {
    fn default() -> Self {
        let events = EVENTS
            .iter()
            .filter_map(|seed| {
                let (year, month, day) = seed.date;
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                Some(WeddingEvent {
                    title: seed.title.to_owned(),
                    starts_at: ist(date, seed.starts.0, seed.starts.1)?,
                    ends_at: ist(date, seed.ends.0, seed.ends.1)?,
                    location: seed.location.to_owned(),
                    coordinates: seed.coordinates,
                    map_link: seed.map_link.to_owned(),
                })
            })
            .collect();
        Self::new(events)
    }
}
