use crate::models::{Event, Highlight, Release};

macro_rules! event {
    ($date:expr, $city:expr, $venue:expr, $title:expr, $slug:expr) => {
        Event {
            date: $date,
            city: $city,
            venue: $venue,
            title: $title,
            slug: $slug,
            folder: $slug,
        }
    };
}

/// Newest first.
pub static EVENTS: &[Event] = &[
    event!("FEB 14 '26", "Manipal", "Big Shot", "Sweet Secret — Valentine's Day", "sweet-secret-valentines-day"),
    event!("JAN 24 '26", "Manipal", "Big Shot", "Pink City", "pink-city"),
    event!("JAN 18 '26", "Manipal", "Big Shot", "Sin City — Vol. II", "sin-city-vol-ii"),
    event!("JAN 11 '26", "Manipal", "Big Shot", "Blackout Affair", "blackout-affair"),
    event!("DEC 31 '25", "Manipal", "Ecstasy", "New Year's Eve", "new-years-eve"),
    event!("NOV 29 '25", "Manipal", "Hakuna Matata", "One Last Dance", "one-last-dance"),
    event!("NOV 16 '25", "Mangalore", "SJEC", "Hostel Day '25", "hostel-day-25"),
    event!("NOV 13 '25", "Manipal", "SJEC", "Tiara '25", "tiara-25-nov"),
    event!("OCT 10 '25", "Manipal", "Ecstasy", "Badtameez Night", "badtameez-night"),
    event!("SEP 19 '25", "Manipal", "Ecstasy", "Raat Ka Rivaz", "raat-ka-rivaz"),
    event!("AUG 08 '25", "Manipal", "Hakuna Matata", "The Spotlight", "the-spotlight"),
    event!("MAY 31 '25", "Mangalore", "SJEC", "Alvida '25", "alvida-25"),
    event!("MAY 23 '25", "Mangalore", "SJEC", "CSE Farewell", "cse-farewell"),
    event!("MAR 20 '25", "Mangalore", "SJEC", "Tiara '25", "tiara-25-mar"),
    event!("MAR 11 '25", "Mangalore", "SJEC", "Sports Day '25", "sports-day-25"),
    event!("NOV 22 '24", "Mangalore", "SJEC", "ECE Branch Entry", "ece-branch-entry"),
    event!("NOV 20 '24", "Mangalore", "SJEC", "Milan", "milan"),
    event!("OCT 26 '24", "Mangalore", "SJEC", "Freshers Day '24", "freshers-day-24"),
    event!("MAY 09 '24", "Mangalore", "SJEC", "Tiara '24", "tiara-24"),
];

pub static HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Raat Ka Rivaz",
        venue: "Club Ecstasy, Manipal",
        playback_id: "apPdW3u201w2MZW36h2bekewZePawf4tMjDurBO7s2jQ",
        thumbnail_time: 0,
    },
    Highlight {
        title: "Milan",
        venue: "SJEC, Mangalore",
        playback_id: "hUCHyMqJtwifSRvN5CWqCZXbB1cVlIU2dNOeNs8Hw8E",
        thumbnail_time: 0,
    },
    Highlight {
        title: "New Year's Eve",
        venue: "Club Ecstasy, Manipal",
        playback_id: "8UtFZTKSYamKt00fKyUqLS01xumCm4ajpB02Do5BHPVvBA",
        thumbnail_time: 5,
    },
    Highlight {
        title: "Blackout Affair",
        venue: "Big Shot, Manipal",
        playback_id: "1SiHqKUbowFSV00Yf2GsNAo5WjtKfhSHSN2c1BOW7rzM",
        thumbnail_time: 0,
    },
];

pub static RELEASES: &[Release] = &[
    Release {
        title: "Where You Are vs. Breakaway",
        kind: "Mashup",
        video_id: "Q252URDVUbA",
    },
    Release {
        title: "Waiting for Love vs. Quantum",
        kind: "Mashup",
        video_id: "o8Xks89gPmc",
    },
    Release {
        title: "Don't You Worry Child vs. The Only Way Is Up",
        kind: "Mashup",
        video_id: "pqga2bbsJrY",
    },
    Release {
        title: "Bom Diggy vs. Habibi",
        kind: "Mashup",
        video_id: "Kp0BT-Ts9cg",
    },
];

pub fn find_event(slug: &str) -> Option<&'static Event> {
    EVENTS.iter().find(|e| e.slug == slug)
}

/// One page of the event listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EventPage {
    pub events: &'static [Event],
    pub page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Pages are 1-based; out-of-range pages are clamped onto the listing.
pub fn events_page(page: usize, per_page: usize) -> EventPage {
    let per_page = per_page.max(1);
    let total_pages = ((EVENTS.len() + per_page - 1) / per_page).max(1);
    let page = page.clamp(1, total_pages);
    let start = ((page - 1) * per_page).min(EVENTS.len());
    let end = (start + per_page).min(EVENTS.len());

    EventPage {
        events: &EVENTS[start..end],
        page,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}
