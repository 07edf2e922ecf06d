use crate::{id::*, time::*};

// Booking details of a show: who plays where, and when.
// The start time is stored with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowBooking {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Show {
    pub id: ShowId,
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: Timestamp,
}

impl Show {
    /// A show that starts exactly at `now` already counts as past.
    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        self.start_time > now
    }
}

impl From<(ShowId, ShowBooking)> for Show {
    fn from(from: (ShowId, ShowBooking)) -> Self {
        let (
            id,
            ShowBooking {
                artist_id,
                venue_id,
                start_time,
            },
        ) = from;
        Self {
            id,
            artist_id,
            venue_id,
            start_time,
        }
    }
}

impl From<Show> for (ShowId, ShowBooking) {
    fn from(from: Show) -> Self {
        let Show {
            id,
            artist_id,
            venue_id,
            start_time,
        } = from;
        (
            id,
            ShowBooking {
                artist_id,
                venue_id,
                start_time,
            },
        )
    }
}
