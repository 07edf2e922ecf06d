use super::*;

impl ShowRepo for DbReadOnly<'_> {
    fn create_show(&self, _booking: &ShowBooking) -> Result<ShowId> {
        unreachable!();
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<ArtistAppearance>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<VenueAppearance>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListing>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_of_venue(&self, venue_id: VenueId, now: Timestamp) -> Result<u64> {
        count_upcoming_shows_of_venue(&mut self.conn.borrow_mut(), venue_id, now)
    }
}

impl ShowRepo for DbReadWrite<'_> {
    fn create_show(&self, booking: &ShowBooking) -> Result<ShowId> {
        create_show(&mut self.conn.borrow_mut(), booking)
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<ArtistAppearance>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<VenueAppearance>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListing>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_of_venue(&self, venue_id: VenueId, now: Timestamp) -> Result<u64> {
        count_upcoming_shows_of_venue(&mut self.conn.borrow_mut(), venue_id, now)
    }
}

impl ShowRepo for DbConnection<'_> {
    fn create_show(&self, booking: &ShowBooking) -> Result<ShowId> {
        create_show(&mut self.conn.borrow_mut(), booking)
    }

    fn shows_of_venue(&self, venue_id: VenueId) -> Result<Vec<ArtistAppearance>> {
        shows_of_venue(&mut self.conn.borrow_mut(), venue_id)
    }
    fn shows_of_artist(&self, artist_id: ArtistId) -> Result<Vec<VenueAppearance>> {
        shows_of_artist(&mut self.conn.borrow_mut(), artist_id)
    }
    fn all_shows(&self) -> Result<Vec<ShowListing>> {
        all_shows(&mut self.conn.borrow_mut())
    }
    fn count_upcoming_shows_of_venue(&self, venue_id: VenueId, now: Timestamp) -> Result<u64> {
        count_upcoming_shows_of_venue(&mut self.conn.borrow_mut(), venue_id, now)
    }
}

fn create_show(conn: &mut SqliteConnection, booking: &ShowBooking) -> Result<ShowId> {
    let new_show = models::NewShow {
        artist_id: booking.artist_id.value(),
        venue_id: booking.venue_id.value(),
        start_time: booking.start_time.as_secs(),
    };
    // A dangling artist or venue reference is rejected here by the
    // foreign key constraints.
    diesel::insert_into(schema::shows::table)
        .values(&new_show)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let id = resolve_last_insert_rowid(conn).map_err(from_diesel_err)?;
    Ok(ShowId::new(id))
}

fn shows_of_venue(conn: &mut SqliteConnection, venue_id: VenueId) -> Result<Vec<ArtistAppearance>> {
    use schema::{artists::dsl as a_dsl, shows::dsl as s_dsl};
    let rows = s_dsl::shows
        .inner_join(a_dsl::artists)
        .select((s_dsl::artist_id, a_dsl::name, a_dsl::image_link, s_dsl::start_time))
        .filter(s_dsl::venue_id.eq(venue_id.value()))
        .order_by(s_dsl::start_time)
        .load::<models::ArtistAppearanceRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| {
            Ok(ArtistAppearance {
                artist_id: ArtistId::new(row.artist_id),
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: load_timestamp(row.start_time)?,
            })
        })
        .collect()
}

fn shows_of_artist(
    conn: &mut SqliteConnection,
    artist_id: ArtistId,
) -> Result<Vec<VenueAppearance>> {
    use schema::{shows::dsl as s_dsl, venues::dsl as v_dsl};
    let rows = s_dsl::shows
        .inner_join(v_dsl::venues)
        .select((s_dsl::venue_id, v_dsl::name, v_dsl::image_link, s_dsl::start_time))
        .filter(s_dsl::artist_id.eq(artist_id.value()))
        .order_by(s_dsl::start_time)
        .load::<models::VenueAppearanceRow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| {
            Ok(VenueAppearance {
                venue_id: VenueId::new(row.venue_id),
                venue_name: row.venue_name,
                venue_image_link: row.venue_image_link,
                start_time: load_timestamp(row.start_time)?,
            })
        })
        .collect()
}

fn all_shows(conn: &mut SqliteConnection) -> Result<Vec<ShowListing>> {
    use schema::{artists::dsl as a_dsl, shows::dsl as s_dsl, venues::dsl as v_dsl};
    let rows = s_dsl::shows
        .inner_join(v_dsl::venues)
        .inner_join(a_dsl::artists)
        .select((
            s_dsl::venue_id,
            v_dsl::name,
            s_dsl::artist_id,
            a_dsl::name,
            a_dsl::image_link,
            s_dsl::start_time,
        ))
        .order_by(s_dsl::start_time)
        .load::<models::JoinedShow>(conn)
        .map_err(from_diesel_err)?;
    rows.into_iter()
        .map(|row| {
            Ok(ShowListing {
                venue_id: VenueId::new(row.venue_id),
                venue_name: row.venue_name,
                artist_id: ArtistId::new(row.artist_id),
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: load_timestamp(row.start_time)?,
            })
        })
        .collect()
}

fn count_upcoming_shows_of_venue(
    conn: &mut SqliteConnection,
    venue_id: VenueId,
    now: Timestamp,
) -> Result<u64> {
    use schema::shows::dsl;
    let count = dsl::shows
        .filter(dsl::venue_id.eq(venue_id.value()))
        .filter(dsl::start_time.gt(now.as_secs()))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as u64)
}
