use super::*;

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _profile: &VenueProfile) -> Result<VenueId> {
        unreachable!();
    }
    fn update_venue(&self, _id: VenueId, _profile: &VenueProfile) -> Result<()> {
        unreachable!();
    }
    fn delete_venue(&self, _id: VenueId) -> Result<()> {
        unreachable!();
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn search_venues_by_name(&self, term: &str) -> Result<Vec<VenueRef>> {
        search_venues_by_name(&mut self.conn.borrow_mut(), term)
    }
}

impl VenueRepo for DbReadWrite<'_> {
    fn create_venue(&self, profile: &VenueProfile) -> Result<VenueId> {
        create_venue(&mut self.conn.borrow_mut(), profile)
    }
    fn update_venue(&self, id: VenueId, profile: &VenueProfile) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), id, profile)
    }
    fn delete_venue(&self, id: VenueId) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn search_venues_by_name(&self, term: &str) -> Result<Vec<VenueRef>> {
        search_venues_by_name(&mut self.conn.borrow_mut(), term)
    }
}

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, profile: &VenueProfile) -> Result<VenueId> {
        create_venue(&mut self.conn.borrow_mut(), profile)
    }
    fn update_venue(&self, id: VenueId, profile: &VenueProfile) -> Result<()> {
        update_venue(&mut self.conn.borrow_mut(), id, profile)
    }
    fn delete_venue(&self, id: VenueId) -> Result<()> {
        delete_venue(&mut self.conn.borrow_mut(), id)
    }

    fn get_venue(&self, id: VenueId) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn search_venues_by_name(&self, term: &str) -> Result<Vec<VenueRef>> {
        search_venues_by_name(&mut self.conn.borrow_mut(), term)
    }
}

fn into_new_venue(profile: &VenueProfile) -> models::NewVenue {
    models::NewVenue {
        name: profile.name.clone(),
        city: profile.city.clone(),
        state: profile.state.to_string(),
        address: profile.address.clone(),
        phone: profile.phone.as_ref().map(|p| p.as_str().to_owned()),
        image_link: profile.image_link.clone(),
        website: profile.website.as_ref().map(Url::to_string),
        facebook_link: profile.facebook_link.as_ref().map(Url::to_string),
        seeking_talent: profile.seeking_talent,
        seeking_description: profile.seeking_description.clone(),
    }
}

fn genre_rows(venue_id: i64, genres: &[Genre]) -> Vec<models::NewVenueGenre> {
    genres
        .iter()
        .enumerate()
        .map(|(pos, genre)| models::NewVenueGenre {
            venue_id,
            pos: pos as i16,
            genre: genre.to_string(),
        })
        .collect()
}

fn create_venue(conn: &mut SqliteConnection, profile: &VenueProfile) -> Result<VenueId> {
    let new_venue = into_new_venue(profile);
    let id = conn
        .transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(schema::venues::table)
                .values(&new_venue)
                .execute(conn)?;
            let id = resolve_last_insert_rowid(conn)?;
            diesel::insert_into(schema::venue_genres::table)
                .values(&genre_rows(id, &profile.genres))
                .execute(conn)?;
            Ok(id)
        })
        .map_err(from_diesel_err)?;
    Ok(VenueId::new(id))
}

fn update_venue(conn: &mut SqliteConnection, id: VenueId, profile: &VenueProfile) -> Result<()> {
    let changeset = into_new_venue(profile);
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::{venue_genres::dsl as vg_dsl, venues::dsl as v_dsl};
        let affected = diesel::update(v_dsl::venues.filter(v_dsl::id.eq(id.value())))
            .set(&changeset)
            .execute(conn)?;
        if affected == 0 {
            return Err(DieselError::NotFound);
        }
        // Genres are replaced wholesale to preserve the submitted order.
        diesel::delete(vg_dsl::venue_genres.filter(vg_dsl::venue_id.eq(id.value())))
            .execute(conn)?;
        diesel::insert_into(vg_dsl::venue_genres)
            .values(&genre_rows(id.value(), &profile.genres))
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)
}

fn delete_venue(conn: &mut SqliteConnection, id: VenueId) -> Result<()> {
    use schema::venues::dsl;
    // Genre and show rows are removed by the cascading foreign keys.
    let affected = diesel::delete(dsl::venues.filter(dsl::id.eq(id.value())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if affected == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_genres_of_venue(conn: &mut SqliteConnection, venue_id: i64) -> Result<Vec<Genre>> {
    use schema::venue_genres::dsl;
    dsl::venue_genres
        .select(dsl::genre)
        .filter(dsl::venue_id.eq(venue_id))
        .order_by(dsl::pos)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .iter()
        .map(|genre| load_genre(genre))
        .collect()
}

fn load_venue(conn: &mut SqliteConnection, record: models::VenueRecord) -> Result<Venue> {
    let genres = load_genres_of_venue(conn, record.id)?;
    let models::VenueRecord {
        id,
        name,
        city,
        state,
        address,
        phone,
        image_link,
        website,
        facebook_link,
        seeking_talent,
        seeking_description,
    } = record;
    Ok(Venue {
        id: VenueId::new(id),
        name,
        city,
        state: load_state(&state)?,
        address,
        phone: phone.map(PhoneNumber::new_unchecked),
        image_link,
        website: website.and_then(load_url),
        facebook_link: facebook_link.and_then(load_url),
        seeking_talent,
        genres,
        seeking_description,
    })
}

fn get_venue(conn: &mut SqliteConnection, id: VenueId) -> Result<Venue> {
    use schema::venues::dsl;
    let record = dsl::venues
        .filter(dsl::id.eq(id.value()))
        .first::<models::VenueRecord>(conn)
        .map_err(from_diesel_err)?;
    load_venue(conn, record)
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venues::dsl;
    let records = dsl::venues
        .order_by(dsl::id)
        .load::<models::VenueRecord>(conn)
        .map_err(from_diesel_err)?;
    records
        .into_iter()
        .map(|record| load_venue(conn, record))
        .collect()
}

fn search_venues_by_name(conn: &mut SqliteConnection, term: &str) -> Result<Vec<VenueRef>> {
    use schema::venues::dsl;
    // SQLite's LIKE is case-insensitive for ASCII; an empty term yields
    // the pattern %% which matches every row.
    let rows = dsl::venues
        .select((dsl::id, dsl::name))
        .filter(dsl::name.like(format!("%{term}%")))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| VenueRef {
            id: VenueId::new(id),
            name,
        })
        .collect())
}
