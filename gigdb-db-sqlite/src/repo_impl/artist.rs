use super::*;

impl ArtistRepo for DbReadOnly<'_> {
    fn create_artist(&self, _profile: &ArtistProfile) -> Result<ArtistId> {
        unreachable!();
    }
    fn update_artist(&self, _id: ArtistId, _profile: &ArtistProfile) -> Result<()> {
        unreachable!();
    }
    fn delete_artist(&self, _id: ArtistId) -> Result<()> {
        unreachable!();
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artist_refs(&self) -> Result<Vec<ArtistRef>> {
        all_artist_refs(&mut self.conn.borrow_mut())
    }
    fn search_artists_by_name(&self, term: &str) -> Result<Vec<ArtistRef>> {
        search_artists_by_name(&mut self.conn.borrow_mut(), term)
    }
}

impl ArtistRepo for DbReadWrite<'_> {
    fn create_artist(&self, profile: &ArtistProfile) -> Result<ArtistId> {
        create_artist(&mut self.conn.borrow_mut(), profile)
    }
    fn update_artist(&self, id: ArtistId, profile: &ArtistProfile) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), id, profile)
    }
    fn delete_artist(&self, id: ArtistId) -> Result<()> {
        delete_artist(&mut self.conn.borrow_mut(), id)
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artist_refs(&self) -> Result<Vec<ArtistRef>> {
        all_artist_refs(&mut self.conn.borrow_mut())
    }
    fn search_artists_by_name(&self, term: &str) -> Result<Vec<ArtistRef>> {
        search_artists_by_name(&mut self.conn.borrow_mut(), term)
    }
}

impl ArtistRepo for DbConnection<'_> {
    fn create_artist(&self, profile: &ArtistProfile) -> Result<ArtistId> {
        create_artist(&mut self.conn.borrow_mut(), profile)
    }
    fn update_artist(&self, id: ArtistId, profile: &ArtistProfile) -> Result<()> {
        update_artist(&mut self.conn.borrow_mut(), id, profile)
    }
    fn delete_artist(&self, id: ArtistId) -> Result<()> {
        delete_artist(&mut self.conn.borrow_mut(), id)
    }

    fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        get_artist(&mut self.conn.borrow_mut(), id)
    }
    fn all_artist_refs(&self) -> Result<Vec<ArtistRef>> {
        all_artist_refs(&mut self.conn.borrow_mut())
    }
    fn search_artists_by_name(&self, term: &str) -> Result<Vec<ArtistRef>> {
        search_artists_by_name(&mut self.conn.borrow_mut(), term)
    }
}

fn into_new_artist(profile: &ArtistProfile) -> models::NewArtist {
    models::NewArtist {
        name: profile.name.clone(),
        city: profile.city.clone(),
        state: profile.state.to_string(),
        phone: profile.phone.as_ref().map(|p| p.as_str().to_owned()),
        image_link: profile.image_link.clone(),
        website: profile.website.as_ref().map(Url::to_string),
        facebook_link: profile.facebook_link.as_ref().map(Url::to_string),
        seeking_venue: profile.seeking_venue,
        seeking_description: profile.seeking_description.clone(),
    }
}

fn genre_rows(artist_id: i64, genres: &[Genre]) -> Vec<models::NewArtistGenre> {
    genres
        .iter()
        .enumerate()
        .map(|(pos, genre)| models::NewArtistGenre {
            artist_id,
            pos: pos as i16,
            genre: genre.to_string(),
        })
        .collect()
}

fn create_artist(conn: &mut SqliteConnection, profile: &ArtistProfile) -> Result<ArtistId> {
    let new_artist = into_new_artist(profile);
    let id = conn
        .transaction::<_, DieselError, _>(|conn| {
            diesel::insert_into(schema::artists::table)
                .values(&new_artist)
                .execute(conn)?;
            let id = resolve_last_insert_rowid(conn)?;
            diesel::insert_into(schema::artist_genres::table)
                .values(&genre_rows(id, &profile.genres))
                .execute(conn)?;
            Ok(id)
        })
        .map_err(from_diesel_err)?;
    Ok(ArtistId::new(id))
}

fn update_artist(conn: &mut SqliteConnection, id: ArtistId, profile: &ArtistProfile) -> Result<()> {
    let changeset = into_new_artist(profile);
    conn.transaction::<_, DieselError, _>(|conn| {
        use schema::{artist_genres::dsl as ag_dsl, artists::dsl as a_dsl};
        let affected = diesel::update(a_dsl::artists.filter(a_dsl::id.eq(id.value())))
            .set(&changeset)
            .execute(conn)?;
        if affected == 0 {
            return Err(DieselError::NotFound);
        }
        // Genres are replaced wholesale to preserve the submitted order.
        diesel::delete(ag_dsl::artist_genres.filter(ag_dsl::artist_id.eq(id.value())))
            .execute(conn)?;
        diesel::insert_into(ag_dsl::artist_genres)
            .values(&genre_rows(id.value(), &profile.genres))
            .execute(conn)?;
        Ok(())
    })
    .map_err(from_diesel_err)
}

fn delete_artist(conn: &mut SqliteConnection, id: ArtistId) -> Result<()> {
    use schema::artists::dsl;
    // Genre and show rows are removed by the cascading foreign keys.
    let affected = diesel::delete(dsl::artists.filter(dsl::id.eq(id.value())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if affected == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn load_genres_of_artist(conn: &mut SqliteConnection, artist_id: i64) -> Result<Vec<Genre>> {
    use schema::artist_genres::dsl;
    dsl::artist_genres
        .select(dsl::genre)
        .filter(dsl::artist_id.eq(artist_id))
        .order_by(dsl::pos)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .iter()
        .map(|genre| load_genre(genre))
        .collect()
}

fn load_artist(conn: &mut SqliteConnection, record: models::ArtistRecord) -> Result<Artist> {
    let genres = load_genres_of_artist(conn, record.id)?;
    let models::ArtistRecord {
        id,
        name,
        city,
        state,
        phone,
        image_link,
        website,
        facebook_link,
        seeking_venue,
        seeking_description,
    } = record;
    Ok(Artist {
        id: ArtistId::new(id),
        name,
        city,
        state: load_state(&state)?,
        phone: phone.map(PhoneNumber::new_unchecked),
        image_link,
        website: website.and_then(load_url),
        facebook_link: facebook_link.and_then(load_url),
        seeking_venue,
        genres,
        seeking_description,
    })
}

fn get_artist(conn: &mut SqliteConnection, id: ArtistId) -> Result<Artist> {
    use schema::artists::dsl;
    let record = dsl::artists
        .filter(dsl::id.eq(id.value()))
        .first::<models::ArtistRecord>(conn)
        .map_err(from_diesel_err)?;
    load_artist(conn, record)
}

fn all_artist_refs(conn: &mut SqliteConnection) -> Result<Vec<ArtistRef>> {
    use schema::artists::dsl;
    let rows = dsl::artists
        .select((dsl::id, dsl::name))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistRef {
            id: ArtistId::new(id),
            name,
        })
        .collect())
}

fn search_artists_by_name(conn: &mut SqliteConnection, term: &str) -> Result<Vec<ArtistRef>> {
    use schema::artists::dsl;
    // SQLite's LIKE is case-insensitive for ASCII; an empty term yields
    // the pattern %% which matches every row.
    let rows = dsl::artists
        .select((dsl::id, dsl::name))
        .filter(dsl::name.like(format!("%{term}%")))
        .order_by(dsl::id)
        .load::<(i64, String)>(conn)
        .map_err(from_diesel_err)?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistRef {
            id: ArtistId::new(id),
            name,
        })
        .collect())
}
