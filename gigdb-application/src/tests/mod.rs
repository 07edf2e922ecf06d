use gigdb_core::usecases::{ArtistInput, ShowInput, VenueInput};

use super::{prelude as flows, *};

pub struct BackendFixture {
    pub db_connections: sqlite::Connections,
}

impl BackendFixture {
    pub fn new() -> Self {
        let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
        gigdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
        Self { db_connections }
    }
}

fn venue_input(name: &str, city: &str, state: &str) -> VenueInput {
    VenueInput {
        name: name.into(),
        city: city.into(),
        state: state.into(),
        address: "1 Main St".into(),
        genres: vec!["Other".into()],
        ..Default::default()
    }
}

fn artist_input(name: &str) -> ArtistInput {
    ArtistInput {
        name: name.into(),
        city: "Memphis".into(),
        state: "TN".into(),
        genres: vec!["Blues".into()],
        ..Default::default()
    }
}

fn show_input(artist_id: ArtistId, venue_id: VenueId, start_time: &str) -> ShowInput {
    ShowInput {
        artist_id: artist_id.to_string(),
        venue_id: venue_id.to_string(),
        start_time: start_time.into(),
    }
}

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn create_venue_and_read_it_back() {
    let fixture = BackendFixture::new();
    let input = VenueInput {
        phone: Some("512-555-0100".into()),
        image_link: Some("https://img.example.com/mohawk.jpg".into()),
        website: Some("https://mohawkaustin.com".into()),
        seeking_talent: true,
        seeking_description: Some("Weekend slots open".into()),
        genres: vec!["Soul".into(), "Funk".into(), "Jazz".into()],
        ..venue_input("Mohawk", "Austin", "TX")
    };
    let id = flows::create_venue(&fixture.db_connections, input).unwrap();

    let detail =
        flows::get_venue_detail(&fixture.db_connections, id, ts("2026-06-01T00:00:00Z")).unwrap();
    let venue = detail.venue;
    assert_eq!(venue.id, id);
    assert_eq!(venue.name, "Mohawk");
    assert_eq!(venue.city, "Austin");
    assert_eq!(venue.state, UsState::TX);
    assert_eq!(venue.address, "1 Main St");
    assert_eq!(venue.phone.unwrap().as_str(), "512-555-0100");
    assert_eq!(
        venue.image_link.as_deref(),
        Some("https://img.example.com/mohawk.jpg")
    );
    assert_eq!(venue.website.unwrap().as_str(), "https://mohawkaustin.com/");
    assert!(venue.facebook_link.is_none());
    assert!(venue.seeking_talent);
    // The submitted genre order survives the round trip.
    assert_eq!(venue.genres, vec![Genre::Soul, Genre::Funk, Genre::Jazz]);
    assert_eq!(venue.seeking_description.as_deref(), Some("Weekend slots open"));
}

#[test]
fn reject_invalid_state_and_genre_together() {
    let fixture = BackendFixture::new();
    let err = flows::create_venue(
        &fixture.db_connections,
        VenueInput {
            state: "ZZ".into(),
            genres: vec!["Jazz".into(), "Yodel".into()],
            ..venue_input("Mohawk", "Austin", "TX")
        },
    )
    .unwrap_err();

    let errors = err.validation_errors().expect("validation failure");
    assert_eq!(errors.of_field("state"), ["Invalid state."]);
    assert_eq!(errors.of_field("genres"), ["Invalid genre: Yodel."]);

    assert_eq!(
        flows::search_venues(&fixture.db_connections, "").unwrap().count,
        0
    );
}

#[test]
fn venue_detail_partitions_shows() {
    let fixture = BackendFixture::new();
    let venue_id =
        flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
            .unwrap();
    let artist_id = flows::create_artist(
        &fixture.db_connections,
        ArtistInput {
            image_link: Some("https://img.example.com/dust-radio.jpg".into()),
            ..artist_input("Dust Radio")
        },
    )
    .unwrap();

    for start_time in ["2026-05-01 20:00:00", "2026-07-01 20:00:00"] {
        flows::create_show(
            &fixture.db_connections,
            show_input(artist_id, venue_id, start_time),
        )
        .unwrap();
    }

    let now = ts("2026-06-01T12:00:00Z");
    let detail = flows::get_venue_detail(&fixture.db_connections, venue_id, now).unwrap();
    assert_eq!(detail.past_shows_count(), 1);
    assert_eq!(detail.upcoming_shows_count(), 1);

    let past = &detail.past_shows[0];
    assert_eq!(past.artist_id, artist_id);
    assert_eq!(past.artist_name, "Dust Radio");
    assert_eq!(
        past.artist_image_link.as_deref(),
        Some("https://img.example.com/dust-radio.jpg")
    );
    assert_eq!(past.start_time.to_string(), "05/01/2026, 20:00");
    assert_eq!(
        detail.upcoming_shows[0].start_time.to_string(),
        "07/01/2026, 20:00"
    );

    let artist_detail =
        flows::get_artist_detail(&fixture.db_connections, artist_id, now).unwrap();
    assert_eq!(artist_detail.past_shows_count(), 1);
    assert_eq!(artist_detail.upcoming_shows_count(), 1);
    assert_eq!(artist_detail.past_shows[0].venue_name, "Mohawk");
}

#[test]
fn group_venue_areas_with_upcoming_counts() {
    let fixture = BackendFixture::new();
    let mohawk =
        flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
            .unwrap();
    flows::create_venue(&fixture.db_connections, venue_input("Stubb's", "Austin", "TX")).unwrap();
    flows::create_venue(
        &fixture.db_connections,
        venue_input("Paradise", "Boston", "MA"),
    )
    .unwrap();
    let artist_id =
        flows::create_artist(&fixture.db_connections, artist_input("Dust Radio")).unwrap();
    for start_time in ["2026-05-01 20:00:00", "2026-07-01 20:00:00", "2026-08-01 20:00:00"] {
        flows::create_show(
            &fixture.db_connections,
            show_input(artist_id, mohawk, start_time),
        )
        .unwrap();
    }

    let areas =
        flows::list_venue_areas(&fixture.db_connections, ts("2026-06-01T12:00:00Z")).unwrap();
    assert_eq!(areas.len(), 2);
    assert_eq!(areas[0].city, "Austin");
    assert_eq!(areas[0].state, UsState::TX);
    assert_eq!(areas[0].venues.len(), 2);
    assert_eq!(areas[0].venues[0].name, "Mohawk");
    assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
    assert_eq!(areas[0].venues[1].num_upcoming_shows, 0);
    assert_eq!(areas[1].city, "Boston");
    assert_eq!(areas[1].venues.len(), 1);
}

#[test]
fn search_venues_by_name_substring() {
    let fixture = BackendFixture::new();
    for name in ["Oakland Coliseum", "The Oak Room", "Maple Hall"] {
        flows::create_venue(&fixture.db_connections, venue_input(name, "Oakland", "CA")).unwrap();
    }

    let results = flows::search_venues(&fixture.db_connections, "oak").unwrap();
    assert_eq!(results.count, 2);
    let names: Vec<_> = results.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["Oakland Coliseum", "The Oak Room"]);

    // Upper case matches as well, the empty term matches everything.
    assert_eq!(
        flows::search_venues(&fixture.db_connections, "OAK").unwrap().count,
        2
    );
    assert_eq!(
        flows::search_venues(&fixture.db_connections, "").unwrap().count,
        3
    );
    assert_eq!(
        flows::search_venues(&fixture.db_connections, "warehouse").unwrap().count,
        0
    );
}

#[test]
fn reject_show_with_dangling_artist_reference() {
    let fixture = BackendFixture::new();
    let venue_id =
        flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
            .unwrap();

    let err = flows::create_show(
        &fixture.db_connections,
        ShowInput {
            artist_id: "999".into(),
            venue_id: venue_id.to_string(),
            start_time: "2026-09-01 20:00:00".into(),
        },
    )
    .unwrap_err();

    // A persistence failure, not a validation failure and not a
    // silently created row.
    assert!(err.validation_errors().is_none());
    assert!(!err.is_not_found());
    assert!(flows::list_shows(&fixture.db_connections).unwrap().is_empty());
}

#[test]
fn delete_venue_twice_reports_not_found() {
    let fixture = BackendFixture::new();
    let id = flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
        .unwrap();

    flows::delete_venue(&fixture.db_connections, id).unwrap();
    let err = flows::delete_venue(&fixture.db_connections, id).unwrap_err();
    assert!(err.is_not_found());

    let err = flows::get_venue_detail(&fixture.db_connections, id, ts("2026-06-01T00:00:00Z"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_venue_cascades_to_its_shows() {
    let fixture = BackendFixture::new();
    let venue_id =
        flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
            .unwrap();
    let artist_id =
        flows::create_artist(&fixture.db_connections, artist_input("Dust Radio")).unwrap();
    flows::create_show(
        &fixture.db_connections,
        show_input(artist_id, venue_id, "2026-09-01 20:00:00"),
    )
    .unwrap();

    flows::delete_venue(&fixture.db_connections, venue_id).unwrap();

    assert!(flows::list_shows(&fixture.db_connections).unwrap().is_empty());
    // The artist is untouched.
    let detail = flows::get_artist_detail(
        &fixture.db_connections,
        artist_id,
        ts("2026-06-01T00:00:00Z"),
    )
    .unwrap();
    assert_eq!(detail.artist.name, "Dust Radio");
    assert_eq!(detail.upcoming_shows_count(), 0);
}

#[test]
fn update_venue_overwrites_all_editable_fields() {
    let fixture = BackendFixture::new();
    let id = flows::create_venue(
        &fixture.db_connections,
        VenueInput {
            phone: Some("512-555-0100".into()),
            genres: vec!["Jazz".into()],
            ..venue_input("Mohawk", "Austin", "TX")
        },
    )
    .unwrap();

    flows::update_venue(
        &fixture.db_connections,
        id,
        VenueInput {
            genres: vec!["Punk".into(), "Pop".into()],
            ..venue_input("Mohawk Annex", "Austin", "TX")
        },
    )
    .unwrap();

    let venue = flows::get_venue_detail(&fixture.db_connections, id, ts("2026-06-01T00:00:00Z"))
        .unwrap()
        .venue;
    assert_eq!(venue.name, "Mohawk Annex");
    // Overwrite, not merge: the omitted phone is cleared.
    assert_eq!(venue.phone, None);
    assert_eq!(venue.genres, vec![Genre::Punk, Genre::Pop]);
}

#[test]
fn update_missing_venue_reports_not_found() {
    let fixture = BackendFixture::new();
    let err = flows::update_venue(
        &fixture.db_connections,
        VenueId::new(4711),
        venue_input("Mohawk", "Austin", "TX"),
    )
    .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn artist_round_trip() {
    let fixture = BackendFixture::new();
    let id = flows::create_artist(
        &fixture.db_connections,
        ArtistInput {
            seeking_venue: true,
            genres: vec!["Blues".into(), "Rock n Roll".into()],
            ..artist_input("Dust Radio")
        },
    )
    .unwrap();

    assert_eq!(
        flows::search_artists(&fixture.db_connections, "dust").unwrap().count,
        1
    );
    let artists = flows::list_artists(&fixture.db_connections).unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].name, "Dust Radio");

    flows::update_artist(
        &fixture.db_connections,
        id,
        ArtistInput {
            seeking_venue: false,
            ..artist_input("Dust Radio")
        },
    )
    .unwrap();
    let detail =
        flows::get_artist_detail(&fixture.db_connections, id, ts("2026-06-01T00:00:00Z"))
            .unwrap();
    assert!(!detail.artist.seeking_venue);

    flows::delete_artist(&fixture.db_connections, id).unwrap();
    let err = flows::delete_artist(&fixture.db_connections, id).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn list_shows_joins_both_entities() {
    let fixture = BackendFixture::new();
    let venue_id =
        flows::create_venue(&fixture.db_connections, venue_input("Mohawk", "Austin", "TX"))
            .unwrap();
    let artist_id = flows::create_artist(
        &fixture.db_connections,
        ArtistInput {
            image_link: Some("https://img.example.com/dust-radio.jpg".into()),
            ..artist_input("Dust Radio")
        },
    )
    .unwrap();
    flows::create_show(
        &fixture.db_connections,
        show_input(artist_id, venue_id, "2026-09-01 20:00:00"),
    )
    .unwrap();

    let listings = flows::list_shows(&fixture.db_connections).unwrap();
    assert_eq!(listings.len(), 1);
    let listing = &listings[0];
    assert_eq!(listing.venue_id, venue_id);
    assert_eq!(listing.venue_name, "Mohawk");
    assert_eq!(listing.artist_id, artist_id);
    assert_eq!(listing.artist_name, "Dust Radio");
    assert_eq!(
        listing.artist_image_link.as_deref(),
        Some("https://img.example.com/dust-radio.jpg")
    );
    assert_eq!(listing.start_time, ts("2026-09-01T20:00:00Z"));
}
