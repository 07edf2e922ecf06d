pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{artist_builder::*, show_builder::*, venue_builder::*};

pub mod venue_builder {

    use super::*;
    use crate::{genre::*, id::*, phone::*, state::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.venue.city = city.into();
            self
        }
        pub fn state(mut self, state: UsState) -> Self {
            self.venue.state = state;
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.venue.address = address.into();
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.venue.phone = Some(PhoneNumber::new_unchecked(phone.into()));
            self
        }
        pub fn image_link(mut self, image_link: Option<&str>) -> Self {
            self.venue.image_link = image_link.map(Into::into);
            self
        }
        pub fn genres(mut self, genres: Vec<Genre>) -> Self {
            self.venue.genres = genres;
            self
        }
        pub fn seeking_talent(mut self, seeking_talent: bool) -> Self {
            self.venue.seeking_talent = seeking_talent;
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: VenueId::default(),
                    name: "".into(),
                    city: "".into(),
                    state: UsState::CA,
                    address: "".into(),
                    phone: None,
                    image_link: None,
                    website: None,
                    facebook_link: None,
                    seeking_talent: false,
                    genres: vec![Genre::Other],
                    seeking_description: None,
                },
            }
        }
    }
}

pub mod artist_builder {

    use super::*;
    use crate::{artist::*, genre::*, id::*, phone::*, state::*};

    #[derive(Debug)]
    pub struct ArtistBuild {
        artist: Artist,
    }

    impl ArtistBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.artist.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.artist.name = name.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.artist.city = city.into();
            self
        }
        pub fn state(mut self, state: UsState) -> Self {
            self.artist.state = state;
            self
        }
        pub fn phone(mut self, phone: &str) -> Self {
            self.artist.phone = Some(PhoneNumber::new_unchecked(phone.into()));
            self
        }
        pub fn image_link(mut self, image_link: Option<&str>) -> Self {
            self.artist.image_link = image_link.map(Into::into);
            self
        }
        pub fn genres(mut self, genres: Vec<Genre>) -> Self {
            self.artist.genres = genres;
            self
        }
        pub fn seeking_venue(mut self, seeking_venue: bool) -> Self {
            self.artist.seeking_venue = seeking_venue;
            self
        }
        pub fn finish(self) -> Artist {
            self.artist
        }
    }

    impl Builder for Artist {
        type Build = ArtistBuild;
        fn build() -> ArtistBuild {
            ArtistBuild {
                artist: Artist {
                    id: ArtistId::default(),
                    name: "".into(),
                    city: "".into(),
                    state: UsState::CA,
                    phone: None,
                    image_link: None,
                    website: None,
                    facebook_link: None,
                    seeking_venue: false,
                    genres: vec![Genre::Other],
                    seeking_description: None,
                },
            }
        }
    }
}

pub mod show_builder {

    use super::*;
    use crate::{id::*, show::*, time::*};

    #[derive(Debug)]
    pub struct ShowBuild {
        show: Show,
    }

    impl ShowBuild {
        pub fn id(mut self, id: i64) -> Self {
            self.show.id = id.into();
            self
        }
        pub fn artist_id(mut self, id: i64) -> Self {
            self.show.artist_id = id.into();
            self
        }
        pub fn venue_id(mut self, id: i64) -> Self {
            self.show.venue_id = id.into();
            self
        }
        pub fn start_time(mut self, start_time: Timestamp) -> Self {
            self.show.start_time = start_time;
            self
        }
        pub fn finish(self) -> Show {
            self.show
        }
    }

    impl Builder for Show {
        type Build = ShowBuild;
        fn build() -> ShowBuild {
            ShowBuild {
                show: Show {
                    id: ShowId::default(),
                    artist_id: ArtistId::default(),
                    venue_id: VenueId::default(),
                    start_time: Timestamp::try_from_secs(0).expect("epoch timestamp"),
                },
            }
        }
    }
}
