use strum::{Display, EnumCount, EnumIter, EnumString};

/// Closed set of musical styles attached to venues and artists.
///
/// The canonical spelling of each variant is the one offered by the
/// client-facing select inputs and stored in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount,
    EnumString,
)]
pub enum Genre {
    Alternative,
    Blues,
    Classical,
    Country,
    Electronic,
    Folk,
    Funk,
    #[strum(serialize = "Hip-Hop")]
    HipHop,
    Jazz,
    Metal,
    #[strum(serialize = "Musical Theatre")]
    MusicalTheatre,
    Pop,
    Punk,
    #[strum(serialize = "R&B")]
    RnB,
    Reggae,
    #[strum(serialize = "Rock n Roll")]
    RockNRoll,
    Soul,
    World,
    Other,
}
