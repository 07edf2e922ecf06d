use strum::{Display, EnumCount, EnumIter, EnumString};

/// Two-letter codes of the 50 US states plus the District of Columbia.
///
/// This is the authoritative constant set consumed by both the form
/// validation and the client-facing select inputs.
#[rustfmt::skip]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount,
    EnumString,
)]
pub enum UsState {
    AL, AK, AZ, AR, CA, CO, CT, DE, DC, FL,
    GA, HI, ID, IL, IN, IA, KS, KY, LA, ME,
    MD, MA, MI, MN, MS, MO, MT, NE, NV, NH,
    NJ, NM, NY, NC, ND, OH, OK, OR, PA, RI,
    SC, SD, TN, TX, UT, VT, VA, WA, WV, WI,
    WY,
}
