//! Holiday names.

use serde::{Deserialize, Serialize};

/// A public holiday, religious day or observance.
///
/// [`Holiday::Additional`] covers the unnamed days the government adds
/// around festivals and as substitutes; it is reported as "Holiday".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Holiday {
    // Thingyan
    MyanmarNewYearDay,
    ThingyanAtat,
    ThingyanAkyat,
    ThingyanAkya,
    ThingyanAkyo,
    Additional,

    // Gregorian public holidays
    NewYearDay,
    IndependenceDay,
    UnionDay,
    PeasantsDay,
    ResistanceDay,
    LabourDay,
    MartyrsDay,
    ChristmasDay,

    // Myanmar public holidays
    BuddhaDay,
    StartOfBuddhistLent,
    EndOfBuddhistLent,
    Tazaungdaing,
    NationalDay,
    KarenNewYearDay,
    TabaungPwe,

    // Gregorian observances
    AungSanBirthday,
    ValentinesDay,
    EarthDay,
    AprilFoolsDay,
    RedCrossDay,
    WorldTeachersDay,
    UnitedNationsDay,
    Halloween,
    Easter,
    GoodFriday,

    // Myanmar observances
    MonNationalDay,
    ShanNewYearDay,
    AuthorsDay,
    MahathamayaDay,
    GarudhammaDay,
    MothersDay,
    FathersDay,
    MettaDay,
    TaungpyonePwe,
    YadanaguPwe,
}

impl Holiday {
    /// Canonical English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MyanmarNewYearDay => "Myanmar New Year's Day",
            Self::ThingyanAtat => "Thingyan Atat",
            Self::ThingyanAkyat => "Thingyan Akyat",
            Self::ThingyanAkya => "Thingyan Akya",
            Self::ThingyanAkyo => "Thingyan Akyo",
            Self::Additional => "Holiday",
            Self::NewYearDay => "New Year's Day",
            Self::IndependenceDay => "Independence Day",
            Self::UnionDay => "Union Day",
            Self::PeasantsDay => "Peasants' Day",
            Self::ResistanceDay => "Resistance Day",
            Self::LabourDay => "Labour Day",
            Self::MartyrsDay => "Martyrs' Day",
            Self::ChristmasDay => "Christmas Day",
            Self::BuddhaDay => "Buddha Day",
            Self::StartOfBuddhistLent => "Start of Buddhist Lent",
            Self::EndOfBuddhistLent => "End of Buddhist Lent",
            Self::Tazaungdaing => "Tazaungdaing",
            Self::NationalDay => "National Day",
            Self::KarenNewYearDay => "Karen New Year's Day",
            Self::TabaungPwe => "Tabaung Pwe",
            Self::AungSanBirthday => "G. Aung San BD",
            Self::ValentinesDay => "Valentines Day",
            Self::EarthDay => "Earth Day",
            Self::AprilFoolsDay => "April Fools' Day",
            Self::RedCrossDay => "Red Cross Day",
            Self::WorldTeachersDay => "World Teachers' Day",
            Self::UnitedNationsDay => "United Nations Day",
            Self::Halloween => "Halloween",
            Self::Easter => "Easter",
            Self::GoodFriday => "Good Friday",
            Self::MonNationalDay => "'Mon' National Day",
            Self::ShanNewYearDay => "Shan New Year's Day",
            Self::AuthorsDay => "Authors' Day",
            Self::MahathamayaDay => "Mahathamaya Day",
            Self::GarudhammaDay => "Garudhamma Day",
            Self::MothersDay => "Mothers' Day",
            Self::FathersDay => "Fathers' Day",
            Self::MettaDay => "Metta Day",
            Self::TaungpyonePwe => "Taungpyone Pwe",
            Self::YadanaguPwe => "Yadanagu Pwe",
        }
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of a list of holidays, in order.
pub fn holiday_names(list: &[Holiday]) -> Vec<&'static str> {
    list.iter().map(|h| h.name()).collect()
}
