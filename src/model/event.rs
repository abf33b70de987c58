use serde::{Deserialize, Serialize};

/// What a chronicle entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EventKind {
    Elected,
    TookOffice,
    LeftOffice,
    Inducted,
    Death,
    CameOfAge,
    YearShock,
    CensusVacant,
    Bookkeeping,
}

string_enum!(EventKind {
    Elected => "elected",
    TookOffice => "took_office",
    LeftOffice => "left_office",
    Inducted => "inducted",
    Death => "death",
    CameOfAge => "came_of_age",
    YearShock => "year_shock",
    CensusVacant => "census_vacant",
    Bookkeeping => "bookkeeping",
});

/// Links a chronicle entry to a person by their stable identity id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventParticipant {
    pub event_id: u64,
    pub person_id: u64,
}
