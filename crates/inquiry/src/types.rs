use strum::{AsRefStr, EnumString, VariantArray};

/// Event categories offered by the reservation form.
///
/// The list only drives the form's select. Submissions are not checked against
/// it: any non-empty event type is accepted.
#[derive(EnumString, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq)]
pub enum EventType {
    #[strum(serialize = "Mindful Union")]
    MindfulUnion,
    #[strum(serialize = "Private Retreat")]
    PrivateRetreat,
    #[strum(serialize = "Holistic Banquet")]
    HolisticBanquet,
    #[strum(serialize = "Vow Renewal Ceremony")]
    VowRenewalCeremony,
    #[strum(serialize = "Anniversary Celebration")]
    AnniversaryCelebration,
    #[strum(serialize = "Bespoke Experience")]
    BespokeExperience,
}

impl EventType {
    pub fn labels() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(AsRef::as_ref).collect()
    }
}
