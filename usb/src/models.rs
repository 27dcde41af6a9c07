use mustang_types::{AmpModel, CabinetModel};
use strum::IntoEnumIterator;

/// DSP selector for the amplifier stage, effect packets use other values.
pub const DSP_AMPLIFIER: u8 = 0x05;

/// Protocol values for a single amplifier model.
///
/// `aux` holds the three model specific values which the amp expects at
/// `AMP_AUX_V0`, `AMP_AUX_V1` and `AMP_AUX_V2` respectively.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AmpEntry {
    pub id: u8,
    pub dsp: u8,
    pub aux: [u8; 3],
}

impl AmpEntry {
    const fn new(id: u8, v0: u8, v1: u8, v2: u8) -> Self {
        Self {
            id,
            dsp: DSP_AMPLIFIER,
            aux: [v0, v1, v2],
        }
    }
}

pub fn amp_entry(model: AmpModel) -> AmpEntry {
    match model {
        AmpModel::Fender57Deluxe => AmpEntry::new(0x67, 0x80, 0x01, 0x53),
        AmpModel::Fender59Bassman => AmpEntry::new(0x64, 0x80, 0x02, 0x67),
        AmpModel::Fender57Champ => AmpEntry::new(0x7c, 0x80, 0x0c, 0x00),
        AmpModel::Fender65DeluxeReverb => AmpEntry::new(0x53, 0x00, 0x03, 0x6a),
        AmpModel::Fender65Princeton => AmpEntry::new(0x6a, 0x80, 0x04, 0x61),
        AmpModel::Fender65TwinReverb => AmpEntry::new(0x75, 0x80, 0x05, 0x72),
        AmpModel::FenderSuperSonic => AmpEntry::new(0x72, 0x80, 0x06, 0x79),
        AmpModel::British60s => AmpEntry::new(0x61, 0x80, 0x07, 0x5e),
        AmpModel::British70s => AmpEntry::new(0x79, 0x80, 0x0b, 0x7c),
        AmpModel::British80s => AmpEntry::new(0x5e, 0x80, 0x09, 0x5d),
        AmpModel::American90s => AmpEntry::new(0x5d, 0x80, 0x0a, 0x6d),
        AmpModel::Metal2000 => AmpEntry::new(0x6d, 0x80, 0x08, 0x75),
    }
}

pub fn cabinet_id(cabinet: CabinetModel) -> u8 {
    match cabinet {
        CabinetModel::Off => 0x00,
        CabinetModel::Cab57Dlx => 0x01,
        CabinetModel::CabBssmn => 0x02,
        CabinetModel::Cab65Dlx => 0x03,
        CabinetModel::Cab65Prn => 0x04,
        CabinetModel::CabChamp => 0x05,
        CabinetModel::Cab4x12M => 0x06,
        CabinetModel::Cab2x12C => 0x07,
        CabinetModel::Cab4x12G => 0x08,
        CabinetModel::Cab65Twn => 0x09,
        CabinetModel::Cab4x12V => 0x0a,
        CabinetModel::CabSs212 => 0x0b,
        CabinetModel::CabSs112 => 0x0c,
    }
}

pub fn amp_from_id(id: u8) -> Option<AmpModel> {
    AmpModel::iter().find(|model| amp_entry(*model).id == id)
}

pub fn cabinet_from_id(id: u8) -> Option<CabinetModel> {
    CabinetModel::iter().find(|cabinet| cabinet_id(*cabinet) == id)
}
