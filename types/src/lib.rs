#[cfg(feature = "clap")]
use clap::ValueEnum;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

/// The amplifier models the Mustang firmware can emulate.
#[derive(Copy, Clone, Debug, Default, Display, EnumIter, EnumCount, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmpModel {
    #[default]
    #[strum(to_string = "Fender '57 Deluxe")]
    Fender57Deluxe,
    #[strum(to_string = "Fender '59 Bassman")]
    Fender59Bassman,
    #[strum(to_string = "Fender '57 Champ")]
    Fender57Champ,
    #[strum(to_string = "Fender '65 Deluxe Reverb")]
    Fender65DeluxeReverb,
    #[strum(to_string = "Fender '65 Princeton")]
    Fender65Princeton,
    #[strum(to_string = "Fender '65 Twin Reverb")]
    Fender65TwinReverb,
    #[strum(to_string = "Fender Super-Sonic")]
    FenderSuperSonic,
    #[strum(to_string = "British '60s")]
    British60s,
    #[strum(to_string = "British '70s")]
    British70s,
    #[strum(to_string = "British '80s")]
    British80s,
    #[strum(to_string = "American '90s")]
    American90s,
    #[strum(to_string = "Metal 2000")]
    Metal2000,
}

/// Speaker cabinet emulations, `Off` bypasses the cabinet stage entirely.
#[derive(Copy, Clone, Debug, Default, Display, EnumIter, EnumCount, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(ValueEnum))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CabinetModel {
    #[default]
    Off,
    #[strum(to_string = "'57 Deluxe 1x12")]
    Cab57Dlx,
    #[strum(to_string = "Bassman 4x10")]
    CabBssmn,
    #[strum(to_string = "'65 Deluxe 1x12")]
    Cab65Dlx,
    #[strum(to_string = "'65 Princeton 1x10")]
    Cab65Prn,
    #[strum(to_string = "Champ 1x8")]
    CabChamp,
    #[strum(to_string = "4x12 M")]
    Cab4x12M,
    #[strum(to_string = "2x12 C")]
    Cab2x12C,
    #[strum(to_string = "4x12 G")]
    Cab4x12G,
    #[strum(to_string = "'65 Twin 2x12")]
    Cab65Twn,
    #[strum(to_string = "4x12 V")]
    Cab4x12V,
    #[strum(to_string = "SS 2x12")]
    CabSs212,
    #[strum(to_string = "SS 1x12")]
    CabSs112,
}

/// A complete amplifier channel, as shown on the front panel of the amp.
///
/// Values are raw protocol bytes. Nothing here is range checked, the caller is
/// expected to keep knobs within what the amplifier accepts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AmpSettings {
    pub amp: AmpModel,
    pub gain: u8,
    pub volume: u8,
    pub treble: u8,
    pub middle: u8,
    pub bass: u8,
    pub cabinet: CabinetModel,

    /// 0 is off, 1 to 4 are the presets, 5 enables `threshold` and `depth`.
    pub noise_gate: u8,
    pub master_volume: u8,
    pub gain2: u8,
    pub presence: u8,
    pub threshold: u8,
    pub depth: u8,
    pub bias: u8,
    pub sag: u8,
    pub brightness: bool,

    // Stored with presets by the vendor software, but never sent with the amp packet.
    pub usb_gain: u8,
}
