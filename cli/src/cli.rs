use clap::{Args, Parser, Subcommand, ValueEnum};
use mustang_types::{AmpModel, AmpSettings, CabinetModel};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
pub struct Cli {
    /// Minimum log level to print out
    #[clap(long, value_enum, default_value = "info")]
    pub log_level: LevelFilter,

    #[clap(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// List attached Mustang amplifiers
    List {
        /// Include every USB device, not just amplifiers
        #[clap(long)]
        all: bool,
    },

    /// Print the init, apply and load packets
    Commands,

    /// Print the packet which loads a stored preset
    LoadSlot { slot: u8 },

    /// Print the packet for an amplifier channel
    Amp(AmpArgs),
}

#[derive(Args, Debug)]
pub struct AmpArgs {
    /// JSON file to read the settings from, any flags given override its values
    #[clap(long)]
    pub settings: Option<PathBuf>,

    #[clap(long, value_enum)]
    pub model: Option<AmpModel>,

    #[clap(long, value_enum)]
    pub cabinet: Option<CabinetModel>,

    #[clap(long)]
    pub gain: Option<u8>,

    #[clap(long)]
    pub volume: Option<u8>,

    #[clap(long)]
    pub treble: Option<u8>,

    #[clap(long)]
    pub middle: Option<u8>,

    #[clap(long)]
    pub bass: Option<u8>,

    /// 0 is off, 1 to 4 are presets, 5 uses --threshold and --depth
    #[clap(long)]
    pub noise_gate: Option<u8>,

    #[clap(long)]
    pub master_volume: Option<u8>,

    #[clap(long)]
    pub gain2: Option<u8>,

    #[clap(long)]
    pub presence: Option<u8>,

    #[clap(long)]
    pub threshold: Option<u8>,

    #[clap(long)]
    pub depth: Option<u8>,

    #[clap(long)]
    pub bias: Option<u8>,

    #[clap(long)]
    pub sag: Option<u8>,

    /// true or false
    #[clap(long)]
    pub bright: Option<bool>,
}

impl AmpArgs {
    pub fn apply(&self, settings: AmpSettings) -> AmpSettings {
        AmpSettings {
            amp: self.model.unwrap_or(settings.amp),
            gain: self.gain.unwrap_or(settings.gain),
            volume: self.volume.unwrap_or(settings.volume),
            treble: self.treble.unwrap_or(settings.treble),
            middle: self.middle.unwrap_or(settings.middle),
            bass: self.bass.unwrap_or(settings.bass),
            cabinet: self.cabinet.unwrap_or(settings.cabinet),
            noise_gate: self.noise_gate.unwrap_or(settings.noise_gate),
            master_volume: self.master_volume.unwrap_or(settings.master_volume),
            gain2: self.gain2.unwrap_or(settings.gain2),
            presence: self.presence.unwrap_or(settings.presence),
            threshold: self.threshold.unwrap_or(settings.threshold),
            depth: self.depth.unwrap_or(settings.depth),
            bias: self.bias.unwrap_or(settings.bias),
            sag: self.sag.unwrap_or(settings.sag),
            brightness: self.bright.unwrap_or(settings.brightness),
            usb_gain: settings.usb_gain,
        }
    }
}

#[repr(usize)]
#[derive(ValueEnum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum LevelFilter {
    /// A level lower than all log levels.
    Off,
    /// Corresponds to the `Error` log level.
    Error,
    /// Corresponds to the `Warn` log level.
    Warn,
    /// Corresponds to the `Info` log level.
    Info,
    /// Corresponds to the `Debug` log level.
    Debug,
    /// Corresponds to the `Trace` log level.
    Trace,
}
