// Builds the packets sent to the amplifier. Everything in here is a pure
// function of its input, the transport decides when and how often to send.
use crate::models::{amp_entry, cabinet_id};
use crate::packet::offsets::*;
use crate::packet::Packet;
use mustang_types::AmpSettings;

const HEADER_SET: [u8; 2] = [0x1c, 0x03];
const HEADER_LOAD_SLOT: [u8; 3] = [0x1c, 0x01, 0x01];

// Noise gate 5 is the 'custom' gate, the only one which reads threshold and depth.
const NOISE_GATE_CUSTOM: u8 = 0x05;
const THRESHOLD_MAX: u8 = 0x09;
const SAG_MAX: u8 = 0x02;
const SAG_FALLBACK: u8 = 0x01;
const DEPTH_UNUSED: u8 = 0x80;

fn with_header(header: &[u8]) -> Packet {
    let mut packet = Packet::new();
    for (offset, byte) in header.iter().enumerate() {
        packet.set(offset, *byte);
    }
    packet
}

/// The two packet handshake sent once when a session is opened.
pub fn serialize_init_command() -> [Packet; 2] {
    [with_header(&[0x00, 0xc3]), with_header(&[0x1a, 0x03])]
}

/// Commits whatever was last sent.
pub fn serialize_apply_command() -> Packet {
    with_header(&HEADER_SET)
}

/// Asks the amplifier to dump its current state.
pub fn serialize_load_command() -> Packet {
    with_header(&[0xff, 0xc1])
}

/// Loads a stored preset. The slot range depends on the amplifier and isn't checked here.
pub fn serialize_load_slot_command(slot: u8) -> Packet {
    let mut packet = with_header(&HEADER_LOAD_SLOT);
    packet.set(SAVE_SLOT, slot);
    packet.set(FLAG_A, 0x01);
    packet
}

pub fn serialize_amp_settings(settings: &AmpSettings) -> Packet {
    let amp = amp_entry(settings.amp);

    let mut packet = with_header(&HEADER_SET);
    packet.set(DSP, amp.dsp);
    packet.set(FLAG_A, 0x01);
    packet.set(FLAG_B, 0x01);
    packet.set(AMP_FLAG, 0x01);

    packet.set(GAIN, settings.gain);
    packet.set(VOLUME, settings.volume);
    packet.set(TREBLE, settings.treble);
    packet.set(MIDDLE, settings.middle);
    packet.set(BASS, settings.bass);
    packet.set(MASTER_VOL, settings.master_volume);
    packet.set(GAIN2, settings.gain2);
    packet.set(PRESENCE, settings.presence);
    packet.set(BIAS, settings.bias);
    packet.set(BRIGHTNESS, u8::from(settings.brightness));

    let noise_gate = if settings.noise_gate > NOISE_GATE_CUSTOM {
        0x00
    } else {
        settings.noise_gate
    };
    packet.set(NOISE_GATE, noise_gate);

    if settings.noise_gate == NOISE_GATE_CUSTOM {
        let threshold = if settings.threshold > THRESHOLD_MAX {
            0x00
        } else {
            settings.threshold
        };
        packet.set(THRESHOLD, threshold);
        packet.set(DEPTH, settings.depth);
    } else {
        packet.set(DEPTH, DEPTH_UNUSED);
    }

    let sag = if settings.sag > SAG_MAX {
        SAG_FALLBACK
    } else {
        settings.sag
    };
    packet.set(SAG, sag);

    packet.set(CABINET, cabinet_id(settings.cabinet));

    let [v0, v1, v2] = amp.aux;
    packet.set(AMPLIFIER, amp.id);
    for site in AMP_AUX_V0 {
        packet.set(site, v0);
    }
    for site in AMP_AUX_V1 {
        packet.set(site, v1);
    }
    packet.set(AMP_AUX_V2, v2);

    packet
}
