use crate::error::DecodeError;
use crate::models::{amp_from_id, cabinet_from_id, DSP_AMPLIFIER};
use crate::packet::offsets::*;
use crate::packet::Packet;
use mustang_types::AmpSettings;

/// Reads an amplifier packet, as returned by the amp after a load command, back
/// into settings.
pub fn decode_amp_settings(packet: &Packet) -> Result<AmpSettings, DecodeError> {
    let dsp = packet[DSP];
    if dsp != DSP_AMPLIFIER {
        return Err(DecodeError::NotAmplifierPacket { dsp });
    }

    let amp = amp_from_id(packet[AMPLIFIER])
        .ok_or(DecodeError::UnknownAmplifier(packet[AMPLIFIER]))?;
    let cabinet =
        cabinet_from_id(packet[CABINET]).ok_or(DecodeError::UnknownCabinet(packet[CABINET]))?;

    Ok(AmpSettings {
        amp,
        gain: packet[GAIN],
        volume: packet[VOLUME],
        treble: packet[TREBLE],
        middle: packet[MIDDLE],
        bass: packet[BASS],
        cabinet,
        noise_gate: packet[NOISE_GATE],
        master_volume: packet[MASTER_VOL],
        gain2: packet[GAIN2],
        presence: packet[PRESENCE],
        threshold: packet[THRESHOLD],
        depth: packet[DEPTH],
        bias: packet[BIAS],
        sag: packet[SAG],
        brightness: packet[BRIGHTNESS] != 0,
        usb_gain: 0,
    })
}
