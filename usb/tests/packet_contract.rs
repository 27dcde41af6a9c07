use mustang_types::{AmpModel, AmpSettings, CabinetModel};
use mustang_usb::decoder::decode_amp_settings;
use mustang_usb::packet::offsets::*;
use mustang_usb::packet::PACKET_SIZE;
use mustang_usb::serializer::*;
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn amp_model() -> impl Strategy<Value = AmpModel> {
    prop::sample::select(AmpModel::iter().collect::<Vec<_>>())
}

fn cabinet_model() -> impl Strategy<Value = CabinetModel> {
    prop::sample::select(CabinetModel::iter().collect::<Vec<_>>())
}

prop_compose! {
    fn amp_settings()(
        amp in amp_model(),
        cabinet in cabinet_model(),
        tone in any::<[u8; 5]>(),
        extra in any::<[u8; 8]>(),
        brightness in any::<bool>(),
        usb_gain in any::<u8>(),
    ) -> AmpSettings {
        AmpSettings {
            amp,
            gain: tone[0],
            volume: tone[1],
            treble: tone[2],
            middle: tone[3],
            bass: tone[4],
            cabinet,
            noise_gate: extra[0],
            master_volume: extra[1],
            gain2: extra[2],
            presence: extra[3],
            threshold: extra[4],
            depth: extra[5],
            bias: extra[6],
            sag: extra[7],
            brightness,
            usb_gain,
        }
    }
}

prop_compose! {
    // Settings the amplifier itself would report, everything in range.
    fn canonical_settings()(
        settings in amp_settings(),
        noise_gate in 0u8..=5,
        threshold in 0u8..=9,
        sag in 0u8..=2,
    ) -> AmpSettings {
        let custom = noise_gate == 5;
        AmpSettings {
            noise_gate,
            threshold: if custom { threshold } else { 0 },
            depth: if custom { settings.depth } else { 0x80 },
            sag,
            usb_gain: 0,
            ..settings
        }
    }
}

#[test]
fn fixed_commands() {
    let [first, second] = serialize_init_command();
    assert!(first
        .iter()
        .enumerate()
        .all(|(i, &b)| if i == 1 { b == 0xc3 } else { b == 0 }));
    assert_eq!(&second[..2], &[0x1a, 0x03]);
    assert!(second[2..].iter().all(|&b| b == 0));

    let mut apply = [0u8; PACKET_SIZE];
    apply[..2].copy_from_slice(&[0x1c, 0x03]);
    assert_eq!(serialize_apply_command().as_bytes(), &apply);

    let mut load = [0u8; PACKET_SIZE];
    load[..2].copy_from_slice(&[0xff, 0xc1]);
    assert_eq!(serialize_load_command().as_bytes(), &load);
}

#[test]
fn load_slot_fifteen() {
    let packet = serialize_load_slot_command(15);
    assert_eq!(&packet[..7], &[0x1c, 0x01, 0x01, 0x00, 15, 0x00, 0x01]);
    assert!(packet[7..].iter().all(|&b| b == 0));
}

#[test]
fn fender_57_deluxe_fan_out() {
    let packet = serialize_amp_settings(&AmpSettings {
        amp: AmpModel::Fender57Deluxe,
        ..Default::default()
    });
    assert_eq!(packet[AMPLIFIER], 0x67);
    assert_eq!([packet[40], packet[43]], [0x80, 0x80]);
    assert_eq!(
        [packet[44], packet[45], packet[46], packet[50]],
        [0x01, 0x01, 0x01, 0x01]
    );
    assert_eq!(packet[54], 0x53);
}

proptest! {
    #[test]
    fn serializing_is_idempotent(settings in amp_settings()) {
        prop_assert_eq!(serialize_amp_settings(&settings), serialize_amp_settings(&settings));
    }

    #[test]
    fn amp_packets_keep_their_frame(settings in amp_settings()) {
        let packet = serialize_amp_settings(&settings);
        prop_assert_eq!(packet.len(), PACKET_SIZE);
        prop_assert_eq!(&packet[..3], &[0x1c, 0x03, 0x05]);
        prop_assert_eq!(packet[32], settings.volume);
        prop_assert_eq!(packet[33], settings.gain);
        prop_assert_eq!(packet[BASS], settings.bass);
        prop_assert_eq!(packet[BIAS], settings.bias);
        prop_assert!(packet[NOISE_GATE] <= 5);
        prop_assert!(packet[THRESHOLD] <= 9);
        prop_assert!(packet[SAG] <= 2);
        prop_assert_eq!(packet[AMP_AUX_V0[0]], packet[AMP_AUX_V0[1]]);
        prop_assert!(AMP_AUX_V1.iter().all(|&site| packet[site] == packet[AMP_AUX_V1[0]]));

        // Nothing outside the amp region and header is ever written.
        prop_assert!(packet[8..16].iter().all(|&b| b == 0));
        prop_assert!(packet[17..32].iter().all(|&b| b == 0));
        prop_assert!(packet[55..].iter().all(|&b| b == 0));
    }

    #[test]
    fn canonical_settings_decode_back(settings in canonical_settings()) {
        let packet = serialize_amp_settings(&settings);
        prop_assert_eq!(decode_amp_settings(&packet), Ok(settings));
    }

    #[test]
    fn load_slot_is_verbatim(slot in any::<u8>()) {
        prop_assert_eq!(serialize_load_slot_command(slot)[SAVE_SLOT], slot);
    }
}
