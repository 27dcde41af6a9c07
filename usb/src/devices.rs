// This file wraps USB information into some 'Plain Old Rust Structs' which can be used by other
// modules to pick a device. They carry no libusb references, so a list can be kept around for as
// long as needed, and a transport re-resolves the location when it actually opens something.
use crate::error::UsbError;
use log::{debug, info};
use strum::{Display, EnumIter};

pub const VID_FENDER: u16 = 0x1ed8;
pub const PID_MUSTANG_I_II: u16 = 0x0004;
pub const PID_MUSTANG_III_IV_V: u16 = 0x0005;
pub const PID_MUSTANG_MINI: u16 = 0x0010;
pub const PID_MUSTANG_FLOOR: u16 = 0x0012;
pub const PID_MUSTANG_I_II_V2: u16 = 0x0014;
pub const PID_MUSTANG_III_IV_V_V2: u16 = 0x0016;

#[derive(Copy, Clone, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum AmpFamily {
    #[strum(to_string = "Mustang I/II")]
    MustangSmall,
    #[strum(to_string = "Mustang III/IV/V")]
    MustangBig,
    #[strum(to_string = "Mustang Mini")]
    MustangMini,
    #[strum(to_string = "Mustang Floor")]
    MustangFloor,
    #[strum(to_string = "Mustang I/II v2")]
    MustangSmallV2,
    #[strum(to_string = "Mustang III/IV/V v2")]
    MustangBigV2,
}

impl AmpFamily {
    pub fn product_id(&self) -> u16 {
        match self {
            AmpFamily::MustangSmall => PID_MUSTANG_I_II,
            AmpFamily::MustangBig => PID_MUSTANG_III_IV_V,
            AmpFamily::MustangMini => PID_MUSTANG_MINI,
            AmpFamily::MustangFloor => PID_MUSTANG_FLOOR,
            AmpFamily::MustangSmallV2 => PID_MUSTANG_I_II_V2,
            AmpFamily::MustangBigV2 => PID_MUSTANG_III_IV_V_V2,
        }
    }

    pub fn from_ids(vendor_id: u16, product_id: u16) -> Option<Self> {
        if vendor_id != VID_FENDER {
            return None;
        }

        match product_id {
            PID_MUSTANG_I_II => Some(AmpFamily::MustangSmall),
            PID_MUSTANG_III_IV_V => Some(AmpFamily::MustangBig),
            PID_MUSTANG_MINI => Some(AmpFamily::MustangMini),
            PID_MUSTANG_FLOOR => Some(AmpFamily::MustangFloor),
            PID_MUSTANG_I_II_V2 => Some(AmpFamily::MustangSmallV2),
            PID_MUSTANG_III_IV_V_V2 => Some(AmpFamily::MustangBigV2),
            _ => None,
        }
    }
}

/// Where a device sits on the bus, enough to find it again without holding it open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeviceLocation {
    pub bus_number: u8,
    pub address: u8,
}

/// The descriptor fields needed to identify a device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DescriptorIds {
    pub vendor_id: u16,
    pub product_id: u16,
    pub product_string_index: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Device {
    pub vendor_id: u16,
    pub product_id: u16,

    /// String descriptor index of the product name, 0 if the device has none.
    pub product_string_index: u8,
    pub location: DeviceLocation,
}

impl Device {
    pub fn amp_family(&self) -> Option<AmpFamily> {
        AmpFamily::from_ids(self.vendor_id, self.product_id)
    }

    pub fn is_amplifier(&self) -> bool {
        self.amp_family().is_some()
    }
}

/// Anything which can hand out a list of attached USB devices.
pub trait DeviceSource {
    type Device;

    fn device_list(&self) -> Result<Vec<Self::Device>, rusb::Error>;
    fn descriptor(&self, device: &Self::Device) -> Result<DescriptorIds, rusb::Error>;
    fn location(&self, device: &Self::Device) -> DeviceLocation;
}

/// Lists every device the source can describe. Devices whose descriptor can't be read are
/// skipped, only a failure to get the list itself is an error.
pub fn enumerate<S: DeviceSource>(source: &S) -> Result<Vec<Device>, UsbError> {
    let devices = source.device_list().map_err(UsbError::device_list)?;

    let mut found_devices = Vec::with_capacity(devices.len());
    for device in &devices {
        let location = source.location(device);
        match source.descriptor(device) {
            Ok(ids) => found_devices.push(Device {
                vendor_id: ids.vendor_id,
                product_id: ids.product_id,
                product_string_index: ids.product_string_index,
                location,
            }),
            Err(error) => debug!("Skipping device at {:?}: {}", location, error),
        }
    }

    debug!(
        "Found {} of {} USB devices",
        found_devices.len(),
        devices.len()
    );
    Ok(found_devices)
}

/// The devices from [`enumerate`] which identify as a Mustang amplifier.
pub fn find_amplifiers<S: DeviceSource>(source: &S) -> Result<Vec<Device>, UsbError> {
    let amplifiers: Vec<Device> = enumerate(source)?
        .into_iter()
        .filter(Device::is_amplifier)
        .collect();

    for amplifier in &amplifiers {
        if let Some(family) = amplifier.amp_family() {
            info!(
                "Found {} at bus {} address {}",
                family, amplifier.location.bus_number, amplifier.location.address
            );
        }
    }
    Ok(amplifiers)
}
