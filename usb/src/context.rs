use crate::devices::{self, enumerate, DescriptorIds, Device, DeviceLocation, DeviceSource};
use crate::error::UsbError;
use log::debug;
use rusb::{Context, UsbContext};
use std::sync::atomic::{AtomicBool, Ordering};

static SUBSYSTEM_LIVE: AtomicBool = AtomicBool::new(false);

// Held for as long as a UsbSubsystem exists, only one can be taken at a time.
struct SubsystemGuard;

impl SubsystemGuard {
    fn acquire() -> Option<Self> {
        SUBSYSTEM_LIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubsystemGuard)
    }
}

impl Drop for SubsystemGuard {
    fn drop(&mut self) {
        SUBSYSTEM_LIVE.store(false, Ordering::Release);
    }
}

/// The process wide libusb session.
///
/// Creating one initialises libusb, dropping it calls `libusb_exit`. Only one may be alive at a
/// time, a second `new()` fails with [`UsbError::AlreadyInitialised`] until the first is dropped.
pub struct UsbSubsystem {
    // Field order matters, libusb has to exit before the guard is released.
    context: Context,
    _guard: SubsystemGuard,
}

impl UsbSubsystem {
    pub fn new() -> Result<Self, UsbError> {
        let guard = SubsystemGuard::acquire().ok_or(UsbError::AlreadyInitialised)?;
        let context = Context::new().map_err(UsbError::init)?;
        debug!("libusb initialised");

        Ok(Self {
            context,
            _guard: guard,
        })
    }

    /// Every attached device whose descriptor could be read.
    pub fn list_devices(&self) -> Result<Vec<Device>, UsbError> {
        enumerate(self)
    }

    /// Attached devices which identify as a Mustang amplifier.
    pub fn find_amplifiers(&self) -> Result<Vec<Device>, UsbError> {
        devices::find_amplifiers(self)
    }

    /// Looks the device up again, so a transport can open it. Returns `None` if it has gone away.
    pub fn locate(&self, device: &Device) -> Result<Option<rusb::Device<Context>>, UsbError> {
        let devices = self.context.devices()?;
        Ok(devices
            .iter()
            .find(|candidate| self.location(candidate) == device.location))
    }
}

impl DeviceSource for UsbSubsystem {
    type Device = rusb::Device<Context>;

    fn device_list(&self) -> Result<Vec<Self::Device>, rusb::Error> {
        // The list drops (and is freed) here, each device keeps its own reference.
        Ok(self.context.devices()?.iter().collect())
    }

    fn descriptor(&self, device: &Self::Device) -> Result<DescriptorIds, rusb::Error> {
        let descriptor = device.device_descriptor()?;
        Ok(DescriptorIds {
            vendor_id: descriptor.vendor_id(),
            product_id: descriptor.product_id(),
            product_string_index: descriptor.product_string_index().unwrap_or(0),
        })
    }

    fn location(&self, device: &Self::Device) -> DeviceLocation {
        DeviceLocation {
            bus_number: device.bus_number(),
            address: device.address(),
        }
    }
}

impl Drop for UsbSubsystem {
    fn drop(&mut self) {
        debug!("Releasing libusb");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_guard_at_a_time() {
        let first = SubsystemGuard::acquire();
        assert!(first.is_some());
        assert!(SubsystemGuard::acquire().is_none());

        // libusb is never touched while another session is live.
        assert!(matches!(
            UsbSubsystem::new(),
            Err(UsbError::AlreadyInitialised)
        ));

        drop(first);
        let again = SubsystemGuard::acquire();
        assert!(again.is_some());
    }
}
