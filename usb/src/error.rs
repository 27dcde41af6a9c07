use rusb::ffi::constants::{
    LIBUSB_ERROR_ACCESS, LIBUSB_ERROR_BUSY, LIBUSB_ERROR_INTERRUPTED, LIBUSB_ERROR_INVALID_PARAM,
    LIBUSB_ERROR_IO, LIBUSB_ERROR_NOT_FOUND, LIBUSB_ERROR_NOT_SUPPORTED, LIBUSB_ERROR_NO_DEVICE,
    LIBUSB_ERROR_NO_MEM, LIBUSB_ERROR_OTHER, LIBUSB_ERROR_OVERFLOW, LIBUSB_ERROR_PIPE,
    LIBUSB_ERROR_TIMEOUT,
};

#[derive(thiserror::Error, Debug)]
pub enum UsbError {
    #[error("Unable to initialise libusb (status {status}): {source}")]
    Init {
        status: i32,
        #[source]
        source: rusb::Error,
    },

    #[error("The USB subsystem is already initialised")]
    AlreadyInitialised,

    #[error("Unable to list USB devices (status {status}): {source}")]
    DeviceList {
        status: i32,
        #[source]
        source: rusb::Error,
    },

    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),
}

impl UsbError {
    pub(crate) fn init(source: rusb::Error) -> Self {
        UsbError::Init {
            status: status_code(source),
            source,
        }
    }

    pub(crate) fn device_list(source: rusb::Error) -> Self {
        UsbError::DeviceList {
            status: status_code(source),
            source,
        }
    }

    /// The libusb status behind this error, if there was one.
    pub fn status(&self) -> Option<i32> {
        match self {
            UsbError::Init { status, .. } | UsbError::DeviceList { status, .. } => Some(*status),
            UsbError::Usb(error) => Some(status_code(*error)),
            UsbError::AlreadyInitialised => None,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Expected a 64 byte packet, received {0} bytes")]
    Length(usize),

    #[error("Packet is not an amplifier packet (DSP {dsp:#04x})")]
    NotAmplifierPacket { dsp: u8 },

    #[error("Unknown amplifier id {0:#04x}")]
    UnknownAmplifier(u8),

    #[error("Unknown cabinet id {0:#04x}")]
    UnknownCabinet(u8),
}

/// Maps an rusb error back onto the libusb status code it came from.
pub fn status_code(error: rusb::Error) -> i32 {
    match error {
        rusb::Error::Io => LIBUSB_ERROR_IO,
        rusb::Error::InvalidParam => LIBUSB_ERROR_INVALID_PARAM,
        rusb::Error::Access => LIBUSB_ERROR_ACCESS,
        rusb::Error::NoDevice => LIBUSB_ERROR_NO_DEVICE,
        rusb::Error::NotFound => LIBUSB_ERROR_NOT_FOUND,
        rusb::Error::Busy => LIBUSB_ERROR_BUSY,
        rusb::Error::Timeout => LIBUSB_ERROR_TIMEOUT,
        rusb::Error::Overflow => LIBUSB_ERROR_OVERFLOW,
        rusb::Error::Pipe => LIBUSB_ERROR_PIPE,
        rusb::Error::Interrupted => LIBUSB_ERROR_INTERRUPTED,
        rusb::Error::NoMem => LIBUSB_ERROR_NO_MEM,
        rusb::Error::NotSupported => LIBUSB_ERROR_NOT_SUPPORTED,
        _ => LIBUSB_ERROR_OTHER,
    }
}
