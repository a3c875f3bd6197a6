//! Effect server v1 message format writer.

use std::io;

use byteorder::WriteBytesExt;

/// Protocol version expected by the server.
pub const PROTOCOL_VERSION: u8 = 1;

/// Command tag starting a nick section.
const TAG_NICK: u8 = 0;
/// Command tag starting a light entry.
const TAG_LIGHT: u8 = 1;
/// Effect type for "set solid RGB color", the only one emitted.
const EFFECT_RGB: u8 = 0;

/// Raw parameters for a single RGB light command.
pub struct LightCommand {
    /// Logical address of the light on the server.
    pub id: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Scale a [0..1] intensity to a protocol byte.
///
/// Out-of-range input is clamped, and the scaled value is truncated,
/// not rounded: 0.5 becomes 127.
fn to_ubyte(level: f32) -> u8 {
    (level.clamp(0.0, 1.0) * 255.0) as u8
}

impl LightCommand {
    pub fn new(id: u8, red: u8, green: u8, blue: u8) -> LightCommand {
        LightCommand { id, red, green, blue }
    }

    /// Build a light command from [0..1] channel intensities.
    pub fn from_levels(id: u8, red: f32, green: f32, blue: f32) -> LightCommand {
        LightCommand {
            id,
            red: to_ubyte(red),
            green: to_ubyte(green),
            blue: to_ubyte(blue),
        }
    }
}

/// Serializes light commands into datagram payloads.
///
/// The internal buffer is reused between calls, so one writer per
/// sender is enough for an arbitrary number of frames.
pub struct MessageWriter {
    buf: Vec<u8>,
}

impl MessageWriter {
    pub fn new() -> MessageWriter {
        MessageWriter {
            buf: Vec::with_capacity(256),
        }
    }

    /// Encode a full message: header, nick section, then one entry per light.
    ///
    /// Returns the payload slice, valid until the next `write` call.
    pub fn write(&mut self, nick: &str, lights: &[LightCommand]) -> io::Result<&[u8]> {
        self.buf.clear();
        self.write_header()?;
        self.write_nick(nick)?;
        for light in lights {
            self.write_light(light)?;
        }
        Ok(&self.buf)
    }

    fn write_header(&mut self) -> io::Result<()> {
        self.buf.write_u8(PROTOCOL_VERSION)
    }

    /// Nick sections are null-terminated, so a nick containing a zero
    /// byte would cut the message short. The config check rejects those.
    fn write_nick(&mut self, nick: &str) -> io::Result<()> {
        self.buf.write_u8(TAG_NICK)?;
        use std::io::Write;
        self.buf.write_all(nick.as_bytes())?;
        self.buf.write_u8(0)
    }

    fn write_light(&mut self, light: &LightCommand) -> io::Result<()> {
        self.buf.write_u8(TAG_LIGHT)?;
        self.buf.write_u8(light.id)?;
        self.buf.write_u8(EFFECT_RGB)?;
        self.buf.write_u8(light.red)?;
        self.buf.write_u8(light.green)?;
        self.buf.write_u8(light.blue)
    }
}
