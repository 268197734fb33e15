//! Bit-bang driver for WS2812-class LED chains.
//!
//! One data pin, self-clocked: the position of the falling edge inside each
//! bit period encodes the bit value. The waveform tolerances live in
//! [`crate::clock`]; this module sequences bytes through the encoder and
//! keeps interrupts out of the way while a frame is on the wire.

use core::marker::PhantomData;

use embassy_time::Duration;
use embedded_hal::digital::{OutputPin, PinState};

use crate::FrameSink;
use crate::clock::ClockRate;
use crate::color::Rgba;
use crate::order::ChannelOrder;

/// Minimum quiet time on the data line before the LEDs latch a frame.
///
/// The driver does not enforce this gap. Callers must keep the line idle at
/// least this long between two transmissions, or the second frame lands on
/// LEDs that never committed the first.
pub const LATCH_IDLE: Duration = Duration::from_micros(280);

/// Bit-bang driver for a chain of WS2812-class LEDs.
///
/// Generic over the data pin and the core clock rate; the clock's padding
/// table stretches each bit to protocol tolerance. Pin write errors are
/// discarded: there is no cycle budget for handling them mid-bit, and on
/// the GPIO ports this driver targets the writes are infallible.
pub struct Ws2812<P: OutputPin, C: ClockRate> {
    pin: P,
    _clock: PhantomData<C>,
}

impl<P: OutputPin, C: ClockRate> Ws2812<P, C> {
    /// Take ownership of the data pin. The pin should already be driven low.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            _clock: PhantomData,
        }
    }

    /// Transmit one byte, most significant bit first.
    ///
    /// Timing-critical: interrupts must already be disabled, and the gap to
    /// the previous byte must stay well below the latch time. [`write`]
    /// and [`write_colors`] take care of both; call this directly only from
    /// inside an equivalent bracket.
    ///
    /// [`write`]: Self::write
    /// [`write_colors`]: Self::write_colors
    pub fn send_byte(&mut self, value: u8) {
        let mut data = value;
        for _ in 0..8 {
            let _ = self.pin.set_high();
            // A "0" bit drives the line low again right away; for a "1"
            // bit this write keeps the line high until the late edge below.
            let _ = self.pin.set_state(PinState::from(data & 0x80 != 0));
            C::high_pad();
            let _ = self.pin.set_low();
            C::period_pad();
            data <<= 1;
        }
    }

    /// Transmit a prepared wire-order byte buffer as one frame.
    ///
    /// The whole frame runs inside a critical section: a single interrupt
    /// mid-transmission stretches a bit past tolerance and corrupts every
    /// LED downstream of the glitch. Interrupts are restored on exit no
    /// matter how the section ends. Budget for the blackout window; it
    /// grows linearly with the buffer length.
    pub fn write(&mut self, bytes: &[u8]) {
        critical_section::with(|_| {
            for &byte in bytes {
                self.send_byte(byte);
            }
        });
    }

    /// Transmit packed colors directly, without a prepared byte buffer.
    ///
    /// Each color is unpacked into the `O` wire order on the fly; given the
    /// same colors and ordering the waveform is identical to [`write`].
    /// The iterator runs inside the same critical section as the
    /// transmission, so keep per-item work short.
    ///
    /// [`write`]: Self::write
    pub fn write_colors<O: ChannelOrder>(&mut self, colors: impl IntoIterator<Item = Rgba>) {
        critical_section::with(|_| {
            for color in colors {
                for byte in O::lay(color.r(), color.g(), color.b()) {
                    self.send_byte(byte);
                }
            }
        });
    }

    /// Release the data pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin, C: ClockRate> FrameSink for Ws2812<P, C> {
    fn write(&mut self, bytes: &[u8]) {
        Ws2812::write(self, bytes);
    }

    fn write_colors<O: ChannelOrder>(&mut self, colors: impl IntoIterator<Item = Rgba>) {
        Ws2812::write_colors::<O>(self, colors);
    }
}
