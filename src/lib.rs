#![no_std]

pub mod buffer;
pub mod clock;
pub mod color;
pub mod driver;
pub mod layers;
pub mod order;

pub use buffer::PixelBuffer;
pub use clock::{Clock6MHz, Clock12MHz, Clock16MHz, Clock24MHz, ClockRate};
pub use color::{Rgba, hue_to_rgb, interpolate, lerp8};
pub use driver::{LATCH_IDLE, Ws2812};
pub use layers::{LayerMap, LayerRenderer};
pub use order::{ChannelOrder, Grb, Rgb};

pub use embassy_time::Duration;
pub use smart_leds::RGB8;

/// Abstract frame output seam.
///
/// Implemented by the bit-bang [`Ws2812`] driver. Implement it for a
/// peripheral-driven transport (SPI, PWM, RMT) on cores that cannot hold
/// the bit waveform cycle-exact in software; the layer renderer is generic
/// over this trait.
pub trait FrameSink {
    /// Transmit one frame of wire-order bytes.
    fn write(&mut self, bytes: &[u8]);

    /// Transmit packed colors, laid out in the `O` wire order on the fly.
    ///
    /// Must produce the same output as [`write`](Self::write) given the
    /// same colors and ordering.
    fn write_colors<O: ChannelOrder>(&mut self, colors: impl IntoIterator<Item = Rgba>);
}
