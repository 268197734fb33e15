//! Wire ordering of a pixel's color channels.
//!
//! WS2812-class parts shift green out first; some clones take plain RGB.
//! The ordering is a type parameter on everything that touches pixel bytes,
//! so one build uses exactly one ordering and mixing two of them is not
//! representable.

/// Byte order in which a pixel's three channels go out on the wire.
pub trait ChannelOrder {
    /// Offset of the red byte within a pixel triplet.
    const RED: usize;
    /// Offset of the green byte within a pixel triplet.
    const GREEN: usize;
    /// Offset of the blue byte within a pixel triplet.
    const BLUE: usize;

    /// Lay out one pixel's channels in wire order.
    #[inline]
    fn lay(r: u8, g: u8, b: u8) -> [u8; 3] {
        let mut pixel = [0; 3];
        pixel[Self::RED] = r;
        pixel[Self::GREEN] = g;
        pixel[Self::BLUE] = b;
        pixel
    }
}

/// Green-red-blue wire order.
pub struct Grb;

/// Red-green-blue wire order.
pub struct Rgb;

impl ChannelOrder for Grb {
    const RED: usize = 1;
    const GREEN: usize = 0;
    const BLUE: usize = 2;
}

impl ChannelOrder for Rgb {
    const RED: usize = 0;
    const GREEN: usize = 1;
    const BLUE: usize = 2;
}
