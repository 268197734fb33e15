//! Layer composition for status indicator LEDs.
//!
//! A device exposes a set of logical layers (base layer, nav layer, caps
//! indicator, ...). Each layer owns a static color assignment per LED; at
//! any moment some subset of layers is active. Composition folds the
//! active assignments into one frame by per-channel addition, saturating
//! at full brightness.

use crate::FrameSink;
use crate::buffer::PixelBuffer;
use crate::color::Rgba;
use crate::order::ChannelOrder;

/// Static per-layer, per-LED color assignments, indexed `[layer][led]`.
///
/// Built once (typically `const`) and never mutated at runtime; its
/// dimensions fix the layer and LED counts for the renderer.
pub type LayerMap<const LAYERS: usize, const LEDS: usize> = [[Rgba; LEDS]; LAYERS];

/// Folds active layers into a single frame and hands it to the output.
///
/// Layer activity is not owned here: every render queries the caller's
/// predicate fresh. Rendering is non-reentrant, which `&mut self`
/// enforces.
pub struct LayerRenderer<'a, O: ChannelOrder, const LAYERS: usize, const LEDS: usize> {
    map: &'a LayerMap<LAYERS, LEDS>,
    buffer: PixelBuffer<O, LEDS>,
}

impl<'a, O: ChannelOrder, const LAYERS: usize, const LEDS: usize>
    LayerRenderer<'a, O, LAYERS, LEDS>
{
    /// Create a renderer over a static layer map.
    pub fn new(map: &'a LayerMap<LAYERS, LEDS>) -> Self {
        Self {
            map,
            buffer: PixelBuffer::new(),
        }
    }

    /// Compose all active layers and transmit the finished frame.
    pub fn render<S: FrameSink>(&mut self, sink: &mut S, is_active: impl Fn(usize) -> bool) {
        self.compose(&is_active);
        sink.write(self.buffer.as_bytes());
    }

    /// Compose all active layers into the pixel buffer.
    ///
    /// The buffer is zeroed and rebuilt from scratch: layers are folded in
    /// ascending layer order, LEDs in ascending index order, each channel
    /// accumulating with saturation at 255. The fold commutes, so the
    /// fixed order only pins down a canonical sequence of buffer states.
    pub fn compose(&mut self, is_active: impl Fn(usize) -> bool) -> &PixelBuffer<O, LEDS> {
        self.buffer.clear_all();
        for (layer, colors) in self.map.iter().enumerate() {
            if !is_active(layer) {
                continue;
            }
            for (index, color) in colors.iter().enumerate() {
                // Alpha is decoded with the rest of the word but does not
                // feed the blend.
                let (r, g, b, _alpha) = color.split();
                self.buffer.accumulate(index, r, g, b);
            }
        }
        &self.buffer
    }

    /// Compose and transmit without touching the pixel buffer.
    ///
    /// Sums each LED across the active layers on the fly and streams the
    /// packed result straight to the wire. Output is identical to
    /// [`render`] for the same layer activity. The per-LED summation runs
    /// inside the transmit critical section, so it is kept to saturating
    /// adds over the static map.
    ///
    /// [`render`]: Self::render
    pub fn render_direct<S: FrameSink>(&self, sink: &mut S, is_active: impl Fn(usize) -> bool) {
        let active: [bool; LAYERS] = core::array::from_fn(is_active);
        sink.write_colors::<O>((0..LEDS).map(|index| {
            let mut sum = Rgba::default();
            for (colors, &on) in self.map.iter().zip(active.iter()) {
                if on {
                    sum = sum.saturating_add(colors[index]);
                }
            }
            sum
        }));
    }

    /// The last composed frame.
    pub fn buffer(&self) -> &PixelBuffer<O, LEDS> {
        &self.buffer
    }
}
