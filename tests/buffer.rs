mod tests {
    use layerlight::{Grb, PixelBuffer, RGB8, Rgb};

    #[test]
    fn test_grb_byte_layout() {
        let mut buffer: PixelBuffer<Grb, 4> = PixelBuffer::new();
        buffer.write_color(2, 10, 20, 30);
        assert_eq!(buffer.pixel(2), [20, 10, 30]);
        assert_eq!(&buffer.as_bytes()[6..9], &[20, 10, 30]);
    }

    #[test]
    fn test_rgb_byte_layout() {
        let mut buffer: PixelBuffer<Rgb, 4> = PixelBuffer::new();
        buffer.write_color(2, 10, 20, 30);
        assert_eq!(buffer.pixel(2), [10, 20, 30]);
        assert_eq!(&buffer.as_bytes()[6..9], &[10, 20, 30]);
    }

    #[test]
    fn test_read_back_is_order_independent() {
        let mut grb: PixelBuffer<Grb, 1> = PixelBuffer::new();
        let mut rgb: PixelBuffer<Rgb, 1> = PixelBuffer::new();
        let color = RGB8 {
            r: 10,
            g: 20,
            b: 30,
        };
        grb.write_rgb(0, color);
        rgb.write_rgb(0, color);
        assert_eq!(grb.read_rgb(0), color);
        assert_eq!(rgb.read_rgb(0), color);
        assert_ne!(grb.pixel(0), rgb.pixel(0));
    }

    #[test]
    fn test_new_buffer_is_dark() {
        let buffer: PixelBuffer<Grb, 3> = PixelBuffer::new();
        assert_eq!(buffer.as_bytes(), &[0u8; 9]);
        assert_eq!(buffer.as_bytes().len(), 3 * PixelBuffer::<Grb, 3>::LEN);
    }

    #[test]
    fn test_write_overwrites() {
        let mut buffer: PixelBuffer<Grb, 2> = PixelBuffer::new();
        buffer.write_color(0, 200, 200, 200);
        buffer.write_color(0, 1, 2, 3);
        assert_eq!(buffer.read_rgb(0), RGB8 { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn test_accumulate_saturates() {
        let mut buffer: PixelBuffer<Grb, 1> = PixelBuffer::new();
        buffer.accumulate(0, 200, 10, 0);
        buffer.accumulate(0, 100, 10, 5);
        assert_eq!(buffer.read_rgb(0), RGB8 { r: 255, g: 20, b: 5 });
    }

    #[test]
    fn test_write_hue() {
        let mut buffer: PixelBuffer<Grb, 2> = PixelBuffer::new();
        buffer.write_hue(1, 0, 2);
        assert_eq!(buffer.read_rgb(1), RGB8 { r: 252, g: 0, b: 0 });
    }

    #[test]
    fn test_out_of_range_hue_writes_nothing() {
        let mut buffer: PixelBuffer<Grb, 1> = PixelBuffer::new();
        buffer.write_color(0, 7, 8, 9);
        buffer.write_hue(0, 192, 0);
        assert_eq!(buffer.read_rgb(0), RGB8 { r: 7, g: 8, b: 9 });
    }

    #[test]
    fn test_clear() {
        let mut buffer: PixelBuffer<Rgb, 3> = PixelBuffer::new();
        buffer.write_color(0, 1, 1, 1);
        buffer.write_color(1, 2, 2, 2);
        buffer.write_color(2, 3, 3, 3);

        buffer.clear_pixel(1);
        assert_eq!(buffer.pixel(0), [1, 1, 1]);
        assert_eq!(buffer.pixel(1), [0, 0, 0]);
        assert_eq!(buffer.pixel(2), [3, 3, 3]);

        buffer.clear_all();
        assert_eq!(buffer.as_bytes(), &[0u8; 9]);
    }
}
