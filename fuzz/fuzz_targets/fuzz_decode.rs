#![no_main]
use libfuzzer_sys::fuzz_target;
use vacmap::{DecodeRequest, ImageConfig, PixelPoint, Trim};

fuzz_target!(|data: &[u8]| {
    let Some((&head, raster)) = data.split_first() else {
        return;
    };
    // Small geometry derived from the first byte; the raster may be short.
    let width = u32::from(head & 0x0f) + 1;
    let height = u32::from(head >> 4) + 1;
    let config = ImageConfig {
        trim: Trim {
            left: f64::from(head % 7) * 10.0,
            right: 0.0,
            top: f64::from(head % 5) * 20.0,
            bottom: 0.0,
        },
        scale: 1.5,
    };

    // Must never panic, whatever the bytes are.
    let _ = DecodeRequest::new(raster, width, height)
        .with_config(config)
        .with_cleaned_area_layer(true)
        .decode(enough::Unstoppable);

    let x = f32::from(head) * 3.0;
    let _ = vacmap::vacuum_room(raster, PixelPoint::new(x, x));
});
