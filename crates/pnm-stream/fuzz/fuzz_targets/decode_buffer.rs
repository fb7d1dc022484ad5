#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // fuzzed code goes here

    use pnm_stream::pnm_core::bytestream::ByteCursor;
    use pnm_stream::pnm_core::format::PnmVariant;

    for variant in [PnmVariant::Graymap, PnmVariant::Pixmap] {
        let mut decoder = pnm_stream::PnmDecoder::new(variant, ByteCursor::new(data));

        while let Ok(Some(frame)) = decoder.read_frame() {
            let _ = frame.to_image();
        }
    }
});
