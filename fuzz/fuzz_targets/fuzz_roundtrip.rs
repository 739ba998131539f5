#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce the same image
    let Ok(mut image) = zenpbm::decode(data) else {
        return;
    };

    let reencoded = zenpbm::encode(&image);
    let Ok(decoded) = zenpbm::decode(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };
    assert_eq!(image, decoded, "roundtrip mismatch");

    // Transforms must keep the image encodable and decodable
    image.invert();
    image.rotate();
    image.flip();
    image.flop();
    let Ok(transformed) = zenpbm::decode(&zenpbm::encode(&image)) else {
        panic!("transformed image failed to decode");
    };
    assert_eq!(image, transformed);
});
