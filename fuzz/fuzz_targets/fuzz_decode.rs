#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpbm::{DecodeRequest, DimensionOrder, ImageInfo};

fuzz_target!(|data: &[u8]| {
    // Must never panic, in either bitmap dimension order
    let _ = zenpbm::decode(data);
    let _ = DecodeRequest::new(data)
        .with_bitmap_order(DimensionOrder::ColumnsFirst)
        .decode();
    let _ = ImageInfo::from_bytes(data);
});
