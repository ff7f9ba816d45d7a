#![no_main]
use libfuzzer_sys::fuzz_target;
use zenqoi::*;

fuzz_target!(|data: &[u8]| {
    // Both output modes must agree on success, warnings and color channels.
    let native = decode(data);
    let rgba = decode_rgba(data);
    let (native, rgba) = match (native, rgba) {
        (Ok(n), Ok(r)) => (n, r),
        (Err(_), Err(_)) => return,
        (n, r) => panic!("output modes disagree: {n:?} vs {r:?}"),
    };

    assert_eq!(native.warning(), rgba.warning());
    assert_eq!(rgba.pixels().len() % 4, 0);

    let bpp = native.layout.bytes_per_pixel();
    for (n, r) in native.pixels().chunks_exact(bpp).zip(rgba.pixels().chunks_exact(4)) {
        assert_eq!(&n[..3], &r[..3]);
        match native.channels {
            Channels::Rgb => assert_eq!(r[3], 255),
            Channels::Rgba => assert_eq!(n[3], r[3]),
        }
    }
});
