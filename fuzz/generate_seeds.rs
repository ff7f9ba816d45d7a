#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn qoi(width: u32, height: u32, channels: u8, body: &[u8]) -> Vec<u8> {
    let mut data = b"qoif".to_vec();
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[channels, 0]);
    data.extend_from_slice(body);
    data.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
    data
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_modes"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // RGB 1x1
        fs::write(format!("{dir}/rgb_1x1.qoi"), qoi(1, 1, 3, &[0xfe, 10, 20, 30])).unwrap();

        // RGBA 5x1 covering RGBA, RUN, DIFF, LUMA, INDEX
        let body = [0xff, 1, 2, 3, 128, 0xc0, 0x40 | 0b11_10_01, 0x80 | 40, 0x97, 0x00];
        fs::write(format!("{dir}/rgba_ops_5x1.qoi"), qoi(5, 1, 4, &body)).unwrap();

        // Long run
        fs::write(format!("{dir}/run_62.qoi"), qoi(62, 1, 3, &[0xfd])).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/just_magic.bin"), b"qoif").unwrap();
        fs::write(format!("{dir}/short_rgba.qoi"), qoi(1, 1, 4, &[0xff, 1, 2])).unwrap();
        fs::write(format!("{dir}/trailing.qoi"), qoi(1, 1, 3, &[0xc0, 0xc0, 0xc0])).unwrap();
        fs::write(format!("{dir}/huge_header.qoi"), qoi(u32::MAX, u32::MAX, 4, &[0xfd])).unwrap();
    }

    println!("Generated seed corpus in fuzz/corpus/");
}
