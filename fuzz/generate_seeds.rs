#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PBM ASCII 3x2 (rows first)
    fs::write(format!("{dir}/pbm_plain_3x2.pbm"), b"P1\n2 3\n1 0 1\n0 1 0\n").unwrap();

    // PBM packed 10x2
    fs::write(format!("{dir}/pbm_raw_10x2.pbm"), b"P4\n2 10\n\xa0\xc0\x01\x40").unwrap();

    // PGM ASCII 3x2 with a comment
    let pgm = b"P2\n# seed\n3 2\n255\n10 20 30\n40 50 60\n";
    fs::write(format!("{dir}/pgm_plain_3x2.pgm"), pgm).unwrap();

    // PGM binary 3x2
    let pgm = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    fs::write(format!("{dir}/pgm_raw_3x2.pgm"), pgm).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p5.bin"), b"P5").unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), b"P9\n1 1\n0\n").unwrap();
    fs::write(format!("{dir}/p2_no_max.bin"), b"P2\n1 1\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
