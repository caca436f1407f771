//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// RGB565 pure red; expands to exactly (255, 0, 0) when decoded
pub const RED_565: u16 = 0xF800;

/// Write a minimal DXT1-compressed DDS file filled with a single color.
///
/// Dimensions must be multiples of 4 (one DXT1 block covers a 4x4 tile).
/// Every block stores the color in both endpoints with all indices zero,
/// so decoders reproduce it exactly for colors representable in RGB565.
pub fn write_dxt1_dds(path: &Path, width: u32, height: u32, color565: u16) {
    assert!(width % 4 == 0 && height % 4 == 0);

    let mut data = Vec::new();
    data.extend_from_slice(b"DDS ");

    // DDS_HEADER
    push_u32(&mut data, 124); // dwSize
    push_u32(&mut data, 0x0008_1007); // CAPS | HEIGHT | WIDTH | PIXELFORMAT | LINEARSIZE
    push_u32(&mut data, height);
    push_u32(&mut data, width);
    push_u32(&mut data, width * height / 2); // linear size: 8 bytes per 4x4 block
    push_u32(&mut data, 0); // depth
    push_u32(&mut data, 0); // mipmap count
    for _ in 0..11 {
        push_u32(&mut data, 0); // reserved
    }

    // DDS_PIXELFORMAT
    push_u32(&mut data, 32); // dwSize
    push_u32(&mut data, 0x4); // DDPF_FOURCC
    data.extend_from_slice(b"DXT1");
    for _ in 0..5 {
        push_u32(&mut data, 0); // bit counts and channel masks, unused with fourcc
    }

    push_u32(&mut data, 0x1000); // caps: DDSCAPS_TEXTURE
    for _ in 0..4 {
        push_u32(&mut data, 0); // caps2-caps4, reserved2
    }

    let blocks = (width / 4) * (height / 4);
    for _ in 0..blocks {
        data.extend_from_slice(&color565.to_le_bytes());
        data.extend_from_slice(&color565.to_le_bytes());
        data.extend_from_slice(&[0u8; 4]);
    }

    fs::write(path, data).expect("failed to write test fixture");
}

/// Write a file with a `.dds` extension that is not a valid texture
pub fn write_corrupt_dds(path: &Path) {
    fs::write(path, b"DDS \x00garbage").expect("failed to write test fixture");
}

fn push_u32(data: &mut Vec<u8>, value: u32) {
    data.extend_from_slice(&value.to_le_bytes());
}
