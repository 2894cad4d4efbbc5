// Host-side tests for Radiance HDR decoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod envmap {
    include!("../src/core/envmap.rs");
}

use envmap::*;

// 2x1 flat (non-RLE) Radiance image
fn tiny_hdr() -> Vec<u8> {
    let mut bytes = b"#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y 1 +X 2\n".to_vec();
    bytes.extend_from_slice(&[128, 128, 128, 129]);
    bytes.extend_from_slice(&[128, 64, 32, 129]);
    bytes
}

#[test]
fn decodes_rgbe_texels_to_float_rgba() {
    let env = decode_hdr(&tiny_hdr()).expect("decode");
    assert_eq!((env.width, env.height), (2, 1));
    assert_eq!(env.texels.len(), 8);

    let a = env.texel(0, 0).unwrap();
    let b = env.texel(1, 0).unwrap();
    for (got, want) in a.iter().zip([1.0, 1.0, 1.0, 1.0]) {
        assert!((got - want).abs() < 0.01, "{a:?}");
    }
    for (got, want) in b.iter().zip([1.0, 0.5, 0.25, 1.0]) {
        assert!((got - want).abs() < 0.01, "{b:?}");
    }
    assert_eq!(env.texel(2, 0), None);
    assert_eq!(env.bytes().len(), 8 * 4);
}

#[test]
fn garbage_is_a_decode_error() {
    let err = decode_hdr(b"definitely not radiance").unwrap_err();
    assert!(matches!(err, EnvMapError::Decode(_)));
    assert!(err.to_string().starts_with("failed to decode"));
}

#[test]
fn error_messages_name_the_path() {
    let e = EnvMapError::Status {
        path: "./env.hdr".into(),
        status: 404,
    };
    assert_eq!(e.to_string(), "fetching ./env.hdr returned HTTP 404");
}
