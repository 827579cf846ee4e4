use pyrite_consensus::{calculate_next_work_required, decode_compact, ConsensusParams};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct RetargetVector {
    name: String,
    prev_bits: String,
    first_block_time: u64,
    last_block_time: u64,
    expect_bits: String,
}

fn vectors_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("vectors")
        .join("retarget.json")
}

fn parse_bits(s: &str) -> u32 {
    u32::from_str_radix(s.trim_start_matches("0x"), 16).expect("hex bits")
}

#[test]
fn mainnet_retarget_vectors() {
    let data = fs::read_to_string(vectors_path()).expect("vector file");
    let vectors: Vec<RetargetVector> = serde_json::from_str(&data).expect("parse json");
    let params = ConsensusParams::mainnet();

    for v in vectors {
        let got = calculate_next_work_required(
            parse_bits(&v.prev_bits),
            v.first_block_time,
            v.last_block_time,
            &params,
        );
        assert_eq!(got, parse_bits(&v.expect_bits), "bits mismatch for {}", v.name);

        // Everything the calculator emits must decode cleanly, within the
        // pow limit, and re-encode without drift.
        let decoded = decode_compact(got);
        assert!(!decoded.negative && !decoded.overflow, "bad flags for {}", v.name);
        assert!(decoded.target <= params.pow_limit, "above limit for {}", v.name);
        assert_eq!(
            pyrite_consensus::encode_compact(&decoded.target),
            got,
            "roundtrip drift for {}",
            v.name
        );
    }
}
