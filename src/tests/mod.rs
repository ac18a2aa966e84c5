use super::*;

// Shared helpers for chunked/streaming tests.

/// Deterministic pseudo-random chunk sizes (LCG, Numerical Recipes constants).
fn lcg_sizes(seed: u64, len: usize) -> Vec<usize> {
    let mut x = seed;
    let mut out = Vec::new();
    let mut total = 0usize;
    while total < len {
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        let mut n = (((x >> 24) as usize) % 16) + 1;
        if total + n > len {
            n = len - total;
        }
        out.push(n);
        total += n;
    }
    out
}

fn chunk_by_char(s: &str, sizes: &[usize]) -> Vec<String> {
    let mut res = Vec::new();
    let mut iter = s.chars();
    for &n in sizes {
        let chunk: String = iter.by_ref().take(n).collect();
        if chunk.is_empty() {
            break;
        }
        res.push(chunk);
    }
    let rest: String = iter.collect();
    if !rest.is_empty() {
        res.push(rest);
    }
    res
}

/// Repaired output must always satisfy a strict JSON parser.
fn assert_strict(out: &str) -> serde_json::Value {
    let mut de = serde_json::Deserializer::from_str(out);
    de.disable_recursion_limit();
    serde::de::Deserialize::deserialize(&mut de)
        .unwrap_or_else(|e: serde_json::Error| panic!("output is not strict JSON: {e}\noutput: {out}"))
}

mod errors;
mod numbers;
mod properties;
mod values;
