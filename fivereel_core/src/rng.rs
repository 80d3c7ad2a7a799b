use hmac::{Hmac, Mac};
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use sha2::Sha256;

use crate::grid::Positions;
use crate::symbols::{BAND_LENGTH, COLUMNS};

// Provably-fair draws: server_seed (secret) + client_seed + nonce -> HMAC-SHA256
// -> bytes -> floats in [0,1) -> reel offsets

pub type HmacSha256 = Hmac<Sha256>;

/// Anything that can pick the next set of reel offsets.
pub trait PositionSource {
    /// Five independent offsets, each uniform in `[0, BAND_LENGTH)`.
    fn draw_positions(&mut self) -> Positions;
}

pub fn derive_hash_hex(input: &[u8]) -> String {
    use sha2::Digest;
    hex::encode(Sha256::digest(input))
}

pub fn derive_floats(hmac_bytes: &[u8], count: usize) -> Vec<f64> {
    // Successive 4-byte chunks become u32s, then map to [0,1)
    let mut out = Vec::with_capacity(count);
    let mut buffer = hmac_bytes.to_vec();
    let mut i = 0usize;
    while out.len() < count {
        if i + 4 > buffer.len() {
            // extend deterministically by hashing the previous buffer
            use sha2::Digest;
            buffer = Sha256::digest(&buffer).to_vec();
            i = 0;
            continue;
        }
        let v = u32::from_be_bytes([buffer[i], buffer[i + 1], buffer[i + 2], buffer[i + 3]]);
        out.push(v as f64 / (u32::MAX as f64 + 1.0));
        i += 4;
    }
    out
}

/// Maps a float in `[0,1)` onto a band offset.
pub fn float_to_offset(f: f64) -> usize {
    ((f * BAND_LENGTH as f64).floor() as usize) % BAND_LENGTH
}

/// Seeded offset stream. Each draw uses the current nonce, then advances it.
#[derive(Debug, Clone)]
pub struct ProvablyFairRng {
    server_seed: String, // never published, only its hash
    client_seed: String,
    nonce: u64,
}

impl ProvablyFairRng {
    pub fn new(server_seed: &str, client_seed: &str, nonce: u64) -> Self {
        ProvablyFairRng {
            server_seed: server_seed.to_owned(),
            client_seed: client_seed.to_owned(),
            nonce,
        }
    }

    /// Nonce the next draw will use.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Commitment published before play; reveals nothing about the seed.
    pub fn server_seed_hash_hex(&self) -> String {
        derive_hash_hex(self.server_seed.as_bytes())
    }

    pub fn hmac_bytes(&self) -> [u8; 32] {
        let mut mac = HmacSha256::new_from_slice(self.server_seed.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(format!("{}:{}", self.client_seed, self.nonce).as_bytes());
        let mut out = [0u8; 32];
        out.copy_from_slice(&mac.finalize().into_bytes());
        out
    }

    pub fn next_floats(&self, count: usize) -> Vec<f64> {
        derive_floats(&self.hmac_bytes(), count)
    }

    /// Offsets for the current nonce without consuming it.
    pub fn positions(&self) -> Positions {
        let floats = self.next_floats(COLUMNS);
        Positions(std::array::from_fn(|c| float_to_offset(floats[c])))
    }
}

impl PositionSource for ProvablyFairRng {
    fn draw_positions(&mut self) -> Positions {
        let positions = self.positions();
        self.nonce += 1;
        positions
    }
}

impl PositionSource for StdRng {
    fn draw_positions(&mut self) -> Positions {
        Positions(std::array::from_fn(|_| self.gen_range(0..BAND_LENGTH)))
    }
}

impl PositionSource for ThreadRng {
    fn draw_positions(&mut self) -> Positions {
        Positions(std::array::from_fn(|_| self.gen_range(0..BAND_LENGTH)))
    }
}
