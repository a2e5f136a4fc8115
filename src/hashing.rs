//! The fixed three-lane mixing hash behind cache keys, stream checksums, and
//! pattern structural hashes.
//!
//! The constants are part of the on-disk contract: two builds of the same
//! pattern set must produce byte-identical cache keys, and a serialized DFA
//! must verify against the same checksum everywhere. Keys and checksums are
//! 32-character base-32 strings; lanes one and two contribute 11 characters
//! each (55 bits), lane three contributes 10 (its low 5 bits are dropped).

const C1: u64 = 0x357B_D111_3171_B1F2 ^ 0xC6BC_2796_92B5_CC83;
const C2: u64 = 0xCAFE_BEEF_1337_FECA ^ 0xC6BC_2796_92B5_CC83;
const C3: u64 = 0xBABE_42DE_EDBE_EFEE ^ 0xC6BC_2796_92B5_CC83;
const SEED: u64 = 0x632B_E59B_D9B4_E019;
const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;
const STEP: u64 = 0xD0E8_9D2D_311E_289F;
const FOLD: u64 = 0xC6BC_2796_92B5_CC83;

const BASE32: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

/// Length of every digest produced here.
pub const DIGEST_LEN: usize = 32;

/// Three-lane mixer state. Feed it 64-bit words, then take one of the two
/// digest variants.
pub struct TripleMixer {
    z1: u64,
    z2: u64,
    z3: u64,
    r1: u64,
    r2: u64,
    r3: u64,
}

impl Default for TripleMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleMixer {
    pub fn new() -> Self {
        Self {
            z1: SEED.wrapping_add(C1),
            z2: SEED.wrapping_add(C2),
            z3: SEED.wrapping_add(C3),
            r1: 7,
            r2: 127,
            r3: 421,
        }
    }

    /// Mix one input word into all three lanes.
    pub fn write(&mut self, d: u64) {
        let step = d.wrapping_add(GOLDEN).wrapping_mul(STEP);
        self.z1 = self.z1.wrapping_add(step);
        self.r1 ^= self.z1.wrapping_mul(C1);
        self.z2 = self.z2.wrapping_add(step);
        self.r2 ^= self.z2.wrapping_mul(C2);
        self.z3 = self.z3.wrapping_add(step);
        self.r3 ^= self.z3.wrapping_mul(C3);
    }

    /// Mix every code unit of `text` as its own input word.
    pub fn write_str(&mut self, text: &str) {
        for u in text.encode_utf16() {
            self.write(u as u64);
        }
    }

    /// Digest for builder cache keys. The rotation count of each lane comes
    /// from the high bits of the *next* lane's accumulator.
    pub fn key_digest(self) -> String {
        let r1 = finalize(self.z1, self.r1, self.z2);
        let r2 = finalize(self.z2, self.r2, self.z3);
        let r3 = finalize(self.z3, self.r3, self.z1);
        emit(r1, r2, r3)
    }

    /// Digest for serialized-stream checksums. Each lane rotates by its own
    /// accumulator's high bits.
    pub fn checksum_digest(self) -> String {
        let r1 = finalize(self.z1, self.r1, self.z1);
        let r2 = finalize(self.z2, self.r2, self.z2);
        let r3 = finalize(self.z3, self.r3, self.z3);
        emit(r1, r2, r3)
    }
}

fn finalize(z: u64, r: u64, shift_source: u64) -> u64 {
    r ^ (z.wrapping_mul(FOLD) ^ r.wrapping_mul(GOLDEN))
        .wrapping_add(SEED)
        .rotate_left((shift_source >> 58) as u32)
}

fn emit(r1: u64, r2: u64, r3: u64) -> String {
    let mut out = String::with_capacity(DIGEST_LEN);
    for shift in (0..=50).step_by(5) {
        out.push(BASE32[(r1 >> shift) as usize & 31] as char);
    }
    for shift in (0..=50).step_by(5) {
        out.push(BASE32[(r2 >> shift) as usize & 31] as char);
    }
    for shift in (5..=50).step_by(5) {
        out.push(BASE32[(r3 >> shift) as usize & 31] as char);
    }
    out
}

/// Single-lane variant of the same mixer, used for 64-bit structural hashes
/// of patterns and NFAs.
pub struct Mixer {
    z: u64,
    r: u64,
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixer {
    pub fn new() -> Self {
        Self {
            z: SEED.wrapping_add(C1),
            r: 7,
        }
    }

    pub fn write(&mut self, d: u64) {
        self.z = self
            .z
            .wrapping_add(d.wrapping_add(GOLDEN).wrapping_mul(STEP));
        self.r ^= self.z.wrapping_mul(C1);
    }

    pub fn finish(self) -> u64 {
        finalize(self.z, self.r, self.z)
    }
}

/// Append the stream checksum for `body` and return the combined string.
pub fn seal(body: String) -> String {
    let mut mixer = TripleMixer::new();
    mixer.write_str(&body);
    let mut out = body;
    out.push_str(&mixer.checksum_digest());
    out
}

/// Split `text` into body and checksum tail, verifying the tail. Returns
/// `None` when the text is too short or the checksum does not match.
pub fn unseal(text: &str) -> Option<&str> {
    if text.len() < DIGEST_LEN || !text.is_char_boundary(text.len() - DIGEST_LEN) {
        return None;
    }
    let (body, tail) = text.split_at(text.len() - DIGEST_LEN);
    let mut mixer = TripleMixer::new();
    mixer.write_str(body);
    (mixer.checksum_digest() == tail).then_some(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_shape() {
        let mut m = TripleMixer::new();
        m.write(42);
        let key = m.key_digest();
        assert_eq!(key.len(), DIGEST_LEN);
        assert!(key.bytes().all(|b| BASE32.contains(&b)));
    }

    #[test]
    fn test_digest_deterministic() {
        let digest = |words: &[u64]| {
            let mut m = TripleMixer::new();
            for &w in words {
                m.write(w);
            }
            m.key_digest()
        };
        assert_eq!(digest(&[1, 2, 3]), digest(&[1, 2, 3]));
        assert_ne!(digest(&[1, 2, 3]), digest(&[1, 2, 4]));
        assert_ne!(digest(&[1, 2, 3]), digest(&[3, 2, 1]));
    }

    #[test]
    fn test_key_and_checksum_variants_differ() {
        let mut a = TripleMixer::new();
        let mut b = TripleMixer::new();
        a.write(99);
        b.write(99);
        assert_ne!(a.key_digest(), b.checksum_digest());
    }

    #[test]
    fn test_seal_round_trip() {
        let sealed = seal("some serialized payload".to_string());
        assert_eq!(unseal(&sealed), Some("some serialized payload"));
    }

    #[test]
    fn test_unseal_rejects_tampering() {
        let mut sealed = seal("payload".to_string());
        sealed.replace_range(0..1, "X");
        assert_eq!(unseal(&sealed), None);
        assert_eq!(unseal("too short"), None);
    }
}
