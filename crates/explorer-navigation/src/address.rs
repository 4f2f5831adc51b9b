//! c32check address codec
//!
//! A Stacks address is `S` + version character + c32(payload ‖ checksum),
//! where the checksum is the first four bytes of
//! `sha256(sha256(version ‖ payload))`.

use sha2::{Digest, Sha256};
use thiserror::Error;

const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const CHECKSUM_LEN: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid c32 address: invalid length")]
    InvalidLength,

    #[error("Invalid c32 address: must start with \"S\"")]
    MissingPrefix,

    #[error("Not a c32-encoded string: unexpected character {0:?}")]
    InvalidCharacter(char),

    #[error("Invalid c32check string: checksum mismatch")]
    ChecksumMismatch,
}

/// Version and hash payload of a decoded address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    pub version: u8,
    pub hash: Vec<u8>,
}

impl DecodedAddress {
    pub fn hash_hex(&self) -> String {
        hex::encode(&self.hash)
    }
}

/// Decode a c32check address.
pub fn decode_address(address: &str) -> Result<DecodedAddress, AddressError> {
    if address.len() <= 5 {
        return Err(AddressError::InvalidLength);
    }
    let rest = address
        .strip_prefix('S')
        .ok_or(AddressError::MissingPrefix)?;

    let normalized = normalize(rest);
    let mut chars = normalized.chars();
    let version_char = chars.next().ok_or(AddressError::InvalidLength)?;
    let version = c32_value(version_char)?;

    let data = c32_decode(chars.as_str())?;
    if data.len() < CHECKSUM_LEN {
        return Err(AddressError::ChecksumMismatch);
    }

    let (hash, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    if c32_checksum(version, hash) != checksum {
        return Err(AddressError::ChecksumMismatch);
    }

    Ok(DecodedAddress {
        version,
        hash: hash.to_vec(),
    })
}

pub fn is_valid_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

/// Encode a version and payload as a c32check address.
///
/// Versions above 31 cannot be represented; they are masked to five bits.
pub fn encode_address(version: u8, hash: &[u8]) -> String {
    let version = version & 0x1f;
    let mut data = hash.to_vec();
    data.extend_from_slice(&c32_checksum(version, hash));

    let mut out = String::with_capacity(2 + data.len() * 8 / 5 + 1);
    out.push('S');
    out.push(C32_ALPHABET[version as usize] as char);
    out.push_str(&c32_encode(&data));
    out
}

fn normalize(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_ascii_uppercase() {
            'O' => '0',
            'I' | 'L' => '1',
            other => other,
        })
        .collect()
}

fn c32_value(c: char) -> Result<u8, AddressError> {
    C32_ALPHABET
        .iter()
        .position(|&a| a as char == c)
        .map(|i| i as u8)
        .ok_or(AddressError::InvalidCharacter(c))
}

fn c32_checksum(version: u8, hash: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Sha256::new();
    hasher.update([version]);
    hasher.update(hash);
    let first = hasher.finalize();
    let second = Sha256::digest(first);

    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&second[..CHECKSUM_LEN]);
    checksum
}

/// Decode normalized c32 digits into bytes, preserving leading zero digits as
/// leading zero bytes.
fn c32_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut result = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0;

    for c in input.chars().rev() {
        carry |= (c32_value(c)? as u16) << carry_bits;
        carry_bits += 5;
        if carry_bits >= 8 {
            result.push((carry & 0xff) as u8);
            carry >>= 8;
            carry_bits -= 8;
        }
    }
    if carry_bits > 0 {
        result.push(carry as u8);
    }

    // result is little-endian here
    while result.last() == Some(&0) {
        result.pop();
    }
    let leading_zeros = input.chars().take_while(|&c| c == '0').count();
    result.extend(std::iter::repeat(0).take(leading_zeros));

    result.reverse();
    Ok(result)
}

fn c32_encode(data: &[u8]) -> String {
    let mut digits = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0;

    for &byte in data.iter().rev() {
        carry |= (byte as u16) << carry_bits;
        carry_bits += 8;
        while carry_bits >= 5 {
            digits.push(C32_ALPHABET[(carry & 0x1f) as usize]);
            carry >>= 5;
            carry_bits -= 5;
        }
    }
    if carry_bits > 0 {
        digits.push(C32_ALPHABET[(carry & 0x1f) as usize]);
    }

    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();
    digits.extend(std::iter::repeat(b'0').take(leading_zeros));

    digits.iter().rev().map(|&d| d as char).collect()
}
