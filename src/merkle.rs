//! keccak256 Merkle tree over whitelisted addresses.
//!
//! Pairs are hashed in ascending byte order, so a proof is just the list of
//! siblings with no left/right flags, which is what an on-chain verifier
//! checking `keccak256(abi.encodePacked(msg.sender))` leaves expects. An odd
//! node at the end of a layer moves up unchanged.

use sha3::{Digest, Keccak256};
use std::borrow::Cow;
use thiserror::Error;
use tracing::debug;

pub type Hash = [u8; 32];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Address {0} is not in the whitelist")]
    LeafNotFound(String),
}

fn keccak256(bytes: &[u8]) -> Hash {
    Keccak256::digest(bytes).into()
}

/// `0x`-prefixed hex is hashed as the bytes it encodes, anything else as text.
fn address_bytes(address: &str) -> Cow<'_, [u8]> {
    address
        .strip_prefix("0x")
        .and_then(|digits| hex::decode(digits).ok())
        .map(Cow::Owned)
        .unwrap_or(Cow::Borrowed(address.as_bytes()))
}

/// Leaf hash of a whitelisted address.
pub fn leaf_hash(address: &str) -> Hash {
    keccak256(&address_bytes(address))
}

fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = Keccak256::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

#[derive(Debug, Clone)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let leaves: Vec<Hash> = addresses
            .into_iter()
            .map(|a| leaf_hash(a.as_ref()))
            .collect();
        let mut layers = vec![leaves];
        while let Some(layer) = layers.last().filter(|l| l.len() > 1) {
            let next: Vec<Hash> = layer
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_pair(a, b),
                    [a] => *a,
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            layers.push(next);
        }
        debug!(leaves = layers[0].len(), depth = layers.len(), "built merkle tree");
        Self { layers }
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    /// `None` for a tree without leaves.
    pub fn root(&self) -> Option<Hash> {
        self.layers.last().and_then(|l| l.first()).copied()
    }

    /// Lowercase hex without prefix; empty for a tree without leaves.
    pub fn root_hex(&self) -> String {
        self.root().map(hex::encode).unwrap_or_default()
    }

    /// Sibling hashes from the leaf of `address` up to the root.
    pub fn proof(&self, address: &str) -> Result<Vec<Hash>, Error> {
        let leaf = leaf_hash(address);
        let mut index = self
            .leaves()
            .iter()
            .position(|l| *l == leaf)
            .ok_or_else(|| Error::LeafNotFound(address.to_string()))?;
        let mut proof = Vec::new();
        for layer in &self.layers[..self.layers.len() - 1] {
            if let Some(sibling) = layer.get(index ^ 1) {
                proof.push(*sibling);
            }
            index /= 2;
        }
        Ok(proof)
    }

    pub fn hex_proof(&self, address: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .proof(address)?
            .iter()
            .map(|h| format!("0x{}", hex::encode(h)))
            .collect())
    }
}

/// Folds `proof` onto `leaf` and checks the result against `root`.
pub fn verify(proof: &[Hash], leaf: &Hash, root: &Hash) -> bool {
    proof.iter().fold(*leaf, |acc, sibling| hash_pair(&acc, sibling)) == *root
}
