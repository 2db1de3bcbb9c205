use anyhow::{anyhow, bail, Result};
use std::fmt;
use std::str::FromStr;

use crate::alignment::AlignedSequence;

/// A single-column substitution against the reference, in 1-based ungapped
/// reference coordinates. A `-` on either side encodes a deletion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snp {
    pub position: u32,
    pub reference: u8,
    pub alternate: u8,
}

impl fmt::Display for Snp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.position, self.reference as char, self.alternate as char
        )
    }
}

impl FromStr for Snp {
    type Err = anyhow::Error;

    /// Parses the `{position}{ref}{alt}` form, e.g. `2897GT`.
    fn from_str(s: &str) -> Result<Self> {
        if s.len() < 3 || !s.is_ascii() {
            bail!("malformed SNP string '{}'", s);
        }
        let (digits, bases) = s.split_at(s.len() - 2);
        let position = digits
            .parse::<u32>()
            .map_err(|_| anyhow!("malformed SNP position in '{}'", s))?;
        let bases = bases.as_bytes();
        Ok(Snp {
            position,
            reference: bases[0].to_ascii_uppercase(),
            alternate: bases[1].to_ascii_uppercase(),
        })
    }
}

/// Canonical `;`-joined encoding of a SNP list, in ascending position order.
/// Two members carry the same substitution pattern exactly when their
/// signatures compare equal.
pub fn snp_signature(snps: &[Snp]) -> String {
    let mut sorted = snps.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(Snp::to_string)
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses a `;`-joined signature back into its SNP events. The empty
/// signature decodes to an empty list.
pub fn parse_signature(signature: &str) -> Result<Vec<Snp>> {
    if signature.is_empty() {
        return Ok(Vec::new());
    }
    signature.split(';').map(str::parse).collect()
}

/// Inclusion-percentage thresholds for SNP classification.
#[derive(Debug, Clone, Copy)]
pub struct Cutoffs {
    pub defining: f64,
    pub represent: f64,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            defining: 90.0,
            represent: 10.0,
        }
    }
}

impl Cutoffs {
    pub fn new(defining: f64, represent: f64) -> Self {
        Self { defining, represent }
    }

    /// Both values must be percentages and the representative cut-off may
    /// not exceed the defining cut-off.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.defining) || !(0.0..=100.0).contains(&self.represent) {
            bail!(
                "cut-offs must lie within 0-100 (defining {}, represent {})",
                self.defining,
                self.represent
            );
        }
        if self.represent > self.defining {
            bail!(
                "represent cut-off {} exceeds defining cut-off {}",
                self.represent,
                self.defining
            );
        }
        Ok(())
    }
}

/// An alignment record with its derived annotations.
#[derive(Debug, Clone)]
pub struct AnnotatedSequence {
    pub record: AlignedSequence,
    /// Percentage of N residues, rounded to two decimal places.
    pub pcent_n: f64,
    /// Substitutions against the reference, in position order.
    pub snps: Vec<Snp>,
    /// Canonical encoding of `snps`.
    pub snp_signature: String,
}

impl AnnotatedSequence {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}
