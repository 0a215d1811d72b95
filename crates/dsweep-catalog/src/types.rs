//! Array, loop and identifier types shared by benchmark declarations.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::CatalogError;

/// How an array is split across parallel memory banks/ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionType {
    /// Round-robin by element index.
    Cyclic,
    /// One element per bank.
    Complete,
    /// Contiguous chunks per bank.
    Block,
}

pub const PARTITION_CYCLIC: PartitionType = PartitionType::Cyclic;
pub const PARTITION_COMPLETE: PartitionType = PartitionType::Complete;
pub const PARTITION_BLOCK: PartitionType = PartitionType::Block;

impl PartitionType {
    /// All partition types.
    pub const ALL: &'static [Self] = &[Self::Cyclic, Self::Complete, Self::Block];

    /// Get string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cyclic => "cyclic",
            Self::Complete => "complete",
            Self::Block => "block",
        }
    }
}

impl fmt::Display for PartitionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionType {
    type Err = CatalogError;

    /// Parse "cyclic", "COMPLETE", "partition_block", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("partition_").unwrap_or(&lower);
        match name {
            "cyclic" => Ok(Self::Cyclic),
            "complete" => Ok(Self::Complete),
            "block" => Ok(Self::Block),
            _ => Err(CatalogError::InvalidPartition(s.to_string())),
        }
    }
}

/// Loop iteration count or unroll policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripCount {
    /// Exact number of iterations. Zero is rejected at declaration time.
    Exact(u32),
    /// The `unroll_one` policy: the loop body is not unrolled. Kept distinct
    /// from `Exact(1)` so declarations round-trip as written; see
    /// [`TripCount::is_no_unroll`] for the spelling-independent check.
    NoUnroll,
    /// Loop is fully flattened.
    FullUnroll,
}

pub const UNROLL_ONE: TripCount = TripCount::NoUnroll;
pub const UNROLL_FLATTEN: TripCount = TripCount::FullUnroll;

impl TripCount {
    pub(crate) const UNROLL_ONE_NAME: &'static str = "unroll_one";
    pub(crate) const UNROLL_FLATTEN_NAME: &'static str = "unroll_flatten";

    /// Whether this is one of the two unroll policies rather than a count.
    #[must_use]
    pub const fn is_policy(&self) -> bool {
        !matches!(self, Self::Exact(_))
    }

    /// The iteration count, if one was declared.
    #[must_use]
    pub const fn iterations(&self) -> Option<u32> {
        match self {
            Self::Exact(n) => Some(*n),
            Self::NoUnroll | Self::FullUnroll => None,
        }
    }

    /// Whether the loop body is left rolled, either by policy or by a count
    /// of one.
    #[must_use]
    pub const fn is_no_unroll(&self) -> bool {
        matches!(self, Self::NoUnroll | Self::Exact(1))
    }

    pub(crate) const fn is_valid(&self) -> bool {
        !matches!(self, Self::Exact(0))
    }

    /// Parse a policy name ("unroll_one" / "unroll_flatten", any case).
    #[must_use]
    pub fn from_policy_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "unroll_one" => Some(Self::NoUnroll),
            "unroll_flatten" => Some(Self::FullUnroll),
            _ => None,
        }
    }
}

impl From<u32> for TripCount {
    fn from(n: u32) -> Self {
        Self::Exact(n)
    }
}

impl fmt::Display for TripCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::NoUnroll => f.write_str(Self::UNROLL_ONE_NAME),
            Self::FullUnroll => f.write_str(Self::UNROLL_FLATTEN_NAME),
        }
    }
}

impl Serialize for TripCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Exact(n) => serializer.serialize_u32(*n),
            Self::NoUnroll => serializer.serialize_str(Self::UNROLL_ONE_NAME),
            Self::FullUnroll => serializer.serialize_str(Self::UNROLL_FLATTEN_NAME),
        }
    }
}

/// Numeric benchmark identifier, stable across tool versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MainId(pub u32);

impl MainId {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for MainId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// A memory array used by a benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayDecl {
    /// Array name. A dotted name ("fft1D_512.reversed") is function-local.
    pub name: String,
    /// Number of elements.
    pub size: u32,
    /// Bytes per element.
    pub word_size: u32,
    /// Partitioning strategy.
    pub partition: PartitionType,
}

impl ArrayDecl {
    /// Enclosing scope of a qualified name, e.g. "fft1D_512" for "fft1D_512.reversed".
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(scope, _)| scope)
    }

    /// Unqualified name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, base)| base)
    }

    /// Total footprint in bytes.
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.size as u64 * self.word_size as u64
    }
}

/// A loop inside one of the benchmark's functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoopDecl {
    /// Enclosing function.
    pub function: String,
    /// Loop label, unique within `function`.
    pub label: String,
    pub trip_count: TripCount,
}
