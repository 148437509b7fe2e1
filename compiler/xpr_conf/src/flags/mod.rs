//! Feature flags.

use bitflags::bitflags;
use xpr_types::Kind;

bitflags! {
    /// Boolean switches consulted by the compiler.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Features: u8 {
        /// The environment is a string-keyed map of dynamically typed values.
        const MAP_ENV = 1 << 0;
        /// The result may be of any type, overriding the expected kind.
        const EXPECT_ANY = 1 << 1;
        /// Run the optimizer (constant folding among others).
        const OPTIMIZE = 1 << 2;
        /// Unknown identifiers are type errors. Set whenever an environment is bound.
        const STRICT = 1 << 3;
        /// Accept the pipe operator `|`.
        const PIPES = 1 << 4;
    }
}

impl Default for Features {
    fn default() -> Self {
        Features::OPTIMIZE
    }
}

/// Snapshot of a configuration's scalar settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigFlags {
    pub features: Features,
    /// Expected result kind; `Kind::Invalid` means unconstrained.
    pub expect: Kind,
}

impl ConfigFlags {
    #[inline]
    pub fn contains(&self, feature: Features) -> bool {
        self.features.contains(feature)
    }
}
