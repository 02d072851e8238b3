//! Concrete target kinds
//!
//! Each kind composes a [`BuildTarget`] and supplies its `isa`. [`Target`]
//! dispatches between them by `isa` when decoding an `objects` entry.

use pbx_plist::{CommentedString, PlistDictionary, PlistValue};

use crate::config::EqualityPolicy;
use crate::error::DecodeError;
use crate::fields::Fields;
use crate::identifier::Identifier;
use crate::object::{Isa, NameLookup, PlistDecode, PlistEncode};
use crate::target::BuildTarget;

macro_rules! target_kind {
    ($(#[$meta:meta])* $name:ident => $isa:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            target: BuildTarget,
        }

        impl $name {
            /// Wrap shared target fields
            #[inline]
            #[must_use]
            pub fn new(target: BuildTarget) -> Self {
                Self { target }
            }

            /// Shared target fields
            #[inline]
            #[must_use]
            pub fn target(&self) -> &BuildTarget {
                &self.target
            }

            /// Unwrap shared target fields
            #[inline]
            #[must_use]
            pub fn into_target(self) -> BuildTarget {
                self.target
            }
        }

        impl Isa for $name {
            const ISA: &'static str = $isa;
        }

        impl From<BuildTarget> for $name {
            fn from(target: BuildTarget) -> Self {
                Self::new(target)
            }
        }

        impl PlistDecode for $name {
            fn from_plist(mapping: &PlistDictionary) -> Result<Self, DecodeError> {
                BuildTarget::from_plist(mapping).map(Self::new)
            }
        }

        impl PlistEncode for $name {
            fn plist_values<L: NameLookup + ?Sized>(
                &self,
                lookup: &L,
            ) -> (CommentedString, PlistValue) {
                self.target.plist_values(lookup, Self::ISA)
            }
        }
    };
}

target_kind! {
    /// Target compiled from sources into a product
    NativeTarget => "PBXNativeTarget"
}

target_kind! {
    /// Target grouping other targets, with no product of its own
    AggregateTarget => "PBXAggregateTarget"
}

target_kind! {
    /// Target driven by an external build tool
    LegacyTarget => "PBXLegacyTarget"
}

/// Any concrete target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `PBXNativeTarget`
    Native(NativeTarget),
    /// `PBXAggregateTarget`
    Aggregate(AggregateTarget),
    /// `PBXLegacyTarget`
    Legacy(LegacyTarget),
}

impl Target {
    /// Whether `isa` names a target kind
    #[inline]
    #[must_use]
    pub fn is_target_isa(isa: &str) -> bool {
        [NativeTarget::ISA, AggregateTarget::ISA, LegacyTarget::ISA].contains(&isa)
    }

    /// `isa` of the wrapped kind
    #[inline]
    #[must_use]
    pub fn isa(&self) -> &'static str {
        match self {
            Self::Native(_) => NativeTarget::ISA,
            Self::Aggregate(_) => AggregateTarget::ISA,
            Self::Legacy(_) => LegacyTarget::ISA,
        }
    }

    /// Shared target fields
    #[inline]
    #[must_use]
    pub fn base(&self) -> &BuildTarget {
        match self {
            Self::Native(target) => target.target(),
            Self::Aggregate(target) => target.target(),
            Self::Legacy(target) => target.target(),
        }
    }

    /// Object reference
    #[inline]
    #[must_use]
    pub fn reference(&self) -> &Identifier {
        self.base().reference()
    }

    /// Same kind and equal under `policy`
    #[must_use]
    pub fn eq_with(&self, other: &Self, policy: EqualityPolicy) -> bool {
        self.isa() == other.isa() && self.base().eq_with(other.base(), policy)
    }
}

impl PlistDecode for Target {
    fn from_plist(mapping: &PlistDictionary) -> Result<Self, DecodeError> {
        match Fields::new(mapping).string("isa")? {
            NativeTarget::ISA => NativeTarget::from_plist(mapping).map(Self::Native),
            AggregateTarget::ISA => AggregateTarget::from_plist(mapping).map(Self::Aggregate),
            LegacyTarget::ISA => LegacyTarget::from_plist(mapping).map(Self::Legacy),
            _ => Err(DecodeError::mismatch("isa", "target isa")),
        }
    }
}

impl PlistEncode for Target {
    fn plist_values<L: NameLookup + ?Sized>(&self, lookup: &L) -> (CommentedString, PlistValue) {
        self.base().plist_values(lookup, self.isa())
    }
}

impl From<NativeTarget> for Target {
    fn from(target: NativeTarget) -> Self {
        Self::Native(target)
    }
}

impl From<AggregateTarget> for Target {
    fn from(target: AggregateTarget) -> Self {
        Self::Aggregate(target)
    }
}

impl From<LegacyTarget> for Target {
    fn from(target: LegacyTarget) -> Self {
        Self::Legacy(target)
    }
}
