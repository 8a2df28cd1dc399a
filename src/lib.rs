//! Seed fingerprint icons and preset summaries for game randomizers.
//!
//! This crate provides the two display-side pieces a randomizer needs
//! once a seed has been generated:
//! - A fingerprint codec that folds the seed's byte fingerprint into a
//!   short sequence of item icons, so players can confirm at a glance
//!   that they are on the same seed.
//! - A preset describer that flattens conditional message rules into the
//!   ordered category -> messages summary shown on the settings screen.
//!
//! Both are pure functions over caller-owned data: the symbol table, the
//! icon assets, and the configuration object all live elsewhere.
//!
//! # Quick Start
//!
//! ```
//! use seedview::{FingerprintCodec, SymbolTable};
//!
//! let table = SymbolTable::from_names(["Brass Key", "Map Fragment", "Old Lantern"]);
//! let codec = FingerprintCodec::for_table(&table, 2);
//!
//! // 5 = 1 * 3 + 2 in base 3, so the digits are [2, 1] -> indices [3, 2].
//! assert_eq!(codec.decode(&[5]), vec![3, 2]);
//! ```

pub mod describer;
pub mod fingerprint;
pub mod symbols;

// Primary public API
pub use describer::{
    message_for_required_mains, Condition, MessageTree, PresetDescriber, RuleGroup, Summary,
};
pub use fingerprint::{FingerprintCodec, RenderError};
pub use symbols::{DirectoryIcons, IconFn, IconResolver, SymbolTable};
