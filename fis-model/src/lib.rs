//! In-memory model of a Fuzzy Inference System (FIS) definition.
//!
//! A [`Document`] owns ordered lists of input and output [`Variable`]s, each a
//! collection of [`MembershipFunction`]s, plus the weighted [`Rule`]s that
//! combine them. Rules reference membership functions positionally through
//! [`SubRuleRef`]; the document keeps every rule aligned with the variable
//! lists on each mutation.
//!
//! The five inference method names ([`AndMethod`], [`OrMethod`],
//! [`ImpMethod`], [`AggMethod`], [`DefuzzMethod`]) are stored metadata only;
//! no inference is executed here.
//!
//! [`curve`] evaluates a membership function over an integer sample range,
//! producing the truth-value points an editing front end plots.

pub mod curve;
mod document;
mod error;
mod mf;
mod rule;
mod variable;

pub use curve::Curve;
pub use document::{AggMethod, AndMethod, DefuzzMethod, Document, ImpMethod, OrMethod};
pub use error::ModelError;
pub use mf::{MembershipFunction, MfKind, MfShape};
pub use rule::{Connective, Rule, SubRule, SubRuleRef};
pub use variable::{Role, Variable};

/// Version stamp written into the `[System]` header of persisted files.
pub const SYSTEM_VERSION: f64 = 2.0;

/// Fallback name for documents, variables and membership functions created
/// with an empty name.
pub const UNNAMED: &str = "unnamed";
