use bon::Builder;
use clap::ValueEnum;
use derive_more::derive::Display;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::oracle::OracleKind;

/// Strategy used to compute a minimal model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum Algorithm {
    /// Shrink models until the oracle runs out of them.
    #[default]
    #[value(name = "MM")]
    #[display("MM")]
    Mm,
    /// Check every model for minimality and shrink only rejected ones.
    #[value(name = "MR")]
    #[display("MR")]
    Mr,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "MM" => Ok(Algorithm::Mm),
            "MR" => Ok(Algorithm::Mr),
            _ => Err(Error::UnknownSolver(name.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Builder)]
pub struct SolverOptions {
    #[builder(default = Algorithm::Mm)]
    pub algorithm: Algorithm,

    /// Carry the *mr*-reduced clauses from one iteration to the next instead
    /// of searching over the original formula.
    #[builder(default = false)]
    pub mr: bool,

    #[builder(default = OracleKind::Varisat)]
    pub oracle: OracleKind,

    /// Oracle for the justification sub-check of MR. Falls back to `oracle`.
    pub check_oracle: Option<OracleKind>,
}

impl SolverOptions {
    #[must_use]
    pub fn check_oracle(&self) -> OracleKind {
        self.check_oracle.unwrap_or(self.oracle)
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions::builder().build()
    }
}
