use crate::error::Error;
use std::fmt::Display;

/// Propositional variable. Atoms of a formula are numbered `1..=nv`.
pub type Atom = u32;

/// Largest atom a literal may refer to.
pub const MAX_ATOM: Atom = 1 << 22;

/// Disjunction of literals. Duplicated literals are kept as they are.
pub type Clause = Vec<Literal>;

/// Polarity of a literal.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Copy, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl From<bool> for Polarity {
    fn from(item: bool) -> Self {
        if item {
            Polarity::Positive
        } else {
            Polarity::Negative
        }
    }
}

impl std::ops::Not for Polarity {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Literal in the DIMACS convention: the absolute value is the atom and
/// a negative sign denotes its negation. Zero is not a literal.
#[derive(Eq, PartialEq, Debug, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct Literal(i32);

impl Literal {
    /// Create a new [`Literal`] of `atom` with the given `polarity`.
    ///
    /// # Panics
    ///
    /// Panics if `atom` is zero or greater than [`MAX_ATOM`].
    #[must_use]
    pub fn new(atom: Atom, polarity: Polarity) -> Literal {
        assert!(
            (1..=MAX_ATOM).contains(&atom),
            "atom {atom} is outside of 1..={MAX_ATOM}"
        );
        #[allow(clippy::cast_possible_wrap)]
        let atom = atom as i32;
        match polarity {
            Polarity::Positive => Literal(atom),
            Polarity::Negative => Literal(-atom),
        }
    }

    #[must_use]
    pub fn positive(atom: Atom) -> Literal {
        Literal::new(atom, Polarity::Positive)
    }

    #[must_use]
    pub fn negative(atom: Atom) -> Literal {
        Literal::new(atom, Polarity::Negative)
    }

    /// Atom this literal refers to.
    #[must_use]
    pub fn atom(self) -> Atom {
        self.0.unsigned_abs()
    }

    #[must_use]
    pub fn polarity(self) -> Polarity {
        Polarity::from(self.0 > 0)
    }

    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// The literal as a signed DIMACS integer.
    #[must_use]
    pub fn to_dimacs(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Literal {
    type Error = Error;

    /// Read a DIMACS literal. Zero and atoms beyond [`MAX_ATOM`] are rejected.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value == 0 || value.unsigned_abs() > MAX_ATOM {
            return Err(Error::InvalidLiteral(value));
        }
        Ok(Literal(value))
    }
}

impl std::ops::Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Literal(-self.0)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
