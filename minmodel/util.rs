/// Build a [`crate::literal::Clause`] from DIMACS integers.
///
/// ```rust
/// use minmodel::clause;
///
/// let clause = clause![1, -2, 3];
/// assert_eq!(clause.len(), 3);
/// ```
#[macro_export]
macro_rules! clause {
    ( $( $x:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut temp_clause: $crate::literal::Clause = Vec::new();
            $(
                temp_clause.push(
                    $crate::literal::Literal::try_from($x)
                        .expect("clause! takes non-zero literals within MAX_ATOM"),
                );
            )*
            temp_clause
        }
    };
}

/// Build a sorted set of atoms.
#[macro_export]
macro_rules! atoms {
    ( $( $x:expr ),* $(,)? ) => {
        {
            #[allow(unused_mut)]
            let mut temp_atoms = std::collections::BTreeSet::<$crate::literal::Atom>::new();
            $(
                temp_atoms.insert($x);
            )*
            temp_atoms
        }
    };
}

#[cfg(test)]
mod test {
    use crate::literal::{Literal, Polarity};

    #[test]
    fn clause_macro() {
        let clause = clause![1, -2];
        assert_eq!(clause, vec![Literal::positive(1), Literal::negative(2)]);
        assert_eq!(clause[1].polarity(), Polarity::Negative);
        assert!(clause![].is_empty());
    }

    #[test]
    #[should_panic(expected = "non-zero literals")]
    fn clause_macro_rejects_zero() {
        let _ = clause![1, 0];
    }

    #[test]
    fn atoms_macro() {
        let atoms = atoms![3, 1, 3];
        assert_eq!(atoms.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }
}
