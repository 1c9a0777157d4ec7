//! Reader for DIMACS CNF problem files.
use crate::formula::Formula;
use crate::literal::{Atom, Clause, Literal, MAX_ATOM};

use anyhow::{bail, Result};
use std::collections::VecDeque;

/// Preamble of the DIMACS file.
#[derive(Debug, PartialEq, Eq)]
pub struct Preamble {
    pub clauses: usize,
    pub variables: usize,
}

/// Current state of the DIMACS reader.
#[derive(PartialEq, Eq, Debug)]
enum DimacsParserState {
    Initialized,
    PreambleParsed,
    ParsingClauses,
    Finished,
}

/// DIMACS parser. Clauses are terminated by `0` and may span several lines
/// or share one.
#[allow(clippy::module_name_repetitions)]
pub struct DimacsParser<'a> {
    reader: &'a mut dyn std::io::BufRead,
    state: DimacsParserState,
    tokens: VecDeque<String>,
}

impl<'a> DimacsParser<'a> {
    #[must_use]
    pub fn new(reader: &'a mut dyn std::io::BufRead) -> Self {
        DimacsParser {
            reader,
            state: DimacsParserState::Initialized,
            tokens: VecDeque::new(),
        }
    }

    /// Parse preamble of the DIMACS file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * the preamble has already been parsed,
    /// * the input ends before a 'problem line',
    /// * the 'problem line' is malformed.
    pub fn parse_preamble(&mut self) -> Result<Preamble> {
        if self.state != DimacsParserState::Initialized {
            bail!("preamble already parsed");
        }

        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => bail!("preamble is missing a problem line"),
                Ok(..) => {}
                Err(err) => bail!("could not read preamble: {err}"),
            }

            let line = line.trim();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            return self.parse_problem_line(line);
        }
    }

    /// Parse the next clause, `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the preamble has not been parsed yet, the input
    /// could not be read, or a literal is not an integer.
    pub fn parse_next_clause(&mut self) -> Result<Option<Clause>> {
        match self.state {
            DimacsParserState::Initialized => bail!("preamble must be parsed before clauses"),
            DimacsParserState::Finished => return Ok(None),
            DimacsParserState::PreambleParsed | DimacsParserState::ParsingClauses => {}
        }

        let mut clause = Clause::new();
        loop {
            while let Some(token) = self.tokens.pop_front() {
                // SATLIB benchmarks end with '%' followed by a lone '0'.
                if token == "%" {
                    self.finish();
                    return Ok((!clause.is_empty()).then_some(clause));
                }

                let literal = match token.parse::<i32>() {
                    Ok(literal) => literal,
                    Err(err) => bail!("literal '{token}' is invalid: {err}"),
                };
                if literal == 0 {
                    self.state = DimacsParserState::ParsingClauses;
                    return Ok(Some(clause));
                }
                match Literal::try_from(literal) {
                    Ok(literal) => clause.push(literal),
                    Err(err) => bail!("could not parse clause: {err}"),
                }
            }

            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.finish();
                    return Ok((!clause.is_empty()).then_some(clause));
                }
                Ok(..) => {}
                Err(err) => bail!("could not read clause: {err}"),
            }

            let line = line.trim();
            if line.starts_with('c') {
                continue;
            }
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn finish(&mut self) {
        self.state = DimacsParserState::Finished;
        self.tokens.clear();
    }

    fn parse_problem_line(&mut self, line: &str) -> Result<Preamble> {
        let items: Vec<_> = line.split_whitespace().collect();
        let [p, cnf, variables, clauses] = items.as_slice() else {
            bail!("problem line must contain exactly 4 fields: 'p cnf VARIABLES CLAUSES'");
        };

        if *p != "p" {
            bail!("first field of problem line must be 'p'");
        }

        if *cnf != "cnf" {
            bail!("second field of problem line must be 'cnf'");
        }

        let variables = match variables.parse::<usize>() {
            Ok(variables) => variables,
            Err(err) => bail!("could not parse number of variables: {err}"),
        };

        let clauses = match clauses.parse::<usize>() {
            Ok(clauses) => clauses,
            Err(err) => bail!("could not parse number of clauses: {err}"),
        };

        self.state = DimacsParserState::PreambleParsed;
        Ok(Preamble { clauses, variables })
    }
}

impl Formula {
    /// Read a formula from a DIMACS CNF file. The formula declares at least
    /// as many atoms as the problem line does.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid DIMACS CNF.
    pub fn from_dimacs(reader: &mut dyn std::io::BufRead) -> Result<Formula> {
        let mut dimacs = DimacsParser::new(reader);
        let preamble = dimacs.parse_preamble()?;

        let nv = match Atom::try_from(preamble.variables) {
            Ok(nv) if nv <= MAX_ATOM => nv,
            _ => bail!(
                "problem line declares {} variables, at most {MAX_ATOM} are supported",
                preamble.variables
            ),
        };

        let mut formula = Formula::with_atoms(nv);
        while let Some(clause) = dimacs.parse_next_clause()? {
            formula.add_clause(clause);
        }

        if formula.len() != preamble.clauses {
            tracing::warn!(
                declared = preamble.clauses,
                parsed = formula.len(),
                "number of clauses differs from the problem line"
            );
        }

        Ok(formula)
    }
}
