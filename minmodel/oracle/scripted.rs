use crate::error::Result;
use crate::literal::Literal;
use crate::model::Model;
use crate::oracle::Oracle;

/// Answers the first query with a fixed model, then defers to `inner`.
///
/// Lets tests drive the search loops through models a real backend would
/// not return first.
pub(crate) struct ScriptedOracle {
    inner: Box<dyn Oracle>,
    first: Option<Model>,
    current: Option<Model>,
}

impl ScriptedOracle {
    pub(crate) fn new(inner: Box<dyn Oracle>, first: Model) -> Self {
        ScriptedOracle {
            inner,
            first: Some(first),
            current: None,
        }
    }
}

impl Oracle for ScriptedOracle {
    fn add_clause(&mut self, clause: &[Literal]) {
        self.inner.add_clause(clause);
    }

    fn solve(&mut self) -> Result<bool> {
        self.current = self.first.take();
        if self.current.is_some() {
            return Ok(true);
        }
        self.inner.solve()
    }

    fn model(&self) -> Option<Model> {
        self.current.clone().or_else(|| self.inner.model())
    }
}
