//! Status report of a finished computation.
use std::fmt::Display;
use std::time::Duration;

use tabled::{builder::Builder, grid::config::HorizontalLine, settings::Theme};

use crate::oracle::OracleKind;
use crate::solver::Algorithm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub algorithm: Algorithm,
    pub mr: bool,
    pub oracle: OracleKind,
    pub compute_model_count: usize,
    /// Only MR checks models.
    pub check_model_count: Option<usize>,
    pub cpu_time: Duration,
}

impl Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(["statistic", "value"]);
        builder.push_record(["algorithm".to_owned(), self.algorithm.to_string()]);
        builder.push_record(["mr".to_owned(), self.mr.to_string()]);
        builder.push_record(["oracle".to_owned(), self.oracle.to_string()]);
        builder.push_record([
            "compute model count".to_owned(),
            self.compute_model_count.to_string(),
        ]);
        if let Some(check_model_count) = self.check_model_count {
            builder.push_record(["check model count".to_owned(), check_model_count.to_string()]);
        }
        builder.push_record(["cpu time".to_owned(), format!("{:.2?}", self.cpu_time)]);

        let mut style = Theme::default();
        style.insert_horizontal_line(1, HorizontalLine::full('-', '-', ' ', ' '));
        let output = builder.build().with(style).to_string();
        write!(f, "{output}")
    }
}
