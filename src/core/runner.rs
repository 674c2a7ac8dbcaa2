use crate::config::RunConfig;
use crate::domain::calculator::{format_number, Calculator};
use crate::domain::greeting::greet_to;
use crate::utils::error::Result;
use std::io::Write;

pub struct Runner {
    config: RunConfig,
    calculator: Calculator,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            calculator: Calculator::new(),
        }
    }

    /// Writes the greeting line, then the sum line, and returns the sum.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<f64> {
        tracing::debug!("Greeting {:?}", self.config.name);
        greet_to(out, &self.config.name)?;

        let sum = self.calculator.add(self.config.lhs, self.config.rhs);
        tracing::debug!("{} + {} = {}", self.config.lhs, self.config.rhs, sum);
        writeln!(out, "{}", format_number(sum))?;

        out.flush()?;
        Ok(sum)
    }
}
