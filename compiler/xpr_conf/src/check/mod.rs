//! Operator overload validation.
//!
//! Every candidate registered for an operator must resolve to something
//! callable with the shape of a binary operator: two operands in, one result
//! out. Candidates resolve through two sources, and both are checked when a
//! name is present in both:
//!
//! - the type catalogue: free functions need 2 inputs, methods 3 (the
//!   receiver comes first), and exactly 1 output;
//! - the function registry: at least one overload, and every overload
//!   exactly `(2 inputs, 1 output)`.
//!
//! A catalogue entry that is not callable does not count as a resolution.

use xpr_builtin::Function;

use crate::{Config, ConfigError, ConfigResult, Tag};

impl Config {
    /// Validate every `(operator, candidate)` pair, stopping at the first
    /// violation.
    ///
    /// Pairs are visited in a fixed order (operators sorted, candidates in
    /// registration order), so the reported error is deterministic. Checking
    /// has no side effects and may be repeated.
    #[tracing::instrument(level = "debug", skip_all, fields(operators = self.operators().len()))]
    pub fn check(&self) -> ConfigResult<()> {
        for (operator, name) in self.operators().pairs() {
            self.check_candidate(operator, name)?;
        }
        tracing::debug!("operator overloads valid");
        Ok(())
    }

    /// Validate every pair and report all violations, one per failing pair.
    #[tracing::instrument(level = "debug", skip_all, fields(operators = self.operators().len()))]
    pub fn check_all(&self) -> Vec<ConfigError> {
        let errors: Vec<ConfigError> = self
            .operators()
            .pairs()
            .filter_map(|(operator, name)| self.check_candidate(operator, name).err())
            .collect();
        tracing::debug!(errors = errors.len(), "operator overloads checked");
        errors
    }

    fn check_candidate(&self, operator: &str, name: &str) -> ConfigResult<()> {
        let tag = self.types().get(name).filter(|tag| tag.is_callable());
        let func = self.functions().get(name);

        if tag.is_none() && func.is_none() {
            return Err(ConfigError::UnknownOperatorFunction {
                function: name.to_owned(),
                operator: operator.to_owned(),
            });
        }
        if let Some(tag) = tag {
            check_type(tag, name, operator)?;
        }
        if let Some(func) = func {
            check_func(func, name, operator)?;
        }
        tracing::trace!(operator, candidate = name, "overload candidate valid");
        Ok(())
    }
}

/// Shape check for a catalogue-resident candidate.
fn check_type(tag: &Tag, name: &str, operator: &str) -> ConfigResult<()> {
    // Receiver comes first for methods.
    let required_in = if tag.method { 3 } else { 2 };
    match tag.signature() {
        Some(sig) if sig.num_in() == required_in && sig.num_out() == 1 => Ok(()),
        Some(sig) => Err(ConfigError::BadSignature {
            function: name.to_owned(),
            operator: operator.to_owned(),
            signature: sig.clone(),
        }),
        // Callers only pass callable tags.
        None => Err(ConfigError::UnknownOperatorFunction {
            function: name.to_owned(),
            operator: operator.to_owned(),
        }),
    }
}

/// Shape check for a registry-resident candidate.
fn check_func(func: &Function, name: &str, operator: &str) -> ConfigResult<()> {
    if func.types.is_empty() {
        return Err(ConfigError::MissingTypes {
            function: name.to_owned(),
            operator: operator.to_owned(),
        });
    }
    match func.types.iter().find(|sig| !sig.is_binary()) {
        Some(sig) => Err(ConfigError::BadSignature {
            function: name.to_owned(),
            operator: operator.to_owned(),
            signature: sig.clone(),
        }),
        None => Ok(()),
    }
}
