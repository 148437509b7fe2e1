//! Operator overload table.

use std::collections::BTreeMap;

/// Operator symbol → candidate implementation names, in priority order.
///
/// Only names are stored; they are resolved against the type catalogue and
/// the function registry when the configuration is checked, so an operator
/// may be registered before its implementation is available. Candidates are
/// appended and never removed. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorsTable {
    operators: BTreeMap<String, Vec<String>>,
}

impl OperatorsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append candidates for `operator`, creating its entry if needed.
    pub fn register<I, S>(&mut self, operator: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates = self.operators.entry(operator.to_owned()).or_default();
        for name in names {
            let name = name.into();
            if candidates.contains(&name) {
                tracing::debug!(operator, candidate = %name, "duplicate overload candidate");
            }
            candidates.push(name);
        }
    }

    /// Candidates for `operator` in registration order.
    pub fn get(&self, operator: &str) -> Option<&[String]> {
        self.operators.get(operator).map(Vec::as_slice)
    }

    pub fn contains(&self, operator: &str) -> bool {
        self.operators.contains_key(operator)
    }

    /// Operators with their candidates, operators in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.operators
            .iter()
            .map(|(op, names)| (op.as_str(), names.as_slice()))
    }

    /// Every `(operator, candidate)` pair.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(op, names)| names.iter().map(move |name| (op, name.as_str())))
    }

    /// Number of operators with at least one registration.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests;
