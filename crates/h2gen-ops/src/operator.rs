//! Ordered coefficient mappings from source id to real coefficient.

use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A two-body operator as an ordered linear combination of sources.
///
/// Term order is preserved exactly as built, because the emission order of
/// `add-source` lines is part of the external protocol. Adding a term for
/// an id already present merges coefficients in place; genuinely new ids
/// append at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Operator {
    terms: Vec<(String, f64)>,
}

impl Operator {
    /// Creates an empty operator.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a single-term operator.
    pub fn single(id: impl Into<String>, coefficient: f64) -> Self {
        Self {
            terms: vec![(id.into(), coefficient)],
        }
    }

    /// Builder-style insertion of a term.
    pub fn with_term(mut self, id: impl Into<String>, coefficient: f64) -> Self {
        self.add_term(id, coefficient);
        self
    }

    /// Adds a coefficient, merging with any existing term for the id.
    pub fn add_term(&mut self, id: impl Into<String>, coefficient: f64) {
        let id = id.into();
        if let Some(term) = self.terms.iter_mut().find(|(known, _)| *known == id) {
            term.1 += coefficient;
        } else {
            self.terms.push((id, coefficient));
        }
    }

    /// Returns the coefficient for the given id, if present.
    pub fn coefficient(&self, id: &str) -> Option<f64> {
        self.terms
            .iter()
            .find(|(known, _)| known == id)
            .map(|(_, coefficient)| *coefficient)
    }

    /// Iterates terms in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.terms
            .iter()
            .map(|(id, coefficient)| (id.as_str(), *coefficient))
    }

    /// Iterates the source ids in emission order.
    pub fn source_ids(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(id, _)| id.as_str())
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true when the operator has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the operator with every coefficient scaled.
    pub fn scaled(mut self, factor: f64) -> Self {
        for term in &mut self.terms {
            term.1 *= factor;
        }
        self
    }
}

impl Add for Operator {
    type Output = Operator;

    fn add(mut self, rhs: Operator) -> Operator {
        for (id, coefficient) in rhs.terms {
            self.add_term(id, coefficient);
        }
        self
    }
}

impl Mul<f64> for Operator {
    type Output = Operator;

    fn mul(self, factor: f64) -> Operator {
        self.scaled(factor)
    }
}

impl FromIterator<(String, f64)> for Operator {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut operator = Operator::new();
        for (id, coefficient) in iter {
            operator.add_term(id, coefficient);
        }
        operator
    }
}
