//! Rules and the positional terms they are built from.

use std::fmt;

/// How a rule combines its antecedent conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    /// Integer token used by the `[Rules]` block: `1` = AND, `2` = OR.
    pub fn token(self) -> u8 {
        match self {
            Connective::And => 1,
            Connective::Or => 2,
        }
    }

    pub fn from_token(token: u8) -> Option<Connective> {
        match token {
            1 => Some(Connective::And),
            2 => Some(Connective::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => f.write_str("AND"),
            Connective::Or => f.write_str("OR"),
        }
    }
}

/// What one term of a rule says about its variable: nothing, or "is the
/// membership function at this 0-based position". The reference is positional;
/// it does not own the membership function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubRuleRef {
    Unconstrained,
    Selects(u32),
}

/// One variable's contribution to a rule, aligned by position with the
/// document's variable list of the matching role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubRule {
    pub term: SubRuleRef,
    /// Negation is meaningful only for a selecting term; an unconstrained
    /// term's flag is not representable in the file format.
    pub negated: bool,
}

impl SubRule {
    pub fn unconstrained() -> SubRule {
        SubRule {
            term: SubRuleRef::Unconstrained,
            negated: false,
        }
    }

    pub fn selects(index: u32) -> SubRule {
        SubRule {
            term: SubRuleRef::Selects(index),
            negated: false,
        }
    }

    pub fn negated(mut self) -> SubRule {
        self.negated = true;
        self
    }
}

/// A weighted rule: one subrule per input variable, one per output variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    inputs: Vec<SubRule>,
    outputs: Vec<SubRule>,
    weight: f64,
    connective: Connective,
}

impl Rule {
    pub fn new(
        inputs: Vec<SubRule>,
        outputs: Vec<SubRule>,
        weight: f64,
        connective: Connective,
    ) -> Rule {
        Rule {
            inputs,
            outputs,
            weight,
            connective,
        }
    }

    pub fn inputs(&self) -> &[SubRule] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[SubRule] {
        &self.outputs
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn set_connective(&mut self, connective: Connective) {
        self.connective = connective;
    }

    pub(crate) fn insert_input(&mut self, index: usize, sub: SubRule) {
        self.inputs.insert(index, sub);
    }

    pub(crate) fn insert_output(&mut self, index: usize, sub: SubRule) {
        self.outputs.insert(index, sub);
    }

    pub(crate) fn remove_input(&mut self, index: usize) {
        self.inputs.remove(index);
    }

    pub(crate) fn remove_output(&mut self, index: usize) {
        self.outputs.remove(index);
    }
}
