//! The document: one complete FIS definition and the mutations that keep it
//! consistent.
//!
//! Alignment invariant: every rule carries exactly one input subrule per input
//! variable and one output subrule per output variable, at all times. Adding a
//! variable therefore pads every rule with an unconstrained term at the new
//! position; removing one deletes the aligned term from every rule.

use crate::error::ModelError;
use crate::rule::{Rule, SubRule};
use crate::variable::{Role, Variable};
use crate::UNNAMED;

macro_rules! method_enum {
    ($(#[$doc:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Spelling used by the `[System]` header.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_str(s: &str) -> Option<$name> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

method_enum!(
    /// AND method: how antecedents combine under the AND connective.
    AndMethod { Min => "min", Prod => "prod" }
);
method_enum!(
    /// OR method: how antecedents combine under the OR connective.
    OrMethod { Max => "max", Probor => "probor" }
);
method_enum!(
    /// Implication method.
    ImpMethod { Min => "min", Prod => "prod" }
);
method_enum!(
    /// Aggregation method.
    AggMethod { Max => "max", Sum => "sum", Probor => "probor" }
);
method_enum!(
    /// Defuzzification method.
    DefuzzMethod {
        Centroid => "centroid",
        Bisector => "bisector",
        Mom => "mom",
        Som => "som",
        Lom => "lom",
    }
);

/// One complete FIS definition. Created empty, owned by a single editing
/// session, mutated through the methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    and_method: AndMethod,
    or_method: OrMethod,
    imp_method: ImpMethod,
    agg_method: AggMethod,
    defuzz_method: DefuzzMethod,
    inputs: Vec<Variable>,
    outputs: Vec<Variable>,
    rules: Vec<Rule>,
}

impl Default for Document {
    fn default() -> Document {
        Document::new("")
    }
}

impl Document {
    /// An empty document with default methods. An empty name falls back to
    /// `"unnamed"`.
    pub fn new(name: impl Into<String>) -> Document {
        let name = name.into();
        let name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
        Document {
            name,
            and_method: AndMethod::Min,
            or_method: OrMethod::Max,
            imp_method: ImpMethod::Min,
            agg_method: AggMethod::Max,
            defuzz_method: DefuzzMethod::Centroid,
            inputs: Vec::new(),
            outputs: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
    }

    pub fn and_method(&self) -> AndMethod {
        self.and_method
    }

    pub fn or_method(&self) -> OrMethod {
        self.or_method
    }

    pub fn imp_method(&self) -> ImpMethod {
        self.imp_method
    }

    pub fn agg_method(&self) -> AggMethod {
        self.agg_method
    }

    pub fn defuzz_method(&self) -> DefuzzMethod {
        self.defuzz_method
    }

    pub fn set_and_method(&mut self, m: AndMethod) {
        self.and_method = m;
    }

    pub fn set_or_method(&mut self, m: OrMethod) {
        self.or_method = m;
    }

    pub fn set_imp_method(&mut self, m: ImpMethod) {
        self.imp_method = m;
    }

    pub fn set_agg_method(&mut self, m: AggMethod) {
        self.agg_method = m;
    }

    pub fn set_defuzz_method(&mut self, m: DefuzzMethod) {
        self.defuzz_method = m;
    }

    pub fn inputs(&self) -> &[Variable] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Variable] {
        &self.outputs
    }

    pub fn variables(&self, role: Role) -> &[Variable] {
        match role {
            Role::Input => &self.inputs,
            Role::Output => &self.outputs,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    // ─── Variable mutations (with rule cascade) ──────────────────

    /// Appends a variable under its own role. Every existing rule gains an
    /// unconstrained term at the new position.
    pub fn add_variable(&mut self, variable: Variable) {
        let role = variable.role();
        let list = self.list_mut(role);
        list.push(variable);
        let new_index = self.variables(role).len() - 1;
        for rule in &mut self.rules {
            match role {
                Role::Input => rule.insert_input(new_index, SubRule::unconstrained()),
                Role::Output => rule.insert_output(new_index, SubRule::unconstrained()),
            }
        }
    }

    /// Replaces the variable at `index` in place. Rules are untouched: the
    /// slot keeps its position, so alignment holds.
    pub fn replace_variable(
        &mut self,
        role: Role,
        index: usize,
        variable: Variable,
    ) -> Result<(), ModelError> {
        let list = self.list_mut(role);
        if index >= list.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }
        list[index] = variable;
        Ok(())
    }

    /// Removes the variable at `index` and the aligned term from every rule,
    /// preserving the order of the remaining terms.
    pub fn remove_variable(&mut self, role: Role, index: usize) -> Result<Variable, ModelError> {
        let list = self.list_mut(role);
        if index >= list.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }
        let removed = list.remove(index);
        for rule in &mut self.rules {
            match role {
                Role::Input => rule.remove_input(index),
                Role::Output => rule.remove_output(index),
            }
        }
        Ok(removed)
    }

    // ─── Rule mutations ──────────────────────────────────────────

    /// Appends a rule. Its term counts must already match the document's
    /// variable counts.
    pub fn add_rule(&mut self, rule: Rule) -> Result<(), ModelError> {
        self.check_alignment(&rule)?;
        self.rules.push(rule);
        Ok(())
    }

    pub fn replace_rule(&mut self, index: usize, rule: Rule) -> Result<(), ModelError> {
        if index >= self.rules.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        self.check_alignment(&rule)?;
        self.rules[index] = rule;
        Ok(())
    }

    pub fn remove_rule(&mut self, index: usize) -> Result<Rule, ModelError> {
        if index >= self.rules.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: self.rules.len(),
            });
        }
        Ok(self.rules.remove(index))
    }

    fn list_mut(&mut self, role: Role) -> &mut Vec<Variable> {
        match role {
            Role::Input => &mut self.inputs,
            Role::Output => &mut self.outputs,
        }
    }

    fn check_alignment(&self, rule: &Rule) -> Result<(), ModelError> {
        if rule.inputs().len() != self.inputs.len() {
            return Err(ModelError::RuleArity {
                role: Role::Input,
                expected: self.inputs.len(),
                found: rule.inputs().len(),
            });
        }
        if rule.outputs().len() != self.outputs.len() {
            return Err(ModelError::RuleArity {
                role: Role::Output,
                expected: self.outputs.len(),
                found: rule.outputs().len(),
            });
        }
        Ok(())
    }
}
