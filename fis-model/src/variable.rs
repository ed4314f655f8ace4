//! Variables: named, ranged collections of membership functions.

use std::fmt;

use crate::error::ModelError;
use crate::mf::MembershipFunction;
use crate::UNNAMED;

/// Whether a variable feeds the system or is produced by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Input => f.write_str("input"),
            Role::Output => f.write_str("output"),
        }
    }
}

/// A named variable over a numeric range. The order of its membership
/// functions is significant: it defines the 1-based index rules and the file
/// format refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    role: Role,
    range_min: f64,
    range_max: f64,
    mfs: Vec<MembershipFunction>,
}

impl Variable {
    /// Fails with [`ModelError::InvalidRange`] unless `min < max`. An empty
    /// name falls back to `"unnamed"`.
    pub fn new(
        name: impl Into<String>,
        role: Role,
        range_min: f64,
        range_max: f64,
    ) -> Result<Variable, ModelError> {
        if !(range_min < range_max) {
            return Err(ModelError::InvalidRange {
                min: range_min,
                max: range_max,
            });
        }
        let name = name.into();
        let name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
        Ok(Variable {
            name,
            role,
            range_min,
            range_max,
            mfs: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn range_min(&self) -> f64 {
        self.range_min
    }

    pub fn range_max(&self) -> f64 {
        self.range_max
    }

    pub fn mfs(&self) -> &[MembershipFunction] {
        &self.mfs
    }

    pub fn mf(&self, index: usize) -> Option<&MembershipFunction> {
        self.mfs.get(index)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
    }

    /// Appends a membership function. The name must not already be taken
    /// within this variable.
    pub fn add_mf(&mut self, mf: MembershipFunction) -> Result<(), ModelError> {
        self.check_name_free(mf.name(), None)?;
        self.mfs.push(mf);
        Ok(())
    }

    /// Replaces the membership function at `index` in place. The replacement
    /// name may collide only with the slot being replaced.
    pub fn replace_mf(&mut self, index: usize, mf: MembershipFunction) -> Result<(), ModelError> {
        self.check_index(index)?;
        self.check_name_free(mf.name(), Some(index))?;
        self.mfs[index] = mf;
        Ok(())
    }

    /// Removes the membership function at `index`. Rule indexes are not
    /// rewritten here; realigning rules is the editing surface's job.
    pub fn remove_mf(&mut self, index: usize) -> Result<MembershipFunction, ModelError> {
        self.check_index(index)?;
        Ok(self.mfs.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<(), ModelError> {
        if index >= self.mfs.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: self.mfs.len(),
            });
        }
        Ok(())
    }

    fn check_name_free(&self, name: &str, allow_at: Option<usize>) -> Result<(), ModelError> {
        for (i, mf) in self.mfs.iter().enumerate() {
            if Some(i) != allow_at && mf.name() == name {
                return Err(ModelError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}
