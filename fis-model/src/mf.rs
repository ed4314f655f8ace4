//! Membership function shapes.
//!
//! Each family keeps its parameters as named fields, so a parameter vector of
//! the wrong length is unrepresentable. The flat-vector view used by the file
//! format goes through [`MfShape::from_params`] / [`MfShape::params`] at the
//! format boundary only.

use crate::UNNAMED;

/// Membership function family discriminant, carrying the `.fis` keyword and
/// the fixed parameter count of each family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MfKind {
    Gaussian,
    GaussianB,
    Triangular,
    Trapezoidal,
}

impl MfKind {
    pub const ALL: [MfKind; 4] = [
        MfKind::Gaussian,
        MfKind::GaussianB,
        MfKind::Triangular,
        MfKind::Trapezoidal,
    ];

    /// Keyword used by the text format.
    pub fn keyword(self) -> &'static str {
        match self {
            MfKind::Gaussian => "gaussmf",
            MfKind::GaussianB => "gaussbmf",
            MfKind::Triangular => "trimf",
            MfKind::Trapezoidal => "trapmf",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<MfKind> {
        MfKind::ALL.into_iter().find(|k| k.keyword() == keyword)
    }

    /// Number of parameters the family takes.
    pub fn arity(self) -> usize {
        match self {
            MfKind::Gaussian => 3,
            MfKind::GaussianB | MfKind::Trapezoidal => 5,
            MfKind::Triangular => 4,
        }
    }
}

/// Shape and parameters of one membership function.
#[derive(Debug, Clone, PartialEq)]
pub enum MfShape {
    Gaussian {
        sigma: f64,
        mean: f64,
        height: f64,
    },
    GaussianB {
        left_sigma: f64,
        left_mean: f64,
        right_sigma: f64,
        right_mean: f64,
        height: f64,
    },
    Triangular {
        left: f64,
        mean: f64,
        right: f64,
        height: f64,
    },
    Trapezoidal {
        left_foot: f64,
        left_shoulder: f64,
        right_shoulder: f64,
        right_foot: f64,
        height: f64,
    },
}

impl MfShape {
    pub fn kind(&self) -> MfKind {
        match self {
            MfShape::Gaussian { .. } => MfKind::Gaussian,
            MfShape::GaussianB { .. } => MfKind::GaussianB,
            MfShape::Triangular { .. } => MfKind::Triangular,
            MfShape::Trapezoidal { .. } => MfKind::Trapezoidal,
        }
    }

    /// Builds a shape from the flat parameter vector of the file format.
    /// Returns `None` when the vector length does not match the family arity.
    pub fn from_params(kind: MfKind, params: &[f64]) -> Option<MfShape> {
        if params.len() != kind.arity() {
            return None;
        }
        Some(match kind {
            MfKind::Gaussian => MfShape::Gaussian {
                sigma: params[0],
                mean: params[1],
                height: params[2],
            },
            MfKind::GaussianB => MfShape::GaussianB {
                left_sigma: params[0],
                left_mean: params[1],
                right_sigma: params[2],
                right_mean: params[3],
                height: params[4],
            },
            MfKind::Triangular => MfShape::Triangular {
                left: params[0],
                mean: params[1],
                right: params[2],
                height: params[3],
            },
            MfKind::Trapezoidal => MfShape::Trapezoidal {
                left_foot: params[0],
                left_shoulder: params[1],
                right_shoulder: params[2],
                right_foot: params[3],
                height: params[4],
            },
        })
    }

    /// Flat parameter vector in file-format order.
    pub fn params(&self) -> Vec<f64> {
        match *self {
            MfShape::Gaussian {
                sigma,
                mean,
                height,
            } => vec![sigma, mean, height],
            MfShape::GaussianB {
                left_sigma,
                left_mean,
                right_sigma,
                right_mean,
                height,
            } => vec![left_sigma, left_mean, right_sigma, right_mean, height],
            MfShape::Triangular {
                left,
                mean,
                right,
                height,
            } => vec![left, mean, right, height],
            MfShape::Trapezoidal {
                left_foot,
                left_shoulder,
                right_shoulder,
                right_foot,
                height,
            } => vec![
                left_foot,
                left_shoulder,
                right_shoulder,
                right_foot,
                height,
            ],
        }
    }
}

/// A named membership function: one labelled curve within a variable.
#[derive(Debug, Clone, PartialEq)]
pub struct MembershipFunction {
    name: String,
    shape: MfShape,
}

impl MembershipFunction {
    /// An empty name falls back to `"unnamed"`.
    pub fn new(name: impl Into<String>, shape: MfShape) -> MembershipFunction {
        let name = name.into();
        let name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
        MembershipFunction { name, shape }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &MfShape {
        &self.shape
    }

    pub fn kind(&self) -> MfKind {
        self.shape.kind()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.name = if name.is_empty() {
            UNNAMED.to_string()
        } else {
            name
        };
    }
}
