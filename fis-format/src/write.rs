//! `.fis` serializer.
//!
//! The writer emits the exact byte layout the parser accepts, recomputing the
//! declared counts from the document. Serializing never fails: every document
//! the model can represent has a text form.

use std::fmt::Write;

use fis_model::{Document, Rule, SubRule, SubRuleRef, Variable, SYSTEM_VERSION};

/// Renders a document as `.fis` text.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();

    out.push_str("[System]\n");
    let _ = writeln!(out, "Name='{}'", doc.name());
    out.push_str("Type='mamdani'\n");
    let _ = writeln!(out, "Version={}", fmt_num(SYSTEM_VERSION));
    let _ = writeln!(out, "NumInputs={}", doc.inputs().len());
    let _ = writeln!(out, "NumOutputs={}", doc.outputs().len());
    let _ = writeln!(out, "NumRules={}", doc.rules().len());
    let _ = writeln!(out, "AndMethod='{}'", doc.and_method().as_str());
    let _ = writeln!(out, "OrMethod='{}'", doc.or_method().as_str());
    let _ = writeln!(out, "ImpMethod='{}'", doc.imp_method().as_str());
    let _ = writeln!(out, "AggMethod='{}'", doc.agg_method().as_str());
    let _ = writeln!(out, "DefuzzMethod='{}'", doc.defuzz_method().as_str());
    out.push('\n');

    for (i, var) in doc.inputs().iter().enumerate() {
        write_variable(&mut out, "Input", i + 1, var);
    }
    for (i, var) in doc.outputs().iter().enumerate() {
        write_variable(&mut out, "Output", i + 1, var);
    }

    if !doc.rules().is_empty() {
        out.push_str("[Rules]\n");
        for rule in doc.rules() {
            write_rule(&mut out, rule);
        }
    }

    out
}

fn write_variable(out: &mut String, role: &str, index: usize, var: &Variable) {
    let _ = writeln!(out, "[{role}{index}]");
    let _ = writeln!(out, "Name='{}'", var.name());
    let _ = writeln!(
        out,
        "Range=[{} {}]",
        fmt_num(var.range_min()),
        fmt_num(var.range_max())
    );
    let _ = writeln!(out, "NumMFs={}", var.mfs().len());
    for (j, mf) in var.mfs().iter().enumerate() {
        let params: Vec<String> = mf.shape().params().iter().map(|&p| fmt_num(p)).collect();
        let _ = writeln!(
            out,
            "MF{}='{}':'{}',[{}]",
            j + 1,
            mf.name(),
            mf.kind().keyword(),
            params.join(" ")
        );
    }
    out.push('\n');
}

// Each output token carries a trailing space, so a single-output rule reads
// `1, 2 (1.0) : 1`.
fn write_rule(out: &mut String, rule: &Rule) {
    let inputs: Vec<String> = rule.inputs().iter().map(rule_token).collect();
    out.push_str(&inputs.join(" "));
    out.push(',');
    for sub in rule.outputs() {
        out.push(' ');
        out.push_str(&rule_token(sub));
    }
    let _ = writeln!(
        out,
        " ({}) : {}",
        fmt_num(rule.weight()),
        rule.connective().token()
    );
}

/// Signed term token: magnitude is the 1-based index (0 when unconstrained),
/// sign is negation. An unconstrained term writes `0` and drops its negation
/// flag, which the token cannot carry.
fn rule_token(sub: &SubRule) -> String {
    match sub.term {
        SubRuleRef::Unconstrained => "0".to_string(),
        SubRuleRef::Selects(index) => {
            let magnitude = index as i64 + 1;
            if sub.negated {
                (-magnitude).to_string()
            } else {
                magnitude.to_string()
            }
        }
    }
}

/// Decimal rendering with a forced fractional part, so whole values come out
/// as `1.0` rather than `1`. Non-integral values keep their shortest exact
/// form; `f64` Display never produces an exponent.
fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}
