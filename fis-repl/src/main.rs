use anyhow::{Context, Result};
use reedline::{DefaultPrompt, Reedline, Signal};
use std::fs;
use std::path::PathBuf;

use fis_format::{parse, serialize, MAX_INPUT_BYTES};
use fis_model::{Curve, Document, Role, Rule, SubRule, SubRuleRef, Variable};

/// Shell state: the document being edited and where it came from.
struct Session {
    doc: Document,
    path: Option<PathBuf>,
}

impl Session {
    fn fresh() -> Session {
        Session {
            doc: Document::new(""),
            path: None,
        }
    }

    fn open(&mut self, path: &str) {
        let meta = match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                println!("[Error] {}: {}", path, e);
                return;
            }
        };
        if meta.len() > MAX_INPUT_BYTES as u64 {
            println!(
                "[Error] {}: {} bytes exceeds the {} byte limit",
                path,
                meta.len(),
                MAX_INPUT_BYTES
            );
            return;
        }
        let text = match fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                println!("[Error] {}: {}", path, e);
                return;
            }
        };
        match parse(&text) {
            Ok(doc) => {
                println!(
                    "[Open] '{}': {} input(s), {} output(s), {} rule(s)",
                    doc.name(),
                    doc.inputs().len(),
                    doc.outputs().len(),
                    doc.rules().len()
                );
                self.doc = doc;
                self.path = Some(PathBuf::from(path));
            }
            Err(e) => println!("[Error] {}", e),
        }
    }

    fn save(&mut self, path: Option<&str>) {
        let target = match (path, &self.path) {
            (Some(p), _) => PathBuf::from(p),
            (None, Some(p)) => p.clone(),
            (None, None) => {
                println!("[Error] No file associated; use: save <path>");
                return;
            }
        };
        match fs::write(&target, serialize(&self.doc)) {
            Ok(()) => {
                println!("[Save] Wrote {}", target.display());
                self.path = Some(target);
            }
            Err(e) => println!("[Error] {}: {}", target.display(), e),
        }
    }

    fn show(&self) {
        let doc = &self.doc;
        println!("  Name:         {}", doc.name());
        println!("  AndMethod:    {}", doc.and_method().as_str());
        println!("  OrMethod:     {}", doc.or_method().as_str());
        println!("  ImpMethod:    {}", doc.imp_method().as_str());
        println!("  AggMethod:    {}", doc.agg_method().as_str());
        println!("  DefuzzMethod: {}", doc.defuzz_method().as_str());
        println!(
            "  {} input(s), {} output(s), {} rule(s)",
            doc.inputs().len(),
            doc.outputs().len(),
            doc.rules().len()
        );
        if let Some(p) = &self.path {
            println!("  File:         {}", p.display());
        }
    }

    fn vars(&self) {
        for role in [Role::Input, Role::Output] {
            for (i, var) in self.doc.variables(role).iter().enumerate() {
                println!(
                    "  {} {}: '{}' range [{} {}]",
                    role,
                    i + 1,
                    var.name(),
                    var.range_min(),
                    var.range_max()
                );
                for (j, mf) in var.mfs().iter().enumerate() {
                    let params: Vec<String> = mf
                        .shape()
                        .params()
                        .iter()
                        .map(|p| p.to_string())
                        .collect();
                    println!(
                        "    MF {}: '{}' {} [{}]",
                        j + 1,
                        mf.name(),
                        mf.kind().keyword(),
                        params.join(" ")
                    );
                }
            }
        }
        if self.doc.inputs().is_empty() && self.doc.outputs().is_empty() {
            println!("  (no variables)");
        }
    }

    fn rules(&self) {
        if self.doc.rules().is_empty() {
            println!("  (no rules)");
            return;
        }
        for (i, rule) in self.doc.rules().iter().enumerate() {
            println!("  {}: {}", i + 1, describe_rule(&self.doc, rule));
        }
    }

    fn plot(&self, args: &str) {
        let parts: Vec<&str> = args.split_whitespace().collect();
        let usage = "[Error] Usage: plot <input|output> <var#> <mf#>";
        let [role, var_no, mf_no] = parts.as_slice() else {
            println!("{usage}");
            return;
        };
        let role = match *role {
            "input" => Role::Input,
            "output" => Role::Output,
            _ => {
                println!("{usage}");
                return;
            }
        };
        let (Ok(var_no), Ok(mf_no)) = (var_no.parse::<usize>(), mf_no.parse::<usize>()) else {
            println!("{usage}");
            return;
        };
        let Some(var) = var_no
            .checked_sub(1)
            .and_then(|i| self.doc.variables(role).get(i))
        else {
            println!(
                "[Error] No {} variable {} (document has {})",
                role,
                var_no,
                self.doc.variables(role).len()
            );
            return;
        };
        let Some(mf) = mf_no.checked_sub(1).and_then(|i| var.mf(i)) else {
            println!(
                "[Error] No MF {} in '{}' (variable has {})",
                mf_no,
                var.name(),
                var.mfs().len()
            );
            return;
        };

        println!(
            "  '{}' of '{}' over [{} {}]",
            mf.name(),
            var.name(),
            var.range_min(),
            var.range_max()
        );
        let curve = Curve::new(mf, var.range_min(), var.range_max());
        for (x, y) in curve {
            let width = (y.clamp(0.0, 1.0) * 40.0).round() as usize;
            println!("  {:>6} | {:<40} {:.4}", x, "#".repeat(width), y);
        }
    }
}

/// Renders a rule in words, e.g.
/// `IF service IS poor AND food IS NOT rancid THEN tip IS cheap (0.5)`.
fn describe_rule(doc: &Document, rule: &Rule) -> String {
    let clause = |vars: &[Variable], subs: &[SubRule], joiner: &str| -> String {
        let parts: Vec<String> = vars
            .iter()
            .zip(subs)
            .filter_map(|(var, sub)| match sub.term {
                SubRuleRef::Unconstrained => None,
                SubRuleRef::Selects(i) => {
                    let label = var
                        .mf(i as usize)
                        .map(|mf| mf.name().to_string())
                        .unwrap_or_else(|| format!("#{}", i + 1));
                    let verb = if sub.negated { "IS NOT" } else { "IS" };
                    Some(format!("{} {} {}", var.name(), verb, label))
                }
            })
            .collect();
        if parts.is_empty() {
            "(anything)".to_string()
        } else {
            parts.join(joiner)
        }
    };

    let joiner = format!(" {} ", rule.connective());
    format!(
        "IF {} THEN {} ({})",
        clause(doc.inputs(), rule.inputs(), &joiner),
        clause(doc.outputs(), rule.outputs(), " , "),
        rule.weight()
    )
}

fn print_help() {
    println!("  new                        Start an empty document");
    println!("  open <path>                Load a .fis file");
    println!("  save [path]                Write the document back out");
    println!("  show                       Document name, methods and counts");
    println!("  vars                       List variables and their MFs");
    println!("  rules                      List rules in words");
    println!("  plot <input|output> <v> <m>  ASCII curve of one MF");
    println!("  quit                       Exit");
}

fn main() -> Result<()> {
    println!("fis shell - .fis document inspector");

    let mut session = Session::fresh();
    if let Some(path) = std::env::args().nth(1) {
        session.open(&path);
    }

    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::default();

    println!("Commands: new open save show vars rules plot help quit\n");

    loop {
        let sig = line_editor
            .read_line(&prompt)
            .context("reading shell input")?;
        match sig {
            Signal::Success(buffer) => {
                let input = buffer.trim();
                if input.is_empty() {
                    continue;
                }
                match input {
                    "quit" | "q" => break,
                    "help" | "h" => print_help(),
                    "new" => {
                        session = Session::fresh();
                        println!("[New] Empty document");
                    }
                    "show" => session.show(),
                    "vars" => session.vars(),
                    "rules" => session.rules(),
                    "save" => session.save(None),
                    _ => {
                        if let Some(path) = input.strip_prefix("open ") {
                            session.open(path.trim());
                        } else if let Some(path) = input.strip_prefix("save ") {
                            session.save(Some(path.trim()));
                        } else if let Some(args) = input.strip_prefix("plot ") {
                            session.plot(args);
                        } else {
                            println!("[Error] Unknown command '{}'; try 'help'", input);
                        }
                    }
                }
            }
            Signal::CtrlC | Signal::CtrlD => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fis_model::{Connective, MembershipFunction, MfShape};

    fn doc_with_rule() -> Document {
        let mut doc = Document::new("t");
        let mut a = Variable::new("service", Role::Input, 0.0, 10.0).unwrap();
        a.add_mf(MembershipFunction::new(
            "poor",
            MfShape::Gaussian {
                sigma: 1.5,
                mean: 0.0,
                height: 1.0,
            },
        ))
        .unwrap();
        doc.add_variable(a);
        let mut b = Variable::new("food", Role::Input, 0.0, 10.0).unwrap();
        b.add_mf(MembershipFunction::new(
            "rancid",
            MfShape::Gaussian {
                sigma: 1.5,
                mean: 0.0,
                height: 1.0,
            },
        ))
        .unwrap();
        doc.add_variable(b);
        let mut o = Variable::new("tip", Role::Output, 0.0, 30.0).unwrap();
        o.add_mf(MembershipFunction::new(
            "cheap",
            MfShape::Triangular {
                left: 0.0,
                mean: 5.0,
                right: 10.0,
                height: 1.0,
            },
        ))
        .unwrap();
        doc.add_variable(o);
        doc
    }

    #[test]
    fn rule_reads_as_sentence() {
        let mut doc = doc_with_rule();
        doc.add_rule(Rule::new(
            vec![SubRule::selects(0), SubRule::selects(0).negated()],
            vec![SubRule::selects(0)],
            0.5,
            Connective::Or,
        ))
        .unwrap();
        assert_eq!(
            describe_rule(&doc, &doc.rules()[0]),
            "IF service IS poor OR food IS NOT rancid THEN tip IS cheap (0.5)"
        );
    }

    #[test]
    fn unconstrained_terms_are_elided() {
        let mut doc = doc_with_rule();
        doc.add_rule(Rule::new(
            vec![SubRule::unconstrained(), SubRule::selects(0)],
            vec![SubRule::selects(0)],
            1.0,
            Connective::And,
        ))
        .unwrap();
        assert_eq!(
            describe_rule(&doc, &doc.rules()[0]),
            "IF food IS rancid THEN tip IS cheap (1)"
        );
    }

    #[test]
    fn fully_unconstrained_antecedent_reads_as_anything() {
        let mut doc = doc_with_rule();
        doc.add_rule(Rule::new(
            vec![SubRule::unconstrained(), SubRule::unconstrained()],
            vec![SubRule::selects(0)],
            1.0,
            Connective::And,
        ))
        .unwrap();
        assert!(describe_rule(&doc, &doc.rules()[0]).starts_with("IF (anything) THEN"));
    }
}
