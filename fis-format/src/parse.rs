// Line-oriented parser/validator for the `.fis` text format.
//
// Layout validated against the grammar:
//
//   document → [System] header-keys blank
//              ([Input k] var-block blank)*     k sequential from 1
//              ([Output k] var-block blank)*    k sequential from 1
//              ([Rules] rule-line*)?
//   var-block → Name='..' Range=[min max] NumMFs=n (MF j='..':'kw',[p..])^n
//   rule-line → i1 i2 … , o1 o2 … (weight) : connective
//
// Validation is a single pass; the first violation aborts with a diagnostic
// carrying the 1-based line number. The document is rebuilt through fis-model
// constructors, so a successful parse satisfies every model invariant.

use thiserror::Error;

use fis_model::{
    AggMethod, AndMethod, Connective, DefuzzMethod, Document, ImpMethod, MembershipFunction,
    MfKind, MfShape, ModelError, OrMethod, Role, Rule, SubRule, SubRuleRef, Variable,
};

use crate::lexer::{lex_line, Token};

/// Inputs above this size are rejected before any line is examined.
pub const MAX_INPUT_BYTES: usize = 1 << 20;

/// Why a `.fis` text was rejected. Every variant names the offending line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("malformed [System] header (line {line}): {reason}")]
    MalformedSystemHeader { line: usize, reason: String },

    #[error("malformed {role} variable block {index} (line {line}): {reason}")]
    MalformedVariableBlock {
        role: Role,
        index: usize,
        line: usize,
        reason: String,
    },

    #[error("malformed rule (line {line}): {reason}")]
    MalformedRuleLine { line: usize, reason: String },

    #[error("unsupported membership function type '{name}' (line {line}); expected gaussmf, gaussbmf, trimf or trapmf")]
    UnsupportedMembershipFunctionType { name: String, line: usize },

    #[error("rule declares {found} terms where {expected} are required (line {line})")]
    RuleArityMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    #[error("expected a number, found '{token}' (line {line})")]
    NumberParse { token: String, line: usize },

    #[error("input is {size} bytes; refusing to parse more than {limit}")]
    InputTooLarge { size: usize, limit: usize },
}

/// Parses a complete `.fis` document. No partial document is ever returned:
/// the first structural violation aborts the parse.
pub fn parse(text: &str) -> Result<Document, FormatError> {
    if text.len() > MAX_INPUT_BYTES {
        return Err(FormatError::InputTooLarge {
            size: text.len(),
            limit: MAX_INPUT_BYTES,
        });
    }
    Parser::new(text).parse_document()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    System,
    Rules,
    Input(usize),
    Output(usize),
}

/// `[System]`, `[Rules]`, `[Input3]`, `[Output1]`, or not a section line.
fn section_of(line: &str) -> Option<Section> {
    let toks = lex_line(line)?;
    match toks.as_slice() {
        [Token::LBracket, Token::Ident(name), Token::RBracket] => match *name {
            "System" => Some(Section::System),
            "Rules" => Some(Section::Rules),
            other => {
                if let Some(k) = other.strip_prefix("Input") {
                    k.parse().ok().map(Section::Input)
                } else if let Some(k) = other.strip_prefix("Output") {
                    k.parse().ok().map(Section::Output)
                } else {
                    None
                }
            }
        },
        _ => None,
    }
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Parser<'a> {
        Parser {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    // ─── Line cursor ─────────────────────────────────────────────

    fn peek_line(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// 1-based number of the line `peek_line` would return; one past the last
    /// line at end of input.
    fn line_no(&self) -> usize {
        self.pos + 1
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some((self.pos, line))
    }

    fn skip_blank_lines(&mut self) {
        while matches!(self.peek_line(), Some(l) if l.trim().is_empty()) {
            self.pos += 1;
        }
    }

    fn next_nonblank_line(&mut self) -> Option<(usize, &'a str)> {
        self.skip_blank_lines();
        self.next_line()
    }

    // ─── Document ────────────────────────────────────────────────

    fn parse_document(mut self) -> Result<Document, FormatError> {
        let mut doc = self.parse_header()?;
        let mut inputs_seen = 0usize;
        let mut outputs_seen = 0usize;

        loop {
            self.skip_blank_lines();
            let Some(line) = self.peek_line() else {
                // A document with no [Rules] block simply has no rules.
                return Ok(doc);
            };
            let line_no = self.line_no();

            match section_of(line) {
                Some(Section::Input(k)) => {
                    if outputs_seen > 0 {
                        return Err(FormatError::MalformedVariableBlock {
                            role: Role::Input,
                            index: k,
                            line: line_no,
                            reason: "input blocks must precede output blocks".into(),
                        });
                    }
                    if k != inputs_seen + 1 {
                        return Err(FormatError::MalformedVariableBlock {
                            role: Role::Input,
                            index: k,
                            line: line_no,
                            reason: format!("expected [Input{}]", inputs_seen + 1),
                        });
                    }
                    let v = self.parse_variable_block(Role::Input, k)?;
                    doc.add_variable(v);
                    inputs_seen += 1;
                }
                Some(Section::Output(k)) => {
                    if k != outputs_seen + 1 {
                        return Err(FormatError::MalformedVariableBlock {
                            role: Role::Output,
                            index: k,
                            line: line_no,
                            reason: format!("expected [Output{}]", outputs_seen + 1),
                        });
                    }
                    let v = self.parse_variable_block(Role::Output, k)?;
                    doc.add_variable(v);
                    outputs_seen += 1;
                }
                Some(Section::Rules) => {
                    self.next_line();
                    self.parse_rules(&mut doc)?;
                    return Ok(doc);
                }
                Some(Section::System) | None => {
                    let (role, index) = if outputs_seen > 0 {
                        (Role::Output, outputs_seen + 1)
                    } else {
                        (Role::Input, inputs_seen + 1)
                    };
                    return Err(FormatError::MalformedVariableBlock {
                        role,
                        index,
                        line: line_no,
                        reason: "expected '[Input k]', '[Output k]' or '[Rules]'".into(),
                    });
                }
            }
        }
    }

    // ─── [System] header ─────────────────────────────────────────

    fn parse_header(&mut self) -> Result<Document, FormatError> {
        self.skip_blank_lines();
        let line_no = self.line_no();
        match self.next_line() {
            Some((_, line)) if section_of(line) == Some(Section::System) => {}
            _ => {
                return Err(FormatError::MalformedSystemHeader {
                    line: line_no,
                    reason: "expected [System] header".into(),
                })
            }
        }

        let name = self.header_quoted("Name")?.to_string();
        // Type and Version are fixed by the writer; their values are checked
        // for shape only.
        self.header_quoted("Type")?;
        self.header_float("Version")?;
        // Declared counts are syntax-checked but not cross-checked against
        // the block counts that follow.
        self.header_integer("NumInputs")?;
        self.header_integer("NumOutputs")?;
        self.header_integer("NumRules")?;

        let mut doc = Document::new(name);

        let v = self.header_quoted("AndMethod")?;
        doc.set_and_method(
            AndMethod::from_str(v).ok_or_else(|| self.header_err(format!("unknown AndMethod '{v}'")))?,
        );
        let v = self.header_quoted("OrMethod")?;
        doc.set_or_method(
            OrMethod::from_str(v).ok_or_else(|| self.header_err(format!("unknown OrMethod '{v}'")))?,
        );
        let v = self.header_quoted("ImpMethod")?;
        doc.set_imp_method(
            ImpMethod::from_str(v).ok_or_else(|| self.header_err(format!("unknown ImpMethod '{v}'")))?,
        );
        let v = self.header_quoted("AggMethod")?;
        doc.set_agg_method(
            AggMethod::from_str(v).ok_or_else(|| self.header_err(format!("unknown AggMethod '{v}'")))?,
        );
        let v = self.header_quoted("DefuzzMethod")?;
        doc.set_defuzz_method(
            DefuzzMethod::from_str(v)
                .ok_or_else(|| self.header_err(format!("unknown DefuzzMethod '{v}'")))?,
        );

        Ok(doc)
    }

    /// Error on the line most recently consumed.
    fn header_err(&self, reason: String) -> FormatError {
        FormatError::MalformedSystemHeader {
            line: self.pos,
            reason,
        }
    }

    fn header_line(&mut self, key: &str) -> Result<(usize, Vec<Token<'a>>), FormatError> {
        let line_no = self.line_no();
        let Some((_, line)) = self.next_line() else {
            return Err(FormatError::MalformedSystemHeader {
                line: line_no,
                reason: format!("missing {key}"),
            });
        };
        let toks = lex_line(line).ok_or_else(|| FormatError::MalformedSystemHeader {
            line: line_no,
            reason: format!("unrecognized characters in {key} line"),
        })?;
        Ok((line_no, toks))
    }

    fn header_quoted(&mut self, key: &str) -> Result<&'a str, FormatError> {
        let (line_no, toks) = self.header_line(key)?;
        match toks.as_slice() {
            [Token::Ident(k), Token::Equals, Token::Quoted(v)] if *k == key => Ok(*v),
            _ => Err(FormatError::MalformedSystemHeader {
                line: line_no,
                reason: format!("expected {key}='<value>'"),
            }),
        }
    }

    fn header_number(&mut self, key: &str) -> Result<(usize, &'a str), FormatError> {
        let (line_no, toks) = self.header_line(key)?;
        match toks.as_slice() {
            [Token::Ident(k), Token::Equals, Token::Number(n)] if *k == key => Ok((line_no, *n)),
            _ => Err(FormatError::MalformedSystemHeader {
                line: line_no,
                reason: format!("expected {key}=<number>"),
            }),
        }
    }

    fn header_float(&mut self, key: &str) -> Result<f64, FormatError> {
        let (line_no, raw) = self.header_number(key)?;
        parse_f64(raw, line_no)
    }

    fn header_integer(&mut self, key: &str) -> Result<usize, FormatError> {
        let (line_no, raw) = self.header_number(key)?;
        parse_usize(raw, line_no)
    }

    // ─── Variable blocks ─────────────────────────────────────────

    fn parse_variable_block(&mut self, role: Role, index: usize) -> Result<Variable, FormatError> {
        // Section line was peeked by the caller.
        self.next_line();

        let (line_no, toks) = self.block_line(role, index, "Name")?;
        let name = match toks.as_slice() {
            [Token::Ident("Name"), Token::Equals, Token::Quoted(v)] => *v,
            _ => {
                return Err(block_err(role, index, line_no, "expected Name='<value>'".into()));
            }
        };

        let (line_no, toks) = self.block_line(role, index, "Range")?;
        let (min, max) = match toks.as_slice() {
            [Token::Ident("Range"), Token::Equals, Token::LBracket, Token::Number(a), Token::Number(b), Token::RBracket] => {
                (parse_f64(a, line_no)?, parse_f64(b, line_no)?)
            }
            _ => {
                return Err(block_err(
                    role,
                    index,
                    line_no,
                    "expected Range=[<min> <max>]".into(),
                ));
            }
        };

        let (line_no, toks) = self.block_line(role, index, "NumMFs")?;
        let num_mfs = match toks.as_slice() {
            [Token::Ident("NumMFs"), Token::Equals, Token::Number(n)] => {
                parse_usize(n, line_no)?
            }
            _ => {
                return Err(block_err(role, index, line_no, "expected NumMFs=<count>".into()));
            }
        };

        // Ranges are re-validated on load; a file-sourced document satisfies
        // the same invariants as an editor-built one.
        let mut variable = Variable::new(name, role, min, max)
            .map_err(|e| block_err(role, index, line_no, e.to_string()))?;

        for j in 1..=num_mfs {
            let key = format!("MF{j}");
            let (line_no, toks) = self.block_line(role, index, &key)?;
            let (found_key, mf_name, keyword, params) = match toks.as_slice() {
                [Token::Ident(k), Token::Equals, Token::Quoted(name), Token::Colon, Token::Quoted(kw), Token::Comma, Token::LBracket, rest @ ..] => {
                    let Some((Token::RBracket, nums)) = rest.split_last() else {
                        return Err(block_err(
                            role,
                            index,
                            line_no,
                            format!("unterminated parameter list in {key}"),
                        ));
                    };
                    let mut params = Vec::with_capacity(nums.len());
                    for t in nums {
                        let Token::Number(n) = t else {
                            return Err(block_err(
                                role,
                                index,
                                line_no,
                                format!("non-numeric parameter in {key}"),
                            ));
                        };
                        params.push(parse_f64(n, line_no)?);
                    }
                    (*k, *name, *kw, params)
                }
                _ => {
                    return Err(block_err(
                        role,
                        index,
                        line_no,
                        format!("expected {key}='<name>':'<type>',[<params>]"),
                    ));
                }
            };

            if found_key != key {
                return Err(block_err(
                    role,
                    index,
                    line_no,
                    format!("expected {key}, found {found_key}"),
                ));
            }
            let kind = MfKind::from_keyword(keyword).ok_or_else(|| {
                FormatError::UnsupportedMembershipFunctionType {
                    name: keyword.to_string(),
                    line: line_no,
                }
            })?;
            let shape = MfShape::from_params(kind, &params).ok_or_else(|| {
                block_err(
                    role,
                    index,
                    line_no,
                    format!(
                        "'{}' takes {} parameters, found {}",
                        kind.keyword(),
                        kind.arity(),
                        params.len()
                    ),
                )
            })?;
            variable
                .add_mf(MembershipFunction::new(mf_name, shape))
                .map_err(|e| block_err(role, index, line_no, e.to_string()))?;
        }

        Ok(variable)
    }

    fn block_line(
        &mut self,
        role: Role,
        index: usize,
        key: &str,
    ) -> Result<(usize, Vec<Token<'a>>), FormatError> {
        let line_no = self.line_no();
        let Some((_, line)) = self.next_line() else {
            return Err(block_err(
                role,
                index,
                line_no,
                format!("unexpected end of file, missing {key}"),
            ));
        };
        let toks = lex_line(line).ok_or_else(|| {
            block_err(
                role,
                index,
                line_no,
                format!("unrecognized characters in {key} line"),
            )
        })?;
        Ok((line_no, toks))
    }

    // ─── [Rules] block ───────────────────────────────────────────

    fn parse_rules(&mut self, doc: &mut Document) -> Result<(), FormatError> {
        while let Some((line_no, line)) = self.next_nonblank_line() {
            let rule = parse_rule_line(doc, line_no, line)?;
            doc.add_rule(rule).map_err(|e| match e {
                ModelError::RuleArity {
                    expected, found, ..
                } => FormatError::RuleArityMismatch {
                    expected,
                    found,
                    line: line_no,
                },
                other => FormatError::MalformedRuleLine {
                    line: line_no,
                    reason: other.to_string(),
                },
            })?;
        }
        Ok(())
    }
}

fn block_err(role: Role, index: usize, line: usize, reason: String) -> FormatError {
    FormatError::MalformedVariableBlock {
        role,
        index,
        line,
        reason,
    }
}

fn parse_f64(raw: &str, line: usize) -> Result<f64, FormatError> {
    raw.parse().map_err(|_| FormatError::NumberParse {
        token: raw.to_string(),
        line,
    })
}

fn parse_usize(raw: &str, line: usize) -> Result<usize, FormatError> {
    raw.parse().map_err(|_| FormatError::NumberParse {
        token: raw.to_string(),
        line,
    })
}

/// One `[Rules]` line: `i1 i2 … , o1 o2 … (weight) : connective`.
fn parse_rule_line(doc: &Document, line_no: usize, line: &str) -> Result<Rule, FormatError> {
    let mal = |reason: String| FormatError::MalformedRuleLine {
        line: line_no,
        reason,
    };

    let toks = lex_line(line).ok_or_else(|| mal("unrecognized characters".into()))?;
    let mut i = 0;

    let mut input_toks: Vec<&str> = Vec::new();
    while let Some(Token::Number(n)) = toks.get(i) {
        input_toks.push(n);
        i += 1;
    }
    match toks.get(i) {
        Some(Token::Comma) => i += 1,
        _ => return Err(mal("expected ',' between input and output terms".into())),
    }

    let mut output_toks: Vec<&str> = Vec::new();
    while let Some(Token::Number(n)) = toks.get(i) {
        output_toks.push(n);
        i += 1;
    }

    let weight = match (toks.get(i), toks.get(i + 1), toks.get(i + 2)) {
        (Some(Token::LParen), Some(Token::Number(w)), Some(Token::RParen)) => {
            i += 3;
            parse_f64(w, line_no)?
        }
        _ => return Err(mal("expected '(<weight>)'".into())),
    };

    let connective = match (toks.get(i), toks.get(i + 1)) {
        (Some(Token::Colon), Some(Token::Number(c))) => {
            i += 2;
            let token: u8 = c
                .parse()
                .map_err(|_| mal(format!("connective must be 1 (AND) or 2 (OR), found '{c}'")))?;
            Connective::from_token(token)
                .ok_or_else(|| mal(format!("connective must be 1 (AND) or 2 (OR), found '{c}'")))?
        }
        _ => return Err(mal("expected ': <connective>'".into())),
    };

    if i != toks.len() {
        return Err(mal("trailing content after connective".into()));
    }

    // Arity before index resolution, so a short line reports the count
    // mismatch rather than a spurious index error.
    if input_toks.len() != doc.inputs().len() {
        return Err(FormatError::RuleArityMismatch {
            expected: doc.inputs().len(),
            found: input_toks.len(),
            line: line_no,
        });
    }
    if output_toks.len() != doc.outputs().len() {
        return Err(FormatError::RuleArityMismatch {
            expected: doc.outputs().len(),
            found: output_toks.len(),
            line: line_no,
        });
    }

    let mut inputs = Vec::with_capacity(input_toks.len());
    for (tok, var) in input_toks.iter().zip(doc.inputs()) {
        inputs.push(subrule_from_token(tok, var, line_no)?);
    }
    let mut outputs = Vec::with_capacity(output_toks.len());
    for (tok, var) in output_toks.iter().zip(doc.outputs()) {
        outputs.push(subrule_from_token(tok, var, line_no)?);
    }

    Ok(Rule::new(inputs, outputs, weight, connective))
}

/// Sign carries negation; magnitude 0 is "unconstrained", otherwise a 1-based
/// membership-function index validated against the owning variable.
fn subrule_from_token(tok: &str, var: &Variable, line_no: usize) -> Result<SubRule, FormatError> {
    let mal = |reason: String| FormatError::MalformedRuleLine {
        line: line_no,
        reason,
    };

    let negated = tok.starts_with('-');
    let magnitude: u32 = tok
        .trim_start_matches('-')
        .parse()
        .map_err(|_| mal(format!("term index '{tok}' is not an integer")))?;

    let term = if magnitude == 0 {
        SubRuleRef::Unconstrained
    } else {
        let index = magnitude - 1;
        if index as usize >= var.mfs().len() {
            return Err(mal(format!(
                "term selects membership function {} of variable '{}', which has only {}",
                magnitude,
                var.name(),
                var.mfs().len()
            )));
        }
        SubRuleRef::Selects(index)
    };

    Ok(SubRule { term, negated })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
[System]
Name='tipper'
Type='mamdani'
Version=2.0
NumInputs=1
NumOutputs=1
NumRules=1
AndMethod='min'
OrMethod='max'
ImpMethod='min'
AggMethod='max'
DefuzzMethod='centroid'
";

    fn one_var(role: &str, k: usize) -> String {
        format!(
            "[{role}{k}]\nName='v{k}'\nRange=[0.0 10.0]\nNumMFs=1\nMF1='low':'gaussmf',[1.0 5.0 1.0]\n"
        )
    }

    fn minimal() -> String {
        format!(
            "{HEADER}\n{}\n{}\n[Rules]\n1, 1 (1.0) : 1\n",
            one_var("Input", 1),
            one_var("Output", 1)
        )
    }

    #[test]
    fn parses_minimal_document() {
        let doc = parse(&minimal()).unwrap();
        assert_eq!(doc.name(), "tipper");
        assert_eq!(doc.inputs().len(), 1);
        assert_eq!(doc.outputs().len(), 1);
        assert_eq!(doc.rules().len(), 1);
        assert_eq!(doc.rules()[0].connective(), Connective::And);
        assert_eq!(doc.rules()[0].inputs()[0].term, SubRuleRef::Selects(0));
    }

    #[test]
    fn missing_agg_method_is_malformed_header() {
        let text = minimal().replace("AggMethod='max'\n", "");
        match parse(&text) {
            Err(FormatError::MalformedSystemHeader { .. }) => {}
            other => panic!("expected MalformedSystemHeader, got {other:?}"),
        }
    }

    #[test]
    fn unknown_method_value_is_malformed_header() {
        let text = minimal().replace("DefuzzMethod='centroid'", "DefuzzMethod='median'");
        match parse(&text) {
            Err(FormatError::MalformedSystemHeader { line, reason }) => {
                assert_eq!(line, 12);
                assert!(reason.contains("median"), "{reason}");
            }
            other => panic!("expected MalformedSystemHeader, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_mf_keyword() {
        let text = minimal().replace("'gaussmf'", "'sigmf'");
        match parse(&text) {
            Err(FormatError::UnsupportedMembershipFunctionType { name, .. }) => {
                assert_eq!(name, "sigmf");
            }
            other => panic!("expected UnsupportedMembershipFunctionType, got {other:?}"),
        }
    }

    #[test]
    fn wrong_parameter_count_names_block() {
        let text = minimal().replace("[1.0 5.0 1.0]", "[1.0 5.0]");
        match parse(&text) {
            Err(FormatError::MalformedVariableBlock {
                role: Role::Input,
                index: 1,
                reason,
                ..
            }) => assert!(reason.contains("3 parameters"), "{reason}"),
            other => panic!("expected MalformedVariableBlock, got {other:?}"),
        }
    }

    #[test]
    fn inverted_range_is_rejected_at_load() {
        let text = minimal().replace("Range=[0.0 10.0]", "Range=[10.0 10.0]");
        match parse(&text) {
            Err(FormatError::MalformedVariableBlock { reason, .. }) => {
                assert!(reason.contains("strictly less"), "{reason}");
            }
            other => panic!("expected MalformedVariableBlock, got {other:?}"),
        }
    }

    #[test]
    fn block_numbering_must_be_sequential() {
        let text = minimal().replace("[Input1]", "[Input2]");
        match parse(&text) {
            Err(FormatError::MalformedVariableBlock {
                role: Role::Input,
                index: 2,
                reason,
                ..
            }) => assert!(reason.contains("[Input1]"), "{reason}"),
            other => panic!("expected MalformedVariableBlock, got {other:?}"),
        }
    }

    #[test]
    fn inputs_must_precede_outputs() {
        let text = format!(
            "{HEADER}\n{}\n{}\n",
            one_var("Output", 1),
            one_var("Input", 1)
        );
        match parse(&text) {
            Err(FormatError::MalformedVariableBlock {
                role: Role::Input,
                reason,
                ..
            }) => assert!(reason.contains("precede"), "{reason}"),
            other => panic!("expected MalformedVariableBlock, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_mf_name_is_rejected() {
        let block = "[Input1]\nName='v'\nRange=[0.0 10.0]\nNumMFs=2\n\
             MF1='low':'gaussmf',[1.0 5.0 1.0]\nMF2='low':'gaussmf',[1.0 7.0 1.0]\n";
        let text = format!("{HEADER}\n{block}\n{}\n", one_var("Output", 1));
        match parse(&text) {
            Err(FormatError::MalformedVariableBlock { reason, line, .. }) => {
                assert!(reason.contains("already exists"), "{reason}");
                assert_eq!(line, 19);
            }
            other => panic!("expected MalformedVariableBlock, got {other:?}"),
        }
    }

    #[test]
    fn rule_index_must_exist() {
        let text = minimal().replace("1, 1 (1.0) : 1", "3, 1 (1.0) : 1");
        match parse(&text) {
            Err(FormatError::MalformedRuleLine { reason, .. }) => {
                assert!(reason.contains("only 1"), "{reason}");
            }
            other => panic!("expected MalformedRuleLine, got {other:?}"),
        }
    }

    #[test]
    fn bad_connective_token() {
        let text = minimal().replace(": 1", ": 7");
        match parse(&text) {
            Err(FormatError::MalformedRuleLine { reason, .. }) => {
                assert!(reason.contains("1 (AND) or 2 (OR)"), "{reason}");
            }
            other => panic!("expected MalformedRuleLine, got {other:?}"),
        }
    }

    #[test]
    fn no_rules_block_means_no_rules() {
        let text = format!(
            "{HEADER}\n{}\n{}\n",
            one_var("Input", 1),
            one_var("Output", 1)
        );
        let doc = parse(&text).unwrap();
        assert!(doc.rules().is_empty());
    }

    #[test]
    fn oversized_input_is_rejected_up_front() {
        let text = "x".repeat(MAX_INPUT_BYTES + 1);
        match parse(&text) {
            Err(FormatError::InputTooLarge { size, limit }) => {
                assert_eq!(size, MAX_INPUT_BYTES + 1);
                assert_eq!(limit, MAX_INPUT_BYTES);
            }
            other => panic!("expected InputTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn declared_counts_are_not_cross_checked() {
        // NumInputs says 1; the file carries 1 input. Lying about NumRules is
        // tolerated, matching the writer-recomputes behavior.
        let text = minimal().replace("NumRules=1", "NumRules=99");
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn negated_zero_keeps_unconstrained() {
        let text = minimal().replace("1, 1 (1.0) : 1", "-0, 1 (1.0) : 1");
        let doc = parse(&text).unwrap();
        let term = doc.rules()[0].inputs()[0];
        assert_eq!(term.term, SubRuleRef::Unconstrained);
        assert!(term.negated);
    }
}
