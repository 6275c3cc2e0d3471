//! Command handlers for the `elx` CLI.
//!
//! `main.rs` only splits arguments and prints; every handler returns its
//! output so it can be tested directly.

use el_eval::Value;

use crate::error::Result;
use crate::ExpressionLanguage;

pub const USAGE: &str = "\
Usage: elx <command> <expression> [options]

Commands:
  eval <expr>        Evaluate an expression and print the value
  template <text>    Evaluate a template such as 'Hi ${name}'
  print <expr>       Print the canonical form of an expression
  vars <expr>        List the variables an expression reads
  lex <expr>         Show the token stream

Options (eval, template):
  --root <expr>      Root object, itself evaluated as an expression
  --var <name>=<expr> Bind a variable (repeatable)";

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Eval(Invocation),
    Template(Invocation),
    Print(String),
    Vars(String),
    Lex(String),
}

/// Input text plus the context to evaluate it in. Root and variable values
/// are expression sources.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    pub text: String,
    pub root: Option<String>,
    pub vars: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{0}' expects an expression")]
    MissingExpression(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("'{0}' expects a value")]
    MissingValue(String),
    #[error("invalid variable binding '{0}', expected <name>=<expr>")]
    InvalidVar(String),
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(UsageError::MissingCommand);
    };
    match command.as_str() {
        "eval" => parse_invocation(command, rest).map(Command::Eval),
        "template" => parse_invocation(command, rest).map(Command::Template),
        "print" => single_text(command, rest).map(Command::Print),
        "vars" => single_text(command, rest).map(Command::Vars),
        "lex" => single_text(command, rest).map(Command::Lex),
        other => Err(UsageError::UnknownCommand(other.to_owned())),
    }
}

fn single_text(command: &str, rest: &[String]) -> Result<String, UsageError> {
    match rest {
        [text] => Ok(text.clone()),
        [] => Err(UsageError::MissingExpression(command.to_owned())),
        [_, extra, ..] => Err(UsageError::UnexpectedArgument(extra.clone())),
    }
}

fn parse_invocation(command: &str, rest: &[String]) -> Result<Invocation, UsageError> {
    let mut text = None;
    let mut invocation = Invocation::default();
    let mut args = rest.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--root" => {
                let value = args
                    .next()
                    .ok_or_else(|| UsageError::MissingValue(arg.clone()))?;
                invocation.root = Some(value.clone());
            }
            "--var" => {
                let binding = args
                    .next()
                    .ok_or_else(|| UsageError::MissingValue(arg.clone()))?;
                let (name, expr) = binding
                    .split_once('=')
                    .filter(|(name, _)| !name.is_empty())
                    .ok_or_else(|| UsageError::InvalidVar(binding.clone()))?;
                invocation.vars.push((name.to_owned(), expr.to_owned()));
            }
            _ if text.is_none() => text = Some(arg.clone()),
            _ => return Err(UsageError::UnexpectedArgument(arg.clone())),
        }
    }
    invocation.text = text.ok_or_else(|| UsageError::MissingExpression(command.to_owned()))?;
    Ok(invocation)
}

/// Run `command`, returning what the CLI prints.
pub fn run(command: &Command) -> Result<String> {
    let el = ExpressionLanguage::new();
    match command {
        Command::Eval(invocation) => eval(&el, invocation),
        Command::Template(invocation) => template(&el, invocation),
        Command::Print(text) => Ok(el.create_expression(text)?.print()),
        Command::Vars(text) => Ok(el.create_expression(text)?.variables().join("\n")),
        Command::Lex(text) => lex(text),
    }
}

pub fn eval(el: &ExpressionLanguage, invocation: &Invocation) -> Result<String> {
    let ctx = bind(el, invocation)?;
    let value = el.create_expression(&invocation.text)?.evaluate(&ctx)?;
    Ok(describe(&value))
}

pub fn template(el: &ExpressionLanguage, invocation: &Invocation) -> Result<String> {
    let ctx = bind(el, invocation)?;
    let value = el
        .create_composite_expression(&invocation.text)?
        .evaluate(&ctx)?;
    Ok(value.to_string())
}

/// One line per token: kind, span and source text.
pub fn lex(text: &str) -> Result<String> {
    let lines: Vec<String> = crate::tokenize(text)?
        .iter()
        .map(|token| {
            let lexeme = token.span.slice(text).unwrap_or_default();
            format!("{:?} @ {} {lexeme:?}", token.kind, token.span)
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Value and runtime type, e.g. `7 : el.lang.Long`.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Str(s) => format!("{s:?} : {}", value.type_name()),
        _ => format!("{value} : {}", value.type_name()),
    }
}

fn bind(el: &ExpressionLanguage, invocation: &Invocation) -> Result<el_eval::DefaultEvalContext> {
    let root = match &invocation.root {
        Some(expr) => eval_standalone(el, expr)?,
        None => Value::Null,
    };
    let mut ctx = el.context(root);
    for (name, expr) in &invocation.vars {
        ctx.set_variable(name.as_str(), eval_standalone(el, expr)?);
    }
    Ok(ctx)
}

/// Evaluate with no root and no variables.
fn eval_standalone(el: &ExpressionLanguage, expr: &str) -> Result<Value> {
    el.eval(expr, Value::Null, std::iter::empty::<(String, Value)>())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
