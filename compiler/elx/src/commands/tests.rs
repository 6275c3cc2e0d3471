use pretty_assertions::assert_eq;

use super::*;
use crate::Error;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn run_args(list: &[&str]) -> Result<String> {
    run(&parse_args(&args(list)).unwrap())
}

#[test]
fn parses_eval_with_options() {
    let command = parse_args(&args(&[
        "eval", "a + b", "--var", "a=1", "--root", "'x'", "--var", "b=a == null",
    ]))
    .unwrap();
    assert_eq!(
        command,
        Command::Eval(Invocation {
            text: "a + b".into(),
            root: Some("'x'".into()),
            vars: vec![("a".into(), "1".into()), ("b".into(), "a == null".into())],
        })
    );
}

#[test]
fn usage_errors() {
    assert_eq!(parse_args(&[]).unwrap_err(), UsageError::MissingCommand);
    assert_eq!(
        parse_args(&args(&["frob", "x"])).unwrap_err(),
        UsageError::UnknownCommand("frob".into())
    );
    assert_eq!(
        parse_args(&args(&["print"])).unwrap_err(),
        UsageError::MissingExpression("print".into())
    );
    assert_eq!(
        parse_args(&args(&["lex", "a", "b"])).unwrap_err(),
        UsageError::UnexpectedArgument("b".into())
    );
    assert_eq!(
        parse_args(&args(&["eval", "a", "--var"])).unwrap_err(),
        UsageError::MissingValue("--var".into())
    );
    assert_eq!(
        parse_args(&args(&["eval", "a", "--var", "=1"])).unwrap_err(),
        UsageError::InvalidVar("=1".into())
    );
    assert_eq!(
        parse_args(&args(&["eval", "--root", "1"])).unwrap_err(),
        UsageError::MissingExpression("eval".into())
    );
}

#[test]
fn eval_describes_value_and_type() {
    assert_eq!(run_args(&["eval", "1+2*3"]).unwrap(), "7 : el.lang.Long");
    assert_eq!(
        run_args(&["eval", "'it\\'s'"]).unwrap(),
        "\"it's\" : el.lang.String"
    );
    assert_eq!(
        run_args(&["eval", "n * 2", "--var", "n=21"]).unwrap(),
        "42 : el.lang.Long"
    );
    assert_eq!(
        run_args(&["eval", "toUpperCase()", "--root", "'abc'"]).unwrap(),
        "\"ABC\" : el.lang.String"
    );
    assert_eq!(run_args(&["eval", "missing"]).unwrap(), "null : null");
}

#[test]
fn eval_surfaces_errors() {
    assert!(matches!(run_args(&["eval", "foo()"]), Err(Error::Eval(_))));
    assert!(matches!(run_args(&["eval", "1 +"]), Err(Error::Parse(_))));
    assert!(matches!(
        run_args(&["eval", "x", "--var", "x=1 +"]),
        Err(Error::Parse(_))
    ));
}

#[test]
fn template_renders_text() {
    assert_eq!(
        run_args(&["template", "Hi ${name}!", "--var", "name='Ada'"]).unwrap(),
        "Hi Ada!"
    );
}

#[test]
fn print_and_vars() {
    assert_eq!(run_args(&["print", "(a+b)*  c"]).unwrap(), "(a + b) * c");
    assert_eq!(run_args(&["vars", "b + a.x + b"]).unwrap(), "b\na");
    assert_eq!(run_args(&["vars", "1"]).unwrap(), "");
}

#[test]
fn lex_lists_tokens() {
    let out = run_args(&["lex", "1+x"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines[..3],
        ["Int @ 0..1 \"1\"", "Plus @ 1..2 \"+\"", "Ident @ 2..3 \"x\""]
    );
    assert!(lines[3].starts_with("Eof @"), "{out}");
    assert!(matches!(run_args(&["lex", "'open"]), Err(Error::Lex(_))));
}
