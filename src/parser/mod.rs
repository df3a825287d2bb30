//! Parser for the clause language
//!
//! Source text is a sequence of clauses terminated by `.` and at most one
//! query terminated by `?`. A clause is literals separated by `|`; a
//! literal is an optional `~`, a name, and a parenthesized non-empty
//! argument list. An argument name beginning with an uppercase letter is a
//! constant, any other name is a variable, and a name immediately followed
//! by its own argument list is a function term, arbitrarily nestable.
//! Whitespace and line breaks are insignificant.

use nom::{
    branch::alt,
    character::complete::{alpha1, char, multispace0},
    combinator::opt,
    multi::separated_list1,
    sequence::{delimited, preceded},
    IResult,
};
use std::fs;
use std::path::Path;

use crate::core::{Clause, Literal, Problem, RefuteError, Result, Term};

/// Load and parse a problem from a file
pub fn parse_file(path: impl AsRef<Path>) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    parse_problem(&text)
}

/// Parse a problem: base clauses plus exactly one query
pub fn parse_problem(input: &str) -> Result<Problem> {
    let mut clauses = Vec::new();
    let mut goal: Option<Literal> = None;
    let mut rest = input;

    loop {
        let (after, _) = multispace0::<_, nom::error::Error<&str>>(rest)
            .map_err(|e| RefuteError::Parse(format!("{:?}", e)))?;
        if after.is_empty() {
            break;
        }
        let (after, statement) = parse_statement(after).map_err(|e| {
            RefuteError::Parse(format!("malformed statement: {:?}", e))
        })?;
        match statement {
            Statement::Clause(literals) => clauses.push(Clause::new(literals)),
            Statement::Query(mut literals) => {
                if goal.is_some() {
                    return Err(RefuteError::Parse(
                        "more than one query; exactly one is allowed".to_string(),
                    ));
                }
                if literals.len() != 1 {
                    return Err(RefuteError::Parse(
                        "the query must be a single literal".to_string(),
                    ));
                }
                goal = literals.pop();
            }
        }
        rest = after;
    }

    let goal = goal.ok_or_else(|| {
        RefuteError::Parse("missing query; exactly one is required".to_string())
    })?;
    Ok(Problem::new(clauses, goal))
}

/// One `.`- or `?`-terminated run of literals
enum Statement {
    Clause(Vec<Literal>),
    Query(Vec<Literal>),
}

fn parse_statement(input: &str) -> IResult<&str, Statement> {
    let (input, literals) =
        separated_list1(preceded(multispace0, char('|')), parse_literal)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, terminator) = alt((char('.'), char('?')))(input)?;
    let statement = match terminator {
        '?' => Statement::Query(literals),
        _ => Statement::Clause(literals),
    };
    Ok((input, statement))
}

fn parse_literal(input: &str) -> IResult<&str, Literal> {
    let (input, _) = multispace0(input)?;
    let (input, negation) = opt(char('~'))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, name) = alpha1(input)?;
    let (input, args) = parse_argument_list(input)?;
    Ok((input, Literal::predicate(name, args, negation.is_none())))
}

fn parse_argument_list(input: &str) -> IResult<&str, Vec<Term>> {
    delimited(
        preceded(multispace0, char('(')),
        separated_list1(preceded(multispace0, char(',')), parse_argument),
        preceded(multispace0, char(')')),
    )(input)
}

fn parse_argument(input: &str) -> IResult<&str, Term> {
    let (input, _) = multispace0(input)?;
    let (input, name) = alpha1(input)?;
    let (input, args) = opt(parse_argument_list)(input)?;
    let term = match args {
        Some(args) => Term::function(name, args),
        None if name.starts_with(char::is_uppercase) => Term::constant(name),
        None => Term::variable(name),
    };
    Ok((input, term))
}
