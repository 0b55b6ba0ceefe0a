//! Class body productions: the program itself, field and local variable
//! declarations, and method headers with their parameter lists.

use crate::{codegen::tac::TacCode, errors::errors::Error, lexer::tokens::TokenCode};

use super::{
    lookups::NonTerminal,
    parser::Parser,
    stmt::parse_statement_list,
    types::{parse_method_return_type, parse_type},
};

/// Parses the class. Input after its closing brace is never read.
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Program);

    parser.expect(TokenCode::Class)?;
    parser.expect(TokenCode::Identifier)?;
    parser.expect(TokenCode::LBrace)?;
    parse_variable_declarations(parser)?;
    parse_method_declarations(parser)?;
    parser.expect(TokenCode::RBrace)?;

    parser.stop();
    Ok(())
}

pub fn parse_variable_declarations(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::VariableDeclarations);

    if parser.lookahead_in(NonTerminal::Type.first()) && !parser.in_recovery() {
        parse_type(parser)?;
        parse_variable_list(parser)?;
        parser.expect(TokenCode::Semicolon)?;
        parse_variable_declarations(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_variable_list(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::VariableList);

    parse_variable(parser)?;
    parse_variable_list_rest(parser)?;

    parser.stop();
    Ok(())
}

pub fn parse_variable_list_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::VariableListRest);

    if parser.lookahead_is(TokenCode::Comma) && !parser.in_recovery() {
        parser.expect(TokenCode::Comma)?;
        parse_variable(parser)?;
        parse_variable_list_rest(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_variable(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Variable);

    let name = parser.expect(TokenCode::Identifier)?;
    let size = parse_variable_rest(parser)?;

    if let Some(name) = name {
        parser.declare(TacCode::Var, &name.value, size.as_deref());
    }

    parser.stop();
    Ok(())
}

/// Parses an optional `[ NUMBER ]` suffix and returns the array size.
pub fn parse_variable_rest(parser: &mut Parser) -> Result<Option<String>, Error> {
    parser.start(NonTerminal::VariableRest);

    let mut size = None;
    if parser.lookahead_is(TokenCode::LBracket) {
        parser.expect(TokenCode::LBracket)?;
        size = parser.expect(TokenCode::Number)?.map(|token| token.value);
        parser.expect(TokenCode::RBracket)?;
    }

    parser.stop();
    Ok(size)
}

/// A class needs at least one method, so anything but `static` here is an
/// invalid method declaration.
pub fn parse_method_declarations(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::MethodDeclarations);

    if parser.lookahead_in(NonTerminal::MethodDeclaration.first()) {
        parse_method_declaration(parser)?;
        parse_more_method_declarations(parser)?;
    } else {
        parser.no_match()?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_more_method_declarations(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::MoreMethodDeclarations);

    if parser.lookahead_in(NonTerminal::MethodDeclaration.first()) && !parser.in_recovery() {
        parse_method_declaration(parser)?;
        parse_more_method_declarations(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_method_declaration(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::MethodDeclaration);

    parser.expect(TokenCode::Static)?;
    parse_method_return_type(parser)?;

    if let Some(name) = parser.expect(TokenCode::Identifier)? {
        parser.declare(TacCode::Label, &name.value, None);
    }

    parser.expect(TokenCode::LParen)?;
    parse_parameters(parser)?;
    parser.expect(TokenCode::RParen)?;
    parser.expect(TokenCode::LBrace)?;
    parse_variable_declarations(parser)?;
    parse_statement_list(parser)?;
    parser.expect(TokenCode::RBrace)?;

    parser.stop();
    Ok(())
}

pub fn parse_parameters(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Parameters);

    if parser.lookahead_in(NonTerminal::ParameterList.first()) && !parser.in_recovery() {
        parse_parameter_list(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_parameter_list(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::ParameterList);

    parse_type(parser)?;
    parse_parameter(parser)?;
    parse_parameter_list_rest(parser)?;

    parser.stop();
    Ok(())
}

pub fn parse_parameter_list_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::ParameterListRest);

    if parser.lookahead_is(TokenCode::Comma) && !parser.in_recovery() {
        parser.expect(TokenCode::Comma)?;
        parse_type(parser)?;
        parse_parameter(parser)?;
        parse_parameter_list_rest(parser)?;
    }

    parser.stop();
    Ok(())
}

// Part of the parameter list productions, so no frame of its own.
fn parse_parameter(parser: &mut Parser) -> Result<(), Error> {
    if let Some(name) = parser.expect(TokenCode::Identifier)? {
        parser.declare(TacCode::Fparam, &name.value, None);
    }

    Ok(())
}
