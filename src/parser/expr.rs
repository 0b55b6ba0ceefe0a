//! Expression productions, from the relational layer down to factors.
//!
//! Every binary operator that is reduced outside recovery produces a fresh
//! temporary for its result.

use crate::{errors::errors::Error, lexer::tokens::TokenCode};

use super::{lookups::NonTerminal, parser::Parser};

pub fn parse_expression_list(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::ExpressionList);

    if parser.lookahead_is_first_of_expression() {
        parse_expression(parser)?;
        parse_more_expressions(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_more_expressions(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::MoreExpressions);

    if parser.lookahead_is(TokenCode::Comma) && !parser.in_recovery() {
        parser.expect(TokenCode::Comma)?;
        parse_expression(parser)?;
        parse_more_expressions(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_expression(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Expression);

    parse_simple_expression(parser)?;
    parse_expression_rest(parser)?;

    parser.stop();
    Ok(())
}

/// At most one relational operator; `a < b < c` does not chain.
pub fn parse_expression_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::ExpressionRest);

    if parser.lookahead_is(TokenCode::RelOp) {
        let operator = parser.expect(TokenCode::RelOp)?;
        parse_simple_expression(parser)?;

        if operator.is_some() {
            parser.new_temp();
        }
    }

    parser.stop();
    Ok(())
}

pub fn parse_simple_expression(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::SimpleExpression);

    if parser.lookahead_is_first_of_sign() {
        parse_sign(parser)?;
    }
    parse_term(parser)?;
    parse_simple_expression_rest(parser)?;

    parser.stop();
    Ok(())
}

pub fn parse_simple_expression_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::SimpleExpressionRest);

    if parser.lookahead_is(TokenCode::AddOp) && !parser.in_recovery() {
        let operator = parser.expect(TokenCode::AddOp)?;
        parse_term(parser)?;

        if operator.is_some() {
            parser.new_temp();
        }

        parse_simple_expression_rest(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Term);

    parse_factor(parser)?;
    parse_term_rest(parser)?;

    parser.stop();
    Ok(())
}

pub fn parse_term_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::TermRest);

    if parser.lookahead_is(TokenCode::MulOp) && !parser.in_recovery() {
        let operator = parser.expect(TokenCode::MulOp)?;
        parse_factor(parser)?;

        if operator.is_some() {
            parser.new_temp();
        }

        parse_term_rest(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Factor);

    match parser.current_token_kind() {
        // A paused '(' or '!' would re-enter factor forever.
        _ if parser.in_recovery() => {}
        TokenCode::Identifier => parse_id_starting_factor(parser)?,
        TokenCode::Number => {
            parser.expect(TokenCode::Number)?;
        }
        TokenCode::LParen => {
            parser.expect(TokenCode::LParen)?;
            parse_expression(parser)?;
            parser.expect(TokenCode::RParen)?;
        }
        TokenCode::Not => {
            parser.expect(TokenCode::Not)?;
            parse_factor(parser)?;
        }
        _ => parser.no_match()?,
    }

    parser.stop();
    Ok(())
}

pub fn parse_id_starting_factor(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::IdStartingFactor);

    parser.expect(TokenCode::Identifier)?;
    parse_rest_of_id_starting_factor(parser)?;

    parser.stop();
    Ok(())
}

/// Call arguments or an array index after an identifier, or nothing.
pub fn parse_rest_of_id_starting_factor(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::RestOfIdStartingFactor);

    match parser.current_token_kind() {
        TokenCode::LParen => {
            parser.expect(TokenCode::LParen)?;
            parse_expression_list(parser)?;
            parser.expect(TokenCode::RParen)?;
        }
        TokenCode::LBracket => {
            parser.expect(TokenCode::LBracket)?;
            parse_expression(parser)?;
            parser.expect(TokenCode::RBracket)?;
        }
        _ => {}
    }

    parser.stop();
    Ok(())
}

pub fn parse_sign(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Sign);

    if parser.lookahead_is_first_of_sign() {
        parser.expect(TokenCode::AddOp)?;
    } else {
        parser.no_match()?;
    }

    parser.stop();
    Ok(())
}
