use crate::{codegen::tac::TacCode, errors::errors::Error, lexer::tokens::TokenCode};

use super::{
    expr::{parse_expression, parse_expression_list},
    lookups::NonTerminal,
    parser::Parser,
};

pub fn parse_statement_list(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::StatementList);

    if parser.lookahead_in(NonTerminal::Statement.first()) && !parser.in_recovery() {
        parse_statement(parser)?;
        parse_statement_list(parser)?;
    }

    parser.stop();
    Ok(())
}

/// Dispatches on the lookahead to one statement form.
///
/// When nothing fits, the `Statement` frame is left before reporting so the
/// error is described by the construct around it.
pub fn parse_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Statement);

    match parser.current_token_kind() {
        TokenCode::Identifier => parse_id_starting_statement(parser)?,
        TokenCode::If => parse_if_statement(parser)?,
        TokenCode::For => parse_for_statement(parser)?,
        TokenCode::Return => {
            parser.expect(TokenCode::Return)?;
            parse_optional_expression(parser)?;
            parser.expect(TokenCode::Semicolon)?;
        }
        TokenCode::Break => {
            parser.expect(TokenCode::Break)?;
            parser.expect(TokenCode::Semicolon)?;
        }
        TokenCode::Continue => {
            parser.expect(TokenCode::Continue)?;
            parser.expect(TokenCode::Semicolon)?;
        }
        TokenCode::LBrace => parse_statement_block(parser)?,
        _ => {
            parser.stop();
            return parser.no_match();
        }
    }

    parser.stop();
    Ok(())
}

fn parse_if_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenCode::If)?;
    let join = parser.new_label();

    parser.expect(TokenCode::LParen)?;
    parse_expression(parser)?;
    parser.expect(TokenCode::RParen)?;
    parse_statement_block(parser)?;
    parse_optional_else(parser)?;

    if let Some(join) = join {
        parser.place_label(&join);
    }

    Ok(())
}

fn parse_for_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenCode::For)?;
    let head = parser.new_label();
    let exit = parser.new_label();

    parser.expect(TokenCode::LParen)?;
    parse_variable_loc(parser)?;
    parser.expect(TokenCode::AssignOp)?;
    parse_expression(parser)?;
    parser.expect(TokenCode::Semicolon)?;

    if let Some(head) = &head {
        parser.place_label(head);
    }

    parse_expression(parser)?;
    parser.expect(TokenCode::Semicolon)?;
    parse_variable_loc(parser)?;
    parser.expect(TokenCode::IncDecOp)?;
    parser.expect(TokenCode::RParen)?;
    parse_statement_block(parser)?;

    if let (Some(head), Some(exit)) = (head, exit) {
        parser.emit(TacCode::Goto, None, None, Some(&head));
        parser.place_label(&exit);
    }

    Ok(())
}

pub fn parse_id_starting_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::IdStartingStatement);

    parser.expect(TokenCode::Identifier)?;
    parse_rest_of_id_starting_statement(parser)?;
    parser.expect(TokenCode::Semicolon)?;

    parser.stop();
    Ok(())
}

pub fn parse_rest_of_id_starting_statement(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::RestOfIdStartingStatement);

    match parser.current_token_kind() {
        TokenCode::LParen => {
            parser.expect(TokenCode::LParen)?;
            parse_expression_list(parser)?;
            parser.expect(TokenCode::RParen)?;
        }
        TokenCode::IncDecOp => {
            parser.expect(TokenCode::IncDecOp)?;
        }
        TokenCode::AssignOp => {
            parser.expect(TokenCode::AssignOp)?;
            parse_expression(parser)?;
        }
        TokenCode::LBracket => {
            parser.expect(TokenCode::LBracket)?;
            parse_expression(parser)?;
            parser.expect(TokenCode::RBracket)?;
            parser.expect(TokenCode::AssignOp)?;
            parse_expression(parser)?;
        }
        _ => parser.no_match()?,
    }

    parser.stop();
    Ok(())
}

pub fn parse_optional_expression(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::OptionalExpression);

    if parser.lookahead_is_first_of_expression() {
        parse_expression(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_statement_block(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::StatementBlock);

    parser.expect(TokenCode::LBrace)?;
    parse_statement_list(parser)?;
    parser.expect(TokenCode::RBrace)?;

    parser.stop();
    Ok(())
}

pub fn parse_optional_else(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::OptionalElse);

    if parser.lookahead_is(TokenCode::Else) {
        parser.expect(TokenCode::Else)?;
        parse_statement_block(parser)?;
    }

    parser.stop();
    Ok(())
}

pub fn parse_variable_loc(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::VariableLoc);

    parser.expect(TokenCode::Identifier)?;
    parse_variable_loc_rest(parser)?;

    parser.stop();
    Ok(())
}

pub fn parse_variable_loc_rest(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::VariableLocRest);

    if parser.lookahead_is(TokenCode::LBracket) {
        parser.expect(TokenCode::LBracket)?;
        parse_expression(parser)?;
        parser.expect(TokenCode::RBracket)?;
    }

    parser.stop();
    Ok(())
}
