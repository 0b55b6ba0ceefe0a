use crate::{errors::errors::Error, lexer::tokens::TokenCode};

use super::{lookups::NonTerminal, parser::Parser};

pub fn parse_type(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::Type);

    match parser.current_token_kind() {
        TokenCode::Int => {
            parser.expect(TokenCode::Int)?;
        }
        TokenCode::Real => {
            parser.expect(TokenCode::Real)?;
        }
        _ => parser.no_match()?,
    }

    parser.stop();
    Ok(())
}

pub fn parse_method_return_type(parser: &mut Parser) -> Result<(), Error> {
    parser.start(NonTerminal::MethodReturnType);

    if parser.lookahead_is(TokenCode::Void) {
        parser.expect(TokenCode::Void)?;
    } else {
        parse_type(parser)?;
    }

    parser.stop();
    Ok(())
}
