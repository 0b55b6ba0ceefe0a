use std::{fmt::Display, io::Write};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TacCode {
    Var,
    Fparam,
    Label,
    Goto,
}

impl Display for TacCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TacCode::Var => "VAR",
            TacCode::Fparam => "FPARAM",
            TacCode::Label => "LABEL",
            TacCode::Goto => "GOTO",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Quadruple {
    pub op: TacCode,
    pub arg1: Option<String>,
    pub arg2: Option<String>,
    pub result: Option<String>,
}

impl Display for Quadruple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<10}{:<10}{:<10}{}",
            self.op.to_string(),
            self.arg1.as_deref().unwrap_or(""),
            self.arg2.as_deref().unwrap_or(""),
            self.result.as_deref().unwrap_or("")
        )
    }
}

/// Collects quadruples in emission order.
#[derive(Debug, Default, Clone)]
pub struct CodeGenerator {
    code: Vec<Quadruple>,
}

impl CodeGenerator {
    pub fn new() -> Self {
        CodeGenerator::default()
    }

    pub fn generate(&mut self, op: TacCode, arg1: Option<&str>, arg2: Option<&str>, result: Option<&str>) {
        self.code.push(Quadruple {
            op,
            arg1: arg1.map(String::from),
            arg2: arg2.map(String::from),
            result: result.map(String::from),
        });
    }

    pub fn quadruples(&self) -> &[Quadruple] {
        &self.code
    }

    pub fn print(&self, out: &mut impl Write) -> std::io::Result<()> {
        for quadruple in &self.code {
            writeln!(out, "{}", quadruple.to_string().trim_end())?;
        }

        Ok(())
    }
}
