use super::{
    symbol_table::SymbolTable,
    tac::{CodeGenerator, TacCode},
};

#[test]
fn test_symbol_table_insert_is_idempotent() {
    let mut table = SymbolTable::new();

    let x = table.insert("x");
    let y = table.insert("y");

    assert_eq!(table.insert("x"), x);
    assert_ne!(x, y);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(y), Some("y"));
    assert_eq!(table.lookup("z"), None);
}

#[test]
fn test_print_quadruples() {
    let mut code = CodeGenerator::new();
    code.generate(TacCode::Var, Some("10"), None, Some("arr"));
    code.generate(TacCode::Label, None, None, Some("main"));

    let mut out = Vec::new();
    code.print(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "VAR       10                  arr");
    assert_eq!(lines[1], "LABEL                         main");
}

#[test]
fn test_tac_code_names() {
    let names: Vec<String> = [TacCode::Var, TacCode::Fparam, TacCode::Label, TacCode::Goto]
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(names, vec!["VAR", "FPARAM", "LABEL", "GOTO"]);
}
