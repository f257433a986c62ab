/// End-to-end decoding of clang `-ast-dump=json` shaped input.

mod common;

use astlens::domain::views::LoopConfidence;
use astlens::domain::width::Width;
use astlens::{decode, decode_str, DecodeConfig, LookupError, NodeKind};

#[test]
fn test_single_var_decl_function() {
    let unit = decode(&common::scenario_a(), &DecodeConfig::default()).unwrap();

    assert_eq!(unit.functions().count(), 1);
    let main = unit.function(0).unwrap();
    assert_eq!(main.name(), Some("main"));
    assert_eq!(main.param_count(), 0);
    assert_eq!(main.return_type(), Some("int ()"));

    let body = main.body().expect("main has a body");
    assert_eq!(body.var_decl_count(), 1);
    let sum = body.var_decl(0).unwrap();
    assert_eq!(sum.name(), Some("sum1"));
    assert_eq!(sum.width(), Some(Width::Bytes(4)));
    assert_eq!(sum.initial_value().as_deref(), Some("0"));

    let loc = main.node().location().unwrap();
    assert_eq!(loc.file.as_deref(), Some("../test/test.c"));
    assert_eq!(loc.line, Some(1));
}

#[test]
fn test_basic_counted_loop() {
    let unit = decode(&common::scenario_b(), &DecodeConfig::default()).unwrap();

    assert_eq!(unit.registry().for_loops().len(), 1);
    let lp = unit.for_loop(0).unwrap();
    assert!(lp.is_basic_loop());
    assert_eq!(lp.confidence(), Some(LoopConfidence::High));
    assert_eq!(lp.lower_bound().unwrap().kind(), &NodeKind::DeclStmt);
    assert_eq!(lp.upper_bound().unwrap().attr("opcode").unwrap(), "<");
    assert_eq!(lp.step().unwrap().attr("opcode").unwrap(), "++");

    // body facts only, not the header's `int i`
    let decls: Vec<_> = lp.var_decls().filter_map(|v| v.name()).collect();
    assert_eq!(decls, vec!["t"]);
    let calls: Vec<_> = lp.calls().map(|c| c.raw_id()).collect();
    assert_eq!(calls, vec!["call-printf"]);
    let breaks: Vec<_> = lp.breaks().map(|b| b.raw_id()).collect();
    assert_eq!(breaks, vec!["brk-direct"]);

    let main_body = unit.function(0).unwrap().body().unwrap();
    assert_eq!(main_body.for_loop(0).unwrap().node(), lp.node());
    let outer_decls: Vec<_> = main_body.var_decls().filter_map(|v| v.name()).collect();
    assert_eq!(outer_decls, vec!["sum"]);
    assert_eq!(main_body.calls().count(), 1);
}

#[test]
fn test_prototype_only_function() {
    let unit = decode(&common::scenario_c(), &DecodeConfig::default()).unwrap();

    assert_eq!(unit.functions().count(), 1);
    let square = unit.function(0).unwrap();
    assert!(square.body().is_none());
    assert_eq!(square.param(0).unwrap().name(), Some("x"));
    assert_eq!(square.result_type(), Some("int"));
    assert!(unit.registry().compounds().is_empty());
    assert!(matches!(unit.compound(0), Err(LookupError::Empty { .. })));
}

#[test]
fn test_registries_reset_between_parses() {
    let config = DecodeConfig::default();
    let first = decode(&common::scenario_b(), &config).unwrap();
    assert_eq!(first.registry().for_loops().len(), 1);

    let second = decode(&common::scenario_c(), &config).unwrap();
    let names: Vec<_> = second.functions().filter_map(|f| f.name()).collect();
    assert_eq!(names, vec!["square"]);
    assert!(second.registry().for_loops().is_empty());
    assert!(second.registry().compounds().is_empty());
    assert!(matches!(second.for_loop(0), Err(LookupError::Empty { .. })));

    // the first unit is untouched
    assert_eq!(first.functions().next().unwrap().name(), Some("main"));
}

#[test]
fn test_declaration_references_resolve_by_id() {
    let unit = decode(&common::scenario_a(), &DecodeConfig::default()).unwrap();
    let refs = unit.root().collect(&NodeKind::DeclRefExpr, true);
    assert_eq!(refs.len(), 1);

    let target = refs[0].resolve_reference().unwrap();
    assert_eq!(target.name(), Some("sum1"));
    assert_eq!(target.kind(), &NodeKind::VarDecl);

    let ret = refs[0].enclosing(&NodeKind::ReturnStmt).unwrap();
    assert_eq!(ret.raw_id(), "0x14acfc0");
    assert_eq!(refs[0].ancestors().last().unwrap(), unit.root());
}

#[test]
fn test_implicit_typedefs_and_pointer_widths() {
    let unit = decode(&common::scenario_a(), &DecodeConfig::default()).unwrap();
    let typedefs = unit.root().collect(&NodeKind::TypedefDecl, false);
    assert_eq!(typedefs.len(), 3);
    assert!(typedefs.iter().all(|t| t.is_implicit()));
    assert!(typedefs[0].location().is_none());

    let va_list = unit.find("0x1451900").unwrap();
    assert_eq!(va_list.width_in_bytes(), Some(Width::Bytes(8)));
    let record = unit.find("0x14519e0").unwrap();
    assert_eq!(record.width_in_bytes(), Some(Width::Unknown));

    let narrow = DecodeConfig {
        pointer_width: 4,
        ..DecodeConfig::default()
    };
    let unit = decode(&common::scenario_a(), &narrow).unwrap();
    assert_eq!(unit.find("0x1451900").unwrap().width_in_bytes(), Some(Width::Bytes(4)));
    // nodes without a declared type have no width at all
    assert_eq!(unit.find("0x14acf70").unwrap().width_in_bytes(), None);
}

#[test]
fn test_decode_from_text_and_tree_dump() {
    let text = common::scenario_c().to_string();
    let unit = decode_str(&text, &DecodeConfig::default()).unwrap();
    let dump = unit.find("fn-square").unwrap().to_string();
    assert_eq!(dump, "fn-square FunctionDecl\n\tp-x ParmVarDecl\n");
}
