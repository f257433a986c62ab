//! Clang-shaped dump fixtures shared by the integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};

pub fn int_type() -> Value {
    json!({"qualType": "int"})
}

/// The builtin typedefs clang prepends to every translation unit.
pub fn builtin_typedefs() -> Vec<Value> {
    vec![
        json!({
            "id": "0x14514f0", "kind": "TypedefDecl", "loc": {},
            "range": {"begin": {}, "end": {}}, "isImplicit": true,
            "name": "__int128_t", "type": {"qualType": "__int128"},
            "inner": [{"id": "0x1451290", "kind": "BuiltinType", "type": {"qualType": "__int128"}}]
        }),
        json!({
            "id": "0x1451900", "kind": "TypedefDecl", "loc": {},
            "range": {"begin": {}, "end": {}}, "isImplicit": true,
            "name": "__builtin_ms_va_list", "type": {"qualType": "char *"},
            "inner": [{
                "id": "0x14518c0", "kind": "PointerType", "type": {"qualType": "char *"},
                "inner": [{"id": "0x1450d70", "kind": "BuiltinType", "type": {"qualType": "char"}}]
            }]
        }),
        json!({
            "id": "0x1451bf8", "kind": "TypedefDecl", "loc": {},
            "range": {"begin": {}, "end": {}}, "isImplicit": true,
            "name": "__builtin_va_list", "type": {"qualType": "struct __va_list_tag[1]"},
            "inner": [{
                "id": "0x1451ba0", "kind": "ConstantArrayType",
                "type": {"qualType": "struct __va_list_tag[1]"}, "size": 1,
                "inner": [{
                    "id": "0x14519e0", "kind": "RecordType",
                    "type": {"qualType": "struct __va_list_tag"},
                    "decl": {"id": "0x1451958", "kind": "RecordDecl", "name": "__va_list_tag"}
                }]
            }]
        }),
    ]
}

pub fn translation_unit(id: &str, decls: Vec<Value>) -> Value {
    let mut inner = builtin_typedefs();
    inner.extend(decls);
    json!({
        "id": id, "kind": "TranslationUnitDecl", "loc": {},
        "range": {"begin": {}, "end": {}},
        "inner": inner
    })
}

pub fn decl_ref(id: &str, decl_id: &str, name: &str) -> Value {
    json!({
        "id": id, "kind": "DeclRefExpr", "type": int_type(), "valueCategory": "lvalue",
        "referencedDecl": {"id": decl_id, "kind": "VarDecl", "name": name, "type": int_type()}
    })
}

pub fn rvalue(id: &str, inner: Value) -> Value {
    json!({
        "id": id, "kind": "ImplicitCastExpr", "type": int_type(),
        "valueCategory": "prvalue", "castKind": "LValueToRValue", "inner": [inner]
    })
}

pub fn int_literal(id: &str, value: &str) -> Value {
    json!({"id": id, "kind": "IntegerLiteral", "type": int_type(), "valueCategory": "prvalue", "value": value})
}

/// `int main() { int sum1 = 0; return sum1; }`
pub fn scenario_a() -> Value {
    translation_unit("0x1450cc8", vec![json!({
        "id": "0x14acde0", "kind": "FunctionDecl",
        "loc": {"offset": 4, "file": "../test/test.c", "line": 1, "col": 5, "tokLen": 4},
        "range": {
            "begin": {"offset": 0, "col": 1, "tokLen": 3},
            "end": {"offset": 42, "line": 4, "col": 1, "tokLen": 1}
        },
        "name": "main", "mangledName": "main", "type": {"qualType": "int ()"},
        "inner": [{
            "id": "0x14acfd0", "kind": "CompoundStmt",
            "inner": [
                {
                    "id": "0x14acf70", "kind": "DeclStmt",
                    "inner": [{
                        "id": "0x14acee8", "kind": "VarDecl",
                        "loc": {"offset": 18, "col": 6, "tokLen": 4},
                        "isUsed": true, "name": "sum1", "type": int_type(), "init": "c",
                        "inner": [int_literal("0x14acf50", "0")]
                    }]
                },
                {
                    "id": "0x14acfc0", "kind": "ReturnStmt",
                    "inner": [rvalue("0x14acfa8", decl_ref("0x14acf88", "0x14acee8", "sum1"))]
                }
            ]
        }]
    })])
}

/// ```c
/// int main() {
///     int sum = 0;
///     for (int i = 0; i < 32; i++) {
///         int t = i * 2;
///         sum += t;
///         if (sum > 100) break;
///         if (t > 50) { break; }
///         printf("%d", t);
///     }
///     return sum;
/// }
/// ```
pub fn scenario_b() -> Value {
    let header_init = json!({
        "id": "f-init", "kind": "DeclStmt",
        "inner": [{
            "id": "v-i", "kind": "VarDecl", "name": "i", "type": int_type(), "init": "c",
            "inner": [int_literal("l-0", "0")]
        }]
    });
    let cond = json!({
        "id": "f-cond", "kind": "BinaryOperator", "type": int_type(), "opcode": "<",
        "inner": [rvalue("c-i", decl_ref("r-i", "v-i", "i")), int_literal("l-32", "32")]
    });
    let inc = json!({
        "id": "f-inc", "kind": "UnaryOperator", "type": int_type(),
        "isPostfix": true, "opcode": "++", "inner": [decl_ref("r-i2", "v-i", "i")]
    });
    let body = json!({
        "id": "f-body", "kind": "CompoundStmt",
        "inner": [
            {
                "id": "d-t", "kind": "DeclStmt",
                "inner": [{
                    "id": "v-t", "kind": "VarDecl", "name": "t", "type": int_type(), "init": "c",
                    "inner": [{
                        "id": "mul", "kind": "BinaryOperator", "opcode": "*", "type": int_type(),
                        "inner": [rvalue("c-i3", decl_ref("r-i3", "v-i", "i")), int_literal("l-2", "2")]
                    }]
                }]
            },
            {
                "id": "acc", "kind": "CompoundAssignOperator", "opcode": "+=", "type": int_type(),
                "inner": [decl_ref("r-sum", "v-sum", "sum"), rvalue("c-t", decl_ref("r-t", "v-t", "t"))]
            },
            {
                "id": "if1", "kind": "IfStmt",
                "inner": [
                    {"id": "gt1", "kind": "BinaryOperator", "opcode": ">", "type": int_type()},
                    {"id": "brk-nested", "kind": "BreakStmt"}
                ]
            },
            {"id": "brk-direct", "kind": "BreakStmt"},
            {
                "id": "call-printf", "kind": "CallExpr", "type": int_type(),
                "inner": [
                    {"id": "c-printf", "kind": "ImplicitCastExpr", "castKind": "FunctionToPointerDecay",
                     "type": {"qualType": "int (*)(const char *, ...)"},
                     "inner": [{"id": "r-printf", "kind": "DeclRefExpr", "referencedDecl": {"id": "printf", "kind": "FunctionDecl", "name": "printf"}}]},
                    {"id": "s-fmt", "kind": "StringLiteral", "value": "\"%d\""}
                ]
            }
        ]
    });

    translation_unit("tu-b", vec![json!({
        "id": "fn-main", "kind": "FunctionDecl", "name": "main", "type": {"qualType": "int ()"},
        "inner": [{
            "id": "main-body", "kind": "CompoundStmt",
            "inner": [
                {
                    "id": "d-sum", "kind": "DeclStmt",
                    "inner": [{
                        "id": "v-sum", "kind": "VarDecl", "name": "sum", "type": int_type(), "init": "c",
                        "inner": [int_literal("l-sum0", "0")]
                    }]
                },
                {
                    "id": "for", "kind": "ForStmt",
                    "inner": [header_init, {}, cond, inc, body]
                },
                {"id": "ret", "kind": "ReturnStmt", "inner": [rvalue("c-sum", decl_ref("r-sum2", "v-sum", "sum"))]}
            ]
        }]
    })])
}

/// `int square(int x);` with no definition.
pub fn scenario_c() -> Value {
    translation_unit("tu-c", vec![json!({
        "id": "fn-square", "kind": "FunctionDecl",
        "loc": {"offset": 4, "file": "proto.c", "line": 1, "col": 5, "tokLen": 6},
        "name": "square", "type": {"qualType": "int (int)"},
        "inner": [{"id": "p-x", "kind": "ParmVarDecl", "name": "x", "type": int_type()}]
    })])
}
