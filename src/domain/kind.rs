/// Node Kind Module
///
/// The `kind` tag of a raw dump record. Known tags map to a dedicated variant;
/// anything else lands in `NodeKind::Other` and decodes as a generic node.

use std::fmt;

macro_rules! node_kinds {
    ($($variant:ident),* $(,)?) => {
        /// Known clang node kinds plus a catch-all.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($variant,)*
            Other(String),
        }

        impl NodeKind {
            /// Map a raw tag to its kind. Never fails.
            pub fn parse(tag: &str) -> NodeKind {
                match tag {
                    $(stringify!($variant) => NodeKind::$variant,)*
                    other => NodeKind::Other(other.to_string()),
                }
            }

            /// The raw tag spelling.
            pub fn as_str(&self) -> &str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)*
                    NodeKind::Other(tag) => tag.as_str(),
                }
            }
        }
    };
}

node_kinds! {
    // Declarations
    TranslationUnitDecl,
    TypedefDecl,
    RecordDecl,
    FieldDecl,
    EnumDecl,
    EnumConstantDecl,
    FunctionDecl,
    ParmVarDecl,
    VarDecl,
    // Types
    BuiltinType,
    RecordType,
    PointerType,
    ConstantArrayType,
    IncompleteArrayType,
    FunctionProtoType,
    FunctionNoProtoType,
    ElaboratedType,
    TypedefType,
    ParenType,
    QualType,
    // Statements
    CompoundStmt,
    DeclStmt,
    ReturnStmt,
    ForStmt,
    WhileStmt,
    DoStmt,
    IfStmt,
    BreakStmt,
    ContinueStmt,
    NullStmt,
    // Expressions
    IntegerLiteral,
    FloatingLiteral,
    CharacterLiteral,
    StringLiteral,
    ImplicitCastExpr,
    CStyleCastExpr,
    DeclRefExpr,
    BinaryOperator,
    UnaryOperator,
    CompoundAssignOperator,
    ArraySubscriptExpr,
    CallExpr,
    MemberExpr,
    ConditionalOperator,
    ParenExpr,
    InitListExpr,
    UnaryExprOrTypeTraitExpr,
    // Attributes
    AsmLabelAttr,
    BuiltinAttr,
    ConstAttr,
    FormatAttr,
    NoThrowAttr,
    NonNullAttr,
    PureAttr,
    RestrictAttr,
    WarnUnusedResultAttr,
}

impl NodeKind {
    pub fn is_known(&self) -> bool {
        !matches!(self, NodeKind::Other(_))
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, NodeKind::ForStmt | NodeKind::WhileStmt | NodeKind::DoStmt)
    }

    pub fn is_expression(&self) -> bool {
        let tag = self.as_str();
        tag.ends_with("Expr") || tag.ends_with("Literal") || tag.ends_with("Operator")
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::parse(tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!(NodeKind::parse("ForStmt"), NodeKind::ForStmt);
        assert_eq!(NodeKind::parse("ParmVarDecl"), NodeKind::ParmVarDecl);
        assert_eq!(NodeKind::parse("CallExpr").as_str(), "CallExpr");
    }

    #[test]
    fn test_unknown_falls_back() {
        let kind = NodeKind::parse("OMPParallelDirective");
        assert_eq!(kind, NodeKind::Other("OMPParallelDirective".to_string()));
        assert!(!kind.is_known());
        assert_eq!(kind.to_string(), "OMPParallelDirective");
    }

    #[test]
    fn test_classification() {
        assert!(NodeKind::DoStmt.is_loop());
        assert!(!NodeKind::IfStmt.is_loop());
        assert!(NodeKind::CompoundAssignOperator.is_expression());
        assert!(NodeKind::IntegerLiteral.is_expression());
    }
}
