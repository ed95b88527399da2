//! Tree nodes.
//!
//! A [`Node`] is a closed sum over the node kinds transform passes build.
//! Children are owned through `Box`/`Vec`: every child has exactly one
//! parent, and dropping the root tears down the whole tree. Symbols and
//! function identities are not children; nodes carry their own copies.
//!
//! Every node carries a [`Type`] and a [`Span`]. Constructors compute the
//! type from the constituents:
//!
//! | Node | Type |
//! |------|------|
//! | symbol | the variable's type |
//! | constant | as given |
//! | unary | operand type, or builtin return type; const iff operand const |
//! | binary | left operand type; const iff both operands const |
//! | constructor | the constructed type |
//! | builtin call | return type; const iff a direct operator over const args |
//! | declaration, block | `void` |
//! | prototype, definition | the function's return type |

use crate::{ConstantUnion, Function, Operator, Qualifier, Span, Type, Variable};

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    kind: NodeKind,
    ty: Type,
    span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Reference to a variable.
    Symbol(Variable),
    /// Constant value, one slot per scalar component.
    Constant(ConstantUnion),
    Unary {
        op: Operator,
        operand: Box<Node>,
        /// Set when the operator came from a builtin function.
        function: Option<Box<Function>>,
    },
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Constructor or function call.
    Aggregate {
        op: Operator,
        /// `None` for constructors.
        function: Option<Box<Function>>,
        args: Vec<Node>,
    },
    Declaration {
        declarators: Vec<Node>,
    },
    Block {
        statements: Vec<Node>,
    },
    FunctionPrototype {
        function: Box<Function>,
    },
    FunctionDefinition {
        prototype: Box<Node>,
        body: Box<Node>,
    },
}

impl Node {
    fn new(kind: NodeKind, ty: Type) -> Self {
        Node {
            kind,
            ty,
            span: Span::DUMMY,
        }
    }

    /// Reference to `variable`.
    pub fn symbol(variable: Variable) -> Self {
        let ty = variable.ty().clone();
        Self::new(NodeKind::Symbol(variable), ty)
    }

    /// Constant with one slot per scalar component of `ty`.
    pub fn constant(values: ConstantUnion, ty: Type) -> Self {
        debug_assert_eq!(
            values.len(),
            ty.object_size(),
            "constant slot count must match the type"
        );
        Self::new(NodeKind::Constant(values), ty)
    }

    /// Unary operation, optionally tagged with the builtin it came from.
    pub fn unary(op: Operator, operand: Node, function: Option<&Function>) -> Self {
        let qualifier = if operand.is_const() {
            Qualifier::Const
        } else {
            Qualifier::Temporary
        };
        let base = match function {
            Some(func) => func.return_type().clone(),
            None => operand.ty.clone(),
        };
        Self::new(
            NodeKind::Unary {
                op,
                operand: Box::new(operand),
                function: function.map(|func| Box::new(func.clone())),
            },
            base.with_qualifier(qualifier),
        )
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        let qualifier = if left.is_const() && right.is_const() {
            Qualifier::Const
        } else {
            Qualifier::Temporary
        };
        let ty = left.ty.clone().with_qualifier(qualifier);
        Self::new(
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            ty,
        )
    }

    /// Constructor call producing a value of `ty`.
    pub fn constructor(ty: Type, args: Vec<Node>) -> Self {
        Self::new(
            NodeKind::Aggregate {
                op: Operator::Construct,
                function: None,
                args,
            },
            ty,
        )
    }

    /// Call of a resolved builtin, carrying the function's operator tag.
    ///
    /// A direct-operator builtin over all-const arguments is const, like the
    /// unary form. Generic calls are always temporary.
    pub fn builtin_call(function: &Function, args: Vec<Node>) -> Self {
        let folds = !function.op().is_builtin_function_call()
            && !args.is_empty()
            && args.iter().all(Node::is_const);
        let qualifier = if folds {
            Qualifier::Const
        } else {
            Qualifier::Temporary
        };
        let ty = function.return_type().clone().with_qualifier(qualifier);
        Self::new(
            NodeKind::Aggregate {
                op: function.op(),
                function: Some(Box::new(function.clone())),
                args,
            },
            ty,
        )
    }

    pub fn declaration(declarators: Vec<Node>) -> Self {
        Self::new(NodeKind::Declaration { declarators }, Type::void())
    }

    pub fn block(statements: Vec<Node>) -> Self {
        Self::new(NodeKind::Block { statements }, Type::void())
    }

    pub fn prototype(function: &Function) -> Self {
        let ty = function.return_type().clone();
        Self::new(
            NodeKind::FunctionPrototype {
                function: Box::new(function.clone()),
            },
            ty,
        )
    }

    /// Pair a prototype node with a body block.
    pub fn definition(prototype: Node, body: Node) -> Self {
        debug_assert!(
            matches!(prototype.kind, NodeKind::FunctionPrototype { .. }),
            "definition needs a prototype node"
        );
        debug_assert!(body.is_block(), "function body must be a block");
        let ty = prototype.ty.clone();
        Self::new(
            NodeKind::FunctionDefinition {
                prototype: Box::new(prototype),
                body: Box::new(body),
            },
            ty,
        )
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.ty.qualifier() == Qualifier::Const
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        matches!(self.kind, NodeKind::Block { .. })
    }

    /// Statements of a block node.
    pub fn as_block(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Block { statements } => Some(statements),
            _ => None,
        }
    }

    /// Mutable statements of a block node, for splicing declarations in.
    pub fn as_block_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Block { statements } => Some(statements),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Variable> {
        match &self.kind {
            NodeKind::Symbol(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_constant(&self) -> Option<&[crate::ConstValue]> {
        match &self.kind {
            NodeKind::Constant(values) => Some(values),
            _ => None,
        }
    }

    /// Arguments of a constructor or call node.
    pub fn args(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Aggregate { args, .. } => Some(args),
            _ => None,
        }
    }
}
