//! AST adapter for the text domain rule.
//!
//! Walks a parsed module and reduces every call to a recognized translation
//! function into a plain [`CallRecord`] with file-relative byte offsets, so
//! the rule core never touches the AST.

use swc_common::{BytePos, SourceMap, Span, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::rule::{ArgumentNode, CallRecord, classify};

/// A collected call plus the display coordinates of its call site.
#[derive(Debug, Clone)]
pub struct CollectedCall {
    pub record: CallRecord,
    /// 1-based line of the call.
    pub line: usize,
    /// 1-based display column of the call.
    pub col: usize,
    pub source_line: Option<String>,
}

pub struct CallCollector<'a> {
    source_map: &'a SourceMap,
    file_start: BytePos,
    pub calls: Vec<CollectedCall>,
}

impl<'a> CallCollector<'a> {
    pub fn new(source_map: &'a SourceMap, file_start: BytePos) -> Self {
        Self {
            source_map,
            file_start,
            calls: Vec::new(),
        }
    }

    /// Collect all translation calls of a module, in source order.
    pub fn collect(mut self, module: &Module) -> Vec<CollectedCall> {
        module.visit_with(&mut self);
        self.calls
    }

    fn relative(&self, span: Span) -> (usize, usize) {
        (
            (span.lo.0 - self.file_start.0) as usize,
            (span.hi.0 - self.file_start.0) as usize,
        )
    }

    fn argument_node(&self, arg: &ExprOrSpread) -> ArgumentNode {
        // Spread arguments count as present but are never literals, so they
        // classify as invalid-type or missing depending on the arity.
        if arg.spread.is_none()
            && let Expr::Lit(Lit::Str(s)) = unwrap_paren(&arg.expr)
        {
            return ArgumentNode::literal(s.value.to_string_lossy(), self.relative(s.span));
        }
        ArgumentNode::expression(self.relative(arg.expr.span()))
    }
}

impl<'a> Visit for CallCollector<'a> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Expr::Ident(ident) = &**expr
            && classify(ident.sym.as_str()).is_some()
        {
            let record = CallRecord {
                callee: ident.sym.to_string(),
                args: node.args.iter().map(|arg| self.argument_node(arg)).collect(),
                range: self.relative(node.span),
            };
            let loc = self.source_map.lookup_char_pos(node.span.lo);
            let source_line = loc.file.get_line(loc.line - 1).map(|cow| cow.to_string());
            self.calls.push(CollectedCall {
                record,
                line: loc.line,
                col: loc.col_display + 1,
                source_line,
            });
        }
        node.visit_children_with(self);
    }
}

/// Unwrap parentheses and TypeScript type assertions.
/// Handles: `(expr)`, `expr as T`, `expr as const`, `expr satisfies T`
pub fn unwrap_paren(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_paren(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_paren(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_paren(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_paren(&ts_sat.expr),
        _ => expr,
    }
}
