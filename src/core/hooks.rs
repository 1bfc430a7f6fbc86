//! Hook-call location and dependency diffing.
//!
//! Walks a whole file's AST, finds calls to the three recognized
//! dependency-array-bearing hooks, and diffs each callback's required
//! dependencies against the declared array. Only call sites with at least
//! one missing dependency are emitted.

use std::fmt;

use serde::Serialize;
use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, MemberProp, Module, OptChainBase};
use swc_ecma_visit::{Visit, VisitWith};

use super::{free_idents::extract_free_identifiers, stable::is_stable};

/// The three recognized hook forms, distinguished only by callee name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Effect,
    MemoizedCallback,
    MemoizedValue,
}

impl HookKind {
    pub fn from_callee(name: &str) -> Option<Self> {
        match name {
            "useEffect" => Some(Self::Effect),
            "useCallback" => Some(Self::MemoizedCallback),
            "useMemo" => Some(Self::MemoizedValue),
            _ => None,
        }
    }

    pub fn hook_name(self) -> &'static str {
        match self {
            Self::Effect => "useEffect",
            Self::MemoizedCallback => "useCallback",
            Self::MemoizedValue => "useMemo",
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hook_name())
    }
}

/// One discovered hook call with at least one missing dependency.
///
/// Constructed once during traversal and immutable thereafter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookCallSite {
    #[serde(rename = "hookName", serialize_with = "serialize_hook_name")]
    pub kind: HookKind,
    /// 1-based source line of the call.
    pub line: usize,
    /// Non-stable free identifiers the callback reads, first-seen order.
    pub referenced_identifiers: Vec<String>,
    /// Names taken from the dependency-array argument.
    #[serde(rename = "currentDependencies")]
    pub declared_dependencies: Vec<String>,
    /// `referenced_identifiers` minus `declared_dependencies`.
    pub missing_dependencies: Vec<String>,
}

fn serialize_hook_name<S: serde::Serializer>(kind: &HookKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.hook_name())
}

/// Finds all recognized hook calls with missing dependencies in a module.
pub struct HookCallFinder<'a> {
    source_map: &'a SourceMap,
    call_sites: Vec<HookCallSite>,
}

impl<'a> HookCallFinder<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            call_sites: Vec::new(),
        }
    }

    /// Analyze a module and return its offending hook call sites.
    pub fn find(mut self, module: &Module) -> Vec<HookCallSite> {
        module.visit_with(&mut self);
        self.call_sites
    }

    fn analyze_call(&mut self, kind: HookKind, node: &CallExpr) {
        let referenced: Vec<String> = extract_free_identifiers(&node.args[0].expr)
            .into_iter()
            .filter(|name| !is_stable(name))
            .collect();

        let declared = node
            .args
            .get(1)
            .filter(|arg| arg.spread.is_none())
            .map(|arg| declared_dependencies(&arg.expr))
            .unwrap_or_default();

        let missing: Vec<String> = referenced
            .iter()
            .filter(|name| !declared.contains(name))
            .cloned()
            .collect();
        if missing.is_empty() {
            return;
        }

        let line = self.source_map.lookup_char_pos(node.span.lo).line;
        self.call_sites.push(HookCallSite {
            kind,
            line,
            referenced_identifiers: referenced,
            declared_dependencies: declared,
            missing_dependencies: missing,
        });
    }
}

impl Visit for HookCallFinder<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && let Expr::Ident(ident) = &**callee
            && let Some(kind) = HookKind::from_callee(ident.sym.as_str())
            && !node.args.is_empty()
            && node.args[0].spread.is_none()
        {
            self.analyze_call(kind, node);
        }
        // Nested hook calls (e.g. inside a custom wrapper) are still found.
        node.visit_children_with(self);
    }
}

/// Extract declared dependency names from the second hook argument.
///
/// Only an array literal produces declarations. Each element must resolve
/// to a root identifier: a bare identifier, or a non-computed member chain
/// (`user.name` declares `user`). Any unresolvable element (spread, call,
/// computed access, literal, hole) empties the whole list, so unverifiable
/// arrays over-report rather than under-report.
fn declared_dependencies(expr: &Expr) -> Vec<String> {
    let Expr::Array(array) = expr else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for elem in &array.elems {
        let Some(elem) = elem else {
            return Vec::new();
        };
        if elem.spread.is_some() {
            return Vec::new();
        }
        match root_identifier(&elem.expr) {
            Some(name) => names.push(name),
            None => return Vec::new(),
        }
    }
    names
}

fn root_identifier(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) if !matches!(member.prop, MemberProp::Computed(_)) => {
            root_identifier(&member.obj)
        }
        Expr::OptChain(chain) => match &*chain.base {
            OptChainBase::Member(member) if !matches!(member.prop, MemberProp::Computed(_)) => {
                root_identifier(&member.obj)
            }
            _ => None,
        },
        _ => None,
    }
}
