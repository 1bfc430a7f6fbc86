//! Free-identifier extraction for hook callbacks.
//!
//! Computes the set of names a callback reads that are not bound anywhere
//! inside the callback itself. Two passes over the same sub-tree are
//! required because a nested function can be declared after its first use
//! in traversal order.

use std::collections::HashSet;

use swc_ecma_ast::{
    ArrowExpr, BindingIdent, CatchClause, ClassDecl, Expr, FnDecl, FnExpr, Ident, JSXElementName,
    MemberExpr, MemberProp, ObjectPatProp, Param, Pat, TsType, TsTypeAnn, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

/// Extract the free identifiers of `callback`, deduplicated, in first-seen
/// order. The extractor never looks outside the given sub-tree.
pub fn extract_free_identifiers(callback: &Expr) -> Vec<String> {
    // Pass 1: collect every name bound inside the callback.
    let mut decls = DeclCollector::default();
    callback.visit_with(&mut decls);

    // Pass 2: record identifier reads not covered by a local binding.
    let mut refs = RefCollector {
        locally_declared: decls.names,
        seen: HashSet::new(),
        found: Vec::new(),
    };
    callback.visit_with(&mut refs);
    refs.found
}

/// Records every name introduced by a declaration at any nesting depth:
/// named functions, classes, variable declarators, parameters, and catch
/// clause bindings, destructuring patterns included.
#[derive(Default)]
struct DeclCollector {
    names: HashSet<String>,
}

fn collect_pat_names(pat: &Pat, names: &mut HashSet<String>) {
    match pat {
        Pat::Ident(binding) => {
            names.insert(binding.id.sym.to_string());
        }
        Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                collect_pat_names(elem, names);
            }
        }
        Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => collect_pat_names(&kv.value, names),
                    ObjectPatProp::Assign(assign) => {
                        names.insert(assign.key.id.sym.to_string());
                    }
                    ObjectPatProp::Rest(rest) => collect_pat_names(&rest.arg, names),
                }
            }
        }
        Pat::Assign(assign) => collect_pat_names(&assign.left, names),
        Pat::Rest(rest) => collect_pat_names(&rest.arg, names),
        Pat::Expr(_) | Pat::Invalid(_) => {}
    }
}

impl Visit for DeclCollector {
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        self.names.insert(node.ident.sym.to_string());
        node.visit_children_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        self.names.insert(node.ident.sym.to_string());
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        collect_pat_names(&node.name, &mut self.names);
        node.visit_children_with(self);
    }

    fn visit_param(&mut self, node: &Param) {
        collect_pat_names(&node.pat, &mut self.names);
        node.visit_children_with(self);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        // Arrow params are bare patterns, not `Param` nodes.
        for pat in &node.params {
            collect_pat_names(pat, &mut self.names);
        }
        node.visit_children_with(self);
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        if let Some(param) = &node.param {
            collect_pat_names(param, &mut self.names);
        }
        node.visit_children_with(self);
    }
}

/// Records identifier reads, skipping declaration sites, member-access
/// property names, object-literal keys, TS type positions, and intrinsic
/// JSX tag names.
struct RefCollector {
    locally_declared: HashSet<String>,
    seen: HashSet<String>,
    found: Vec<String>,
}

impl RefCollector {
    fn record(&mut self, name: &str) {
        if self.locally_declared.contains(name) {
            return;
        }
        if self.seen.insert(name.to_string()) {
            self.found.push(name.to_string());
        }
    }
}

impl Visit for RefCollector {
    fn visit_ident(&mut self, node: &Ident) {
        self.record(node.sym.as_str());
    }

    // Binding identifiers introduce names; they are not reads.
    fn visit_binding_ident(&mut self, _node: &BindingIdent) {}

    fn visit_fn_decl(&mut self, node: &FnDecl) {
        // Skip the declared name, descend into params and body.
        node.function.visit_with(self);
    }

    fn visit_class_decl(&mut self, node: &ClassDecl) {
        node.class.visit_with(self);
    }

    fn visit_fn_expr(&mut self, node: &FnExpr) {
        // A function expression's own name binds only inside its body.
        node.function.visit_with(self);
    }

    fn visit_member_expr(&mut self, node: &MemberExpr) {
        // Only the object root is a dependency candidate: `console.log`
        // reads `console`, never `log`. Computed keys are ordinary reads.
        node.obj.visit_with(self);
        if let MemberProp::Computed(computed) = &node.prop {
            computed.visit_with(self);
        }
    }

    fn visit_jsx_element_name(&mut self, node: &JSXElementName) {
        // Lowercase element names are intrinsic tags (`<div>`), not
        // references to values in scope.
        if let JSXElementName::Ident(ident) = node
            && ident.sym.chars().next().is_some_and(|c| c.is_ascii_lowercase())
        {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_ts_type(&mut self, _node: &TsType) {}

    fn visit_ts_type_ann(&mut self, _node: &TsTypeAnn) {}
}
