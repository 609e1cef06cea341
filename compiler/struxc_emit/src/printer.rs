//! The Printer (spec §4.7): a total function from [`CompilationUnit`] to
//! text, with deterministic ordering — using-directives sorted
//! alphabetically, every other declaration order preserved as encountered.

use crate::backend::*;

pub struct Printer {
    indent: usize,
    output: String,
}

impl Printer {
    #[must_use]
    pub fn new() -> Self {
        Printer { indent: 0, output: String::with_capacity(4096) }
    }

    #[must_use]
    pub fn print_unit(unit: &CompilationUnit) -> String {
        let mut p = Printer::new();
        p.unit(unit);
        p.output
    }

    fn indent_in(&mut self) {
        self.indent += 1;
    }

    fn indent_out(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn line(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn unit(&mut self, unit: &CompilationUnit) {
        let mut usings = unit.usings.clone();
        usings.sort();
        usings.dedup();
        for u in &usings {
            self.line(&format!("using {u};"));
        }
        if !usings.is_empty() {
            self.blank();
        }
        self.line(&format!("namespace {}", unit.namespace));
        self.line("{");
        self.indent_in();
        for (i, ty) in unit.types.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.type_decl(ty);
        }
        self.indent_out();
        self.line("}");
    }

    fn modifiers(vis: BVisibility, is_static: bool) -> String {
        let v = match vis {
            BVisibility::Public => "public",
            BVisibility::Private => "private",
            BVisibility::Protected => "protected",
            BVisibility::Internal => "internal",
        };
        if is_static {
            format!("{v} static")
        } else {
            v.to_string()
        }
    }

    fn type_decl(&mut self, decl: &BTypeDecl) {
        let kind = match decl.kind {
            BTypeKind::Class => "class",
            BTypeKind::Interface => "interface",
            BTypeKind::Struct => "struct",
            BTypeKind::Enum => "enum",
        };
        let generics = generic_suffix(&decl.generics);
        let mut header = format!("{} {}{kind} {}{generics}", Self::modifiers(decl.visibility, decl.is_static), if decl.is_partial { "partial " } else { "" }, decl.name);
        let mut bases = Vec::new();
        if let Some(base) = &decl.base {
            bases.push(type_ref(base));
        }
        bases.extend(decl.interfaces.iter().map(type_ref));
        if !bases.is_empty() {
            header.push_str(" : ");
            header.push_str(&bases.join(", "));
        }
        self.line(&header);
        self.line("{");
        self.indent_in();
        if decl.kind == BTypeKind::Enum {
            for (i, (name, init)) in decl.enum_members.iter().enumerate() {
                let comma = if i + 1 < decl.enum_members.len() { "," } else { "" };
                match init {
                    Some(e) => self.line(&format!("{name} = {}{comma}", expr(e))),
                    None => self.line(&format!("{name}{comma}")),
                }
            }
        }
        for (i, member) in decl.members.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            self.member(member);
        }
        self.indent_out();
        self.line("}");
    }

    fn member(&mut self, member: &BMember) {
        match member {
            BMember::Field { name, ty, init, visibility, is_static, is_readonly } => {
                let readonly = if *is_readonly { " readonly" } else { "" };
                let init_str = init.as_ref().map(|e| format!(" = {}", expr(e))).unwrap_or_default();
                self.line(&format!("{}{readonly} {} {name}{init_str};", Self::modifiers(*visibility, *is_static), type_ref(ty)));
            }
            BMember::AutoProperty { name, ty, visibility, is_static, is_readonly, init } => {
                let accessor = if *is_readonly { "{ get; }" } else { "{ get; init; }" };
                let init_str = init.as_ref().map(|e| format!(" = {}", expr(e))).unwrap_or_default();
                self.line(&format!("{} {} {name} {accessor}{init_str}", Self::modifiers(*visibility, *is_static), type_ref(ty)));
            }
            BMember::Property { name, ty, getter, setter, visibility, is_static } => {
                self.line(&format!("{} {} {name}", Self::modifiers(*visibility, *is_static), type_ref(ty)));
                self.line("{");
                self.indent_in();
                if let Some(body) = getter {
                    self.accessor_block("get", body);
                }
                if let Some((_, body)) = setter {
                    self.accessor_block("set", body);
                }
                self.indent_out();
                self.line("}");
            }
            BMember::Method { name, generics, params, return_type, body, visibility, is_static, is_override, is_abstract, is_async } => {
                let mut mods = Self::modifiers(*visibility, *is_static);
                if *is_override {
                    mods.push_str(" override");
                }
                if *is_abstract {
                    mods.push_str(" abstract");
                }
                if *is_async {
                    mods.push_str(" async");
                }
                let header = format!("{mods} {} {name}{}({})", type_ref(return_type), generic_suffix(generics), params_str(params));
                match body {
                    Some(stmts) => {
                        self.line(&header);
                        self.block(stmts);
                    }
                    None => self.line(&format!("{header};")),
                }
            }
            BMember::Constructor { params, base_args, body, visibility } => {
                let mut header = format!("{} __ctor__({})", Self::modifiers(*visibility, false), params_str(params));
                if let Some(args) = base_args {
                    header.push_str(&format!(" : base({})", args_str(args)));
                }
                self.line(&header);
                self.block(body);
            }
            BMember::NestedType(nested) => self.type_decl(nested),
        }
    }

    fn accessor_block(&mut self, name: &str, body: &[BStmt]) {
        if body.is_empty() {
            self.line(&format!("{name};"));
            return;
        }
        self.line(name);
        self.block(body);
    }

    fn block(&mut self, stmts: &[BStmt]) {
        self.line("{");
        self.indent_in();
        for s in stmts {
            self.stmt(s);
        }
        self.indent_out();
        self.line("}");
    }

    fn stmt(&mut self, stmt: &BStmt) {
        match stmt {
            BStmt::Local(decl) => {
                let init = decl.init.as_ref().map(|e| format!(" = {}", expr(e))).unwrap_or_default();
                self.line(&format!("{} {}{init};", type_ref(&decl.ty), decl.name));
            }
            BStmt::Expr(e) => self.line(&format!("{};", expr(e))),
            BStmt::Block(stmts) => self.block(stmts),
            BStmt::If { test, consequent, alternate } => {
                self.line(&format!("if ({})", expr(test)));
                self.single_or_block(consequent);
                if let Some(alt) = alternate {
                    self.line("else");
                    self.single_or_block(alt);
                }
            }
            BStmt::While { test, body } => {
                self.line(&format!("while ({})", expr(test)));
                self.single_or_block(body);
            }
            BStmt::DoWhile { body, test } => {
                self.line("do");
                self.single_or_block(body);
                self.line(&format!("while ({});", expr(test)));
            }
            BStmt::For { init, test, update, body, counter_int32 } => {
                let init_str = init.as_ref().map(|s| for_init_str(s, *counter_int32)).unwrap_or_default();
                let test_str = test.as_ref().map(expr).unwrap_or_default();
                let update_str = update.as_ref().map(expr).unwrap_or_default();
                self.line(&format!("for ({init_str}; {test_str}; {update_str})"));
                self.single_or_block(body);
            }
            BStmt::ForEach { element_name, iterable, body, is_await } => {
                let await_kw = if *is_await { "await " } else { "" };
                self.line(&format!("{await_kw}foreach (var {element_name} in {})", expr(iterable)));
                self.single_or_block(body);
            }
            BStmt::Switch { discriminant, cases } => {
                self.line(&format!("switch ({})", expr(discriminant)));
                self.line("{");
                self.indent_in();
                for case in cases {
                    match &case.test {
                        Some(t) => self.line(&format!("case {}:", expr(t))),
                        None => self.line("default:"),
                    }
                    self.indent_in();
                    for s in &case.body {
                        self.stmt(s);
                    }
                    self.indent_out();
                }
                self.indent_out();
                self.line("}");
            }
            BStmt::Try { block, handler, finalizer } => {
                self.line("try");
                self.block(block);
                if let Some(h) = handler {
                    let header = match (&h.ty, &h.name) {
                        (Some(ty), Some(name)) => format!("catch ({} {name})", type_ref(ty)),
                        (Some(ty), None) => format!("catch ({})", type_ref(ty)),
                        _ => "catch".to_string(),
                    };
                    self.line(&header);
                    self.block(&h.body);
                }
                if let Some(f) = finalizer {
                    self.line("finally");
                    self.block(f);
                }
            }
            BStmt::Throw(e) => match e {
                Some(e) => self.line(&format!("throw {};", expr(e))),
                None => self.line("throw;"),
            },
            BStmt::Return(e) => match e {
                Some(e) => self.line(&format!("return {};", expr(e))),
                None => self.line("return;"),
            },
            BStmt::Break(label) => self.line(&label.as_ref().map(|l| format!("goto {l};")).unwrap_or_else(|| "break;".to_string())),
            BStmt::Continue(_) => self.line("continue;"),
            BStmt::Labeled { label, body } => {
                self.line(&format!("{label}:"));
                self.stmt(body);
            }
            BStmt::Empty => self.line(";"),
        }
    }

    fn single_or_block(&mut self, stmt: &BStmt) {
        match stmt {
            BStmt::Block(stmts) => self.block(stmts),
            BStmt::Empty => self.line(";"),
            other => {
                self.indent_in();
                self.stmt(other);
                self.indent_out();
            }
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Printer::new()
    }
}

fn for_init_str(stmt: &BStmt, counter_int32: bool) -> String {
    match stmt {
        BStmt::Local(decl) => {
            let ty = if counter_int32 { BType::Keyword("int") } else { decl.ty.clone() };
            let init = decl.init.as_ref().map(|e| format!(" = {}", expr(e))).unwrap_or_default();
            format!("{} {}{init}", type_ref(&ty), decl.name)
        }
        BStmt::Expr(e) => expr(e),
        _ => String::new(),
    }
}

fn generic_suffix(generics: &[String]) -> String {
    if generics.is_empty() {
        String::new()
    } else {
        format!("<{}>", generics.join(", "))
    }
}

fn params_str(params: &[BParam]) -> String {
    params
        .iter()
        .map(|p| {
            let mode = match p.mode {
                BArgMode::Value => "",
                BArgMode::Ref => "ref ",
                BArgMode::Out => "out ",
                BArgMode::In => "in ",
            };
            let default = p.default.as_ref().map(|e| format!(" = {}", expr(e))).unwrap_or_default();
            format!("{mode}{} {}{default}", type_ref(&p.ty), p.name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn args_str(args: &[BArg]) -> String {
    args.iter()
        .map(|a| {
            let mode = match a.mode {
                BArgMode::Value => "",
                BArgMode::Ref => "ref ",
                BArgMode::Out => "out ",
                BArgMode::In => "in ",
            };
            format!("{mode}{}", expr(&a.expr))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn type_ref(ty: &BType) -> String {
    match ty {
        BType::Keyword(kw) => (*kw).to_string(),
        BType::Nullable(inner) => format!("{}?", type_ref(inner)),
        BType::Array(elem) => format!("{}[]", type_ref(elem)),
        BType::Tuple(parts) => format!("({})", parts.iter().map(type_ref).collect::<Vec<_>>().join(", ")),
        BType::Named { path, args } => {
            if args.is_empty() {
                path.clone()
            } else {
                format!("{path}<{}>", args.iter().map(type_ref).collect::<Vec<_>>().join(", "))
            }
        }
        BType::Func { params, ret } => {
            if matches!(ret.as_ref(), BType::Keyword("void")) {
                format!("global::System.Action<{}>", params.iter().map(type_ref).collect::<Vec<_>>().join(", "))
            } else if params.is_empty() {
                format!("global::System.Func<{}>", type_ref(ret))
            } else {
                let mut all: Vec<String> = params.iter().map(type_ref).collect();
                all.push(type_ref(ret));
                format!("global::System.Func<{}>", all.join(", "))
            }
        }
    }
}

/// Precedence level; higher binds tighter. Used to decide whether a
/// sub-expression needs parenthesizing once flattened to text.
fn precedence(e: &BExpr) -> u8 {
    match e {
        BExpr::Assign { .. } => 1,
        BExpr::Conditional { .. } => 2,
        BExpr::Binary { op: BBinaryOp::LogicalOr, .. } => 3,
        BExpr::Binary { op: BBinaryOp::LogicalAnd, .. } => 4,
        BExpr::Binary { op: BBinaryOp::BitOr, .. } => 5,
        BExpr::Binary { op: BBinaryOp::BitXor, .. } => 6,
        BExpr::Binary { op: BBinaryOp::BitAnd, .. } => 7,
        BExpr::Binary { op: BBinaryOp::Eq | BBinaryOp::NotEq, .. } => 8,
        BExpr::Binary { op: BBinaryOp::Lt | BBinaryOp::LtEq | BBinaryOp::Gt | BBinaryOp::GtEq, .. } | BExpr::Is { .. } => 9,
        BExpr::Binary { op: BBinaryOp::Shl | BBinaryOp::Shr, .. } => 10,
        BExpr::Binary { op: BBinaryOp::Add | BBinaryOp::Sub, .. } => 11,
        BExpr::Binary { op: BBinaryOp::Mul | BBinaryOp::Div | BBinaryOp::Mod, .. } => 12,
        BExpr::Binary { op: BBinaryOp::NullCoalesce, .. } => 2,
        BExpr::Cast { .. } | BExpr::Unary { .. } | BExpr::PrefixUpdate { .. } | BExpr::Await { .. } | BExpr::TypeOf { .. } => 13,
        BExpr::PostfixUpdate { .. } | BExpr::Call { .. } | BExpr::Member { .. } | BExpr::Index { .. } | BExpr::New { .. } => 14,
        _ => 15,
    }
}

fn sub_expr(parent: &BExpr, child: &BExpr) -> String {
    let s = expr(child);
    if precedence(child) < precedence(parent) {
        format!("({s})")
    } else {
        s
    }
}

#[must_use]
pub fn expr(e: &BExpr) -> String {
    match e {
        BExpr::Null => "null".to_string(),
        BExpr::Bool(b) => b.to_string(),
        BExpr::Int(n) => n.to_string(),
        BExpr::Double(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                format!("{f:?}")
            } else {
                format!("{f}")
            }
        }
        BExpr::String(s) => string_literal(s),
        BExpr::Interpolated { quasis, exprs } => {
            let mut out = String::from("$\"");
            for (i, q) in quasis.iter().enumerate() {
                out.push_str(&escape_in_string(q));
                if let Some(e) = exprs.get(i) {
                    out.push('{');
                    out.push_str(&expr(e));
                    out.push('}');
                }
            }
            out.push('"');
            out
        }
        BExpr::Identifier(name) => name.clone(),
        BExpr::This => "this".to_string(),
        BExpr::Base => "base".to_string(),
        BExpr::Member { object, name, null_conditional } => {
            let op = if *null_conditional { "?." } else { "." };
            format!("{}{op}{name}", sub_expr(e, object))
        }
        BExpr::Index { object, index, null_conditional } => {
            let op = if *null_conditional { "?[" } else { "[" };
            format!("{}{op}{}]", sub_expr(e, object), expr(index))
        }
        BExpr::Call { callee, args, null_conditional } => {
            let op = if *null_conditional { "?." } else { "" };
            let _ = op;
            format!("{}({})", sub_expr(e, callee), args_str(args))
        }
        BExpr::New { ty, args } => format!("new {}({})", type_ref(ty), args_str(args)),
        BExpr::ArrayCreation { element, length, initializer } => match (length, initializer) {
            (Some(len), _) => format!("new {}[{}]", type_ref(element), expr(len)),
            (None, Some(items)) => format!("new {}[] {{ {} }}", type_ref(element), items.iter().map(expr).collect::<Vec<_>>().join(", ")),
            (None, None) => format!("new {}[0]", type_ref(element)),
        },
        BExpr::CollectionInitializer { ty, items } => {
            format!("new {} {{ {} }}", type_ref(ty), items.iter().map(expr).collect::<Vec<_>>().join(", "))
        }
        BExpr::ObjectInitializer { ty, args, members } => {
            let type_part = type_ref(ty);
            let members_part = members.iter().map(|(n, v)| format!("{n} = {}", expr(v))).collect::<Vec<_>>().join(", ");
            // An empty type name with no constructor args is an anonymous
            // object literal (`new { A = 1, B = 2 }`), not a constructor call.
            if type_part.is_empty() && args.is_empty() {
                if members.is_empty() {
                    "new { }".to_string()
                } else {
                    format!("new {{ {members_part} }}")
                }
            } else {
                let args_part = args_str(args);
                if members.is_empty() {
                    format!("new {type_part}({args_part})")
                } else {
                    format!("new {type_part}({args_part}) {{ {members_part} }}")
                }
            }
        }
        BExpr::Assign { op, target, value } => {
            let op_str = match op {
                BAssignOp::Assign => "=",
                BAssignOp::Add => "+=",
                BAssignOp::Sub => "-=",
                BAssignOp::Mul => "*=",
                BAssignOp::Div => "/=",
                BAssignOp::Mod => "%=",
                BAssignOp::NullCoalesce => "??=",
                BAssignOp::LogicalAnd => "&&=",
                BAssignOp::LogicalOr => "||=",
            };
            format!("{} {op_str} {}", expr(target), sub_expr(e, value))
        }
        BExpr::Binary { op, left, right } => {
            let op_str = match op {
                BBinaryOp::Add => "+",
                BBinaryOp::Sub => "-",
                BBinaryOp::Mul => "*",
                BBinaryOp::Div => "/",
                BBinaryOp::Mod => "%",
                BBinaryOp::Eq => "==",
                BBinaryOp::NotEq => "!=",
                BBinaryOp::Lt => "<",
                BBinaryOp::LtEq => "<=",
                BBinaryOp::Gt => ">",
                BBinaryOp::GtEq => ">=",
                BBinaryOp::BitAnd => "&",
                BBinaryOp::BitOr => "|",
                BBinaryOp::BitXor => "^",
                BBinaryOp::Shl => "<<",
                BBinaryOp::Shr => ">>",
                BBinaryOp::LogicalAnd => "&&",
                BBinaryOp::LogicalOr => "||",
                BBinaryOp::NullCoalesce => "??",
            };
            format!("{} {op_str} {}", sub_expr(e, left), sub_expr(e, right))
        }
        BExpr::Unary { op, operand } => {
            let op_str = match op {
                BUnaryOp::Neg => "-",
                BUnaryOp::Not => "!",
                BUnaryOp::BitNot => "~",
            };
            format!("{op_str}{}", sub_expr(e, operand))
        }
        BExpr::PrefixUpdate { increment, operand } => format!("{}{}", if *increment { "++" } else { "--" }, sub_expr(e, operand)),
        BExpr::PostfixUpdate { increment, operand } => format!("{}{}", sub_expr(e, operand), if *increment { "++" } else { "--" }),
        BExpr::Conditional { test, consequent, alternate } => {
            format!("{} ? {} : {}", sub_expr(e, test), sub_expr(e, consequent), sub_expr(e, alternate))
        }
        BExpr::Lambda { params, body, is_async } => {
            let prefix = if *is_async { "async " } else { "" };
            let params_part = if params.len() == 1 { params[0].clone() } else { format!("({})", params.join(", ")) };
            match body {
                LambdaBody::Expr(e) => format!("{prefix}{params_part} => {}", expr(e)),
                LambdaBody::Block(stmts) => {
                    let mut p = Printer::new();
                    p.block(stmts);
                    format!("{prefix}{params_part} =>\n{}", p.output.trim_end())
                }
            }
        }
        BExpr::Cast { ty, expr: inner } => format!("({}){}", type_ref(ty), sub_expr(e, inner)),
        BExpr::TypeOf { ty } => format!("typeof({})", type_ref(ty)),
        BExpr::Is { expr: inner, ty } => format!("{} is {}", sub_expr(e, inner), type_ref(ty)),
        BExpr::Await { expr: inner } => format!("await {}", sub_expr(e, inner)),
        BExpr::Spread(inner) => format!("..{}", expr(inner)),
        BExpr::Paren(inner) => format!("({})", expr(inner)),
    }
}

fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    out.push_str(&escape_in_string(s));
    out.push('"');
    out
}

fn escape_in_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_precedence_parenthesizes_lower_precedence_child() {
        let e = BExpr::Binary {
            op: BBinaryOp::Mul,
            left: Box::new(BExpr::Binary { op: BBinaryOp::Add, left: Box::new(BExpr::Int(1)), right: Box::new(BExpr::Int(2)) }),
            right: Box::new(BExpr::Int(3)),
        };
        assert_eq!(expr(&e), "(1 + 2) * 3");
    }

    #[test]
    fn call_with_simple_args_has_no_parens() {
        let e = BExpr::Call { callee: Box::new(BExpr::Identifier("foo".to_string())), args: vec![BArg::value(BExpr::Int(1))], null_conditional: false };
        assert_eq!(expr(&e), "foo(1)");
    }

    #[test]
    fn string_literal_escapes_quotes() {
        assert_eq!(expr(&BExpr::String("a\"b".to_string())), "\"a\\\"b\"");
    }

    #[test]
    fn type_ref_renders_generic_func() {
        let ty = BType::Func { params: vec![BType::Keyword("int")], ret: Box::new(BType::Keyword("bool")) };
        assert_eq!(type_ref(&ty), "global::System.Func<int, bool>");
    }
}
