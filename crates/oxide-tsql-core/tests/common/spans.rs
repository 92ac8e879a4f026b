//! Walks a parsed tree and checks that every node's span lies within its
//! parent's span and within the source.

use oxide_tsql_core::ast::{
    AlterTableAction, CaseExpression, CastExpression, ColumnDefinition, ConstraintKind,
    DataType, DeclareBody, ExecuteArgument, Expr, ForeignKeyReference, FromClause, FunctionCall,
    Identifier, InList, InsertSource, OrderByItem, SelectColumn, SelectStatement,
    SetOptionValue, Statement, StatementBlock, SyntaxNode, TableElement, TableFactor,
    TableSource, TopClause,
};
use oxide_tsql_core::Span;

/// Asserts the span invariants for every node of `statements`.
pub fn assert_spans_nested(source: &str, statements: &[Statement]) {
    let root = Span::new(0, source.len());
    let mut previous_end = 0;
    for statement in statements {
        statement_spans(root, statement);
        let span = statement.span();
        assert!(
            span.start >= previous_end,
            "statement {span:?} overlaps its predecessor in {source:?}"
        );
        previous_end = span.end;
    }
}

/// Checks `child` against `parent` and returns `child` for further descent.
fn within(parent: Span, child: Span, what: &str) -> Span {
    assert!(child.start <= child.end, "{what} has inverted span {child:?}");
    assert!(
        parent.contains(child),
        "{what} span {child:?} escapes its parent {parent:?}"
    );
    child
}

fn identifier(parent: Span, ident: &Identifier) {
    within(parent, ident.span, "identifier");
}

fn identifiers(parent: Span, idents: &[Identifier]) {
    for ident in idents {
        identifier(parent, ident);
    }
}

fn statement_spans(parent: Span, statement: &Statement) {
    let span = within(parent, statement.span(), "statement");
    match statement {
        Statement::Select(select) => select_spans(span, select),
        Statement::Set(set) => {
            identifier(span, &set.target);
            expr_spans(span, &set.expression);
        }
        Statement::SetOption(option) => {
            if let Some(target) = &option.target {
                identifier(span, target);
            }
            if let SetOptionValue::Value(value) = &option.value {
                expr_spans(span, value);
            }
        }
        Statement::Declare(declare) => match &declare.body {
            DeclareBody::Variables(variables) => {
                for variable in variables {
                    let inner = within(span, variable.span, "variable declaration");
                    identifier(inner, &variable.name);
                    data_type_spans(inner, &variable.data_type);
                    if let Some(init) = &variable.initializer {
                        expr_spans(inner, init);
                    }
                }
            }
            DeclareBody::Table(table) => {
                let inner = within(span, table.span, "table declaration");
                identifier(inner, &table.name);
                elements_spans(inner, &table.elements);
            }
        },
        Statement::Use(stmt) => identifier(span, &stmt.database),
        Statement::Goto(stmt) => identifier(span, &stmt.label),
        Statement::Label(stmt) => identifier(span, &stmt.label),
        Statement::While(stmt) => {
            expr_spans(span, &stmt.predicate);
            statement_spans(span, &stmt.body);
        }
        Statement::If(stmt) => {
            expr_spans(span, &stmt.predicate);
            statement_spans(span, &stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                statement_spans(span, else_branch);
                assert!(stmt.then_branch.span().end <= else_branch.span().start);
            }
        }
        Statement::Block(block) => block_spans(span, block),
        Statement::Insert(insert) => {
            if let Some(top) = &insert.top {
                top_spans(span, top);
            }
            identifier(span, &insert.target);
            identifiers(span, &insert.columns);
            match &insert.source {
                InsertSource::Values(rows) => {
                    for value in rows.iter().flatten() {
                        expr_spans(span, value);
                    }
                }
                InsertSource::Select(select) => select_spans(span, select),
            }
        }
        Statement::Delete(delete) => {
            if let Some(top) = &delete.top {
                top_spans(span, top);
            }
            identifier(span, &delete.target);
            if let Some(from) = &delete.from {
                from_spans(span, from);
            }
            if let Some(predicate) = &delete.where_clause {
                expr_spans(span, predicate);
            }
        }
        Statement::TruncateTable(stmt) => identifier(span, &stmt.table),
        Statement::CreateTable(table) => {
            identifier(span, &table.name);
            elements_spans(span, &table.elements);
        }
        Statement::AlterTable(alter) => {
            identifier(span, &alter.table);
            match &alter.action {
                AlterTableAction::Add(elements) => elements_spans(span, elements),
                AlterTableAction::DropColumns(names) | AlterTableAction::DropConstraints(names) => {
                    identifiers(span, names);
                }
                AlterTableAction::AlterColumn(column) => column_spans(span, column),
            }
        }
        Statement::Procedure(procedure) => {
            identifier(span, &procedure.name);
            for parameter in &procedure.parameters {
                let inner = within(span, parameter.span, "parameter");
                identifier(inner, &parameter.name);
                data_type_spans(inner, &parameter.data_type);
                if let Some(default) = &parameter.default {
                    expr_spans(inner, default);
                }
            }
            identifiers(span, &procedure.options);
            let body = within(span, procedure.body.span, "procedure body");
            block_spans(body, &procedure.body);
        }
        Statement::View(view) => {
            identifier(span, &view.name);
            identifiers(span, &view.columns);
            identifiers(span, &view.options);
            select_spans(span, &view.query);
        }
        Statement::ExecuteProcedure(call) => {
            if let Some(variable) = &call.return_variable {
                identifier(span, variable);
            }
            identifier(span, &call.procedure);
            for argument in &call.arguments {
                argument_spans(span, argument);
            }
            identifiers(span, &call.options);
        }
        Statement::ExecuteString(exec) => {
            expr_spans(span, &exec.query);
            if let Some((_, principal)) = &exec.context {
                expr_spans(span, principal);
            }
            if let Some(server) = &exec.linked_server {
                identifier(span, server);
            }
        }
        Statement::Drop(stmt) => identifiers(span, &stmt.targets),
        Statement::Print(stmt) => expr_spans(span, &stmt.expression),
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                expr_spans(span, value);
            }
        }
        Statement::Go(_) | Statement::Break(_) | Statement::Continue(_) => {}
    }
}

fn block_spans(span: Span, block: &StatementBlock) {
    let mut previous_end = span.start;
    for statement in &block.statements {
        statement_spans(span, statement);
        assert!(statement.span().start >= previous_end);
        previous_end = statement.span().end;
    }
}

fn argument_spans(parent: Span, argument: &ExecuteArgument) {
    let span = within(parent, argument.span, "argument");
    if let Some(name) = &argument.name {
        identifier(span, name);
    }
    if let Some(value) = &argument.value {
        expr_spans(span, value);
    }
}

fn data_type_spans(parent: Span, data_type: &DataType) {
    let span = within(parent, data_type.span, "data type");
    identifier(span, &data_type.name);
}

fn elements_spans(parent: Span, elements: &[TableElement]) {
    for element in elements {
        let span = within(parent, element.span(), "table element");
        match element {
            TableElement::Column(column) => column_spans(span, column),
            TableElement::Computed(computed) => {
                identifier(span, &computed.name);
                expr_spans(span, &computed.expression);
            }
            TableElement::Constraint(constraint) => {
                if let Some(name) = &constraint.name {
                    identifier(span, name);
                }
                match &constraint.kind {
                    ConstraintKind::PrimaryKey { columns, .. }
                    | ConstraintKind::Unique { columns, .. } => {
                        for column in columns {
                            identifier(span, &column.name);
                        }
                    }
                    ConstraintKind::Check(predicate) => expr_spans(span, predicate),
                    ConstraintKind::ForeignKey {
                        columns,
                        references,
                    } => {
                        identifiers(span, columns);
                        reference_spans(span, references);
                    }
                }
            }
            TableElement::Index(index) => {
                identifier(span, &index.name);
                for column in &index.columns {
                    identifier(span, &column.name);
                }
            }
        }
    }
}

fn column_spans(parent: Span, column: &ColumnDefinition) {
    let span = within(parent, column.span, "column definition");
    identifier(span, &column.name);
    data_type_spans(span, &column.data_type);
    if let Some(collation) = &column.collation {
        identifier(span, collation);
    }
    if let Some(default) = &column.default {
        expr_spans(span, default);
    }
    if let Some(check) = &column.check {
        expr_spans(span, check);
    }
    if let Some(references) = &column.references {
        reference_spans(span, references);
    }
}

fn reference_spans(span: Span, references: &ForeignKeyReference) {
    identifier(span, &references.table);
    identifiers(span, &references.columns);
}

fn top_spans(parent: Span, top: &TopClause) {
    let span = within(parent, top.span, "TOP");
    expr_spans(span, &top.value);
}

fn order_by_spans(parent: Span, items: &[OrderByItem]) {
    for item in items {
        let span = within(parent, item.span, "ORDER BY item");
        expr_spans(span, &item.expr);
    }
}

fn select_spans(parent: Span, select: &SelectStatement) {
    let span = within(parent, select.span, "SELECT");
    if let Some(top) = &select.top {
        top_spans(span, top);
    }
    for column in &select.columns {
        let inner = within(span, column.span(), "column");
        match column {
            SelectColumn::Reference(ident) => identifier(inner, ident),
            SelectColumn::Expression(column) => {
                expr_spans(inner, &column.expression);
                if let Some(alias) = &column.alias {
                    identifier(inner, alias);
                }
            }
        }
    }
    if let Some(into) = &select.into {
        let inner = within(span, into.span, "INTO");
        identifier(inner, &into.target);
    }
    if let Some(from) = &select.from {
        from_spans(span, from);
    }
    for expr in select.where_clause.iter().chain(&select.group_by).chain(&select.having) {
        expr_spans(span, expr);
    }
    for union in &select.unions {
        let inner = within(span, union.span, "UNION");
        select_spans(inner, &union.select);
    }
    order_by_spans(span, &select.order_by);
}

fn from_spans(parent: Span, from: &FromClause) {
    let span = within(parent, from.span, "FROM");
    for source in &from.sources {
        source_spans(span, source);
    }
}

fn source_spans(parent: Span, source: &TableSource) {
    let span = within(parent, source.span, "table source");
    let factor = within(span, source.factor_span(), "table factor");
    match &source.factor {
        TableFactor::Named(name) => identifier(factor, name),
        TableFactor::Function(call) => function_spans(factor, call),
        TableFactor::Derived { query, .. } => select_spans(factor, query),
    }
    if let Some(alias) = &source.alias {
        identifier(span, alias);
    }
    identifiers(span, &source.hints);
    for join in &source.joins {
        let inner = within(span, join.span, "join");
        source_spans(inner, &join.source);
        if let Some(on) = &join.on {
            expr_spans(inner, on);
        }
    }
}

fn function_spans(parent: Span, call: &FunctionCall) {
    let span = within(parent, call.span, "function call");
    identifier(span, &call.name);
    for arg in &call.args {
        expr_spans(span, arg);
    }
    if let Some(over) = &call.over {
        let inner = within(span, over.span, "OVER");
        for expr in &over.partition_by {
            expr_spans(inner, expr);
        }
        order_by_spans(inner, &over.order_by);
    }
}

fn case_spans(span: Span, case: &CaseExpression) {
    if let Some(operand) = &case.operand {
        expr_spans(span, operand);
    }
    for when in &case.when_clauses {
        let inner = within(span, when.span, "WHEN");
        expr_spans(inner, &when.condition);
        expr_spans(inner, &when.result);
    }
    if let Some(result) = &case.else_result {
        expr_spans(span, result);
    }
}

fn cast_spans(span: Span, cast: &CastExpression) {
    expr_spans(span, &cast.expr);
    data_type_spans(span, &cast.data_type);
    if let Some(style) = &cast.style {
        expr_spans(span, style);
    }
}

fn expr_spans(parent: Span, expr: &Expr) {
    let span = within(parent, expr.span(), "expression");
    match expr {
        Expr::Identifier(ident) => identifier(span, ident),
        Expr::Literal { .. } => {}
        Expr::Unary { operand, .. } => expr_spans(span, operand),
        Expr::Binary { left, right, .. } => {
            expr_spans(span, left);
            expr_spans(span, right);
            assert!(left.span().end <= right.span().start);
        }
        Expr::Paren { expr, .. } => expr_spans(span, expr),
        Expr::Function(call) => function_spans(span, call),
        Expr::Case(case) => case_spans(span, case),
        Expr::Subquery { query, .. } | Expr::Exists { query, .. } => select_spans(span, query),
        Expr::Cast(cast) => cast_spans(span, cast),
        Expr::IsNull { expr, .. } => expr_spans(span, expr),
        Expr::Between {
            expr, low, high, ..
        } => {
            for operand in [expr, low, high] {
                expr_spans(span, operand);
            }
        }
        Expr::In { expr, list, .. } => {
            expr_spans(span, expr);
            match list {
                InList::Values(values) => {
                    for value in values {
                        expr_spans(span, value);
                    }
                }
                InList::Subquery(query) => select_spans(span, query),
            }
        }
        Expr::Like {
            expr,
            pattern,
            escape,
            ..
        } => {
            expr_spans(span, expr);
            expr_spans(span, pattern);
            if let Some(escape) = escape {
                expr_spans(span, escape);
            }
        }
        Expr::Wildcard { qualifier, .. } => {
            if let Some(qualifier) = qualifier {
                identifier(span, qualifier);
            }
        }
    }
}
