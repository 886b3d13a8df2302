use std::sync::Arc;

use sqlds::{
    Adapter, AdapterRegistration, BoxError, Literal, SqlEnum, SqlText, Value, Valuer,
    adapter_names, from, i, new_adapter,
};

#[derive(Debug, Clone, Copy, SqlEnum)]
enum Status {
    Active,
    OnHold,
    #[sqlds(rename = "gone")]
    Deleted,
}

#[derive(Debug, Clone, Copy, SqlEnum)]
#[sqlds(rename_all = "SCREAMING_SNAKE_CASE")]
enum Level {
    LowPriority,
    High,
}

#[test]
fn derived_enum_renders_as_text() {
    assert_eq!(Status::OnHold.as_sql_str(), "on_hold");
    assert_eq!(Status::Deleted.as_sql_str(), "gone");
    assert_eq!(Level::LowPriority.as_sql_str(), "LOW_PRIORITY");

    let ds = from("tasks")
        .filter(i("status").eq(Status::OnHold))
        .filter(i("level").in_(vec![
            Literal::from(Level::High),
            Literal::from(&Level::LowPriority),
        ]));

    assert_eq!(
        ds.to_sql().unwrap().sql,
        r#"SELECT * FROM "tasks" WHERE (("status" = 'on_hold') AND ("level" IN ('HIGH', 'LOW_PRIORITY')))"#
    );

    let prepared = ds.prepared_sql().unwrap();
    assert_eq!(
        prepared.sql,
        r#"SELECT * FROM "tasks" WHERE (("status" = ?) AND ("level" IN (?, ?)))"#
    );
    assert_eq!(
        prepared.args,
        vec![
            Value::Text("on_hold".into()),
            Value::Text("HIGH".into()),
            Value::Text("LOW_PRIORITY".into()),
        ]
    );
}

#[test]
fn derived_enum_is_a_valuer() {
    let text = Status::Active.value().unwrap();
    assert_eq!(text, SqlText::Text("active".into()));
    assert_eq!(Valuer::type_name(&Status::Active), "Status");
}

struct Money {
    cents: i64,
}

impl Valuer for Money {
    fn value(&self) -> Result<SqlText, BoxError> {
        if self.cents < 0 {
            return Err("negative amount".into());
        }
        Ok(format!("{}.{:02}", self.cents / 100, self.cents % 100).into())
    }
}

#[test]
fn custom_valuer_output_is_quoted_like_text() {
    let ds = from("orders").filter(i("total").gt(Literal::custom(Money { cents: 1999 })));
    assert_eq!(
        ds.to_sql().unwrap().sql,
        r#"SELECT * FROM "orders" WHERE ("total" > '19.99')"#
    );
}

#[test]
fn custom_valuer_error_is_reported() {
    let ds = from("orders").filter(i("total").gt(Literal::custom(Money { cents: -5 })));
    let err = ds.to_sql().unwrap_err();
    assert!(err.to_string().contains("negative amount"));
}

struct NotSql;

#[test]
fn unsupported_any_value_is_reported() {
    let ds = from("t").filter(i("a").eq(Literal::any(NotSql)));
    let err = ds.prepared_sql().unwrap_err();
    assert!(err.is_unsupported_literal());
}

/// Oracle-style placeholders and bracket-quoted identifiers.
#[derive(Debug)]
struct BracketAdapter;

impl Adapter for BracketAdapter {
    fn name(&self) -> &'static str {
        "bracket_test"
    }

    fn quote_identifier(&self, name: &str, out: &mut String) {
        out.push('[');
        out.push_str(&name.replace(']', "]]"));
        out.push(']');
    }

    fn placeholder(&self, position: usize) -> String {
        format!(":{position}")
    }
}

fn create_bracket() -> Arc<dyn Adapter> {
    Arc::new(BracketAdapter)
}

sqlds::inventory::submit! {
    AdapterRegistration { name: "bracket_test", create: create_bracket }
}

#[test]
fn adapters_registered_downstream_are_found_by_name() {
    assert!(adapter_names().contains(&"bracket_test"));

    let adapter = new_adapter("bracket_test").unwrap();
    assert_eq!(adapter.name(), "bracket_test");

    let ds = from("public.users")
        .with_adapter(adapter)
        .select(["id"])
        .filter(i("name").eq("x"))
        .filter(i("age").gt(3));
    let rendered = ds.prepared_sql().unwrap();
    assert_eq!(
        rendered.sql,
        "SELECT [id] FROM [public].[users] WHERE (([name] = :1) AND ([age] > :2))"
    );
    assert_eq!(rendered.args.len(), 2);
}
