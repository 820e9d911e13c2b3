use serde_json::{Map, Value as Json, json};

use crate::{
    ast::Node,
    interpreter::{
        environment::Environment,
        evaluator::core::EvalResult,
        value::core::Value,
    },
};

/// Renders a tree as `{type, identifier?, children?}` objects.
///
/// The tree is only read. Leaves have no `children` key and statement lists
/// and returns have no `identifier` key.
///
/// # Example
/// ```
/// use bean::{Engine, ast::json::to_json};
///
/// let ast = Engine::new().parse("1 + 2").unwrap();
/// let json = to_json(&ast);
///
/// assert_eq!(json["type"], "BinaryOp");
/// assert_eq!(json["identifier"], "+");
/// assert_eq!(json["children"][1]["identifier"], "2");
/// ```
#[must_use]
pub fn to_json(node: &Node) -> Json {
    let mut object = describe(node);

    let children: Vec<Json> = node.children().into_iter().map(to_json).collect();
    if !children.is_empty() {
        object.insert("children".into(), Json::Array(children));
    }

    Json::Object(object)
}

/// Evaluates each top-level statement and renders it with its result.
///
/// Every statement of a `StatementList` root, or the root itself otherwise,
/// is evaluated in order against `env` and rendered like [`to_json`] with an
/// extra `value` key. Evaluation mutates `env` exactly as a normal run would.
///
/// # Errors
/// The first runtime error raised by a statement.
pub fn describe_evaluated(node: &Node, env: &mut Environment) -> EvalResult<Json> {
    let statements: Vec<&Node> = match node {
        Node::StatementList { statements, .. } => statements.iter().collect(),
        other => vec![other],
    };

    let mut rendered = Vec::with_capacity(statements.len());
    for statement in statements {
        let value = statement.eval(env)?;

        let mut json = to_json(statement);
        if let Json::Object(object) = &mut json {
            object.insert("value".into(), value_to_json(&value));
        }
        rendered.push(json);
    }

    Ok(Json::Array(rendered))
}

/// Converts a runtime value to JSON. Non-finite doubles become `null`.
#[must_use]
pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::None => Json::Null,
        Value::Int(n) => json!(n),
        Value::Double(d) => Json::from(*d),
        Value::Reference(_) => value_to_json(&value.get()),
        Value::Native(_) => json!("<native>"),
    }
}

fn describe(node: &Node) -> Map<String, Json> {
    let mut object = Map::new();
    object.insert("type".into(), json!(node.type_name()));
    if let Some(identifier) = node.identifier() {
        object.insert("identifier".into(), json!(identifier));
    }
    object
}
