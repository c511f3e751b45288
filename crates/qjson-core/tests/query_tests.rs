/// Read-path tests: `query` and the typed accessors.
///
/// Fixtures are written as JSON text and decoded through serde, the same way a
/// caller embedding the crate would obtain a document.
use qjson_core::{
    path, query, query_bool, query_list, query_null, query_number, query_object, query_string,
    QjsonError, Value,
};

/// Decode a JSON fixture into a document tree.
fn load(json: &str) -> Value {
    serde_json::from_str(json).expect("fixture must be valid JSON")
}

fn glossary_json() -> &'static str {
    r#"{
        "glossary": {
            "title": "example glossary",
            "GlossDiv": {
                "title": "S",
                "GlossList": {
                    "GlossEntry": {
                        "ID": "SGML",
                        "SortAs": "SGML",
                        "GlossTerm": "Standard Generalized Markup Language",
                        "Acronym": "SGML",
                        "Abbrev": "ISO 8879:1986",
                        "GlossDef": {
                            "para": "A meta-markup language, used to create markup languages such as DocBook.",
                            "GlossSeeAlso": ["GML", "XML"]
                        },
                        "GlossSee": "markup"
                    }
                }
            }
        }
    }"#
}

// ============================================================================
// 1. Root addressing
// ============================================================================

#[test]
fn empty_path_returns_root_map() {
    let doc = load("{}");
    assert_eq!(query(&doc, &path![]).unwrap(), &doc);
}

#[test]
fn empty_path_returns_root_list() {
    let doc = load("[]");
    assert_eq!(query(&doc, &path![]).unwrap(), &Value::List(vec![]));
}

#[test]
fn empty_path_returns_null_root() {
    let doc = load("null");
    assert_eq!(query(&doc, &path![]).unwrap(), &Value::Null);
}

// ============================================================================
// 2. Maps
// ============================================================================

#[test]
fn missing_key_reports_the_key() {
    let doc = load("{}");
    let err = query(&doc, &path!["somekey"]).unwrap_err();
    assert_eq!(err, QjsonError::Key("somekey".into()));
    assert!(
        err.to_string().contains("somekey"),
        "message should name the key: {err}"
    );
}

#[test]
fn index_against_map_is_type_error() {
    let doc = load("{}");
    for p in [path![1], path![-1], path![-1, "aaa"]] {
        assert!(
            matches!(query(&doc, &p), Err(QjsonError::Type(_))),
            "{p} against a map should be a type error"
        );
    }
}

#[test]
fn nested_map_lookup() {
    let doc = load(r#"{"a":{"b":{"c": "d"}}}"#);
    assert!(query(&doc, &path!["a"]).unwrap().as_map().is_some());
    assert!(query(&doc, &path!["a", "b"]).unwrap().as_map().is_some());
    assert_eq!(query(&doc, &path!["a", "b", "c"]).unwrap(), &Value::from("d"));
    assert_eq!(
        query(&doc, &path!["a", "a"]).unwrap_err(),
        QjsonError::Key("a".into())
    );
    assert!(matches!(
        query(&doc, &path!["a", 0]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn deep_glossary_lookup() {
    let doc = load(glossary_json());
    let see_also = path![
        "glossary",
        "GlossDiv",
        "GlossList",
        "GlossEntry",
        "GlossDef",
        "GlossSeeAlso",
        1
    ];
    assert_eq!(query(&doc, &see_also).unwrap(), &Value::from("XML"));
}

// ============================================================================
// 3. Lists
// ============================================================================

#[test]
fn key_against_list_is_type_error() {
    let doc = load("[]");
    assert!(matches!(
        query(&doc, &path!["somekey"]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn out_of_range_index_reports_the_index() {
    let doc = load("[]");
    assert_eq!(query(&doc, &path![0]).unwrap_err(), QjsonError::Index(0));
    assert_eq!(query(&doc, &path![1]).unwrap_err(), QjsonError::Index(1));
    let err = query(&doc, &path![-1]).unwrap_err();
    assert_eq!(err, QjsonError::Index(-1));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn index_error_stops_before_remaining_path() {
    let doc = load("[]");
    assert_eq!(
        query(&doc, &path![-1, "aaa"]).unwrap_err(),
        QjsonError::Index(-1)
    );
}

#[test]
fn list_elements_inside_maps() {
    let doc = load(r#"{"a":{"b":[true, false, null]}}"#);
    assert_eq!(query(&doc, &path!["a", "b", 0]).unwrap(), &Value::Bool(true));
    assert_eq!(query(&doc, &path!["a", "b", 1]).unwrap(), &Value::Bool(false));
    assert_eq!(query(&doc, &path!["a", "b", 2]).unwrap(), &Value::Null);
}

#[test]
fn map_inside_list_inside_map() {
    let doc = load(r#"{"a":{"b":[true, false, {"c": "d"}]}}"#);
    assert_eq!(
        query(&doc, &path!["a", "b", 2, "c"]).unwrap(),
        &Value::from("d")
    );
}

// ============================================================================
// 4. Scalars
// ============================================================================

#[test]
fn key_against_null_is_type_error() {
    let doc = load("null");
    assert!(matches!(
        query(&doc, &path!["aaa"]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn descending_into_string_is_type_error() {
    let doc = load(r#"{"a":"text"}"#);
    let err = query(&doc, &path!["a", 0]).unwrap_err();
    assert!(matches!(err, QjsonError::Type(_)));
    assert!(err.to_string().contains("string"), "message: {err}");
}

#[test]
fn query_method_matches_free_function() {
    let doc = load(r#"{"a":[1,2,3]}"#);
    assert_eq!(doc.query(&path!["a", 2]), query(&doc, &path!["a", 2]));
}

// ============================================================================
// 5. Typed accessors
// ============================================================================

#[test]
fn query_bool_accessor() {
    let doc = load("[true, false, null, false]");
    assert!(query_bool(&doc, &path![0]).unwrap());
    assert!(!query_bool(&doc, &path![1]).unwrap());
    assert_eq!(query_bool(&doc, &path![4]).unwrap_err(), QjsonError::Index(4));
    let err = query_bool(&doc, &path![2]).unwrap_err();
    assert!(matches!(err, QjsonError::Type(_)));
    assert!(err.to_string().contains("bool"), "message: {err}");
}

#[test]
fn query_number_accessor() {
    let doc = load("[0, 1, null, 3]");
    assert_eq!(query_number(&doc, &path![0]).unwrap(), 0.0);
    assert_eq!(query_number(&doc, &path![1]).unwrap(), 1.0);
    assert!(query_number(&doc, &path![4]).is_err());
    let err = query_number(&doc, &path![2]).unwrap_err();
    assert!(matches!(err, QjsonError::Type(_)));
    assert!(err.to_string().contains("number"), "message: {err}");
}

#[test]
fn query_string_accessor() {
    let doc = load(r#"["0", "1", 2, "3"]"#);
    assert_eq!(query_string(&doc, &path![0]).unwrap(), "0");
    assert_eq!(query_string(&doc, &path![1]).unwrap(), "1");
    assert!(query_string(&doc, &path![4]).is_err());
    assert!(matches!(
        query_string(&doc, &path![2]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn query_list_accessor() {
    let doc = load("[[], [true], 2, [true,true,true]]");
    assert!(query_list(&doc, &path![0]).unwrap().is_empty());
    assert_eq!(query_list(&doc, &path![1]).unwrap().len(), 1);
    assert_eq!(query_list(&doc, &path![3]).unwrap().len(), 3);
    assert!(query_list(&doc, &path![4]).is_err());
    assert!(matches!(
        query_list(&doc, &path![2]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn query_object_accessor() {
    let doc = load(r#"[{}, {"a": true}, 2, {"a": true, "b":true, "c": true}]"#);
    assert!(query_object(&doc, &path![0]).unwrap().is_empty());
    assert_eq!(query_object(&doc, &path![1]).unwrap().len(), 1);
    assert_eq!(query_object(&doc, &path![3]).unwrap().len(), 3);
    assert!(query_object(&doc, &path![4]).is_err());
    let err = query_object(&doc, &path![2]).unwrap_err();
    assert!(matches!(err, QjsonError::Type(_)));
    assert!(err.to_string().contains("object"), "message: {err}");
}

#[test]
fn query_null_accessor() {
    let doc = load("[null, null, 0, null]");
    assert!(query_null(&doc, &path![0]).is_ok());
    assert!(query_null(&doc, &path![1]).is_ok());
    assert!(query_null(&doc, &path![4]).is_err());
    assert!(matches!(
        query_null(&doc, &path![2]),
        Err(QjsonError::Type(_))
    ));
}

#[test]
fn typed_accessor_propagates_missing_key() {
    let doc = load(r#"{"a": 1}"#);
    assert_eq!(
        query_number(&doc, &path!["b"]).unwrap_err(),
        QjsonError::Key("b".into())
    );
}
