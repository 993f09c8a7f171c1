// Tests for the tree shape and accessor API of well-formed documents

use test_log::test;
use tinyjson::{parse, Node, NodeKind};

#[test]
fn test_empty_object() {
    let mut text = *b"{}";
    let mut nodes = [Node::EMPTY; 6];
    let json = parse(&mut text, &mut nodes).unwrap();
    assert_eq!(json.root().kind(), NodeKind::Object);
    assert!(json.root().first_child().is_none());
    assert_eq!(json.nodes_used(), 1);
}

#[test]
fn test_empty_array_member() {
    let mut text = *br#"{"a":[]}"#;
    let mut nodes = [Node::EMPTY; 6];
    let json = parse(&mut text, &mut nodes).unwrap();
    let child = json.root().first_child().unwrap();
    assert_eq!(child.name(), Some("a"));
    assert_eq!(child.kind(), NodeKind::Array);
    assert!(child.first_child().is_none());
}

#[test]
fn test_array_of_empty_objects() {
    let mut text = *br#"{"a":[{},{}]}"#;
    let mut nodes = [Node::EMPTY; 6];
    let json = parse(&mut text, &mut nodes).unwrap();
    let child = json.root().first_child().unwrap();
    assert_eq!(child.name(), Some("a"));
    assert_eq!(child.kind(), NodeKind::Array);

    let mut count = 0;
    for element in child.children() {
        assert_eq!(element.kind(), NodeKind::Object);
        assert_eq!(element.name(), None);
        assert!(element.first_child().is_none());
        count += 1;
    }
    assert_eq!(count, 2);
}

#[test]
fn test_primitive_properties() {
    let mut text = *br#"{
        "max":        9223372036854775807,
        "min":        -9223372036854775808,
        "boolvar0":   false,
        "boolvar1":   true,
        "nullvar":    null,
        "scientific": 5368.32e-3,
        "real":       -0.25,
    }"#;
    let mut nodes = [Node::EMPTY; 8];
    let json = parse(&mut text, &mut nodes).unwrap();
    let root = json.root();

    let boolvar0 = root.property("boolvar0").unwrap();
    assert_eq!(boolvar0.kind(), NodeKind::Boolean);
    assert_eq!(boolvar0.value(), Some("false"));
    assert_eq!(boolvar0.as_bool(), Ok(false));

    let boolvar1 = root.property("boolvar1").unwrap();
    assert_eq!(boolvar1.kind(), NodeKind::Boolean);
    assert_eq!(boolvar1.value(), Some("true"));
    assert_eq!(boolvar1.as_bool(), Ok(true));

    let nullvar = root.property("nullvar").unwrap();
    assert_eq!(nullvar.kind(), NodeKind::Null);
    assert_eq!(nullvar.value(), Some("null"));

    let max = root.property("max").unwrap();
    assert_eq!(max.kind(), NodeKind::Integer);
    assert_eq!(max.value(), Some("9223372036854775807"));
    assert_eq!(max.as_i64(), Ok(i64::MAX));

    let min = root.property("min").unwrap();
    assert_eq!(min.kind(), NodeKind::Integer);
    assert_eq!(min.value(), Some("-9223372036854775808"));
    assert_eq!(min.as_i64(), Ok(i64::MIN));

    let real = root.property("real").unwrap();
    assert_eq!(real.kind(), NodeKind::Real);
    assert_eq!(real.value(), Some("-0.25"));

    let scientific = root.property("scientific").unwrap();
    assert_eq!(scientific.kind(), NodeKind::Real);
    assert_eq!(scientific.value(), Some("5368.32e-3"));

    #[cfg(feature = "float")]
    {
        assert_eq!(real.as_f64(), Ok(-0.25));
        assert_eq!(scientific.as_f64(), Ok(5368.32e-3));
    }
}

#[test]
fn test_text_escapes() {
    let mut text = *br#"{"a":"\tThis text: \"Hello\".\n"}"#;
    let mut nodes = [Node::EMPTY; 2];
    let json = parse(&mut text, &mut nodes).unwrap();
    let a = json.root().property("a").unwrap();
    assert_eq!(a.kind(), NodeKind::Text);
    assert_eq!(a.as_str(), Ok("\tThis text: \"Hello\".\n"));
}

#[test]
fn test_escaped_key() {
    let mut text = *br#"{"say \"hi\"\/bye": 1}"#;
    let mut nodes = [Node::EMPTY; 2];
    let json = parse(&mut text, &mut nodes).unwrap();
    assert_eq!(
        json.root().first_child().and_then(|c| c.name()),
        Some("say \"hi\"/bye")
    );
}

#[test]
fn test_array_elements_in_order() {
    let mut text = *br#"{"array":[ 1, true, null, "Text", 0.3232 ]}"#;
    let mut nodes = [Node::EMPTY; 7];
    let json = parse(&mut text, &mut nodes).unwrap();
    let array = json.root().property("array").unwrap();
    assert_eq!(array.kind(), NodeKind::Array);

    let expected = [
        (NodeKind::Integer, "1"),
        (NodeKind::Boolean, "true"),
        (NodeKind::Null, "null"),
        (NodeKind::Text, "Text"),
        (NodeKind::Real, "0.3232"),
    ];
    let mut element = array.first_child();
    for (kind, value) in expected {
        let current = element.unwrap();
        assert_eq!(current.kind(), kind);
        assert_eq!(current.value(), Some(value));
        assert_eq!(current.name(), None);
        element = current.next_sibling();
    }
    assert!(element.is_none());
}

#[test]
fn test_member_order_matches_source() {
    let mut text = *br#"{"z": 1, "y": [], "x": {}, "w": "s", "v": false}"#;
    let mut nodes = [Node::EMPTY; 6];
    let json = parse(&mut text, &mut nodes).unwrap();
    let members: Vec<_> = json
        .root()
        .children()
        .map(|c| (c.name().unwrap(), c.kind()))
        .collect();
    assert_eq!(
        members,
        [
            ("z", NodeKind::Integer),
            ("y", NodeKind::Array),
            ("x", NodeKind::Object),
            ("w", NodeKind::Text),
            ("v", NodeKind::Boolean),
        ]
    );
}

#[test]
fn test_excess_commas() {
    let accepted: [&[u8]; 7] = [
        br#"{"qwerty":false,}"#,
        br#"{"a":[0,]}"#,
        br#"{"a":[0],}"#,
        br#"{"qwerty":654,}"#,
        br#"{"qwerty":"asdfgh",}"#,
        br#"{,"qwerty":"asdfgh",}"#,
        br#"{,"a":1, , "b":2,,,,}"#,
    ];
    for input in accepted {
        let mut text = input.to_vec();
        let mut nodes = [Node::EMPTY; 4];
        assert!(
            parse(&mut text, &mut nodes).is_ok(),
            "rejected {}",
            String::from_utf8_lossy(input)
        );
    }

    let mut text = *br#"{"a":1, , "b":2,,,,}"#;
    let mut nodes = [Node::EMPTY; 3];
    let json = parse(&mut text, &mut nodes).unwrap();
    let names: Vec<_> = json.root().children().filter_map(|c| c.name()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_trailing_text_is_ignored() {
    let mut text = *br#"{"var":true} text outside json"#;
    let mut nodes = [Node::EMPTY; 2];
    let json = parse(&mut text, &mut nodes).unwrap();
    assert_eq!(json.consumed(), 12);
    let var = json.root().property("var").unwrap();
    assert_eq!(var.kind(), NodeKind::Boolean);
    assert_eq!(var.value(), Some("true"));
    assert_eq!(var.as_bool(), Ok(true));
}

#[test]
fn test_nul_ends_input() {
    let mut text = *b"{\"a\": 1}\0{";
    let mut nodes = [Node::EMPTY; 2];
    assert!(parse(&mut text, &mut nodes).is_ok());

    let mut text = *b"{\"a\": 1\0}";
    assert!(parse(&mut text, &mut nodes).is_err());
}

#[test]
fn test_utf8_passthrough() {
    let mut text = *br#"{"city": "Burdwan \u00e9", "name": "Bidhan"}"#;
    let mut nodes = [Node::EMPTY; 3];
    let json = parse(&mut text, &mut nodes).unwrap();
    #[cfg(not(feature = "unicode-escapes"))]
    assert_eq!(json.root().property_value("city"), Some("Burdwan ?"));
    #[cfg(feature = "unicode-escapes")]
    assert_eq!(json.root().property_value("city"), Some("Burdwan \u{e9}"));

    let mut raw = "{\"name\": \"Jos\u{e9}\"}".as_bytes().to_vec();
    let json = parse(&mut raw, &mut nodes).unwrap();
    assert_eq!(json.root().property_value("name"), Some("Jos\u{e9}"));
}

#[test]
fn test_real_world_document() {
    let mut text = *br#"{
	"firstName": "Bidhan",
	"lastName": "Chatterjee",
	"age": 40,
	"address": {
		"streetAddress": "144 J B Hazra Road",
		"city": "Burdwan",
		"state": "Paschimbanga",
		"postalCode": "713102"
	},
	"phoneList": [
		{ "type": "personal", "number": "09832209761" },
		{ "type": "fax", "number": "91-342-2567692" }
	]
}
"#;
    let mut nodes = [Node::EMPTY; 32];
    let json = parse(&mut text, &mut nodes).unwrap();
    let root = json.root();

    assert_eq!(root.property_value("firstName"), Some("Bidhan"));
    assert_eq!(root.property_value("lastName"), Some("Chatterjee"));
    assert_eq!(root.property("age").unwrap().as_i64(), Ok(40));
    assert_eq!(
        root.property("address")
            .and_then(|a| a.property_value("postalCode")),
        Some("713102")
    );

    let numbers: Vec<_> = root
        .property("phoneList")
        .unwrap()
        .children()
        .filter(|phone| phone.kind() == NodeKind::Object)
        .filter_map(|phone| phone.property_value("number"))
        .collect();
    assert_eq!(numbers, ["09832209761", "91-342-2567692"]);
    assert_eq!(json.nodes_used(), 16);
}
