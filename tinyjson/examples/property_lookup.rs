// Example looking up named properties in a parsed document
//
// cargo run --example property_lookup

use tinyjson::{parse, Node, NodeKind, ParseError};

fn main() -> Result<(), ParseError> {
    let mut text = *br#"{
        "firstName": "Bidhan",
        "lastName": "Chatterjee",
        "age": 40,
        "address": { "city": "Burdwan", "postalCode": "713102" },
        "phoneList": [
            { "type": "personal", "number": "09832209761" },
            { "type": "fax", "number": "91-342-2567692" }
        ]
    }"#;
    let mut nodes = [Node::EMPTY; 32];
    let json = parse(&mut text, &mut nodes)?;
    let root = json.root();

    if let Some(first_name) = root.property_value("firstName") {
        println!("First name: {}", first_name);
    }
    if let Some(last_name) = root.property_value("lastName") {
        println!("Last name: {}", last_name);
    }
    match root.property("age").map(|age| age.as_i64()) {
        Some(Ok(age)) => println!("Age: {}", age),
        Some(Err(err)) => println!("Age: {}", err),
        None => println!("Age: missing"),
    }
    if let Some(city) = root.property("address").and_then(|a| a.property_value("city")) {
        println!("City: {}", city);
    }

    if let Some(phones) = root.property("phoneList") {
        println!("Phone numbers:");
        for phone in phones.children() {
            if phone.kind() != NodeKind::Object {
                continue;
            }
            let kind = phone.property_value("type").unwrap_or("?");
            let number = phone.property_value("number").unwrap_or("?");
            println!("  {}: {}", kind, number);
        }
    }

    println!();
    println!("Used {} nodes", json.nodes_used());
    Ok(())
}
