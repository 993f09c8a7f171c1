// Example walking the whole node tree recursively
//
// cargo run --example tree_dump
// cargo run --example tree_dump --features unicode-escapes

use tinyjson::{parse, JsonValue, Node, ParseError};

fn dump(value: JsonValue<'_>, depth: usize) {
    let indent = depth * 2;
    match (value.name(), value.value()) {
        (Some(name), Some(literal)) => {
            println!("{:indent$}{}: {} = {}", "", name, value.kind(), literal)
        }
        (Some(name), None) => println!("{:indent$}{}: {}", "", name, value.kind()),
        (None, Some(literal)) => println!("{:indent$}{} = {}", "", value.kind(), literal),
        (None, None) => println!("{:indent$}{}", "", value.kind()),
    }
    for child in value.children() {
        dump(child, depth + 1);
    }
}

fn main() -> Result<(), ParseError> {
    let mut text = *br#"{
        "name": "sensor-7",
        "caf\u00e9": true,
        "limits": { "min": -40, "max": 85.5 },
        "samples": [ 21, 22.5, null, "n/a", [ 1e3 ] ]
    }"#;
    let mut nodes = [Node::EMPTY; 16];
    let json = parse(&mut text, &mut nodes)?;
    dump(json.root(), 0);
    println!();
    println!(
        "{} nodes, {} bytes consumed",
        json.nodes_used(),
        json.consumed()
    );
    Ok(())
}
