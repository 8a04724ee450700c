use comfy_table::{ContentArrangement, Table};
use dp_core::ItemMap;

use super::StoryArgs;

pub fn run(args: &StoryArgs) -> Result<(), String> {
    let story = args.load()?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Jumps", "Payment", "Keys", "Award"]);

    for point in story.graph.points() {
        let jumps = if point.jumps().is_empty() {
            "—".to_string()
        } else {
            point.jumps().join(", ")
        };
        table.add_row(vec![
            point.name().to_string(),
            jumps,
            cell(point.entry_payment()),
            cell(point.entry_keys()),
            cell(point.entry_award()),
        ]);
    }

    if let Some(title) = &story.title {
        println!("  {title}");
    }
    println!("{table}");
    println!();
    println!("  {} points", story.graph.len());

    Ok(())
}

fn cell(items: &ItemMap) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.to_string()
    }
}
