use colored::Colorize;
use nutrack::api::{CmdMessage, MessageLevel};
use nutrack::error::NutrackError;
use nutrack::model::Record;
use unicode_width::UnicodeWidthStr;

const NUMBER_WIDTH: usize = 10;

pub fn print_menu() {
    println!("\nMenu:");
    println!("1. Load Records from File");
    println!("2. Add Record");
    println!("3. Edit Record");
    println!("4. Delete Record");
    println!("5. Analyze Field");
    println!("6. Filter Records");
    println!("7. Quit");
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(err: &NutrackError) {
    eprintln!("{}", format!("Error: {}", err).red());
}

/// Indexed, column-aligned listing. The index shown is the record's
/// position in the store, i.e. the handle edit and delete take.
pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No records.");
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.food_item.width())
        .max()
        .unwrap_or(0)
        .max("food_item".width());

    println!(
        "{}",
        format!(
            "     {:<name_width$} {:>width$} {:>width$} {:>width$}",
            "food_item",
            "calories",
            "protein",
            "carbs",
            name_width = name_width,
            width = NUMBER_WIDTH,
        )
        .dimmed()
    );

    for (index, record) in records.iter().enumerate() {
        // format! pads by char count; pad by display width instead.
        let padding = name_width.saturating_sub(record.food_item.width());
        println!(
            "{:>3}. {}{} {:>width$} {:>width$} {:>width$}",
            index,
            record.food_item,
            " ".repeat(padding),
            record.calories,
            record.protein,
            record.carbs,
            width = NUMBER_WIDTH,
        );
    }
}
