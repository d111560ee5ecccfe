use std::io;

use colored::Colorize;
use nutrack::api::{CmdResult, NutrackApi};
use nutrack::error::Result;
use nutrack::model::{Field, FieldValue, NumericField};
use nutrack::store::file::CsvTable;

mod menu;
mod print;

use menu::Prompter;

/// The backing table, a fixed name in the working directory.
const TABLE_FILE: &str = "food_nutrition.csv";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut api = NutrackApi::new(CsvTable::new(TABLE_FILE));
    let mut input = Prompter::new();

    loop {
        print::print_menu();
        let Some(choice) = input.prompt("Enter your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => handle_load(&mut api),
            "2" => handle_add(&mut api, &mut input)?,
            "3" => handle_edit(&mut api, &mut input)?,
            "4" => handle_delete(&mut api, &mut input)?,
            "5" => handle_analyze(&api, &mut input)?,
            "6" => handle_filter(&api, &mut input)?,
            "7" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("{}", "Invalid choice. Please try again.".red()),
        }
    }
    Ok(())
}

/// Print a command's outcome; operation errors are reported and the menu
/// loop carries on.
fn report(outcome: Result<CmdResult>) -> Option<CmdResult> {
    match outcome {
        Ok(result) => {
            print::print_messages(&result.messages);
            Some(result)
        }
        Err(e) => {
            print::print_error(&e);
            None
        }
    }
}

fn handle_load(api: &mut NutrackApi<CsvTable>) {
    if let Some(result) = report(api.load()) {
        print::print_records(&result.records);
    }
}

fn handle_add(api: &mut NutrackApi<CsvTable>, input: &mut Prompter) -> io::Result<()> {
    let Some((name, calories, protein, carbs)) = prompt_record(input)? else {
        return Ok(());
    };
    report(api.add(name, calories, protein, carbs));
    Ok(())
}

fn handle_edit(api: &mut NutrackApi<CsvTable>, input: &mut Prompter) -> io::Result<()> {
    let Some(index) = input.prompt_index("Enter the index to edit: ")? else {
        return Ok(());
    };
    let Some((name, calories, protein, carbs)) = prompt_record(input)? else {
        return Ok(());
    };
    report(api.edit(index, name, calories, protein, carbs));
    Ok(())
}

fn handle_delete(api: &mut NutrackApi<CsvTable>, input: &mut Prompter) -> io::Result<()> {
    let Some(index) = input.prompt_index("Enter the index to delete: ")? else {
        return Ok(());
    };
    report(api.delete(index));
    Ok(())
}

fn handle_analyze(api: &NutrackApi<CsvTable>, input: &mut Prompter) -> io::Result<()> {
    let Some(raw) = input.prompt("Enter the field for analysis (calories, protein, carbs): ")?
    else {
        return Ok(());
    };
    match raw.parse::<NumericField>() {
        Ok(field) => {
            report(api.analyze(field));
        }
        Err(e) => print::print_error(&e),
    }
    Ok(())
}

fn handle_filter(api: &NutrackApi<CsvTable>, input: &mut Prompter) -> io::Result<()> {
    let Some(raw) =
        input.prompt("Enter the field for filtering (food_item, calories, protein, carbs): ")?
    else {
        return Ok(());
    };
    let field = match raw.parse::<Field>() {
        Ok(field) => field,
        Err(e) => {
            print::print_error(&e);
            return Ok(());
        }
    };

    // Coerce the filter value to the field's type here, so numeric filters
    // compare numbers rather than text.
    let label = format!("Enter the value to filter by {}: ", field);
    let value = if field.numeric().is_some() {
        let Some(number) = input.prompt_number(&label)? else {
            return Ok(());
        };
        FieldValue::Number(number)
    } else {
        let Some(text) = input.prompt(&label)? else {
            return Ok(());
        };
        FieldValue::Text(text)
    };

    if let Some(result) = report(api.filter(field, &value)) {
        print::print_records(&result.records);
    }
    Ok(())
}

fn prompt_record(input: &mut Prompter) -> io::Result<Option<(String, f64, f64, f64)>> {
    let Some(name) = input.prompt("Enter Food Item: ")? else {
        return Ok(None);
    };
    let Some(calories) = input.prompt_number("Enter Calories: ")? else {
        return Ok(None);
    };
    let Some(protein) = input.prompt_number("Enter Protein: ")? else {
        return Ok(None);
    };
    let Some(carbs) = input.prompt_number("Enter Carbs: ")? else {
        return Ok(None);
    };
    Ok(Some((name, calories, protein, carbs)))
}
