use crate::cli::parser::Commands;
use crate::config::{Config, delimiter_byte};
use crate::core::classifier::{ClassifiedTask, explain_plan, explain_table};
use crate::core::plan::load_plan;
use crate::core::table::TaskTable;
use crate::errors::AppResult;
use crate::models::SequenceId;
use crate::ui::messages::{header, info, warning};
use crate::utils::formatting::bold;
use crate::utils::path::resolve_path;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use std::fs;
use std::io;

/// Show the tire-service / general-service split of a table or plan.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify {
        from_file,
        plan,
        delimiter,
        short,
    } = cmd
    {
        let tasks = match plan {
            Some(plan) => {
                let delimiter = match delimiter {
                    Some(d) => delimiter_byte(d)?,
                    None => cfg.plan_delimiter_byte()?,
                };
                let tasks = load_plan(&resolve_path(plan), delimiter)?;
                explain_plan(&tasks, &cfg.rules)
            }
            None => {
                let text = match from_file {
                    Some(file) => fs::read_to_string(resolve_path(file))?,
                    None => io::read_to_string(io::stdin())?,
                };
                let table = TaskTable::parse(&text.replace('"', ""));
                info(format!(
                    "{} rows, {} layout",
                    table.len(),
                    table.layout().as_str()
                ));
                explain_table(&table, &cfg.rules, &cfg.pending_marker)
            }
        };

        if tasks.is_empty() {
            warning("No pending task found");
            return Ok(());
        }

        if *short {
            print_lists(&tasks);
        } else {
            print_report(&tasks);
        }
    }

    Ok(())
}

fn ids(tasks: &[ClassifiedTask], tire_service: bool) -> Vec<SequenceId> {
    tasks
        .iter()
        .filter(|t| t.tire_service == tire_service)
        .map(|t| t.id)
        .collect()
}

fn join(ids: &[SequenceId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_lists(tasks: &[ClassifiedTask]) {
    println!("tire_service: {}", join(&ids(tasks, true)));
    println!("general: {}", join(&ids(tasks, false)));
}

fn print_report(tasks: &[ClassifiedTask]) {
    for (tire_service, title) in [(true, "Tire service"), (false, "General service")] {
        let group: Vec<&ClassifiedTask> =
            tasks.iter().filter(|t| t.tire_service == tire_service).collect();

        header(format!("{title} ({})", group.len()));
        if group.is_empty() {
            println!();
            continue;
        }

        let mut table = Table::new(vec![
            Column::new("seq", 5),
            Column::new("component", 18),
            Column::new("rule", 24),
            Column::new("description", 60),
        ]);
        for t in &group {
            table.add_row(vec![
                t.id.to_string(),
                t.component.clone(),
                t.rule.clone(),
                t.description.clone(),
            ]);
        }
        print!("{}", table.render());

        let colour = if tire_service {
            Colour::Yellow
        } else {
            Colour::Cyan
        };
        let list: Vec<SequenceId> = group.iter().map(|t| t.id).collect();
        println!("{} {}\n", bold("→"), colour.paint(join(&list)));
    }
}
