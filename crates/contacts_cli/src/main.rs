//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `contacts_core` linkage and walk one person through a term.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Set `CONTACTS_LOG_DIR` (absolute path) to also write core logs there.

use contacts_core::{
    Address, CurrentModule, Email, Github, InMemoryPersonRepository, Lesson, Name, PersonBuilder,
    PersonService, Phone, PlannedModule, Tag,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "CONTACTS_LOG_DIR";

fn main() -> ExitCode {
    println!("contacts_core ping={}", contacts_core::ping());
    println!("contacts_core version={}", contacts_core::core_version());

    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = contacts_core::init_logging(contacts_core::default_log_level(), &log_dir)
        {
            eprintln!("logging disabled: {err}");
        }
    }

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> Result<(), Box<dyn Error>> {
    let person = PersonBuilder::new(
        "Alex Yeoh".parse::<Name>()?,
        "87438807".parse::<Phone>()?,
        "alexyeoh@example.com".parse::<Email>()?,
        "Blk 30 Geylang Street 29, #06-40".parse::<Address>()?,
        "alexyeoh".parse::<Github>()?,
    )
    .tags(["friends".parse::<Tag>()?])
    .curr_modules(["CS2103T".parse::<CurrentModule>()?])
    .plan_modules(["CS3230".parse::<PlannedModule>()?])
    .build()?;

    let mut service = PersonService::new(InMemoryPersonRepository::new());
    service.add_person(person)?;

    let lesson: Lesson = "CS2103T FRI 14:00-16:00".parse()?;
    let with_lesson = service.add_lesson(0, lesson.clone())?;
    println!("lesson added: {lesson} ({} total)", with_lesson.lessons().len());

    let promoted = service.end_term()?;
    println!("term ended: {promoted} person(s) promoted");

    for person in service.find_by_prev_mods("cs2103t") {
        println!("{person}");
    }

    service.remove_lesson(0, &lesson)?;
    if let Err(err) = service.remove_lesson(0, &lesson) {
        println!("second removal rejected: {err}");
    }
    Ok(())
}
