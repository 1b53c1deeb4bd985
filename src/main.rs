//! Interactive text-menu front end.
//!
//! A thin caller over the core services: it gathers input lines, invokes
//! the backend, and prints the result. All business rules live in the
//! library.

use anyhow::{anyhow, Result};
use log::info;
use std::io::{self, Write};

use student_records::domain::models::student::Student;
use student_records::domain::models::subject::Grade;
use student_records::domain::validation::{is_valid_email, is_valid_password};
use student_records::Backend;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting student records CLI");

    let backend = Backend::new()?;
    main_menu(&backend)?;
    Ok(())
}

/// Print a prompt and read one trimmed line; errors once stdin closes.
fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(anyhow!("input stream closed"));
    }
    Ok(line.trim().to_string())
}

fn main_menu(backend: &Backend) -> Result<()> {
    loop {
        println!("\n--- University System ---");
        let choice = prompt("(A)dmin, (S)tudent, or X: ")?.to_lowercase();
        match choice.as_str() {
            "a" => admin_menu(backend)?,
            "s" => student_menu(backend)?,
            "x" => {
                println!("Thank You");
                return Ok(());
            }
            _ => println!("Invalid option. Please try again."),
        }
    }
}

fn student_menu(backend: &Backend) -> Result<()> {
    loop {
        println!("\n--- Student System ---");
        let choice = prompt("(l) login, (r) register, (x) exit: ")?.to_lowercase();
        match choice.as_str() {
            "l" => {
                println!("Student Sign In");
                let email = prompt("Enter email: ")?;
                let password = prompt("Enter password: ")?;
                match backend.student_service.authenticate(&email, &password) {
                    Ok(student) => {
                        println!("Login successful.");
                        subject_menu(backend, student)?;
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "r" => register_flow(backend)?,
            "x" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}

fn register_flow(backend: &Backend) -> Result<()> {
    println!("Student Sign Up");

    // Re-prompt until the formats pass, then register.
    let email = loop {
        let email = prompt("Enter email: ")?;
        if is_valid_email(&email) {
            break email;
        }
        println!("Invalid email format. Please use firstname.lastname@university.com format.");
    };

    let password = loop {
        let password = prompt("Enter password: ")?;
        if is_valid_password(&password) {
            println!("Email and password formats acceptable.");
            break password;
        }
        println!("Invalid password format. Password must start with an uppercase letter, contain at least five letters, and end with three or more digits.");
    };

    let name = prompt("Enter name: ")?;
    match backend.student_service.register(&name, &email, &password) {
        Ok(student) => println!(
            "Student {} successfully registered with ID: {}.",
            student.name, student.id
        ),
        Err(e) => println!("{}", e),
    }
    Ok(())
}

fn subject_menu(backend: &Backend, mut student: Student) -> Result<()> {
    loop {
        println!("\n--- Subject Enrolment System ---");
        let choice =
            prompt("(c) change password, (e) enroll, (r) remove, (s) show, (x) exit: ")?
                .to_lowercase();
        match choice.as_str() {
            "c" => {
                println!("Updating Password");
                let new_password = prompt("New Password: ")?;
                loop {
                    let confirm = prompt("Confirm Password: ")?;
                    if confirm == new_password {
                        break;
                    }
                    println!("Password does not match - try again");
                }
                match backend
                    .student_service
                    .change_password(&mut student, &new_password)
                {
                    Ok(()) => println!("Password updated successfully."),
                    Err(e) => println!("{}", e),
                }
            }
            "e" => match backend.subject_service.enroll(&mut student) {
                Ok(subject) => {
                    println!("Enrolling in Subject-{}", subject.id);
                    println!(
                        "You are now enrolled in {} out of 4 subjects.",
                        student.subjects.len()
                    );
                }
                Err(e) => println!("{}", e),
            },
            "r" => {
                let subject_id = prompt("Enter subject ID to remove: ")?;
                match backend.subject_service.drop_subject(&mut student, &subject_id) {
                    Ok(()) => {
                        println!("Dropping Subject-{}", subject_id);
                        println!(
                            "You are now enrolled in {} out of 4 subjects.",
                            student.subjects.len()
                        );
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "s" => {
                let subjects = backend.subject_service.list(&student);
                println!("Showing {} subjects", subjects.len());
                for subject in subjects {
                    println!(
                        "[ Subject::{} -- mark = {} -- grade = {} ]",
                        subject.id, subject.mark, subject.grade
                    );
                }
            }
            "x" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}

fn admin_menu(backend: &Backend) -> Result<()> {
    loop {
        println!("\n--- Admin System (c/g/p/r/s/x) ---");
        let choice = prompt("Select an option: ")?.to_lowercase();
        match choice.as_str() {
            "c" => {
                println!("Clearing students database");
                let confirm =
                    prompt("Are you sure you want to clear the database (Y)ES/(N)O: ")?
                        .to_lowercase();
                if confirm == "y" {
                    backend.admin_service.clear_all()?;
                    println!("Students data cleared");
                } else {
                    println!("Clearing operation cancelled");
                }
            }
            "g" => {
                println!("Grade Grouping");
                let groups = backend.admin_service.group_by_grade()?;
                for grade in Grade::ALL {
                    let entries = groups.get(&grade).map(Vec::as_slice).unwrap_or_default();
                    if entries.is_empty() {
                        println!("   {}  --> [< Nothing to Display >]", grade);
                    } else {
                        let rows: Vec<String> = entries
                            .iter()
                            .map(|e| {
                                format!(
                                    "{} :: {} --> GRADE: {} - MARK: {:.2}",
                                    e.name, e.id, e.grade, e.average_mark
                                )
                            })
                            .collect();
                        println!("   {}  --> [{}]", grade, rows.join(", "));
                    }
                }
            }
            "p" => {
                println!("PASS/FAIL Partition");
                let (passed, failed) = backend.admin_service.partition_pass_fail()?;
                let format_rows = |entries: &[student_records::domain::admin_service::PartitionEntry]| {
                    entries
                        .iter()
                        .map(|e| format!("{} :: {} --> MARK: {:.2}", e.name, e.id, e.average_mark))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                println!("FAIL --> [{}]", format_rows(&failed));
                println!("PASS --> [{}]", format_rows(&passed));
            }
            "r" => {
                let student_id = prompt("Remove by ID: ")?;
                if backend.admin_service.remove_student(&student_id)? {
                    println!("Removing Student {} Account", student_id);
                } else {
                    println!("Student {} does not exist", student_id);
                }
            }
            "s" => {
                println!("Student List");
                let students = backend.admin_service.list_all()?;
                if students.is_empty() {
                    println!("   < Nothing to Display >");
                } else {
                    for student in students {
                        println!("{} :: {} --> Email: {}", student.name, student.id, student.email);
                    }
                }
            }
            "x" => return Ok(()),
            _ => println!("Invalid option."),
        }
    }
}
