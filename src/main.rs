use std::env;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;

use vitae::{CvStore, ExportPipeline, Section, VitaeError};

fn usage(program: &str) -> ! {
    eprintln!("A personal curriculum-vitae store with PNG and PDF export.");
    eprintln!();
    eprintln!("Usage: {program} <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  show                     Print the current document summary");
    eprintln!("  export-image [out-dir]   Export curriculum-vitae.png");
    eprintln!("  export-pdf [out-dir]     Export curriculum-vitae.pdf");
    eprintln!("  toggle <section>         Toggle a section (about, experience,");
    eprintln!("                           education, skills, projects)");
    eprintln!("  clear                    Reset the whole document (asks first)");
    eprintln!();
    eprintln!("The data directory is taken from VITAE_DATA_DIR (default: .vitae).");
    process::exit(1);
}

fn data_dir() -> PathBuf {
    env::var_os("VITAE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".vitae"))
}

fn parse_section(name: &str) -> Option<Section> {
    match name {
        "about" => Some(Section::About),
        "experience" => Some(Section::Experience),
        "education" => Some(Section::Education),
        "skills" => Some(Section::Skills),
        "projects" => Some(Section::Projects),
        _ => None,
    }
}

fn show(store: &CvStore) {
    let personal = store.personal();
    println!("{} - {}", personal.name, personal.title);
    println!("{} | {} | {}", personal.email, personal.phone, personal.location);
    let vis = store.visibility();
    println!();
    println!(
        "about: {} ({})",
        if vis.about { "shown" } else { "hidden" },
        if store.summary().is_empty() { "empty" } else { "set" },
    );
    println!(
        "experience: {} ({} items)",
        if vis.experience { "shown" } else { "hidden" },
        store.experiences().len()
    );
    println!(
        "education: {} ({} items)",
        if vis.education { "shown" } else { "hidden" },
        store.education().len()
    );
    println!(
        "skills: {} ({} categories)",
        if vis.skills { "shown" } else { "hidden" },
        store.skill_categories().len()
    );
    println!(
        "projects: {} ({} items)",
        if vis.projects { "shown" } else { "hidden" },
        store.projects().len()
    );
}

fn confirm_on_stdin(question: &str) -> bool {
    print!("{question} [y/N] ");
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}

fn main() -> Result<(), VitaeError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vitae=info");
        }
    }
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("vitae");
    if args.len() < 2 {
        usage(program);
    }

    let mut store = CvStore::open(data_dir());
    if store.first_visit() {
        println!("Welcome! This is your editable curriculum vitae.");
        println!("Everything you change is kept in the data directory.");
        println!();
    }

    match args[1].as_str() {
        "show" => show(&store),
        "export-image" | "export-pdf" => {
            let out_dir = args
                .get(2)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let pipeline = ExportPipeline::new();
            let snapshot = store.snapshot();
            let path = if args[1] == "export-image" {
                pipeline.export_image(&snapshot, &out_dir)?
            } else {
                pipeline.export_pdf(&snapshot, &out_dir)?
            };
            println!("Wrote {}", path.display());
        }
        "toggle" => {
            let Some(section) = args.get(2).and_then(|name| parse_section(name)) else {
                usage(program);
            };
            store.toggle_section(section);
            show(&store);
        }
        "clear" => {
            if vitae::editor::clear_all(&mut store, confirm_on_stdin) {
                println!("Curriculum reset to defaults.");
            } else {
                println!("Nothing changed.");
            }
        }
        _ => usage(program),
    }
    Ok(())
}
