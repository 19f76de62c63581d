use clap::{Arg, Command};

pub fn cli() -> Command {
    Command::new("folio")
        .about("Terminal portfolio of Robert Allen Marlatt")
        .subcommand(about())
        .subcommand(browse())
        .subcommand(contact())
        .subcommand(projects())
}

fn about() -> Command {
    Command::new("about").about("Who I am")
}

fn browse() -> Command {
    Command::new("browse").about("Open the full repository listing in a browser")
}

fn contact() -> Command {
    Command::new("contact")
        .about("Get in touch; with all three flags, drafts an email in your mail client")
        .arg(
            Arg::new("name")
                .long("name")
                .value_name("NAME")
                .help("Your name"),
        )
        .arg(
            Arg::new("email")
                .long("email")
                .value_name("EMAIL")
                .help("Your email address"),
        )
        .arg(
            Arg::new("message")
                .long("message")
                .value_name("MESSAGE")
                .help("Your message here..."),
        )
}

fn projects() -> Command {
    Command::new("projects").about("Featured projects, most recently updated first")
}
