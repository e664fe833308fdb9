use std::time::Duration;

use roster::{people, Client, Person, PersonSpec, DEFAULT_BASE_URL};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut base_url: Option<String> = None;
    let mut timeout_secs: Option<u64> = None;
    let mut spec_arg: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" | "-u" => {
                base_url = args.next();
                if base_url.is_none() {
                    eprintln!("Error: --url requires a URL argument");
                    std::process::exit(1);
                }
            }
            "--timeout" | "-t" => {
                timeout_secs = args.next().and_then(|s| s.parse().ok());
                if timeout_secs.is_none() {
                    eprintln!("Error: --timeout requires a number of seconds");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("roster - person directory lookup");
                println!();
                println!("Usage: roster [OPTIONS] <SPEC>");
                println!();
                println!("  <SPEC> is an email (contains '@'), a login, or '$' followed");
                println!("  by a numeric UID, e.g. '$42'.");
                println!();
                println!("Options:");
                println!(
                    "  -u, --url <URL>       API base URL (default: $ROSTER_URL or {})",
                    DEFAULT_BASE_URL
                );
                println!("  -t, --timeout <SECS>  Per-request timeout in seconds");
                println!("  -h, --help            Show this help");
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
            other => {
                if spec_arg.is_some() {
                    eprintln!("Error: more than one <SPEC> argument");
                    std::process::exit(1);
                }
                spec_arg = Some(other.to_string());
            }
        }
    }

    let spec_arg = match spec_arg {
        Some(s) => s,
        None => {
            eprintln!("Error: missing <SPEC> argument");
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    };

    let spec = match PersonSpec::parse(&spec_arg) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut client = match base_url {
        Some(url) => Client::new(&url),
        None => Client::from_env(),
    };
    if let Some(secs) = timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs));
    }

    match people::get(&client, &spec) {
        Ok((person, _meta)) => print_person(&person),
        Err(e) => {
            eprintln!("Lookup failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_person(person: &Person) {
    println!("{}", person.short_name());
    if !person.full_name.is_empty() {
        println!("  Name:   {}", person.full_name);
    }
    if !person.spec.login.is_empty() {
        println!("  Login:  {}", person.spec.login);
    }
    if !person.spec.email.is_empty() {
        println!("  Email:  {}", person.spec.email);
    }
    if person.has_profile() {
        println!("  UID:    {}", person.spec.uid);
    } else {
        println!("  (transient: not a registered user)");
    }
    let avatar = person.avatar_url_of_size(128);
    if !avatar.is_empty() {
        println!("  Avatar: {}", avatar);
    }
}
