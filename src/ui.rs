use console::style;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}
